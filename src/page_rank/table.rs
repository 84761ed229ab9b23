use crate::{Corpus, Ranks};
use std::{collections::BTreeMap, fmt};

/// Final ranks keyed by page name, ordered by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankTable {
    ranks: BTreeMap<String, f64>,
}

impl RankTable {
    pub fn new(corpus: &Corpus, ranks: &Ranks) -> Self {
        let ranks = corpus
            .vertices()
            .iter()
            .filter_map(|v| {
                let name = corpus.name(v)?;
                let rank = ranks.get(v).copied().unwrap_or(0.0);
                Some((name.to_string(), rank))
            })
            .collect();
        Self { ranks }
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.ranks.iter().map(|(page, rank)| (page.as_str(), *rank))
    }

    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }
}

impl fmt::Display for RankTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (page, rank) in self.iter() {
            writeln!(f, "  {page}: {rank:.4}")?;
        }
        Ok(())
    }
}
