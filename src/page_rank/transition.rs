use crate::{check_damping, Corpus, Distribution, Error, Result};
use algograph::graph::VertexId;
use std::collections::HashSet;

/// Where a random surfer goes next from a given page.
///
/// With probability `damping` the surfer follows one of the page's links,
/// chosen uniformly. Otherwise it teleports to any page of the corpus. A
/// dangling page teleports unconditionally.
pub struct TransitionModel<'a> {
    corpus: &'a Corpus,
    damping: f64,
}

impl<'a> TransitionModel<'a> {
    pub fn new(corpus: &'a Corpus, damping: f64) -> Result<Self> {
        check_damping(damping)?;
        Ok(Self { corpus, damping })
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// The next-page distribution, in the corpus' vertex order.
    pub fn weights(&self, current: &VertexId) -> Result<Vec<(VertexId, f64)>> {
        if !self.corpus.contains(current) {
            return Err(Error::InvalidState(format!("unknown page {current:?}")));
        }
        let n = self.corpus.page_count() as f64;
        let links: HashSet<VertexId, ahash::RandomState> = self.corpus.links(current).collect();
        if links.is_empty() {
            let uniform = 1.0 / n;
            return Ok(self
                .corpus
                .vertices()
                .iter()
                .map(|v| (*v, uniform))
                .collect());
        }
        let teleport = (1.0 - self.damping) / n;
        let follow = self.damping / (links.len() as f64);
        Ok(self
            .corpus
            .vertices()
            .iter()
            .map(|v| {
                if links.contains(v) {
                    (*v, teleport + follow)
                } else {
                    (*v, teleport)
                }
            })
            .collect())
    }

    pub fn distribution(&self, current: &VertexId) -> Result<Distribution> {
        Ok(self.weights(current)?.into_iter().collect())
    }
}

/// Next-page distribution from the page named `page`.
pub fn transition(corpus: &Corpus, page: &str, damping: f64) -> Result<Distribution> {
    let model = TransitionModel::new(corpus, damping)?;
    let current = corpus
        .vertex(page)
        .ok_or_else(|| Error::InvalidState(format!("unknown page {page:?}")))?;
    model.distribution(&current)
}
