use super::RankTable;
use crate::{Corpus, Ranks};

pub trait PageRank {
    type Result: PageRankResult;

    fn calc(&mut self) -> crate::Result<Self::Result>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &Ranks;

    /// Resolves vertices back to page names.
    fn table(&self, corpus: &Corpus) -> RankTable {
        RankTable::new(corpus, self.page_rank())
    }
}
