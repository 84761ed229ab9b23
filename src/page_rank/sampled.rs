use super::*;
use crate::{Corpus, Error, Ranks};
use algograph::graph::VertexId;
use rand::{distr::weighted::WeightedIndex, prelude::*, rngs::SmallRng};
use std::collections::HashMap;
use tracing::info;

/// Estimates PageRank as the visit frequency of a long random walk.
pub struct SampledPageRank<'a, W: Walker> {
    corpus: &'a Corpus,
    model: TransitionModel<'a>,
    samples: usize,
    walker: W,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
    /// Seeds the walk for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Ranks,
    pub visits: HashMap<VertexId, usize, ahash::RandomState>,
}

/// Source of the random choices a walk makes.
pub trait Walker {
    /// Picks the first page. `pages` is never empty.
    fn start(&mut self, pages: &[VertexId]) -> VertexId;

    /// Picks the next page from a weighted distribution.
    fn step(&mut self, weights: &[(VertexId, f64)]) -> crate::Result<VertexId>;
}

pub struct RandomWalker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomWalker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Walker for RandomWalker<R> {
    fn start(&mut self, pages: &[VertexId]) -> VertexId {
        pages[self.rng.random_range(0..pages.len())]
    }

    fn step(&mut self, weights: &[(VertexId, f64)]) -> crate::Result<VertexId> {
        let index = WeightedIndex::new(weights.iter().map(|(_, w)| *w))
            .map_err(|e| Error::InvalidState(format!("bad transition weights: {e}")))?;
        Ok(weights[index.sample(&mut self.rng)].0)
    }
}

impl<'a> SampledPageRank<'a, RandomWalker<SmallRng>> {
    pub fn new(corpus: &'a Corpus, config: &Config) -> crate::Result<Self> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::with_walker(corpus, config, RandomWalker::new(rng))
    }
}

impl<'a, W: Walker> SampledPageRank<'a, W> {
    pub fn with_walker(corpus: &'a Corpus, config: &Config, walker: W) -> crate::Result<Self> {
        if config.samples == 0 {
            return Err(Error::InvalidArgument(format!(
                "samples={}",
                config.samples
            )));
        }
        let model = TransitionModel::new(corpus, config.damping)?;
        Ok(Self {
            corpus,
            model,
            samples: config.samples,
            walker,
        })
    }
}

impl<W: Walker> PageRank for SampledPageRank<'_, W> {
    type Result = self::Result;

    fn calc(&mut self) -> crate::Result<Self::Result> {
        let mut visits: HashMap<_, _, ahash::RandomState> =
            self.corpus.vertices().iter().map(|v| (*v, 0usize)).collect();
        if self.corpus.is_empty() {
            return Ok(Self::Result {
                page_rank: Ranks::default(),
                visits,
            });
        }

        let mut current = self.walker.start(self.corpus.vertices());
        *visits.get_mut(&current).unwrap() += 1;
        for _ in 1..self.samples {
            let weights = self.model.weights(&current)?;
            current = self.walker.step(&weights)?;
            let count = visits
                .get_mut(&current)
                .ok_or_else(|| Error::InvalidState(format!("walked off corpus to {current:?}")))?;
            *count += 1;
        }

        let n = self.samples as f64;
        let page_rank = visits
            .iter()
            .map(|(v, count)| (*v, (*count as f64) / n))
            .collect();
        info!(
            samples = self.samples,
            damping = self.model.damping(),
            "sampled page rank"
        );
        Ok(Self::Result { page_rank, visits })
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &Ranks {
        &self.page_rank
    }
}
