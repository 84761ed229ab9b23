use super::*;
use crate::*;
use algograph::graph::VertexId;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// PageRank by fixed-point iteration of the random-surfer recurrence.
///
/// A dangling page passes its rank to no one: it is left out of every
/// inbound sum rather than spread over the corpus. Ranks of a corpus with
/// dangling pages therefore sum to less than 1.
pub struct IteratedPageRank<'a> {
    corpus: &'a Corpus,
    damping: f64,
    epsilon: f64,
    max_sweeps: usize,
    transitions: BTreeMap<(VertexId, VertexId), f64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub epsilon: f64,
    pub max_sweeps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            epsilon: 0.0001,
            max_sweeps: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Ranks,
    /// Per-page change made by the last sweep.
    pub delta: Ranks,
    pub sweeps: usize,
    pub converged: bool,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(corpus: &'a Corpus, config: &Config) -> crate::Result<Self> {
        let damping = config.damping;
        check_damping(damping)?;
        let epsilon = config.epsilon;
        if !(epsilon > 0.0) {
            return Err(Error::InvalidArgument(format!("epsilon={epsilon}")));
        }
        let max_sweeps = config.max_sweeps;
        if max_sweeps == 0 {
            return Err(Error::InvalidArgument(format!("max_sweeps={max_sweeps}")));
        }
        let transitions = {
            let mut transitions = BTreeMap::new();
            for u in corpus.vertices() {
                let n = corpus.out_degree(u);
                if n == 0 {
                    continue;
                }
                let unit = 1.0 / (n as f64);
                for v in corpus.links(u) {
                    transitions.insert((*u, v), unit);
                }
            }
            transitions
        };
        Ok(Self {
            corpus,
            damping,
            epsilon,
            max_sweeps,
            transitions,
        })
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Result;

    fn calc(&mut self) -> crate::Result<Self::Result> {
        let damping = self.damping;
        let n = self.corpus.page_count();
        if n == 0 {
            return Ok(Self::Result {
                page_rank: Ranks::default(),
                delta: Ranks::default(),
                sweeps: 0,
                converged: true,
            });
        }
        let teleport = (1.0 - damping) / (n as f64);
        let mut p: Ranks = {
            let uniform = 1.0 / (n as f64);
            self.corpus.vertices().iter().map(|v| (*v, uniform)).collect()
        };
        let mut r = Ranks::default();
        let mut delta = Ranks::default();
        for sweep in 1..=self.max_sweeps {
            for v in self.corpus.vertices() {
                r.insert(*v, 0.0);
            }
            for ((v0, v1), w) in self.transitions.iter() {
                let from = p.get(v0).unwrap();
                let to = r.get_mut(v1).unwrap();
                *to += from * w;
            }
            for x in r.values_mut() {
                *x = teleport + damping * *x;
            }

            delta.clear();
            for v in self.corpus.vertices() {
                let a = p.get(v).unwrap();
                let b = r.get(v).unwrap();
                delta.insert(*v, b - a);
            }

            std::mem::swap(&mut p, &mut r);
            r.clear();

            let max_delta = norm_inf(&delta);
            debug!(sweep, max_delta, l1_delta = norm_1(&delta), "page rank sweep");
            if max_delta < self.epsilon {
                info!(sweeps = sweep, damping, "iterated page rank converged");
                return Ok(Self::Result {
                    page_rank: p,
                    delta,
                    sweeps: sweep,
                    converged: true,
                });
            }
        }

        warn!(
            max_sweeps = self.max_sweeps,
            max_delta = norm_inf(&delta),
            "iterated page rank did not converge"
        );
        Ok(Self::Result {
            page_rank: p,
            delta,
            sweeps: self.max_sweeps,
            converged: false,
        })
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &Ranks {
        &self.page_rank
    }
}
