use crate::{Error, Result};
use algograph::graph::*;
use std::{collections::HashMap, hash::Hash};

/// Probability mass per page. Every page of the corpus has an entry.
pub type Distribution = HashMap<VertexId, f64, ahash::RandomState>;

/// Rank per page, as produced by an estimator.
pub type Ranks = HashMap<VertexId, f64, ahash::RandomState>;

pub fn norm_1<K: Eq + Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

pub fn norm_inf<K: Eq + Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).fold(0.0, f64::max)
}

pub fn total<K: Eq + Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().sum()
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!("damping={damping}")))
    }
}
