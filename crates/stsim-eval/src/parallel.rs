// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Parallel scoring using Rayon

use rayon::prelude::*;
use stsim::SentencePair;

/// Data-parallel pair scorer for CPU-bound metrics.
///
/// Output order always matches input order, whatever order the pool
/// happens to run pairs in.
#[derive(Debug, Clone, Default)]
pub struct ParallelEvaluator {
    num_threads: Option<usize>,
}

impl ParallelEvaluator {
    /// Create a new parallel evaluator on Rayon's default thread count
    pub fn new() -> Self {
        Self { num_threads: None }
    }

    /// Set number of threads
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Score every pair on a dedicated pool.
    pub fn score_pairs<F>(&self, scorer: F, pairs: &[SentencePair]) -> anyhow::Result<Vec<f64>>
    where
        F: Fn(&SentencePair) -> f64 + Sync,
    {
        let pool = if let Some(threads) = self.num_threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?
        } else {
            rayon::ThreadPoolBuilder::new().build()?
        };

        tracing::debug!(
            pairs = pairs.len(),
            threads = pool.current_num_threads(),
            "scoring pairs in parallel"
        );

        Ok(pool.install(|| pairs.par_iter().map(&scorer).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stsim::MetricKind;

    #[test]
    fn test_parallel_matches_sequential() {
        let pairs: Vec<SentencePair> = (0..64)
            .map(|i| SentencePair::new(format!("sentence number {i}"), "sentence number 7"))
            .collect();

        let scorer = MetricKind::EditDistance.scorer();
        let sequential: Vec<f64> = pairs.iter().map(scorer).collect();
        let parallel = ParallelEvaluator::new()
            .with_threads(4)
            .score_pairs(scorer, &pairs)
            .unwrap();

        assert_eq!(parallel, sequential);
        assert_eq!(parallel[7], 0.0);
    }

    #[test]
    fn test_empty_input() {
        let scores = ParallelEvaluator::new()
            .score_pairs(MetricKind::Lcs.scorer(), &[])
            .unwrap();
        assert!(scores.is_empty());
    }
}
