// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Evaluation configuration.

use stsim::{BleuConfig, MetricConfig};

/// Configuration for an evaluation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvalConfig {
    /// Score pairs on a Rayon pool of this many threads (None = sequential).
    pub threads: Option<usize>,
    /// Metric tunables.
    pub metrics: MetricConfig,
}

impl EvalConfig {
    /// Sequential evaluation with default metric settings.
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Score pairs in parallel on `threads` threads.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Set BLEU parameters.
    pub fn bleu(mut self, bleu: BleuConfig) -> Self {
        self.metrics.bleu = bleu;
        self
    }

    /// Set the NIST maximum n-gram order.
    pub fn nist_order(mut self, order: usize) -> Self {
        self.metrics.nist_order = Some(order);
        self
    }

    /// Whether pairs are scored on a thread pool.
    pub fn is_parallel(&self) -> bool {
        self.threads.is_some()
    }
}
