// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Evaluator for running metrics on datasets

use anyhow::Context;
use stsim::{MetricKind, SentencePair};

use crate::config::EvalConfig;
use crate::correlation::pearson;
use crate::dataset::Dataset;
use crate::parallel::ParallelEvaluator;

/// Scores and correlation of one metric over a dataset
#[derive(Debug, Clone)]
pub struct MetricReport {
    /// Which metric
    pub kind: MetricKind,

    /// One score per pair, in dataset order
    pub scores: Vec<f64>,

    /// Pearson r against the gold labels (NaN if either side is constant)
    pub correlation: f64,
}

impl MetricReport {
    /// Whether the correlation is defined
    pub fn is_defined(&self) -> bool {
        !self.correlation.is_nan()
    }
}

/// Evaluation results for all metrics
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    /// Where the dataset came from, if known
    pub source: Option<String>,

    /// Number of pairs evaluated
    pub pairs: usize,

    /// One report per metric, in [`MetricKind::ALL`] order
    pub reports: Vec<MetricReport>,
}

impl EvaluationResult {
    /// Look up one metric's report
    pub fn get(&self, kind: MetricKind) -> Option<&MetricReport> {
        self.reports.iter().find(|r| r.kind == kind)
    }
}

/// Evaluator for running metrics
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    /// Create a new evaluator
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Apply `scorer` to every pair, preserving order.
    pub fn score_pairs<F>(&self, scorer: F, dataset: &Dataset) -> anyhow::Result<Vec<f64>>
    where
        F: Fn(&SentencePair) -> f64 + Sync,
    {
        match self.config.threads {
            Some(threads) => ParallelEvaluator::new()
                .with_threads(threads)
                .score_pairs(scorer, dataset.pairs()),
            None => Ok(dataset.pairs().iter().map(scorer).collect()),
        }
    }

    /// Score a dataset with one metric and correlate with the labels
    pub fn evaluate(&self, kind: MetricKind, dataset: &Dataset) -> anyhow::Result<MetricReport> {
        let _span = tracing::info_span!(
            "evaluate",
            metric = kind.name(),
            parallel = self.config.is_parallel()
        )
        .entered();

        let metrics = &self.config.metrics;
        let scores = self.score_pairs(|pair| kind.score(pair, metrics), dataset)?;
        debug_assert_eq!(scores.len(), dataset.len());

        let correlation = pearson(&scores, dataset.labels())
            .with_context(|| format!("correlating {} scores with labels", kind.name()))?;

        if correlation.is_nan() {
            tracing::warn!(metric = kind.name(), "correlation undefined: constant scores or labels");
        } else {
            tracing::info!(metric = kind.name(), correlation, "metric evaluated");
        }

        Ok(MetricReport {
            kind,
            scores,
            correlation,
        })
    }

    /// Evaluate every metric, in report order
    pub fn evaluate_all(&self, dataset: &Dataset) -> anyhow::Result<EvaluationResult> {
        let reports = MetricKind::ALL
            .iter()
            .map(|kind| self.evaluate(*kind, dataset))
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(EvaluationResult {
            source: dataset.source().map(str::to_string),
            pairs: dataset.len(),
            reports,
        })
    }
}
