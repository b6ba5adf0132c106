// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Evaluation framework for stsim
//!
//! Loads an STS-benchmark dataset, scores every sentence pair with each
//! metric (optionally with Rayon parallelism), and correlates the scores
//! with the gold similarity labels.

pub mod config;
pub mod correlation;
pub mod dataset;
pub mod evaluator;
pub mod parallel;
pub mod report;

pub use config::EvalConfig;
pub use correlation::{pearson, CorrelationError};
pub use dataset::{load_sts, parse_sts, Dataset};
pub use evaluator::{EvaluationResult, Evaluator, MetricReport};
pub use parallel::ParallelEvaluator;
pub use report::{format_coefficient, score_listing};
pub use stsim::{MetricKind, SentencePair};
