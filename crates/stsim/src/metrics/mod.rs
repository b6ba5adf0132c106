// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Symmetrical sentence-pair metrics.
//!
//! Every metric is a plain function `&SentencePair -> f64`. Internally each
//! one computes an asymmetric measure in both directions and sums the two,
//! so swapping the sentences never changes the score. A direction that
//! divides by zero contributes `0.0` instead of failing the pair.
//!
//! | Metric | Direction A -> B | Range of the sum |
//! |--------|------------------|------------------|
//! | NIST   | info-weighted n-gram precision, B against reference A | `[0, inf)` |
//! | BLEU   | geometric mean of clipped 1..4-gram precision | `[0, 2]` |
//! | WER    | char edit distance / token count | `[0, inf)` |
//! | LCS    | longest common substring length | `[0, len(a) + len(b)]` |
//! | ED     | char edit distance | `[0, inf)` |

mod bleu;
mod edit_distance;
mod lcs;
mod nist;
mod wer;

use std::fmt;

pub use bleu::{sentence_bleu, symmetrical_bleu, symmetrical_bleu_with, BleuConfig, Smoothing};
pub use edit_distance::{edit_distance, symmetrical_ed};
pub use lcs::{longest_common_substring, symmetrical_lcs};
pub use nist::{
    nist_length_penalty, sentence_nist, symmetrical_nist, symmetrical_nist_with,
    DEFAULT_NIST_ORDER,
};
pub use wer::{symmetrical_wer, word_error_rate, WerDivisor};

use crate::error::Result;
use crate::pair::SentencePair;

/// Scores one sentence pair.
pub type PairScorer = fn(&SentencePair) -> f64;

/// Resolve a directional result, substituting `0.0` for degenerate input.
pub(crate) fn settle(direction: &'static str, result: Result<f64>) -> f64 {
    match result {
        Ok(score) => score,
        Err(err) => {
            tracing::debug!(
                direction,
                category = err.category(),
                error = %err,
                "direction undefined, contributing 0.0"
            );
            0.0
        }
    }
}

/// Tunables for metrics that have them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricConfig {
    /// BLEU order and smoothing
    pub bleu: BleuConfig,
    /// NIST maximum n-gram order (`None` = [`DEFAULT_NIST_ORDER`])
    pub nist_order: Option<usize>,
}

impl MetricConfig {
    /// Set BLEU configuration.
    pub fn with_bleu(mut self, bleu: BleuConfig) -> Self {
        self.bleu = bleu;
        self
    }

    /// Set NIST order.
    pub fn with_nist_order(mut self, order: usize) -> Self {
        self.nist_order = Some(order);
        self
    }

    /// Effective NIST order.
    pub fn nist_order(&self) -> usize {
        self.nist_order.unwrap_or(DEFAULT_NIST_ORDER)
    }
}

/// The five reported metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// NIST n-gram precision with information weighting
    Nist,
    /// BLEU n-gram precision with brevity penalty
    Bleu,
    /// Character edit distance normalized by token count
    Wer,
    /// Longest common substring length
    Lcs,
    /// Raw character edit distance
    EditDistance,
}

impl MetricKind {
    /// All metrics, in report order.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Nist,
        MetricKind::Bleu,
        MetricKind::Wer,
        MetricKind::Lcs,
        MetricKind::EditDistance,
    ];

    /// Short name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nist => "NIST",
            Self::Bleu => "BLEU",
            Self::Wer => "WER",
            Self::Lcs => "LCS",
            Self::EditDistance => "ED",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Nist => "NIST",
            Self::Bleu => "BLEU",
            Self::Wer => "Word Error Rate",
            Self::Lcs => "Longest common substring",
            Self::EditDistance => "Edit Distance",
        }
    }

    /// Scorer with default configuration.
    pub fn scorer(&self) -> PairScorer {
        match self {
            Self::Nist => symmetrical_nist,
            Self::Bleu => symmetrical_bleu,
            Self::Wer => symmetrical_wer,
            Self::Lcs => symmetrical_lcs,
            Self::EditDistance => symmetrical_ed,
        }
    }

    /// Score a pair with explicit configuration.
    pub fn score(&self, pair: &SentencePair, config: &MetricConfig) -> f64 {
        match self {
            Self::Nist => symmetrical_nist_with(pair, config.nist_order()),
            Self::Bleu => symmetrical_bleu_with(pair, &config.bleu),
            Self::Wer => symmetrical_wer(pair),
            Self::Lcs => symmetrical_lcs(pair),
            Self::EditDistance => symmetrical_ed(pair),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
