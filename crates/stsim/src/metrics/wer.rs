// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Word error rate.
//!
//! The rate here is a character edit distance over the lowercased text,
//! normalized by a token count. The forward direction divides by the longer
//! sentence's token count and the backward direction by the shorter one's;
//! the reported correlations depend on that split, so it is kept as is.

use super::settle;
use crate::error::{Error, Result};
use crate::pair::SentencePair;
use crate::tokenize::Normalized;

/// Which token count normalizes the edit distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WerDivisor {
    /// Token count of the longer sentence
    MaxTokens,
    /// Token count of the shorter sentence
    MinTokens,
}

impl WerDivisor {
    fn of(&self, a: &Normalized, b: &Normalized) -> usize {
        match self {
            Self::MaxTokens => a.token_count().max(b.token_count()),
            Self::MinTokens => a.token_count().min(b.token_count()),
        }
    }
}

/// Edit distance from `source` to `target`, over the chosen token count.
pub fn word_error_rate(
    source: &Normalized,
    target: &Normalized,
    divisor: WerDivisor,
) -> Result<f64> {
    let tokens = divisor.of(source, target);
    if tokens == 0 {
        return Err(Error::zero_division("wer", "no tokens to normalize by"));
    }
    let distance = strsim::levenshtein(&source.lower, &target.lower);
    Ok(distance as f64 / tokens as f64)
}

/// ED(a, b) / max(tokens) + ED(b, a) / min(tokens).
pub fn symmetrical_wer(pair: &SentencePair) -> f64 {
    let a = Normalized::new(&pair.a);
    let b = Normalized::new(&pair.b);

    let forward = settle("wer a->b", word_error_rate(&a, &b, WerDivisor::MaxTokens));
    let backward = settle("wer b->a", word_error_rate(&b, &a, WerDivisor::MinTokens));
    forward + backward
}
