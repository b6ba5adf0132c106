// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Sentence-level BLEU.

use smallvec::SmallVec;

use super::settle;
use crate::error::{Error, Result};
use crate::ngram::{clipped_overlap, ngram_counts, total};
use crate::pair::SentencePair;
use crate::tokenize::Normalized;

/// How zero n-gram precisions are handled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Smoothing {
    /// A zero precision becomes the smallest positive normal `f64`, so the
    /// score collapses towards zero instead of being undefined.
    #[default]
    Floor,
    /// A zero numerator is replaced by `epsilon`.
    Epsilon(f64),
    /// Add one to numerator and denominator of every order above unigrams.
    AddOne,
}

impl Smoothing {
    /// Smoothed precision for order `n` (1-based).
    fn precision(&self, n: usize, numerator: usize, denominator: usize) -> f64 {
        match *self {
            Self::Floor if numerator == 0 => f64::MIN_POSITIVE,
            Self::Epsilon(eps) if numerator == 0 => eps / denominator as f64,
            Self::AddOne if n > 1 => (numerator + 1) as f64 / (denominator + 1) as f64,
            _ => numerator as f64 / denominator as f64,
        }
    }
}

/// BLEU parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct BleuConfig {
    /// Highest n-gram order, weighted uniformly (default 4)
    pub max_order: usize,
    /// Zero-precision policy
    pub smoothing: Smoothing,
}

impl Default for BleuConfig {
    fn default() -> Self {
        Self {
            max_order: 4,
            smoothing: Smoothing::Floor,
        }
    }
}

impl BleuConfig {
    /// Set the highest n-gram order.
    pub fn max_order(mut self, max_order: usize) -> Self {
        self.max_order = max_order;
        self
    }

    /// Set the smoothing policy.
    pub fn smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }
}

/// Penalty for hypotheses shorter than the reference.
fn brevity_penalty(reference_len: usize, hypothesis_len: usize) -> f64 {
    if hypothesis_len > reference_len {
        1.0
    } else if hypothesis_len == 0 {
        0.0
    } else {
        (1.0 - reference_len as f64 / hypothesis_len as f64).exp()
    }
}

/// BLEU of `hypothesis` against a single `reference`.
///
/// Returns `0.0` when no unigram matches. Fails only for `max_order == 0`.
pub fn sentence_bleu(
    reference: &[String],
    hypothesis: &[String],
    config: &BleuConfig,
) -> Result<f64> {
    if config.max_order == 0 {
        return Err(Error::zero_division("bleu", "no n-gram orders to weight"));
    }

    // (clipped matches, max(1, hypothesis n-grams)) per order
    let precisions: SmallVec<[(usize, usize); 4]> = (1..=config.max_order)
        .map(|n| {
            let hyp = ngram_counts(hypothesis, n);
            let refs = ngram_counts(reference, n);
            let matched: usize = clipped_overlap(&hyp, &refs).iter().map(|(_, c)| c).sum();
            (matched, total(&hyp).max(1))
        })
        .collect();

    if precisions[0].0 == 0 {
        return Ok(0.0);
    }

    let weight = 1.0 / config.max_order as f64;
    let log_sum: f64 = precisions
        .iter()
        .enumerate()
        .map(|(i, &(num, den))| weight * config.smoothing.precision(i + 1, num, den).ln())
        .sum();

    Ok(brevity_penalty(reference.len(), hypothesis.len()) * log_sum.exp())
}

/// BLEU(a as reference, b as hypothesis) + BLEU(b as reference, a as hypothesis).
pub fn symmetrical_bleu(pair: &SentencePair) -> f64 {
    symmetrical_bleu_with(pair, &BleuConfig::default())
}

/// [`symmetrical_bleu`] with explicit parameters.
pub fn symmetrical_bleu_with(pair: &SentencePair, config: &BleuConfig) -> f64 {
    let a = Normalized::new(&pair.a);
    let b = Normalized::new(&pair.b);

    let forward = settle("bleu a->b", sentence_bleu(&a.tokens, &b.tokens, config));
    let backward = settle("bleu b->a", sentence_bleu(&b.tokens, &a.tokens, config));
    forward + backward
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_identical_is_one() {
        let s = words("the quick brown fox jumps over the dog");
        let score = sentence_bleu(&s, &s, &BleuConfig::default()).unwrap();
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_unigram_match_is_zero() {
        let score =
            sentence_bleu(&words("a b c d"), &words("w x y z"), &BleuConfig::default()).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_hypothesis_is_zero() {
        let score = sentence_bleu(&words("a b c d"), &[], &BleuConfig::default()).unwrap();
        assert_eq!(score, 0.0);
        let score = sentence_bleu(&[], &words("a b c d"), &BleuConfig::default()).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_floor_smoothing_collapses_missing_orders() {
        // Only 3 tokens: the 4-gram precision is floored.
        let s = words("the cat sat");
        let score = sentence_bleu(&s, &s, &BleuConfig::default()).unwrap();
        assert!(score > 0.0);
        assert!(score < 1e-50);
    }

    #[test]
    fn test_epsilon_and_add_one_smoothing_lift_short_sentences() {
        let s = words("the cat sat");
        let eps = BleuConfig::default().smoothing(Smoothing::Epsilon(0.1));
        let add_one = BleuConfig::default().smoothing(Smoothing::AddOne);
        let eps_score = sentence_bleu(&s, &s, &eps).unwrap();
        let add_one_score = sentence_bleu(&s, &s, &add_one).unwrap();
        assert!(eps_score > 0.1 && eps_score < 1.0);
        assert!(add_one_score > 0.5 && add_one_score <= 1.0);
    }

    #[test]
    fn test_brevity_penalty() {
        assert_eq!(brevity_penalty(5, 6), 1.0);
        assert_eq!(brevity_penalty(5, 0), 0.0);
        assert!((brevity_penalty(5, 5) - 1.0).abs() < 1e-12);
        assert!(brevity_penalty(10, 5) < 1.0);
    }

    #[test]
    fn test_clipping() {
        // Hypothesis repeats "the"; only two occurrences are credited.
        let reference = words("the cat is on the mat");
        let hypothesis = words("the the the the the the");
        let config = BleuConfig::default().max_order(1);
        let score = sentence_bleu(&reference, &hypothesis, &config).unwrap();
        assert!((score - 2.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_orders_is_error() {
        let s = words("a b");
        assert!(sentence_bleu(&s, &s, &BleuConfig::default().max_order(0)).is_err());
    }

    #[test]
    fn test_symmetrical_bleu_range_and_symmetry() {
        let pair = SentencePair::new(
            "A woman is slicing an onion on the table.",
            "A woman slices an onion.",
        );
        let score = symmetrical_bleu(&pair);
        assert!(score > 0.0 && score <= 2.0);
        assert_eq!(score, symmetrical_bleu(&pair.swapped()));
    }

    #[test]
    fn test_symmetrical_bleu_identical_is_two() {
        let pair = SentencePair::new(
            "Two dogs are playing in the snow.",
            "Two dogs are playing in the snow.",
        );
        assert!((symmetrical_bleu(&pair) - 2.0).abs() < 1e-12);
    }
}
