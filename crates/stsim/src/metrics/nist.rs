// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Sentence-level NIST.
//!
//! Like BLEU, but matched n-grams are weighted by how informative they are
//! in the reference: `info(w1..wn) = log2(count(w1..wn-1) / count(w1..wn))`,
//! so rare continuations earn more credit than common ones.

use std::collections::HashMap;

use super::settle;
use crate::error::{Error, Result};
use crate::ngram::{clipped_overlap, ngram_counts, ngram_counts_upto, total, Ngram};
use crate::pair::SentencePair;
use crate::tokenize::Normalized;

/// Default maximum n-gram order.
pub const DEFAULT_NIST_ORDER: usize = 5;

/// Information weight of every n-gram (orders `1..=order`) in the reference.
fn information_weights<'a>(reference: &'a [String], order: usize) -> HashMap<Ngram<'a>, f64> {
    let freq = ngram_counts_upto(reference, order);
    let words = reference.len() as f64;
    freq.iter()
        .map(|(&gram, &count)| {
            let prefix = &gram[..gram.len() - 1];
            let numerator = match freq.get(prefix) {
                Some(&prefix_count) if !prefix.is_empty() => prefix_count as f64,
                _ => words,
            };
            (gram, (numerator / count as f64).log2())
        })
        .collect()
}

/// Length penalty: 1 for hypotheses at least as long as the reference,
/// decaying smoothly (0.5 at a 2:3 ratio) for shorter ones.
pub fn nist_length_penalty(reference_len: usize, hypothesis_len: usize) -> Result<f64> {
    if reference_len == 0 {
        return Err(Error::zero_division("nist", "empty reference"));
    }
    let ratio = hypothesis_len as f64 / reference_len as f64;
    if 0.0 < ratio && ratio < 1.0 {
        let (ratio_x, score_x) = (1.5_f64, 0.5_f64);
        let beta = score_x.ln() / ratio_x.ln().powi(2);
        Ok((beta * ratio.ln().powi(2)).exp())
    } else {
        Ok(ratio.clamp(0.0, 1.0))
    }
}

/// NIST of `hypothesis` against a single `reference`, orders `1..=order`.
///
/// Fails when the reference is empty or the hypothesis has no n-grams of
/// some order (it is shorter than `order` tokens).
pub fn sentence_nist(reference: &[String], hypothesis: &[String], order: usize) -> Result<f64> {
    let weights = information_weights(reference, order);

    let mut precision_sum = 0.0;
    for n in 1..=order {
        let hyp = ngram_counts(hypothesis, n);
        let refs = ngram_counts(reference, n);
        let denominator = total(&hyp);
        if denominator == 0 {
            return Err(Error::zero_division("nist", "hypothesis shorter than n-gram order"));
        }
        let numerator: f64 = clipped_overlap(&hyp, &refs)
            .iter()
            .map(|(gram, count)| weights.get(*gram).copied().unwrap_or(0.0) * *count as f64)
            .sum();
        precision_sum += numerator / denominator as f64;
    }

    Ok(precision_sum * nist_length_penalty(reference.len(), hypothesis.len())?)
}

/// NIST(a as reference, b as hypothesis) + NIST(b as reference, a as hypothesis).
pub fn symmetrical_nist(pair: &SentencePair) -> f64 {
    symmetrical_nist_with(pair, DEFAULT_NIST_ORDER)
}

/// [`symmetrical_nist`] with an explicit maximum order.
pub fn symmetrical_nist_with(pair: &SentencePair, order: usize) -> f64 {
    let a = Normalized::new(&pair.a);
    let b = Normalized::new(&pair.b);

    let forward = settle("nist a->b", sentence_nist(&a.tokens, &b.tokens, order));
    let backward = settle("nist b->a", sentence_nist(&b.tokens, &a.tokens, order));
    forward + backward
}
