// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Zero-copy n-gram counting over token slices.

use std::collections::BTreeMap;

/// An n-gram borrowed from its token sequence.
pub type Ngram<'a> = &'a [String];

/// Multiset of n-grams. Ordered so that floating-point sums over it are
/// reproducible.
pub type NgramCounts<'a> = BTreeMap<Ngram<'a>, usize>;

/// Count all n-grams of order `n` in `tokens`.
///
/// Returns an empty map when the sequence is shorter than `n` or `n == 0`.
pub fn ngram_counts(tokens: &[String], n: usize) -> NgramCounts<'_> {
    let mut counts = BTreeMap::new();
    if n == 0 || tokens.len() < n {
        return counts;
    }
    for gram in tokens.windows(n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

/// Count n-grams of every order in `1..=max_order` into one map.
pub fn ngram_counts_upto(tokens: &[String], max_order: usize) -> NgramCounts<'_> {
    let mut counts = BTreeMap::new();
    for n in 1..=max_order {
        for (gram, count) in ngram_counts(tokens, n) {
            *counts.entry(gram).or_insert(0) += count;
        }
    }
    counts
}

/// Size of the multiset intersection, clipping each hypothesis count by the
/// reference count.
pub fn clipped_overlap<'a>(
    hypothesis: &NgramCounts<'a>,
    reference: &NgramCounts<'_>,
) -> Vec<(Ngram<'a>, usize)> {
    hypothesis
        .iter()
        .filter_map(|(gram, &count)| {
            let clipped = count.min(reference.get(*gram).copied().unwrap_or(0));
            (clipped > 0).then_some((*gram, clipped))
        })
        .collect()
}

/// Total number of n-grams in a multiset.
#[inline]
pub fn total(counts: &NgramCounts<'_>) -> usize {
    counts.values().sum()
}
