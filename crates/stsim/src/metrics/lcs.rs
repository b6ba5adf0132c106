// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Longest common substring.

use super::settle;
use crate::error::Result;
use crate::pair::SentencePair;
use crate::text::find_longest_match;

/// Length (in chars) of the longest contiguous run shared by `first` and
/// `second`, searching `second` for runs of `first`.
///
/// Never fails; the `Result` keeps the shape of the other directional
/// metrics.
pub fn longest_common_substring(first: &[char], second: &[char]) -> Result<f64> {
    let found = find_longest_match(first, second);
    Ok(found.size as f64)
}

/// LCS(a, b) + LCS(b, a).
///
/// The two directions can differ for long sentences, so both are computed.
pub fn symmetrical_lcs(pair: &SentencePair) -> f64 {
    let a: Vec<char> = pair.a.to_lowercase().chars().collect();
    let b: Vec<char> = pair.b.to_lowercase().chars().collect();

    let forward = settle("lcs a->b", longest_common_substring(&a, &b));
    let backward = settle("lcs b->a", longest_common_substring(&b, &a));
    forward + backward
}
