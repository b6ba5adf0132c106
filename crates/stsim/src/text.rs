// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Longest contiguous match between two sequences.
//!
//! Edit distance comes from `strsim`; the difflib-style match below has no
//! crate equivalent because of its popular-element rule.

use std::collections::HashMap;

/// Sequences at least this long get the popular-element heuristic in
/// [`find_longest_match`].
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// A matching block: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Match {
    /// Start index in the first sequence
    pub a: usize,
    /// Start index in the second sequence
    pub b: usize,
    /// Length of the run
    pub size: usize,
}

/// Find the longest contiguous run shared by `a` and `b`.
///
/// Ties resolve to the match starting earliest in `a`, then earliest in
/// `b`. When `b` has at least [`AUTOJUNK_MIN_LEN`] elements, elements
/// occurring in more than 1% of `b` (plus one) are "popular": they cannot
/// seed a match, though a found match is still extended across them. That
/// heuristic makes the result depend on argument order for long inputs.
pub fn find_longest_match<T>(a: &[T], b: &[T]) -> Match
where
    T: Eq + std::hash::Hash,
{
    let index = element_index(b);

    let mut best = Match::default();
    // j2len[j] = length of the match ending at a[i - 1], b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for (i, x) in a.iter().enumerate() {
        let mut next: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = index.get(x) {
            for &j in positions {
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next.insert(j, k);
                if k > best.size {
                    best = Match {
                        a: i + 1 - k,
                        b: j + 1 - k,
                        size: k,
                    };
                }
            }
        }
        j2len = next;
    }

    // Extend across elements excluded from the index.
    while best.a > 0 && best.b > 0 && a[best.a - 1] == b[best.b - 1] {
        best.a -= 1;
        best.b -= 1;
        best.size += 1;
    }
    while best.a + best.size < a.len()
        && best.b + best.size < b.len()
        && a[best.a + best.size] == b[best.b + best.size]
    {
        best.size += 1;
    }

    best
}

/// Map each element of `b` to its ascending positions, dropping popular
/// elements of long sequences.
fn element_index<T>(b: &[T]) -> HashMap<&T, Vec<usize>>
where
    T: Eq + std::hash::Hash,
{
    let mut index: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, x) in b.iter().enumerate() {
        index.entry(x).or_default().push(j);
    }
    if b.len() >= AUTOJUNK_MIN_LEN {
        let threshold = b.len() / 100 + 1;
        index.retain(|_, positions| positions.len() <= threshold);
    }
    index
}
