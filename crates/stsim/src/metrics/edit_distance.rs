// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Raw character edit distance.

use super::settle;
use crate::error::Result;
use crate::pair::SentencePair;

/// Levenshtein distance between two texts, in chars (unit costs, no
/// transpositions). Callers pass lowercased text.
pub fn edit_distance(source: &str, target: &str) -> Result<f64> {
    Ok(strsim::levenshtein(source, target) as f64)
}

/// ED(a, b) + ED(b, a), i.e. twice the edit distance.
pub fn symmetrical_ed(pair: &SentencePair) -> f64 {
    let a = pair.a.to_lowercase();
    let b = pair.b.to_lowercase();

    let forward = settle("ed a->b", edit_distance(&a, &b));
    let backward = settle("ed b->a", edit_distance(&b, &a));
    forward + backward
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(edit_distance("kitten", "sitting").unwrap(), 3.0);
        assert_eq!(edit_distance("flaw", "lawn").unwrap(), 2.0);
        assert_eq!(edit_distance("", "abc").unwrap(), 3.0);
        assert_eq!(edit_distance("", "").unwrap(), 0.0);
    }

    #[test]
    fn test_no_transpositions() {
        assert_eq!(edit_distance("ab", "ba").unwrap(), 2.0);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(edit_distance("café", "cafe").unwrap(), 1.0);
    }

    #[test]
    fn test_identical_is_zero() {
        assert_eq!(symmetrical_ed(&SentencePair::new("Same Text", "same text")), 0.0);
    }

    #[test]
    fn test_double_distance() {
        assert_eq!(symmetrical_ed(&SentencePair::new("kitten", "sitting")), 6.0);
        assert_eq!(symmetrical_ed(&SentencePair::new("a b c", "x y z")), 6.0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(symmetrical_ed(&SentencePair::new("", "abcd")), 8.0);
        assert_eq!(symmetrical_ed(&SentencePair::new("", "")), 0.0);
    }
}
