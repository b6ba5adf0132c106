// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Sentence pairs

use std::fmt;

/// Two sentences to be compared.
///
/// Neither side is privileged: every metric scores both orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SentencePair {
    /// First sentence
    pub a: String,
    /// Second sentence
    pub b: String,
}

impl SentencePair {
    /// Create a new pair
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// The same pair with the sides exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            a: self.b.clone(),
            b: self.a.clone(),
        }
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for SentencePair {
    fn from((a, b): (A, B)) -> Self {
        Self::new(a, b)
    }
}

impl fmt::Display for SentencePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} <-> {:?}", self.a, self.b)
    }
}
