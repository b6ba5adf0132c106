// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! # stsim - symmetrical string-similarity metrics
//!
//! Scores a pair of sentences with five classic string metrics (NIST, BLEU,
//! word error rate, longest common substring, edit distance). Every metric
//! is computed in both directions and summed, so `score(a, b) == score(b, a)`
//! even though the underlying one-directional measures are not symmetric.
//!
//! ## Quick Start
//!
//! ```
//! use stsim::{MetricKind, SentencePair};
//!
//! let pair = SentencePair::new("A man is playing a guitar.", "A man plays the guitar.");
//! for kind in MetricKind::ALL {
//!     let score = (kind.scorer())(&pair);
//!     println!("{}: {:.3}", kind.name(), score);
//! }
//! ```
//!
//! Degenerate inputs (empty sentences, sentences shorter than an n-gram
//! order) never fail: the affected direction contributes `0.0`.

#![warn(missing_docs)]

pub mod error;
pub mod metrics;
pub mod ngram;
pub mod pair;
pub mod text;
pub mod tokenize;

pub use error::{Error, Result};
pub use metrics::{
    symmetrical_bleu, symmetrical_ed, symmetrical_lcs, symmetrical_nist, symmetrical_wer,
    BleuConfig, MetricConfig, MetricKind, PairScorer, Smoothing,
};
pub use pair::SentencePair;
pub use tokenize::{split_sentences, word_tokenize, Normalized};
