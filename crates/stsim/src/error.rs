// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Error types for stsim

use thiserror::Error;

/// Result type alias for metric computations
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by one-directional metric computations.
///
/// The symmetrical metrics never surface these: a failing direction is
/// logged and contributes `0.0` to the pair score.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A normalizing quantity was zero (empty sentence, hypothesis shorter
    /// than the n-gram order, ...).
    #[error("division by zero in {metric}: {reason}")]
    ZeroDivision {
        /// Metric that hit the degenerate input
        metric: &'static str,
        /// What was zero
        reason: &'static str,
    },
}

impl Error {
    /// Create a zero-division error
    pub fn zero_division(metric: &'static str, reason: &'static str) -> Self {
        Self::ZeroDivision { metric, reason }
    }

    /// Get the error category for logging.
    pub fn category(&self) -> &'static str {
        match self {
            Self::ZeroDivision { .. } => "zero_division",
        }
    }
}
