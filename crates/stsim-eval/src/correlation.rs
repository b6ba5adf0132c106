// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Pearson correlation between metric scores and gold labels.

use thiserror::Error;

/// Inputs for which no coefficient can be computed at all.
///
/// Zero variance is *not* an error: the coefficient is then NaN, which is
/// reported as-is so that a degenerate metric stays visible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorrelationError {
    /// The two sequences differ in length
    #[error("length mismatch: {scores} scores vs {labels} labels")]
    LengthMismatch {
        /// Number of metric scores
        scores: usize,
        /// Number of gold labels
        labels: usize,
    },

    /// Fewer than two observations
    #[error("at least 2 observations are required, got {0}")]
    TooFewObservations(usize),
}

fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|v| *v == values[0])
}

/// Pearson product-moment correlation coefficient of `x` and `y`.
///
/// Returns NaN when either input is constant; otherwise the result is
/// clamped to `[-1, 1]` to absorb rounding.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64, CorrelationError> {
    if x.len() != y.len() {
        return Err(CorrelationError::LengthMismatch {
            scores: x.len(),
            labels: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(CorrelationError::TooFewObservations(n));
    }
    if is_constant(x) || is_constant(y) {
        return Ok(f64::NAN);
    }

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = var_x.sqrt() * var_y.sqrt();
    if denominator == 0.0 {
        return Ok(f64::NAN);
    }
    Ok((cov / denominator).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_positive() {
        let r = pearson(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_negative() {
        let r = pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_value() {
        // r = 0.8 for this textbook example
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 1.0, 4.0, 3.0, 5.0];
        let r = pearson(&x, &y).unwrap();
        assert!((r - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_constant_input_is_nan() {
        assert!(pearson(&[1.0, 1.0, 1.0], &[0.0, 2.5, 5.0]).unwrap().is_nan());
        assert!(pearson(&[0.0, 2.5, 5.0], &[0.1, 0.1, 0.1]).unwrap().is_nan());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            pearson(&[1.0, 2.0], &[1.0]),
            Err(CorrelationError::LengthMismatch { scores: 2, labels: 1 })
        );
        assert_eq!(
            pearson(&[1.0], &[1.0]),
            Err(CorrelationError::TooFewObservations(1))
        );
        assert_eq!(pearson(&[], &[]), Err(CorrelationError::TooFewObservations(0)));
    }

    #[test]
    fn test_bounded() {
        let x: Vec<f64> = (0..50).map(|i| (i as f64 * 0.37).sin()).collect();
        let y: Vec<f64> = x.iter().map(|v| v * 3.0 + 1.0).collect();
        let r = pearson(&x, &y).unwrap();
        assert!(r <= 1.0 && r > 0.999_999);
    }
}
