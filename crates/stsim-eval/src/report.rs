// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Console formatting of evaluation results.

use std::fmt::{self, Write};

use crate::evaluator::{EvaluationResult, MetricReport};

/// Format a coefficient to three decimals; undefined values print as `nan`.
pub fn format_coefficient(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:.3}")
    }
}

/// Per-pair scores of one metric, one `index<TAB>score` line per pair.
pub fn score_listing(report: &MetricReport) -> String {
    let mut out = format!(
        "# {} ({}) scores, {} pairs\n",
        report.kind.name(),
        report.kind.description(),
        report.scores.len()
    );
    for (idx, score) in report.scores.iter().enumerate() {
        // writing to a String cannot fail
        let _ = writeln!(out, "{idx}\t{score}");
    }
    out
}

impl fmt::Display for MetricReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Pearson correlation: {}",
            self.kind.name(),
            format_coefficient(self.correlation)
        )
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => writeln!(f, "Semantic textual similarity for {source}")?,
            None => writeln!(f, "Semantic textual similarity")?,
        }
        writeln!(f)?;
        for report in &self.reports {
            writeln!(f, "{report}")?;
        }
        Ok(())
    }
}
