// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! stsim CLI tool
//!
//! Correlates string-similarity metrics with the gold labels of an STS
//! benchmark file:
//!
//! ```text
//! stsim --sts-data stsbenchmark/sts-dev.csv
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use stsim_eval::{load_sts, score_listing, EvalConfig, Evaluator};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stsim")]
#[command(about = "Pearson correlation of string-similarity metrics with STS labels", long_about = None)]
struct Cli {
    /// Tab-separated STS data in benchmark format
    #[arg(
        long = "sts-data",
        visible_alias = "sts_data",
        default_value = "stsbenchmark/sts-train.csv"
    )]
    sts_data: PathBuf,

    /// Score pairs on this many threads (sequential when omitted)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Print every metric's per-pair scores before the summary
    #[arg(long)]
    show_scores: bool,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "stsim={level},stsim_eval={level},stsim_cli={level}"
        )))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dataset = load_sts(&cli.sts_data)
        .with_context(|| format!("loading STS data from {}", cli.sts_data.display()))?;
    println!("Found {} STS pairs", dataset.len());

    let config = match cli.threads {
        Some(threads) => EvalConfig::default().threads(threads),
        None => EvalConfig::sequential(),
    };
    let result = Evaluator::new(config).evaluate_all(&dataset)?;
    tracing::info!(
        pairs = result.pairs,
        metrics = result.reports.len(),
        "evaluation finished"
    );

    if cli.show_scores {
        for report in &result.reports {
            println!("{}", score_listing(report));
        }
    }
    print!("{result}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["stsim"]);
        assert_eq!(cli.sts_data, PathBuf::from("stsbenchmark/sts-train.csv"));
        assert_eq!(cli.threads, None);
        assert!(!cli.show_scores);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "stsim",
            "--sts-data",
            "sts-dev.csv",
            "--threads",
            "4",
            "--show-scores",
            "-vv",
        ]);
        assert_eq!(cli.sts_data, PathBuf::from("sts-dev.csv"));
        assert_eq!(cli.threads, Some(4));
        assert!(cli.show_scores);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_underscore_alias() {
        let cli = Cli::parse_from(["stsim", "--sts_data", "other.csv"]);
        assert_eq!(cli.sts_data, PathBuf::from("other.csv"));
    }
}
