// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! STS dataset model and loader.
//!
//! The STS benchmark ships as tab-separated text without a header and
//! without quoting:
//!
//! ```text
//! genre  file  year  id  score  sentence1  sentence2  [source columns...]
//! ```
//!
//! Only the score (column 4) and the two sentences (columns 5 and 6) are
//! used.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use stsim::SentencePair;

/// Column holding the gold similarity score.
const SCORE_COLUMN: usize = 4;
/// Column holding the first sentence.
const SENTENCE_A_COLUMN: usize = 5;
/// Column holding the second sentence.
const SENTENCE_B_COLUMN: usize = 6;

/// Sentence pairs with index-aligned gold similarity labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pairs: Vec<SentencePair>,
    labels: Vec<f64>,
    source: Option<String>,
}

impl Dataset {
    /// Build a dataset; `pairs[i]` is labelled `labels[i]`.
    pub fn new(pairs: Vec<SentencePair>, labels: Vec<f64>) -> Result<Self> {
        if pairs.len() != labels.len() {
            bail!(
                "dataset has {} sentence pairs but {} labels",
                pairs.len(),
                labels.len()
            );
        }
        Ok(Self {
            pairs,
            labels,
            source: None,
        })
    }

    /// Record where the data came from (used in reports).
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sentence pairs, in file order
    pub fn pairs(&self) -> &[SentencePair] {
        &self.pairs
    }

    /// Gold labels, aligned with [`Dataset::pairs`]
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Origin of the data, if known
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Number of labelled pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate `(pair, label)`.
    pub fn iter(&self) -> impl Iterator<Item = (&SentencePair, f64)> + '_ {
        self.pairs.iter().zip(self.labels.iter().copied())
    }
}

/// Parse STS-benchmark records from a reader.
///
/// Extra trailing columns are ignored. A record with too few columns or a
/// non-numeric score aborts the whole parse.
pub fn parse_sts<R: Read>(reader: R) -> Result<Dataset> {
    let mut records = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut pairs = Vec::new();
    let mut labels = Vec::new();

    for (idx, record) in records.records().enumerate() {
        let record = record.with_context(|| format!("reading STS record {}", idx + 1))?;
        let line = record.position().map(|p| p.line()).unwrap_or(idx as u64 + 1);

        if record.len() <= SENTENCE_B_COLUMN {
            bail!(
                "line {line}: expected at least {} tab-separated fields, found {}",
                SENTENCE_B_COLUMN + 1,
                record.len()
            );
        }

        let raw_score = &record[SCORE_COLUMN];
        let score: f64 = raw_score
            .trim()
            .parse()
            .with_context(|| format!("line {line}: invalid similarity score {raw_score:?}"))?;

        labels.push(score);
        pairs.push(SentencePair::new(
            &record[SENTENCE_A_COLUMN],
            &record[SENTENCE_B_COLUMN],
        ));
    }

    tracing::debug!(pairs = pairs.len(), "parsed STS records");
    Dataset::new(pairs, labels)
}

/// Load an STS-benchmark file.
pub fn load_sts(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let dataset = parse_sts(file).with_context(|| format!("parsing {}", path.display()))?;
    tracing::info!(path = %path.display(), pairs = dataset.len(), "loaded STS dataset");
    Ok(dataset.with_source(path.display().to_string()))
}
