//! Ingestion adapters: turn a CSV export or a directory of Markdown files
//! into raw entries, skipping (and reporting) records that cannot be used.

pub mod csv;
pub mod dates;
pub mod markdown;

use crate::errors::AppResult;
use crate::models::RawEntry;
use std::path::Path;

/// A record that was left out of the batch, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub source: String,
    pub reason: String,
}

/// Outcome of reading one input source.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Usable records, in source order.
    pub entries: Vec<RawEntry>,
    pub skipped: Vec<SkippedRow>,
    /// Non-fatal remarks about the source as a whole (e.g. ignored columns).
    pub warnings: Vec<String>,
}

impl IngestReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub(crate) fn skip(&mut self, source: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedRow {
            source: source.into(),
            reason: reason.into(),
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Markdown,
}

impl SourceKind {
    /// Directories are Markdown journals, files are CSV exports, unless
    /// Markdown is forced.
    pub fn detect(path: &Path, force_markdown: bool) -> Self {
        if force_markdown || path.is_dir() {
            SourceKind::Markdown
        } else {
            SourceKind::Csv
        }
    }
}

/// Read any supported source.
pub fn read_source(path: &Path, kind: SourceKind) -> AppResult<IngestReport> {
    match kind {
        SourceKind::Csv => csv::read_csv_file(path),
        SourceKind::Markdown => markdown::read_dir(path),
    }
}
