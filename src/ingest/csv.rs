//! CSV journal exports with a `date,title,content` header.

use crate::errors::{AppError, AppResult};
use crate::ingest::IngestReport;
use crate::ingest::dates::parse_entry_date;
use crate::models::RawEntry;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column positions resolved from the header row.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvLayout {
    pub date: usize,
    pub title: Option<usize>,
    pub content: usize,
    /// Header names that are not part of the record shape.
    pub ignored: Vec<String>,
}

impl CsvLayout {
    /// `date` and `content` are required, `title` is optional. Names are
    /// matched case-insensitively after trimming (a UTF-8 BOM is tolerated).
    pub fn from_headers(headers: &StringRecord) -> AppResult<Self> {
        let mut date = None;
        let mut title = None;
        let mut content = None;
        let mut ignored = Vec::new();

        for (i, h) in headers.iter().enumerate() {
            let name = h.trim_start_matches('\u{feff}').trim().to_lowercase();
            let slot = match name.as_str() {
                "date" => &mut date,
                "title" => &mut title,
                "content" => &mut content,
                _ => {
                    ignored.push(h.to_string());
                    continue;
                }
            };
            if slot.is_some() {
                return Err(AppError::InvalidSchema(format!("duplicate column '{name}'")));
            }
            *slot = Some(i);
        }

        let missing: Vec<&str> = [("date", date), ("content", content)]
            .into_iter()
            .filter(|(_, idx)| idx.is_none())
            .map(|(n, _)| n)
            .collect();

        match (date, content) {
            (Some(date), Some(content)) => Ok(Self {
                date,
                title,
                content,
                ignored,
            }),
            _ => Err(AppError::InvalidSchema(format!(
                "missing required column(s): {} (expected header: date,title,content)",
                missing.join(", ")
            ))),
        }
    }
}

pub fn read_csv_file(path: &Path) -> AppResult<IngestReport> {
    let file = File::open(path)?;
    read_csv(file)
}

/// Read every record; rows with a missing or unparseable date, or that the
/// CSV reader cannot decode, are skipped and reported.
pub fn read_csv<R: Read>(reader: R) -> AppResult<IngestReport> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let layout = CsvLayout::from_headers(rdr.headers()?)?;

    let mut report = IngestReport::default();
    if !layout.ignored.is_empty() {
        report
            .warnings
            .push(format!("ignored column(s): {}", layout.ignored.join(", ")));
    }

    for (i, result) in rdr.records().enumerate() {
        // header is line 1
        let fallback_line = i as u64 + 2;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                let line = e
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(fallback_line);
                report.skip(format!("line {line}"), format!("unreadable record: {e}"));
                continue;
            }
        };

        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(fallback_line);
        let source = format!("line {line}");

        let raw_date = record.get(layout.date).unwrap_or("").trim();
        if raw_date.is_empty() {
            report.skip(source, "missing date");
            continue;
        }

        let Some(date) = parse_entry_date(raw_date) else {
            report.skip(source, format!("invalid date '{raw_date}'"));
            continue;
        };

        let title = layout
            .title
            .and_then(|idx| record.get(idx))
            .unwrap_or("")
            .trim()
            .to_string();
        let content = record.get(layout.content).unwrap_or("").to_string();

        report.entries.push(RawEntry {
            date,
            title,
            content,
            source,
        });
    }

    Ok(report)
}
