use crate::core::fs_utils::{ensure_parent, ensure_writable};
use crate::db::log::audit;
use crate::db::{EntryFilter, EntryStore};
use crate::errors::AppResult;
use crate::models::JournalEntry;
use crate::ui::messages::{info, success, warning};
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat row for CSV export (header comes from serde).
#[derive(Debug, Serialize)]
struct EntryExport<'a> {
    date: String,
    title: &'a str,
    content: &'a str,
    polarity: f64,
    subjectivity: f64,
    mood: &'static str,
    keywords: String,
}

impl<'a> From<&'a JournalEntry> for EntryExport<'a> {
    fn from(e: &'a JournalEntry) -> Self {
        Self {
            date: e.date_str(),
            title: &e.title,
            content: &e.content,
            polarity: e.polarity,
            subjectivity: e.subjectivity,
            mood: e.mood.as_str(),
            keywords: e.keywords.join(";"),
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write the entries selected by `filter` and return how many were written.
    pub fn export(
        store: &EntryStore,
        format: ExportFormat,
        file: &Path,
        filter: &EntryFilter,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(file, force)?;

        let entries = store.query(filter)?;
        if entries.is_empty() {
            warning("No entries match the requested filters; writing an empty export.");
        }

        ensure_parent(file)?;
        match format {
            ExportFormat::Csv => export_csv(&entries, file)?,
            ExportFormat::Json => export_json(&entries, file)?,
        }

        audit(
            &store.conn,
            "export",
            format.as_str(),
            &format!("{} entries exported to {}", entries.len(), file.display()),
        )?;

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            file.display()
        ));
        Ok(entries.len())
    }
}

fn export_csv(entries: &[JournalEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    if entries.is_empty() {
        // serde only emits the header with the first record
        wtr.write_record([
            "date",
            "title",
            "content",
            "polarity",
            "subjectivity",
            "mood",
            "keywords",
        ])?;
    }
    for e in entries {
        wtr.serialize(EntryExport::from(e))?;
    }
    wtr.flush()?;
    Ok(())
}

fn export_json(entries: &[JournalEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json = serde_json::to_string_pretty(entries)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::PutMode;
    use crate::models::MoodLabel;
    use chrono::NaiveDate;
    use std::fs;

    fn sample_store() -> EntryStore {
        let mut store = EntryStore::open_in_memory().unwrap();
        let entries = vec![
            JournalEntry {
                id: None,
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                title: "Feeling, Grateful".into(),
                content: "Today was amazing".into(),
                polarity: 0.6,
                subjectivity: 0.9,
                mood: MoodLabel::VeryPositive,
                keywords: vec!["today".into(), "amazing".into()],
            },
            JournalEntry {
                id: None,
                date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                title: "Meh".into(),
                content: "ok".into(),
                polarity: 0.0,
                subjectivity: 0.0,
                mood: MoodLabel::Neutral,
                keywords: vec![],
            },
        ];
        store.put_all(&entries, PutMode::Append).unwrap();
        store
    }

    #[test]
    fn csv_export_with_mood_filter() {
        let store = sample_store();
        let path = std::env::temp_dir().join("rmoodlog_export_test.csv");

        let filter = EntryFilter {
            mood: Some(MoodLabel::VeryPositive),
            ..Default::default()
        };
        let n = ExportLogic::export(&store, ExportFormat::Csv, &path, &filter, true).unwrap();
        assert_eq!(n, 1);

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("date,title,content,polarity,subjectivity,mood,keywords")
        );
        assert_eq!(
            lines.next(),
            Some("2024-01-15,\"Feeling, Grateful\",Today was amazing,0.6,0.9,Very Positive,today;amazing")
        );
        assert_eq!(lines.next(), None);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn json_export_is_an_array() {
        let store = sample_store();
        let path = std::env::temp_dir().join("rmoodlog_export_test.json");

        ExportLogic::export(&store, ExportFormat::Json, &path, &EntryFilter::default(), true)
            .unwrap();

        let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let arr = v.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["mood"], "Very Positive");
        assert_eq!(arr[0]["date"], "2024-01-15");
        assert_eq!(arr[1]["keywords"].as_array().unwrap().len(), 0);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn empty_csv_export_still_has_header() {
        let store = EntryStore::open_in_memory().unwrap();
        let path = std::env::temp_dir().join("rmoodlog_export_empty.csv");

        let n = ExportLogic::export(&store, ExportFormat::Csv, &path, &EntryFilter::default(), true)
            .unwrap();
        assert_eq!(n, 0);
        assert!(fs::read_to_string(&path).unwrap().starts_with("date,title"));

        fs::remove_file(&path).ok();
    }
}
