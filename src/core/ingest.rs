use crate::analysis::Analyzer;
use crate::db::{EntryStore, PutMode};
use crate::errors::AppResult;
use crate::ingest::{self, IngestReport, SourceKind};
use crate::ui::messages::{detail, info, success, warning};
use std::path::Path;

/// Result of one `import` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    pub inserted: usize,
    pub skipped: usize,
}

/// High-level business logic for the `import` command.
pub struct IngestLogic;

impl IngestLogic {
    /// Read a source, score every usable record and persist the batch.
    pub fn import(
        store: &mut EntryStore,
        analyzer: &Analyzer,
        path: &Path,
        kind: SourceKind,
        mode: PutMode,
    ) -> AppResult<ImportOutcome> {
        info(format!("Reading {}", path.display()));

        let report = ingest::read_source(path, kind)?;
        Self::store_report(store, analyzer, report, mode)
    }

    /// Enrich and persist an already-read report.
    pub fn store_report(
        store: &mut EntryStore,
        analyzer: &Analyzer,
        report: IngestReport,
        mode: PutMode,
    ) -> AppResult<ImportOutcome> {
        for w in &report.warnings {
            warning(w);
        }
        if !report.skipped.is_empty() {
            warning(format!("{} records skipped:", report.skipped_count()));
            for row in &report.skipped {
                detail(format!("{}: {}", row.source, row.reason));
            }
        }

        let skipped = report.skipped_count();

        // an empty batch must not wipe the store
        if mode == PutMode::Replace && report.entries.is_empty() {
            warning("No usable entries found; existing entries were left untouched.");
            return Ok(ImportOutcome {
                inserted: 0,
                skipped,
            });
        }

        let entries = analyzer.enrich_all(report.entries);
        let inserted = store.put_all(&entries, mode)?;

        success(format!(
            "Imported {inserted} entries ({skipped} skipped, mode: {})",
            mode.as_str()
        ));

        Ok(ImportOutcome { inserted, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::EntryFilter;
    use crate::models::MoodLabel;
    use std::fs;

    #[test]
    fn csv_import_end_to_end() {
        let path = std::env::temp_dir().join("rmoodlog_core_ingest.csv");
        fs::write(
            &path,
            "date,title,content\n\
             2024-01-15,Feeling Grateful,Today was amazing and wonderful\n\
             bad-date,X,Y\n",
        )
        .unwrap();

        let mut store = EntryStore::open_in_memory().unwrap();
        let outcome = IngestLogic::import(
            &mut store,
            &Analyzer::default(),
            &path,
            SourceKind::Csv,
            PutMode::Append,
        )
        .unwrap();

        assert_eq!(outcome, ImportOutcome { inserted: 1, skipped: 1 });

        let rows = store.query(&EntryFilter::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].polarity > 0.5);
        assert_eq!(rows[0].mood, MoodLabel::VeryPositive);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn replace_mode_drops_earlier_rows() {
        let mut store = EntryStore::open_in_memory().unwrap();
        let analyzer = Analyzer::default();
        let report = || ingest::csv::read_csv("date,content\n2024-01-01,fine\n".as_bytes()).unwrap();

        IngestLogic::store_report(&mut store, &analyzer, report(), PutMode::Append).unwrap();
        IngestLogic::store_report(&mut store, &analyzer, report(), PutMode::Append).unwrap();
        assert_eq!(store.count().unwrap(), 2);

        IngestLogic::store_report(&mut store, &analyzer, report(), PutMode::Replace).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn replace_with_nothing_usable_keeps_store() {
        let mut store = EntryStore::open_in_memory().unwrap();
        let analyzer = Analyzer::default();
        let good = ingest::csv::read_csv("date,content\n2024-01-01,fine\n".as_bytes()).unwrap();
        IngestLogic::store_report(&mut store, &analyzer, good, PutMode::Append).unwrap();

        let all_bad = ingest::csv::read_csv("date,content\nbad-date,x\n".as_bytes()).unwrap();
        let outcome =
            IngestLogic::store_report(&mut store, &analyzer, all_bad, PutMode::Replace).unwrap();

        assert_eq!(outcome, ImportOutcome { inserted: 0, skipped: 1 });
        assert_eq!(store.count().unwrap(), 1);
    }
}
