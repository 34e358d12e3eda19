use crate::core::fs_utils::{ensure_parent, ensure_writable};
use crate::errors::AppResult;
use crate::ingest::markdown;
use crate::models::RawEntry;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOutcome {
    pub converted: usize,
    pub skipped: usize,
}

/// Markdown journal directory -> `date,title,content` CSV.
pub struct ConvertLogic;

impl ConvertLogic {
    pub fn convert_markdown(dir: &Path, out: &Path, force: bool) -> AppResult<ConvertOutcome> {
        ensure_writable(out, force)?;

        info(format!("Converting Markdown files in {}", dir.display()));
        let report = markdown::read_dir(dir)?;

        for row in &report.skipped {
            warning(format!("Skipped {}: {}", row.source, row.reason));
        }

        let mut entries = report.entries;
        // stable: same-day files keep name order
        entries.sort_by_key(|e| e.date);

        ensure_parent(out)?;
        write_csv(&entries, out)?;

        let outcome = ConvertOutcome {
            converted: entries.len(),
            skipped: report.skipped.len(),
        };

        success(format!(
            "Converted {} files to {} ({} skipped)",
            outcome.converted,
            out.display(),
            outcome.skipped
        ));

        Ok(outcome)
    }
}

fn write_csv(entries: &[RawEntry], out: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(["date", "title", "content"])?;

    for e in entries {
        let date = e.date.format("%Y-%m-%d").to_string();
        wtr.write_record([date.as_str(), e.title.as_str(), e.content.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::csv::read_csv_file;
    use std::fs;

    #[test]
    fn converted_csv_reads_back_in_date_order() {
        let dir = std::env::temp_dir().join("rmoodlog_convert_test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        fs::write(dir.join("b.md"), "---\ndate: 2024-01-01\n---\nNew year, \"quoted\", text").unwrap();
        fs::write(dir.join("2023-12-31 Eve.md"), "Last day.").unwrap();
        fs::write(dir.join("undated.md"), "nothing").unwrap();

        let out = dir.join("out").join("journal.csv");
        let outcome = ConvertLogic::convert_markdown(&dir, &out, false).unwrap();
        assert_eq!(outcome, ConvertOutcome { converted: 2, skipped: 1 });

        let back = read_csv_file(&out).unwrap();
        assert_eq!(back.skipped_count(), 0);
        assert_eq!(back.entries[0].title, "Eve");
        assert_eq!(back.entries[1].title, "b");
        assert_eq!(back.entries[1].content, "New year, \"quoted\", text");

        fs::remove_dir_all(&dir).ok();
    }
}
