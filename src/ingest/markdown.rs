//! Directories of Markdown journal files, one entry per file.

use crate::errors::AppResult;
use crate::ingest::IngestReport;
use crate::ingest::dates::{parse_entry_date, parse_file_stem};
use crate::models::RawEntry;
use chrono::NaiveDate;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const UNTITLED: &str = "Untitled Entry";

/// Export metadata lines dropped from the body.
const METADATA_PREFIXES: [&str; 2] = ["Created:", "Updated:"];

/// `*.md` files directly inside `dir`, sorted by file name.
pub fn list_markdown_files(dir: &Path) -> AppResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_md = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
        if is_md && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn read_dir(dir: &Path) -> AppResult<IngestReport> {
    let mut report = IngestReport::default();

    for path in list_markdown_files(dir)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let text = match fs::read(&path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(t) => t,
                Err(_) => {
                    report.skip(name, "file is not valid UTF-8");
                    continue;
                }
            },
            Err(e) => {
                report.skip(name, format!("cannot read file: {e}"));
                continue;
            }
        };

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        match parse_entry(&stem, &text) {
            Ok(mut entry) => {
                entry.source = name;
                report.entries.push(entry);
            }
            Err(reason) => report.skip(name, reason),
        }
    }

    Ok(report)
}

/// Split a leading `---` YAML block from the body.
///
/// Returns `None` when the text has no front matter or it is not a YAML
/// mapping; the whole text is then treated as body.
pub fn split_front_matter(text: &str) -> Option<(Value, String)> {
    let text = text.trim_start_matches('\u{feff}');
    let lines: Vec<&str> = text.lines().collect();

    if lines.first().map(|l| l.trim()) != Some("---") {
        return None;
    }

    let closing = lines[1..].iter().position(|l| l.trim() == "---")? + 1;
    let yaml = lines[1..closing].join("\n");
    let value: Value = serde_yaml::from_str(&yaml).ok()?;
    if !value.is_mapping() {
        return None;
    }

    let body = lines[closing + 1..].join("\n");
    Some((value, body))
}

fn front_matter_str(fm: &Value, key: &str) -> Option<String> {
    match fm.get(key)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Build a raw entry from a file stem and its text.
///
/// Date: front matter `date`, else a date recognised in the file name.
/// Title: front matter `title`, else the first `# ` heading, else the file
/// name remainder, else [`UNTITLED`].
pub fn parse_entry(stem: &str, text: &str) -> Result<RawEntry, String> {
    let (front, body) = match split_front_matter(text) {
        Some((fm, body)) => (Some(fm), body),
        None => (None, text.to_string()),
    };

    let name = parse_file_stem(stem);

    let fm_date = front.as_ref().and_then(|fm| front_matter_str(fm, "date"));
    let date: NaiveDate = match fm_date {
        Some(raw) => parse_entry_date(&raw)
            .ok_or_else(|| format!("invalid front matter date '{raw}'"))?,
        None => name
            .date
            .ok_or_else(|| "could not determine a valid date".to_string())?,
    };

    let (heading, content) = strip_body(&body);

    let title = front
        .as_ref()
        .and_then(|fm| front_matter_str(fm, "title"))
        .filter(|t| !t.is_empty())
        .or(heading)
        .or_else(|| Some(name.title).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| UNTITLED.to_string());

    Ok(RawEntry {
        date,
        title,
        content,
        source: stem.to_string(),
    })
}

/// Take the first `# ` heading out of the body and drop export metadata.
fn strip_body(body: &str) -> (Option<String>, String) {
    let mut heading: Option<String> = None;
    let mut kept: Vec<&str> = Vec::new();
    let mut skip_blank = false;

    for line in body.lines() {
        if heading.is_none()
            && let Some(h) = line.strip_prefix("# ")
        {
            heading = Some(h.trim().to_string());
            skip_blank = true;
            continue;
        }

        if skip_blank {
            skip_blank = false;
            if line.trim().is_empty() {
                continue;
            }
        }

        if METADATA_PREFIXES.iter().any(|p| line.starts_with(p)) {
            continue;
        }

        kept.push(line);
    }

    (heading, kept.join("\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn front_matter_wins() {
        let text = "---\ndate: 2024-03-01\ntitle: Spring\n---\n# Heading\n\nBody text";
        let e = parse_entry("whatever", text).unwrap();
        assert_eq!(e.date, d(2024, 3, 1));
        assert_eq!(e.title, "Spring");
        assert_eq!(e.content, "Body text");
    }

    #[test]
    fn heading_and_file_name() {
        let text = "# A good day\n\nCreated: March 1, 2024 9:00 AM\nWent for a walk.\nUpdated: today";
        let e = parse_entry("2024-03-01 ignored title", text).unwrap();
        assert_eq!(e.date, d(2024, 3, 1));
        assert_eq!(e.title, "A good day");
        assert_eq!(e.content, "Went for a walk.");
    }

    #[test]
    fn file_name_title_fallback() {
        let e = parse_entry("2 27 2022 Job Grateful List", "Thankful for the team.").unwrap();
        assert_eq!(e.date, d(2022, 2, 27));
        assert_eq!(e.title, "Job Grateful List");
    }

    #[test]
    fn untitled_fallback() {
        let e = parse_entry("2024-01-02", "just text").unwrap();
        assert_eq!(e.title, UNTITLED);
    }

    #[test]
    fn undated_files_are_rejected() {
        assert!(parse_entry("Random thoughts", "no date anywhere").is_err());
    }

    #[test]
    fn bad_front_matter_date_is_rejected() {
        let text = "---\ndate: someday\n---\nbody";
        let err = parse_entry("2024-01-01 x", text).unwrap_err();
        assert!(err.contains("someday"));
    }

    #[test]
    fn non_mapping_front_matter_is_body() {
        assert!(split_front_matter("---\n- a\n- b\n---\nbody").is_none());
        assert!(split_front_matter("no front matter").is_none());
        assert!(split_front_matter("---\nunterminated: yes\n").is_none());
    }

    #[test]
    fn reads_directory_in_name_order() {
        let dir = env::temp_dir().join("rmoodlog_md_reader_test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        fs::write(dir.join("2024-01-02 Second.md"), "Okay day.").unwrap();
        fs::write(dir.join("2024-01-01 First.md"), "# First!\n\nGreat day.").unwrap();
        fs::write(dir.join("Undated.md"), "Lost in time.").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();
        fs::write(dir.join("2024-01-03 Binary.md"), [0xff, 0xfe, 0x00]).unwrap();

        let report = read_dir(&dir).unwrap();
        let titles: Vec<&str> = report.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First!", "Second"]);
        assert_eq!(report.entries[0].source, "2024-01-01 First.md");
        assert_eq!(report.skipped_count(), 2);

        fs::remove_dir_all(&dir).ok();
    }
}
