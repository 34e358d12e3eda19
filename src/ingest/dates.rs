//! Date recognition for imported entries.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

static EXPORT_HASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[0-9a-fA-F]{32}$").unwrap());
static ISO_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})").unwrap());
static WEEKDAY_MDY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+\s+(\d{1,2})\s+(\d{1,2})\s+(\d{2,4})\b").unwrap());
static MDY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})\s+(\d{1,2})\s+(\d{2,4})\b").unwrap());
static MONTH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})\b",
    )
    .unwrap()
});

/// Parse an entry date: `YYYY-MM-DD`, optionally followed by a time part
/// (`YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SSZ`). Years outside
/// [`MIN_YEAR`]..=[`MAX_YEAR`] are rejected.
pub fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();

    let date_part = match s.get(..10) {
        Some(head) if s.len() == 10 => head,
        Some(head) if matches!(s.as_bytes().get(10), Some(b' ' | b'T')) => head,
        _ => return None,
    };

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .ok()
        .filter(is_plausible)
}

pub fn is_plausible(d: &NaiveDate) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&d.year())
}

/// Date and title recognised in a Markdown file name (extension removed).
#[derive(Debug, Clone, PartialEq)]
pub struct NameParts {
    pub date: Option<NaiveDate>,
    pub title: String,
}

/// Recognise a date in a journal file stem.
///
/// Patterns, in order:
/// - `2024-01-15 Title`
/// - `Friday 1 10 25 Title` (weekday, month, day, 2/4-digit year)
/// - `2 27 2022 Title` (month, day, year)
/// - `... August 5th 2022 ...` anywhere in the name
///
/// A trailing 32-hex export hash is removed first. When no pattern matches,
/// the whole cleaned stem is returned as title.
pub fn parse_file_stem(stem: &str) -> NameParts {
    let name = EXPORT_HASH.replace(stem.trim(), "").trim().to_string();

    if let Some(c) = ISO_PREFIX.captures(&name) {
        let date = ymd(&c[1], &c[2], &c[3]);
        return NameParts {
            date,
            title: rest_title(&name, c.get(0).map_or(0, |m| m.end())),
        };
    }

    for re in [&*WEEKDAY_MDY, &*MDY] {
        if let Some(c) = re.captures(&name) {
            return NameParts {
                date: ymd(&c[3], &c[1], &c[2]),
                title: rest_title(&name, c.get(0).map_or(0, |m| m.end())),
            };
        }
    }

    if let Some(c) = MONTH_NAME.captures(&name) {
        let month = month_number(&c[1]);
        let date = month.and_then(|m| ymd(&c[3], &m.to_string(), &c[2]));
        return NameParts { date, title: name };
    }

    NameParts {
        date: None,
        title: name,
    }
}

fn rest_title(name: &str, end: usize) -> String {
    name[end..]
        .trim()
        .trim_start_matches(['-', '_', ':'])
        .trim()
        .to_string()
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let mut y: i32 = year.parse().ok()?;
    if year.len() == 2 {
        y += 2000;
    }
    let d = NaiveDate::from_ymd_opt(y, month.parse().ok()?, day.parse().ok()?)?;
    is_plausible(&d).then_some(d)
}

fn month_number(name: &str) -> Option<u32> {
    let m = match name.get(..3)?.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, day)
    }

    #[test]
    fn iso_dates() {
        assert_eq!(parse_entry_date("2024-01-15"), d(2024, 1, 15));
        assert_eq!(parse_entry_date(" 2024-01-15 "), d(2024, 1, 15));
        assert_eq!(parse_entry_date("2024-01-15 00:00:00"), d(2024, 1, 15));
        assert_eq!(parse_entry_date("2024-01-15T08:30:00Z"), d(2024, 1, 15));
    }

    #[test]
    fn bad_dates() {
        assert_eq!(parse_entry_date(""), None);
        assert_eq!(parse_entry_date("bad-date"), None);
        assert_eq!(parse_entry_date("2024-02-30"), None);
        assert_eq!(parse_entry_date("15/01/2024"), None);
        assert_eq!(parse_entry_date("2024-01-15x"), None);
        assert_eq!(parse_entry_date("1850-01-01"), None);
    }

    #[test]
    fn iso_file_names() {
        let p = parse_file_stem("2024-01-15 Feeling Grateful");
        assert_eq!(p.date, d(2024, 1, 15));
        assert_eq!(p.title, "Feeling Grateful");
    }

    #[test]
    fn weekday_file_names_with_export_hash() {
        let p = parse_file_stem("Friday 1 10 25 - Long week 0123456789abcdef0123456789abcdef");
        assert_eq!(p.date, d(2025, 1, 10));
        assert_eq!(p.title, "Long week");
    }

    #[test]
    fn numeric_file_names() {
        let p = parse_file_stem("2 27 2022 Job Grateful List");
        assert_eq!(p.date, d(2022, 2, 27));
        assert_eq!(p.title, "Job Grateful List");
    }

    #[test]
    fn month_name_anywhere() {
        let p = parse_file_stem("Colonoscopy Friday August 5th 2022");
        assert_eq!(p.date, d(2022, 8, 5));
        assert_eq!(p.title, "Colonoscopy Friday August 5th 2022");

        assert_eq!(parse_file_stem("Trip Sept 3, 2023").date, d(2023, 9, 3));
    }

    #[test]
    fn undated_names_keep_title() {
        let p = parse_file_stem("Random thoughts");
        assert_eq!(p.date, None);
        assert_eq!(p.title, "Random thoughts");
    }

    #[test]
    fn impossible_calendar_dates_are_none() {
        assert_eq!(parse_file_stem("2 31 2022 Nope").date, None);
    }
}
