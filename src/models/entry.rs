use crate::models::mood::MoodLabel;
use chrono::NaiveDate;
use serde::Serialize;

/// A journal record as read from an input source, before analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    /// Where the record came from (`line 4`, `2024-01-15 Gratitude.md`).
    pub source: String,
}

/// A fully analysed journal entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalEntry {
    /// Surrogate key assigned by the store; `None` until persisted.
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub polarity: f64,
    pub subjectivity: f64,
    pub mood: MoodLabel,
    pub keywords: Vec<String>,
}

impl JournalEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Title for display; falls back to a placeholder for untitled rows.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "No Title"
        } else {
            &self.title
        }
    }
}
