//! Aggregates behind the `stats` command: everything a dashboard would chart,
//! computed over an already-filtered slice of entries.

use crate::models::{JournalEntry, MoodLabel, WeekdayMood};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodSummary {
    pub total_entries: usize,
    pub average_polarity: f64,
    pub average_subjectivity: f64,
    /// `None` for an empty set.
    pub most_common_mood: Option<MoodLabel>,
    /// Days between the first and last entry (0 for a single day).
    pub span_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodCount {
    pub mood: MoodLabel,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAverage {
    /// `YYYY-MM`
    pub month: String,
    pub average_polarity: f64,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Full report, serialised as one JSON document by `stats --json`.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub summary: MoodSummary,
    pub mood_distribution: Vec<MoodCount>,
    pub polarity_histogram: Vec<HistogramBin>,
    pub weekday_averages: Vec<WeekdayMood>,
    pub monthly_averages: Vec<MonthlyAverage>,
    pub common_keywords: Vec<KeywordCount>,
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

pub fn summary(entries: &[JournalEntry]) -> MoodSummary {
    let span_days = match (
        entries.iter().map(|e| e.date).min(),
        entries.iter().map(|e| e.date).max(),
    ) {
        (Some(first), Some(last)) => (last - first).num_days(),
        _ => 0,
    };

    // ties go to the lower label: max_by_key keeps the last maximum,
    // so walk labels from the top down
    let most_common_mood = mood_distribution(entries)
        .into_iter()
        .rev()
        .filter(|c| c.entries > 0)
        .max_by_key(|c| c.entries)
        .map(|c| c.mood);

    MoodSummary {
        total_entries: entries.len(),
        average_polarity: mean(entries.iter().map(|e| e.polarity)),
        average_subjectivity: mean(entries.iter().map(|e| e.subjectivity)),
        most_common_mood,
        span_days,
    }
}

/// Entries per mood label, in label order; labels with no entries are kept.
pub fn mood_distribution(entries: &[JournalEntry]) -> Vec<MoodCount> {
    MoodLabel::ALL
        .into_iter()
        .map(|mood| MoodCount {
            mood,
            entries: entries.iter().filter(|e| e.mood == mood).count(),
        })
        .collect()
}

/// Equal-width bins over [-1, 1]; the last bin is closed on the right.
pub fn polarity_histogram(entries: &[JournalEntry], bins: usize) -> Vec<HistogramBin> {
    let bins = bins.max(1);
    let width = 2.0 / bins as f64;

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: -1.0 + i as f64 * width,
            upper: -1.0 + (i + 1) as f64 * width,
            entries: 0,
        })
        .collect();

    for e in entries {
        let p = e.polarity.clamp(-1.0, 1.0);
        let idx = (((p + 1.0) / width) as usize).min(bins - 1);
        out[idx].entries += 1;
    }

    out
}

/// Mean polarity per calendar month, oldest first.
pub fn monthly_averages(entries: &[JournalEntry]) -> Vec<MonthlyAverage> {
    let mut months: BTreeMap<String, (f64, usize)> = BTreeMap::new();

    for e in entries {
        let slot = months
            .entry(e.date.format("%Y-%m").to_string())
            .or_insert((0.0, 0));
        slot.0 += e.polarity;
        slot.1 += 1;
    }

    months
        .into_iter()
        .map(|(month, (sum, n))| MonthlyAverage {
            month,
            average_polarity: sum / n as f64,
            entries: n,
        })
        .collect()
}

/// Keyword frequency across entries, highest first; ties keep the order
/// in which keywords first appear.
pub fn common_keywords(entries: &[JournalEntry], top_n: usize) -> Vec<KeywordCount> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut next = 0usize;

    for kw in entries.iter().flat_map(|e| e.keywords.iter()) {
        let slot = counts.entry(kw.as_str()).or_insert_with(|| {
            next += 1;
            (0, next)
        });
        slot.0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> =
        counts.into_iter().map(|(k, (c, first))| (k, c, first)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(top_n)
        .map(|(keyword, count, _)| KeywordCount {
            keyword: keyword.to_string(),
            count,
        })
        .collect()
}

pub fn build_report(
    entries: &[JournalEntry],
    weekday_averages: Vec<WeekdayMood>,
    top_n: usize,
    bins: usize,
) -> StatsReport {
    StatsReport {
        summary: summary(entries),
        mood_distribution: mood_distribution(entries),
        polarity_histogram: polarity_histogram(entries, bins),
        weekday_averages,
        monthly_averages: monthly_averages(entries),
        common_keywords: common_keywords(entries, top_n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(date: &str, polarity: f64, mood: MoodLabel, keywords: &[&str]) -> JournalEntry {
        JournalEntry {
            id: None,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            title: String::new(),
            content: String::new(),
            polarity,
            subjectivity: 0.5,
            mood,
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn empty_set_gives_zeroes() {
        let s = summary(&[]);
        assert_eq!(s.total_entries, 0);
        assert_eq!(s.average_polarity, 0.0);
        assert_eq!(s.most_common_mood, None);
        assert_eq!(s.span_days, 0);
        assert!(monthly_averages(&[]).is_empty());
        assert!(common_keywords(&[], 10).is_empty());
        assert!(mood_distribution(&[]).iter().all(|c| c.entries == 0));
    }

    #[test]
    fn summary_values() {
        let entries = vec![
            entry("2024-01-01", 0.6, MoodLabel::VeryPositive, &[]),
            entry("2024-01-11", 0.2, MoodLabel::Positive, &[]),
            entry("2024-01-05", 0.2, MoodLabel::Positive, &[]),
        ];
        let s = summary(&entries);
        assert_eq!(s.total_entries, 3);
        assert!((s.average_polarity - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(s.most_common_mood, Some(MoodLabel::Positive));
        assert_eq!(s.span_days, 10);
    }

    #[test]
    fn mode_ties_go_to_lower_label() {
        let entries = vec![
            entry("2024-01-01", 0.6, MoodLabel::VeryPositive, &[]),
            entry("2024-01-02", -0.6, MoodLabel::VeryNegative, &[]),
        ];
        assert_eq!(summary(&entries).most_common_mood, Some(MoodLabel::VeryNegative));
    }

    #[test]
    fn histogram_edges() {
        let entries = vec![
            entry("2024-01-01", -1.0, MoodLabel::VeryNegative, &[]),
            entry("2024-01-01", 0.0, MoodLabel::Neutral, &[]),
            entry("2024-01-01", 1.0, MoodLabel::VeryPositive, &[]),
        ];
        let h = polarity_histogram(&entries, 4);
        assert_eq!(h.len(), 4);
        assert_eq!(h[0].entries, 1);
        assert_eq!(h[2].entries, 1);
        assert_eq!(h[3].entries, 1);
        assert_eq!(h.iter().map(|b| b.entries).sum::<usize>(), 3);
        assert_eq!(h[0].lower, -1.0);
        assert_eq!(h[3].upper, 1.0);
    }

    #[test]
    fn monthly_buckets_are_sorted() {
        let entries = vec![
            entry("2024-02-10", 0.4, MoodLabel::Positive, &[]),
            entry("2024-01-10", 0.2, MoodLabel::Positive, &[]),
            entry("2024-01-20", 0.0, MoodLabel::Neutral, &[]),
        ];
        let m = monthly_averages(&entries);
        assert_eq!(m[0].month, "2024-01");
        assert!((m[0].average_polarity - 0.1).abs() < 1e-9);
        assert_eq!(m[0].entries, 2);
        assert_eq!(m[1].month, "2024-02");
    }

    #[test]
    fn keyword_ranking() {
        let entries = vec![
            entry("2024-01-01", 0.0, MoodLabel::Neutral, &["work", "coffee"]),
            entry("2024-01-02", 0.0, MoodLabel::Neutral, &["family", "work"]),
            entry("2024-01-03", 0.0, MoodLabel::Neutral, &["family"]),
        ];
        let top = common_keywords(&entries, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].keyword, "work");
        assert_eq!(top[0].count, 2);
        assert_eq!(top[1].keyword, "family");

        let all = common_keywords(&entries, 10);
        assert_eq!(all[2].keyword, "coffee");
    }
}
