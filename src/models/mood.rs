use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered mood buckets, from the most unfavorable tone to the most favorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoodLabel {
    #[serde(rename = "Very Negative")]
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    #[serde(rename = "Very Positive")]
    VeryPositive,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 5] = [
        MoodLabel::VeryNegative,
        MoodLabel::Negative,
        MoodLabel::Neutral,
        MoodLabel::Positive,
        MoodLabel::VeryPositive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::VeryNegative => "Very Negative",
            MoodLabel::Negative => "Negative",
            MoodLabel::Neutral => "Neutral",
            MoodLabel::Positive => "Positive",
            MoodLabel::VeryPositive => "Very Positive",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        MoodLabel::ALL.into_iter().find(|m| m.as_str() == s)
    }

    /// Lenient parser for CLI input: `very-positive`, `Very Positive`,
    /// `very_positive` and `VERYPOSITIVE` are all accepted.
    pub fn from_cli(s: &str) -> AppResult<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        MoodLabel::ALL
            .into_iter()
            .find(|m| m.as_str().replace(' ', "").to_ascii_lowercase() == wanted)
            .ok_or_else(|| AppError::InvalidMood(s.to_string()))
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive upper bounds of the first four mood buckets.
///
/// Anything above `positive` is `VeryPositive`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodThresholds {
    #[serde(default = "default_very_negative")]
    pub very_negative: f64,
    #[serde(default = "default_negative")]
    pub negative: f64,
    #[serde(default = "default_neutral")]
    pub neutral: f64,
    #[serde(default = "default_positive")]
    pub positive: f64,
}

fn default_very_negative() -> f64 {
    -0.5
}
fn default_negative() -> f64 {
    -0.1
}
fn default_neutral() -> f64 {
    0.1
}
fn default_positive() -> f64 {
    0.5
}

impl Default for MoodThresholds {
    fn default() -> Self {
        Self {
            very_negative: default_very_negative(),
            negative: default_negative(),
            neutral: default_neutral(),
            positive: default_positive(),
        }
    }
}

impl MoodThresholds {
    /// Map a polarity onto its mood bucket.
    pub fn categorize(&self, polarity: f64) -> MoodLabel {
        if polarity.is_nan() {
            return MoodLabel::Neutral;
        }

        if polarity <= self.very_negative {
            MoodLabel::VeryNegative
        } else if polarity <= self.negative {
            MoodLabel::Negative
        } else if polarity <= self.neutral {
            MoodLabel::Neutral
        } else if polarity <= self.positive {
            MoodLabel::Positive
        } else {
            MoodLabel::VeryPositive
        }
    }

    /// Bounds must be finite, strictly ascending and inside [-1, 1].
    pub fn validate(&self) -> AppResult<()> {
        let bounds = [self.very_negative, self.negative, self.neutral, self.positive];

        if bounds.iter().any(|b| !b.is_finite() || *b < -1.0 || *b > 1.0) {
            return Err(AppError::Config(format!(
                "mood thresholds must lie within [-1, 1]: {:?}",
                bounds
            )));
        }

        if bounds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(AppError::Config(format!(
                "mood thresholds must be strictly ascending: {:?}",
                bounds
            )));
        }

        Ok(())
    }
}

/// Categorize with the default threshold table.
pub fn categorize(polarity: f64) -> MoodLabel {
    MoodThresholds::default().categorize(polarity)
}
