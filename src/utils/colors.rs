/// ANSI color helper utilities for terminal output.
use crate::models::MoodLabel;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Mood color, from red (very negative) to blue (very positive).
pub fn color_for_mood(mood: MoodLabel) -> &'static str {
    match mood {
        MoodLabel::VeryNegative => RED,
        MoodLabel::Negative => YELLOW,
        MoodLabel::Neutral => GREY,
        MoodLabel::Positive => GREEN,
        MoodLabel::VeryPositive => BLUE,
    }
}

/// Polarity color:
/// \>0.1 → green
/// \<-0.1 → red
/// otherwise → reset
pub fn color_for_polarity(value: f64) -> &'static str {
    if value > 0.1 {
        GREEN
    } else if value < -0.1 {
        RED
    } else {
        RESET
    }
}

/// Grey out empty values ("", "--").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
