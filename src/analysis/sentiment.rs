//! Lexicon-based sentiment scoring.
//!
//! Polarity is the mean of the adjusted polarities of every recognised
//! sentiment word. An intensifier right before a word scales it, a negator
//! up to [`NEGATION_WINDOW`] tokens before it flips and halves it.

use crate::analysis::lexicon;
use crate::analysis::normalize::tokenize;
use serde::Serialize;

/// Longer input is cut at this many characters before scoring.
pub const MAX_SCORED_CHARS: usize = 100_000;

/// How many tokens a negator reaches forward.
pub const NEGATION_WINDOW: usize = 3;

pub const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    /// [-1.0, 1.0]
    pub polarity: f64,
    /// [0.0, 1.0]
    pub subjectivity: f64,
}

impl Sentiment {
    pub const NEUTRAL: Sentiment = Sentiment {
        polarity: 0.0,
        subjectivity: 0.0,
    };
}

/// Polarity of `text` in [-1.0, 1.0].
pub fn score(text: &str) -> f64 {
    analyze(text).polarity
}

pub fn analyze(text: &str) -> Sentiment {
    let text = truncate_chars(text, MAX_SCORED_CHARS);
    if text.trim().is_empty() {
        return Sentiment::NEUTRAL;
    }

    let tokens = tokenize(text);

    let mut polarities: Vec<f64> = Vec::new();
    let mut subjectivities: Vec<f64> = Vec::new();

    let mut negation_at: Option<usize> = None;
    let mut intensifier: Option<(usize, f64)> = None;

    for (i, token) in tokens.iter().enumerate() {
        if lexicon::is_negator(token) {
            negation_at = Some(i);
            continue;
        }

        if let Some(factor) = lexicon::intensity(token) {
            intensifier = Some((i, factor));
            continue;
        }

        let Some(ws) = lexicon::word_score(token) else {
            continue;
        };

        let mut polarity = ws.polarity;
        let mut subjectivity = ws.subjectivity;

        if let Some((at, factor)) = intensifier.take()
            && at + 1 == i
        {
            polarity *= factor;
            subjectivity *= factor;
        }

        if let Some(at) = negation_at
            && i - at <= NEGATION_WINDOW
        {
            polarity *= NEGATION_FACTOR;
            negation_at = None;
        }

        polarities.push(polarity.clamp(-1.0, 1.0));
        subjectivities.push(subjectivity.clamp(0.0, 1.0));
    }

    if polarities.is_empty() {
        return Sentiment::NEUTRAL;
    }

    Sentiment {
        polarity: mean(&polarities).clamp(-1.0, 1.0),
        subjectivity: mean(&subjectivities).clamp(0.0, 1.0),
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_neutral() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   \n\t"), 0.0);
        assert_eq!(analyze(""), Sentiment::NEUTRAL);
    }

    #[test]
    fn unknown_words_are_ignored() {
        assert_eq!(score("the table is next to the window"), 0.0);
        assert_eq!(score("good table"), score("good"));
    }

    #[test]
    fn positive_and_negative_text() {
        assert!(score("Today was amazing and wonderful") > 0.5);
        assert!(score("I feel sad and exhausted, a terrible day") < -0.5);
    }

    #[test]
    fn negation_flips_sign() {
        assert!(score("good") > 0.0);
        assert!(score("not good") < 0.0);
        assert!(score("I didn't feel happy") < 0.0);
        assert!(score("not bad at all") > 0.0);
    }

    #[test]
    fn negation_is_consumed_once() {
        // only "happy" is negated, "great" keeps its sign
        let s = score("not happy but great");
        assert!((s - (-0.4 + 0.8) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn negation_window_is_bounded() {
        assert!(score("not that I would ever say it was good") > 0.0);
    }

    #[test]
    fn intensifier_scales_magnitude() {
        assert!(score("very good") > score("good"));
        assert!(score("slightly good") < score("good"));
        assert!(score("very bad") < score("bad"));
    }

    #[test]
    fn intensifier_must_be_adjacent() {
        assert_eq!(score("very much a good day"), score("good"));
    }

    #[test]
    fn scores_stay_in_range() {
        let samples = [
            "extremely wonderful absolutely perfect",
            "extremely horrible absolutely terrible",
            "not not not",
            "very very very",
            "<p>**Great** [day](http://x)</p>",
        ];
        for s in samples {
            let a = analyze(s);
            assert!((-1.0..=1.0).contains(&a.polarity), "{s}");
            assert!((0.0..=1.0).contains(&a.subjectivity), "{s}");
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let text = "A long, tiring day but I'm grateful for my friends.";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn huge_input_is_truncated_not_rejected() {
        let text = "good ".repeat(MAX_SCORED_CHARS);
        assert!((score(&text) - 0.7).abs() < 1e-9);
    }
}
