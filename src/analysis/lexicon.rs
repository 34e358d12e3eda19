//! Built-in English sentiment lexicon.
//!
//! Each word carries a polarity in [-1, 1] and a subjectivity in [0, 1].

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

#[rustfmt::skip]
const WORDS: &[(&str, f64, f64)] = &[
    // positive
    ("good", 0.7, 0.6), ("great", 0.8, 0.75), ("amazing", 0.6, 0.9),
    ("wonderful", 1.0, 1.0), ("awesome", 1.0, 1.0), ("excellent", 1.0, 1.0),
    ("fantastic", 0.4, 0.9), ("perfect", 1.0, 1.0), ("best", 1.0, 0.3),
    ("better", 0.5, 0.5), ("nice", 0.6, 1.0), ("lovely", 0.5, 0.75),
    ("beautiful", 0.85, 1.0), ("happy", 0.8, 1.0), ("happier", 0.8, 1.0),
    ("glad", 0.5, 1.0), ("joy", 0.8, 0.9), ("joyful", 0.8, 0.9),
    ("love", 0.5, 0.6), ("loved", 0.7, 0.8), ("loving", 0.6, 0.6),
    ("enjoy", 0.4, 0.5), ("enjoyed", 0.4, 0.5), ("fun", 0.3, 0.2),
    ("grateful", 0.6, 0.75), ("thankful", 0.5, 0.7), ("blessed", 0.5, 0.6),
    ("excited", 0.4, 0.8), ("exciting", 0.3, 0.8), ("calm", 0.3, 0.75),
    ("peaceful", 0.25, 0.5), ("relaxed", 0.3, 0.6), ("relaxing", 0.3, 0.6),
    ("proud", 0.8, 1.0), ("productive", 0.4, 0.6), ("successful", 0.75, 0.95),
    ("success", 0.3, 0.5), ("hopeful", 0.4, 0.7), ("optimistic", 0.4, 0.7),
    ("confident", 0.5, 0.8), ("energetic", 0.4, 0.7), ("inspired", 0.5, 0.8),
    ("inspiring", 0.5, 0.8), ("motivated", 0.4, 0.7), ("satisfied", 0.5, 0.7),
    ("content", 0.2, 0.5), ("cheerful", 0.6, 0.8), ("delighted", 0.7, 0.9),
    ("delightful", 0.7, 0.9), ("pleasant", 0.73, 0.97), ("fine", 0.42, 0.5),
    ("okay", 0.5, 0.5), ("ok", 0.5, 0.5), ("positive", 0.23, 0.55),
    ("kind", 0.6, 0.9), ("sweet", 0.35, 0.65), ("warm", 0.6, 0.6),
    ("fresh", 0.3, 0.5), ("healthy", 0.5, 0.5), ("strong", 0.43, 0.73),
    ("brilliant", 0.9, 1.0), ("incredible", 0.9, 0.9), ("superb", 1.0, 1.0),
    ("marvelous", 1.0, 1.0), ("magnificent", 1.0, 1.0), ("glorious", 0.8, 0.9),
    ("fabulous", 0.4, 0.9), ("terrific", 1.0, 1.0), ("remarkable", 0.75, 0.75),
    ("interesting", 0.5, 0.5), ("favorite", 0.5, 1.0), ("favourite", 0.5, 1.0),
    ("comfortable", 0.4, 0.7), ("safe", 0.5, 0.5), ("free", 0.4, 0.8),
    ("accomplished", 0.6, 0.7), ("rewarding", 0.6, 0.7), ("meaningful", 0.5, 0.7),
    ("refreshed", 0.4, 0.6), ("rested", 0.3, 0.5), ("smile", 0.3, 0.4),
    ("laugh", 0.3, 0.4), ("laughed", 0.3, 0.4), ("win", 0.8, 0.4),
    ("progress", 0.3, 0.4), ("improved", 0.4, 0.5), ("easy", 0.43, 0.83),
    ("helpful", 0.4, 0.6), ("supportive", 0.5, 0.6), ("well", 0.3, 0.3),
    // negative
    ("bad", -0.7, 0.67), ("worse", -0.4, 0.6), ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0), ("horrible", -1.0, 1.0), ("awful", -1.0, 1.0),
    ("sad", -0.5, 1.0), ("unhappy", -0.6, 0.9), ("depressed", -0.8, 0.9),
    ("depressing", -0.8, 0.9), ("miserable", -1.0, 1.0), ("lonely", -0.4, 0.8),
    ("angry", -0.5, 1.0), ("mad", -0.625, 1.0), ("upset", -0.6, 0.8),
    ("frustrated", -0.7, 0.8), ("frustrating", -0.7, 0.8), ("annoyed", -0.5, 0.7),
    ("annoying", -0.8, 0.9), ("anxious", -0.5, 0.8), ("worried", -0.5, 0.8),
    ("nervous", -0.4, 0.8), ("stressed", -0.6, 0.8), ("stressful", -0.6, 0.8),
    ("tired", -0.4, 0.7), ("exhausted", -0.6, 0.8), ("sick", -0.71, 0.86),
    ("ill", -0.5, 0.8), ("hurt", -0.5, 0.6), ("pain", -0.5, 0.6),
    ("painful", -0.7, 0.9), ("afraid", -0.6, 0.9), ("scared", -0.6, 0.9),
    ("fear", -0.5, 0.8), ("hate", -0.8, 0.9), ("hated", -0.9, 0.7),
    ("disappointed", -0.75, 0.75), ("disappointing", -0.6, 0.7), ("boring", -1.0, 1.0),
    ("bored", -0.5, 0.8), ("difficult", -0.5, 1.0), ("hard", -0.29, 0.54),
    ("tough", -0.39, 0.67), ("wrong", -0.5, 0.9), ("poor", -0.4, 0.6),
    ("ugly", -0.7, 1.0), ("stupid", -0.8, 1.0), ("failed", -0.5, 0.3),
    ("failure", -0.32, 0.3), ("fail", -0.5, 0.3), ("lost", -0.4, 0.4),
    ("lose", -0.4, 0.4), ("cry", -0.4, 0.6), ("cried", -0.4, 0.6),
    ("crying", -0.4, 0.6), ("overwhelmed", -0.6, 0.8), ("overwhelming", -0.5, 0.8),
    ("guilty", -0.5, 0.8), ("ashamed", -0.6, 0.9), ("jealous", -0.5, 0.8),
    ("bitter", -0.1, 0.4), ("broken", -0.4, 0.4), ("weak", -0.375, 0.625),
    ("negative", -0.3, 0.4), ("horrid", -1.0, 1.0), ("dreadful", -0.9, 1.0),
    ("nasty", -1.0, 1.0), ("rough", -0.1, 0.4), ("sore", -0.3, 0.6),
    ("grief", -0.6, 0.8), ("gloomy", -0.6, 0.8), ("hopeless", -0.8, 1.0),
    ("helpless", -0.6, 0.9), ("empty", -0.1, 0.5), ("worthless", -0.8, 0.9),
    ("irritated", -0.5, 0.7), ("furious", -0.9, 1.0), ("panic", -0.6, 0.8),
    ("lazy", -0.25, 1.0), ("sleepless", -0.4, 0.7), ("unfair", -0.6, 0.9),
    ("regret", -0.5, 0.7), ("sorry", -0.5, 1.0), ("problem", -0.2, 0.3),
    ("problems", -0.2, 0.3), ("mess", -0.4, 0.5), ("disaster", -0.8, 0.8),
];

/// Multipliers applied to the sentiment word that follows them directly.
#[rustfmt::skip]
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3), ("really", 1.3), ("so", 1.3), ("truly", 1.3),
    ("extremely", 1.5), ("incredibly", 1.5), ("super", 1.4), ("totally", 1.3),
    ("absolutely", 1.5), ("completely", 1.4), ("too", 1.2), ("quite", 1.1),
    ("pretty", 1.1), ("rather", 1.1), ("especially", 1.2), ("deeply", 1.4),
    ("slightly", 0.5), ("somewhat", 0.7), ("barely", 0.5), ("hardly", 0.5),
    ("little", 0.6), ("kinda", 0.7), ("fairly", 0.9),
];

#[rustfmt::skip]
const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "none", "neither", "nor", "without",
    "cannot", "can't", "don't", "doesn't", "didn't", "isn't", "wasn't", "aren't",
    "weren't", "won't", "wouldn't", "couldn't", "shouldn't", "hasn't", "haven't",
    "hadn't", "ain't", "dont", "didnt", "isnt", "wasnt", "cant", "wont",
];

static WORD_MAP: LazyLock<HashMap<&'static str, WordScore>> = LazyLock::new(|| {
    WORDS
        .iter()
        .map(|&(w, polarity, subjectivity)| {
            (
                w,
                WordScore {
                    polarity,
                    subjectivity,
                },
            )
        })
        .collect()
});

static INTENSIFIER_MAP: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| INTENSIFIERS.iter().copied().collect());

static NEGATOR_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATORS.iter().copied().collect());

pub fn word_score(token: &str) -> Option<WordScore> {
    WORD_MAP.get(token).copied()
}

pub fn intensity(token: &str) -> Option<f64> {
    INTENSIFIER_MAP.get(token).copied()
}

pub fn is_negator(token: &str) -> bool {
    NEGATOR_SET.contains(token) || token.ends_with("n't")
}
