//! Entry analysis: sentiment, mood bucket and keywords.

pub mod keywords;
pub mod lexicon;
pub mod normalize;
pub mod sentiment;

use crate::config::Config;
use crate::models::{JournalEntry, MoodThresholds, RawEntry};
use keywords::KeywordExtractor;

/// Everything needed to turn a raw record into a [`JournalEntry`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    pub thresholds: MoodThresholds,
    pub extractor: KeywordExtractor,
    pub min_length: usize,
    pub max_words: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            thresholds: MoodThresholds::default(),
            extractor: KeywordExtractor::default(),
            min_length: keywords::DEFAULT_MIN_LENGTH,
            max_words: keywords::DEFAULT_MAX_WORDS,
        }
    }
}

impl Analyzer {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            thresholds: cfg.thresholds,
            extractor: KeywordExtractor::with_extra_stop_words(&cfg.extra_stop_words),
            min_length: cfg.keyword_min_length,
            max_words: cfg.keyword_max_words,
        }
    }

    pub fn enrich(&self, raw: RawEntry) -> JournalEntry {
        let s = sentiment::analyze(&raw.content);
        let keywords = self
            .extractor
            .extract(&raw.content, self.min_length, self.max_words);

        JournalEntry {
            id: None,
            date: raw.date,
            title: raw.title,
            mood: self.thresholds.categorize(s.polarity),
            polarity: s.polarity,
            subjectivity: s.subjectivity,
            keywords,
            content: raw.content,
        }
    }

    pub fn enrich_all(&self, raws: Vec<RawEntry>) -> Vec<JournalEntry> {
        raws.into_iter().map(|r| self.enrich(r)).collect()
    }
}
