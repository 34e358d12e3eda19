//! Frequency-ranked keyword extraction (word cloud input).

use crate::analysis::normalize::tokenize;
use std::collections::{HashMap, HashSet};

pub const DEFAULT_MIN_LENGTH: usize = 4;
pub const DEFAULT_MAX_WORDS: usize = 50;

#[rustfmt::skip]
pub const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "doing", "down", "during", "each",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "if", "in", "into", "is", "it", "its", "itself",
    "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should", "so",
    "some", "still", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
    "you", "your", "yours", "yourself", "yourselves", "like", "im", "ive", "also", "get", "got",
];

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<String>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl KeywordExtractor {
    /// Built-in stop words plus operator-supplied ones (case-insensitive).
    pub fn with_extra_stop_words<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ex = Self::default();
        ex.stop_words
            .extend(extra.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        ex
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// At most `max_words` tokens, by descending frequency; ties keep
    /// first-occurrence order.
    pub fn extract(&self, text: &str, min_length: usize, max_words: usize) -> Vec<String> {
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

        for (pos, token) in tokenize(text).into_iter().enumerate() {
            let word: String = token.chars().filter(|c| *c != '\'').collect();

            if word.chars().count() < min_length || self.is_stop_word(&word) {
                continue;
            }

            counts.entry(word).or_insert((0, pos)).0 += 1;
        }

        let mut ranked: Vec<(String, usize, usize)> = counts
            .into_iter()
            .map(|(w, (count, first))| (w, count, first))
            .collect();

        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        ranked
            .into_iter()
            .take(max_words)
            .map(|(w, _, _)| w)
            .collect()
    }
}

/// Extract with the built-in stop-word list.
pub fn extract(text: &str, min_length: usize, max_words: usize) -> Vec<String> {
    KeywordExtractor::default().extract(text, min_length, max_words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_frequency() {
        assert_eq!(
            extract("I am happy happy happy today today", 4, 5),
            vec!["happy", "today"]
        );
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        assert_eq!(
            extract("walking garden coffee garden walking coffee", 4, 10),
            vec!["walking", "garden", "coffee"]
        );
    }

    #[test]
    fn respects_max_words() {
        let out = extract("alpha bravo charlie delta echo foxtrot", 4, 3);
        assert_eq!(out, vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn drops_stop_words_and_short_tokens() {
        let out = extract("They would have been there with their dog", 3, 10);
        assert_eq!(out, vec!["dog"]);
    }

    #[test]
    fn apostrophes_are_removed_before_filtering() {
        // "i've" → "ive" is a stop word, "mom's" → "moms"
        assert_eq!(extract("I've visited mom's house", 4, 10), vec!["visited", "moms", "house"]);
    }

    #[test]
    fn empty_text_gives_nothing() {
        assert!(extract("", 4, 5).is_empty());
        assert!(extract("an the of", 1, 5).is_empty());
    }

    #[test]
    fn extra_stop_words_apply() {
        let ex = KeywordExtractor::with_extra_stop_words(["Today"]);
        assert_eq!(ex.extract("happy today", 4, 5), vec!["happy"]);
    }
}
