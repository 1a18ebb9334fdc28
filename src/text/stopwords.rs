//! Stopword sets
//!
//! A stopword set is a closed, immutable collection of lowercase words.
//! Membership is an exact match on the whole token, never a substring test.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// Built-in stopwords for tag extraction
pub const TAG_STOPWORDS: &[&str] = &[
    "the", "is", "and", "of", "a", "to", "in", "it", "that", "on",
];

/// Built-in stopwords for summarization: English function words, single
/// letters and digits
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "all", "also", "am", "an", "and", "another",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "came", "can", "cannot", "come", "could", "did",
    "do", "does", "doing", "during", "each", "few", "for", "from", "further", "get",
    "got", "has", "had", "he", "have", "her", "here", "him", "himself", "his", "how",
    "if", "in", "into", "is", "it", "its", "itself", "like", "make", "many", "me",
    "might", "more", "most", "much", "must", "my", "myself", "never", "now", "of", "on",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "said",
    "same", "see", "should", "since", "so", "some", "still", "such", "take", "than",
    "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "way", "we", "well", "were", "what", "where", "when", "which", "while",
    "who", "whom", "with", "would", "why", "you", "your", "yours", "yourself",
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p",
    "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "$", "1", "2", "3", "4", "5",
    "6", "7", "8", "9", "0", "_",
];

lazy_static! {
    static ref ENGLISH_SET: HashSet<String> =
        ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect();
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Create an empty set (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a set from a custom list; entries are lowercased and trimmed
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The small built-in list used by the tag extractor
    pub fn tag_default() -> Self {
        Self::from_words(TAG_STOPWORDS)
    }

    /// Broad English list used by the summarizer
    pub fn english() -> Self {
        Self {
            words: ENGLISH_SET.clone(),
        }
    }

    /// Return a new set with `extra` words added
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        self
    }

    /// Exact-match membership test. Callers pass already-lowercased tokens.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
