//! Keyword tag extraction by stopword-filtered frequency counting
//!
//! Tokens are counted across the whole text and ranked by descending count.
//! Equal counts keep the order in which the tokens first appeared, so the
//! result is fully determined by the input.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::text::{contain_panic, StopwordSet, TokenizeError, Tokenizer, WordRunTokenizer};

/// Tag extractor with an injected stopword set and tokenizer
pub struct TagExtractor {
    stopwords: StopwordSet,
    tokenizer: Box<dyn Tokenizer>,
}

/// Ranked keyword with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub token: String,
    pub count: usize,
}

impl TagExtractor {
    /// Number of tags returned when the caller does not ask for a count
    pub const DEFAULT_TOP_N: usize = 3;

    /// Extractor with the built-in tag stopwords
    pub fn new() -> Self {
        Self::with_stopwords(StopwordSet::tag_default())
    }

    pub fn with_stopwords(stopwords: StopwordSet) -> Self {
        Self {
            stopwords,
            tokenizer: Box::new(WordRunTokenizer),
        }
    }

    /// Replace the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Extract up to `top_n` tags, most frequent first.
    ///
    /// Absent, empty or word-less text yields an empty list. Never fails: a
    /// tokenizer error or panic is logged and degrades to an empty list.
    pub fn extract_tags(&self, text: Option<&str>, top_n: usize) -> Vec<String> {
        let result = contain_panic(|| self.rank_keywords(text, top_n));

        match result {
            Ok(Ok(keywords)) => keywords.into_iter().map(|k| k.token).collect(),
            Ok(Err(e)) => {
                warn!(error = %e, "tag extraction failed, returning no tags");
                Vec::new()
            }
            Err(panic) => {
                warn!(panic = %panic, "tag extraction panicked, returning no tags");
                Vec::new()
            }
        }
    }

    /// `extract_tags` with `DEFAULT_TOP_N`
    pub fn extract_tags_default(&self, text: Option<&str>) -> Vec<String> {
        self.extract_tags(text, Self::DEFAULT_TOP_N)
    }

    /// Rank keywords with their counts, keeping the first `top_n`
    pub fn rank_keywords(
        &self,
        text: Option<&str>,
        top_n: usize,
    ) -> Result<Vec<Keyword>, TokenizeError> {
        let freq = self.keyword_frequencies(text)?;

        let mut keywords: Vec<Keyword> = freq
            .into_iter()
            .map(|(token, count)| Keyword { token, count })
            .collect();

        // Stable: equal counts stay in first-occurrence order
        keywords.sort_by(|a, b| b.count.cmp(&a.count));
        keywords.truncate(top_n);

        debug!(
            tokenizer = self.tokenizer.name(),
            top_n,
            returned = keywords.len(),
            "ranked keywords"
        );

        Ok(keywords)
    }

    /// Count surviving tokens in first-occurrence order
    pub fn keyword_frequencies(
        &self,
        text: Option<&str>,
    ) -> Result<IndexMap<String, usize>, TokenizeError> {
        let mut freq: IndexMap<String, usize> = IndexMap::new();

        let Some(text) = text else {
            return Ok(freq);
        };

        let lowered = text.to_lowercase();
        for token in self.tokenizer.tokenize(&lowered)? {
            if self.stopwords.contains(&token) {
                continue;
            }
            *freq.entry(token).or_insert(0) += 1;
        }

        Ok(freq)
    }
}

impl Default for TagExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    struct FailingTokenizer;

    impl Tokenizer for FailingTokenizer {
        fn tokenize(&self, _text: &str) -> Result<Vec<String>, TokenizeError> {
            Err(TokenizeError::new("failing", "always fails"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct PanickingTokenizer;

    impl Tokenizer for PanickingTokenizer {
        fn tokenize(&self, _text: &str) -> Result<Vec<String>, TokenizeError> {
            panic!("tokenizer exploded")
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_frequency_ranking() {
        let extractor = TagExtractor::new();
        let tags = extractor.extract_tags(Some("cat dog cat bird cat dog"), 2);
        assert_eq!(tags, vec!["cat", "dog"]);
    }

    #[test]
    fn test_empty_and_absent_input() {
        let extractor = TagExtractor::new();
        assert!(extractor.extract_tags(Some(""), 3).is_empty());
        assert!(extractor.extract_tags(None, 3).is_empty());
        assert!(extractor.extract_tags(Some("   ?!... "), 3).is_empty());
    }

    #[test]
    fn test_only_stopwords() {
        let extractor = TagExtractor::new();
        assert!(extractor
            .extract_tags(Some("The is and of a to in it that on"), 3)
            .is_empty());
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let extractor = TagExtractor::new();
        let tags = extractor.extract_tags(Some("zebra apple zebra apple mango"), 2);
        assert_eq!(tags, vec!["zebra", "apple"]);

        let tags = extractor.extract_tags(Some("mango zebra apple"), 3);
        assert_eq!(tags, vec!["mango", "zebra", "apple"]);
    }

    #[test]
    fn test_case_folding() {
        let extractor = TagExtractor::new();
        let tags = extractor.extract_tags(Some("Rust rust RUST python"), 3);
        assert_eq!(tags, vec!["rust", "python"]);
    }

    #[test]
    fn test_stopwords_exact_match() {
        let extractor = TagExtractor::new();
        let tags = extractor.extract_tags(Some("The theme is the theme on it"), 3);
        assert_eq!(tags, vec!["theme"]);
    }

    #[test]
    fn test_word_characters_include_digits_and_underscore() {
        let extractor = TagExtractor::new();
        let tags = extractor.extract_tags(Some("snake_case, 42; snake_case!"), 3);
        assert_eq!(tags, vec!["snake_case", "42"]);
    }

    #[test]
    fn test_non_ascii_letters_split_words() {
        let extractor = TagExtractor::new();
        let tags = extractor.extract_tags(Some("Café naïve café"), 3);
        assert_eq!(tags, vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_top_n_bounds() {
        let extractor = TagExtractor::new();
        assert!(extractor.extract_tags(Some("alpha beta"), 0).is_empty());
        assert_eq!(
            extractor.extract_tags(Some("alpha beta"), 10),
            vec!["alpha", "beta"]
        );
    }

    #[test]
    fn test_default_top_n() {
        let extractor = TagExtractor::new();
        let tags = extractor.extract_tags_default(Some("one two three four five"));
        assert_eq!(tags, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_custom_stopwords() {
        let extractor = TagExtractor::with_stopwords(StopwordSet::from_words(["cat"]));
        let tags = extractor.extract_tags(Some("the cat and the dog"), 2);
        assert_eq!(tags, vec!["the", "and"]);
    }

    #[test]
    fn test_rank_keywords_counts() {
        let extractor = TagExtractor::new();
        let keywords = extractor
            .rank_keywords(Some("cat dog cat bird cat dog"), 3)
            .unwrap();
        assert_eq!(
            keywords,
            vec![
                Keyword {
                    token: "cat".to_string(),
                    count: 3
                },
                Keyword {
                    token: "dog".to_string(),
                    count: 2
                },
                Keyword {
                    token: "bird".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_tokenizer_error_degrades_to_empty() {
        let extractor = TagExtractor::new().with_tokenizer(FailingTokenizer);
        assert!(extractor.extract_tags(Some("cat dog cat"), 3).is_empty());
        assert!(extractor.rank_keywords(Some("cat"), 3).is_err());
    }

    #[test]
    fn test_tokenizer_panic_degrades_to_empty() {
        let extractor = TagExtractor::new().with_tokenizer(PanickingTokenizer);
        assert!(extractor.extract_tags(Some("cat dog cat"), 3).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_tags_bounded_unique_and_filtered(
            text in "[a-zA-Z ,.!?]{0,200}",
            top_n in 0usize..8,
        ) {
            let extractor = TagExtractor::new();
            let tags = extractor.extract_tags(Some(&text), top_n);

            prop_assert!(tags.len() <= top_n);

            let unique: HashSet<&String> = tags.iter().collect();
            prop_assert_eq!(unique.len(), tags.len());

            for tag in &tags {
                prop_assert!(!extractor.stopwords().contains(tag));
                prop_assert_eq!(tag.clone(), tag.to_lowercase());
            }
        }

        #[test]
        fn prop_extraction_is_idempotent(text in "\\PC{0,120}", top_n in 1usize..6) {
            let extractor = TagExtractor::new();
            let first = extractor.extract_tags(Some(&text), top_n);
            let second = extractor.extract_tags(Some(&text), top_n);
            prop_assert_eq!(first, second);
        }
    }
}
