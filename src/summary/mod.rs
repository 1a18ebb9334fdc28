//! Extractive summarization of note content

use lazy_static::lazy_static;

pub mod summarizer;

pub use summarizer::{
    ScoredSentence, Summarizer, SummaryError, NO_CONTENT_MESSAGE, SUMMARY_FAILED_MESSAGE,
};

lazy_static! {
    static ref DEFAULT_SUMMARIZER: Summarizer = Summarizer::new();
}

/// Summarize with the built-in English stopword list
pub fn summarize(text: Option<&str>, sentence_count: usize) -> String {
    DEFAULT_SUMMARIZER.summarize(text, sentence_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_function_uses_default_list() {
        let text = "The cat sat. The cat ran fast. Dogs bark loudly at night.";
        assert_eq!(summarize(Some(text), 1), "The cat ran fast.");
        assert_eq!(summarize(None, 1), NO_CONTENT_MESSAGE);
    }
}
