//! Word tokenizers
//!
//! Tokenizers only split text into word tokens. Case folding is done by the
//! caller before tokenizing so every tokenizer sees the same normalized input.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    // Maximal runs of ASCII word characters
    static ref WORD_RUN_RE: Regex = Regex::new(r"[A-Za-z0-9_]+").unwrap();
    // Everything that is not an ASCII/Cyrillic letter, a digit or underscore
    static ref NON_WORD_RE: Regex = Regex::new(r"[^A-Za-zА-Яа-я0-9_]+").unwrap();
}

/// Tokenizer failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("tokenizer '{tokenizer}' failed: {reason}")]
pub struct TokenizeError {
    pub tokenizer: String,
    pub reason: String,
}

impl TokenizeError {
    pub fn new(tokenizer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            tokenizer: tokenizer.into(),
            reason: reason.into(),
        }
    }
}

/// Word tokenizer abstraction
pub trait Tokenizer: Send + Sync {
    /// Split text into word tokens, in document order
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError>;

    /// Get tokenizer name/identifier
    fn name(&self) -> &str;
}

/// Matches every maximal run of ASCII word characters (letters, digits,
/// underscore). Any other character, accented letters included, separates words.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordRunTokenizer;

impl Tokenizer for WordRunTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        Ok(WORD_RUN_RE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect())
    }

    fn name(&self) -> &str {
        "word-run"
    }
}

/// Splits on anything outside Latin/Cyrillic letters, digits and underscore.
///
/// Apostrophes and hyphens are separators, so "don't" becomes `don`, `t`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicWordTokenizer;

impl Tokenizer for BasicWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        Ok(NON_WORD_RE
            .split(text)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn name(&self) -> &str {
        "basic-word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_run_basic() {
        let tokens = WordRunTokenizer.tokenize("hello, world! snake_case 42").unwrap();
        assert_eq!(tokens, vec!["hello", "world", "snake_case", "42"]);
    }

    #[test]
    fn test_word_run_splits_on_non_ascii() {
        let tokens = WordRunTokenizer.tokenize("café naïve привет").unwrap();
        assert_eq!(tokens, vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_word_run_empty() {
        assert!(WordRunTokenizer.tokenize("").unwrap().is_empty());
        assert!(WordRunTokenizer.tokenize("?! ... --").unwrap().is_empty());
    }

    #[test]
    fn test_basic_splits_punctuation() {
        let tokens = BasicWordTokenizer
            .tokenize("don't stop-believing, ok?")
            .unwrap();
        assert_eq!(tokens, vec!["don", "t", "stop", "believing", "ok"]);
    }

    #[test]
    fn test_basic_keeps_cyrillic_and_drops_leading_separator() {
        let tokens = BasicWordTokenizer.tokenize("  привет мир_1").unwrap();
        assert_eq!(tokens, vec!["привет", "мир_1"]);
    }

    #[test]
    fn test_basic_treats_accented_latin_as_separator() {
        let tokens = BasicWordTokenizer.tokenize("café").unwrap();
        assert_eq!(tokens, vec!["caf"]);
    }
}
