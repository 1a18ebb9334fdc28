//! Extractive summarization by sentence scoring
//!
//! 1. Split the text into sentences on terminal punctuation.
//! 2. Count non-stopword tokens across the whole text.
//! 3. Score each sentence as the sum of the global counts of its tokens.
//! 4. Keep the top sentences by score, in score order, joined by a space.
//!
//! Scores are not normalized by sentence length, so long sentences that
//! repeat frequent words win. The summary is in score order, not in the
//! order the sentences appear in the text.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::text::{
    contain_panic, split_sentences, BasicWordTokenizer, StopwordSet, TokenizeError, Tokenizer,
};

/// Returned for absent, empty or whitespace-only text
pub const NO_CONTENT_MESSAGE: &str = "No content to summarize.";
/// Returned when summarization fails internally
pub const SUMMARY_FAILED_MESSAGE: &str = "Error occurred during summarization.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SummaryError {
    #[error("no content to summarize")]
    EmptyInput,

    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error("summarizer panicked: {0}")]
    Internal(String),
}

impl SummaryError {
    /// Text handed back to callers in place of a summary
    pub fn fallback_text(&self) -> &'static str {
        match self {
            Self::EmptyInput => NO_CONTENT_MESSAGE,
            Self::Tokenize(_) | Self::Internal(_) => SUMMARY_FAILED_MESSAGE,
        }
    }
}

/// Sentence with its position in the text and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence<'a> {
    pub index: usize,
    pub text: &'a str,
    pub score: usize,
}

/// Summarizer with an injected stopword set and tokenizer
pub struct Summarizer {
    stopwords: StopwordSet,
    tokenizer: Box<dyn Tokenizer>,
}

impl Summarizer {
    /// Number of sentences kept when the caller does not ask for a count
    pub const DEFAULT_SENTENCE_COUNT: usize = 3;

    /// Summarizer with the broad English stopword list
    pub fn new() -> Self {
        Self::with_stopwords(StopwordSet::english())
    }

    pub fn with_stopwords(stopwords: StopwordSet) -> Self {
        Self {
            stopwords,
            tokenizer: Box::new(BasicWordTokenizer),
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

    /// Summarize `text` into at most `sentence_count` sentences.
    ///
    /// Never fails: errors are mapped to their fallback text, see
    /// [`SummaryError::fallback_text`].
    pub fn summarize(&self, text: Option<&str>, sentence_count: usize) -> String {
        match self.try_summarize(text, sentence_count) {
            Ok(summary) => summary,
            Err(SummaryError::EmptyInput) => NO_CONTENT_MESSAGE.to_string(),
            Err(e) => {
                warn!(error = %e, "summarization failed, returning fallback");
                e.fallback_text().to_string()
            }
        }
    }

    /// `summarize` with `DEFAULT_SENTENCE_COUNT`
    pub fn summarize_default(&self, text: Option<&str>) -> String {
        self.summarize(text, Self::DEFAULT_SENTENCE_COUNT)
    }

    /// Summarize, reporting why no summary could be produced
    pub fn try_summarize(
        &self,
        text: Option<&str>,
        sentence_count: usize,
    ) -> Result<String, SummaryError> {
        let text = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(SummaryError::EmptyInput),
        };

        let ranked = contain_panic(|| self.rank_sentences(text))
            .map_err(SummaryError::Internal)??;

        let total = ranked.len();
        let summary = ranked
            .into_iter()
            .take(sentence_count)
            .map(|s| s.text.trim())
            .collect::<Vec<_>>()
            .join(" ");

        debug!(
            tokenizer = self.tokenizer.name(),
            sentences = total,
            requested = sentence_count,
            chars = summary.len(),
            "summarized text"
        );

        Ok(summary)
    }

    /// Score every sentence and sort by descending score.
    ///
    /// The sort is stable, so equal scores keep document order.
    pub fn rank_sentences<'a>(
        &self,
        text: &'a str,
    ) -> Result<Vec<ScoredSentence<'a>>, TokenizeError> {
        let sentences = split_sentences(text);

        let mut tokenized = Vec::with_capacity(sentences.len());
        for sentence in &sentences {
            tokenized.push(self.tokenizer.tokenize(&sentence.to_lowercase())?);
        }

        let freq = self.word_frequencies(&tokenized);

        let mut scored: Vec<ScoredSentence<'a>> = sentences
            .into_iter()
            .zip(&tokenized)
            .enumerate()
            .map(|(index, (text, tokens))| ScoredSentence {
                index,
                text,
                score: tokens
                    .iter()
                    .map(|t| freq.get(t.as_str()).copied().unwrap_or(0))
                    .sum(),
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));

        Ok(scored)
    }

    /// Global counts of non-stopword tokens across all sentences
    fn word_frequencies<'t>(&self, tokenized: &'t [Vec<String>]) -> HashMap<&'t str, usize> {
        let mut freq: HashMap<&str, usize> = HashMap::new();

        for token in tokenized.iter().flatten() {
            if !self.stopwords.contains(token) {
                *freq.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        freq
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}
