//! Sentence segmentation on terminal punctuation

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Run of non-terminators followed by one or more of `.`, `?`, `!`
    static ref SENTENCE_RE: Regex = Regex::new(r"[^.!?]+[.!?]+").unwrap();
}

/// Split text into sentences, keeping each sentence's terminators and
/// surrounding whitespace.
///
/// Trailing text after the last terminator is not a sentence. When the text
/// has no terminator-delimited sentence at all, the whole input is returned
/// as the only sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let sentences: Vec<&str> = SENTENCE_RE.find_iter(text).map(|m| m.as_str()).collect();

    if sentences.is_empty() {
        vec![text]
    } else {
        sentences
    }
}
