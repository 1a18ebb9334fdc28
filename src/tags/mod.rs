//! Automatic tagging for notes
//!
//! Surfaces the most frequent non-stopword tokens of a note body as tags.

use lazy_static::lazy_static;

pub mod extractor;

pub use extractor::{Keyword, TagExtractor};

lazy_static! {
    static ref DEFAULT_EXTRACTOR: TagExtractor = TagExtractor::new();
}

/// Extract tags with the built-in stopword list
pub fn extract_tags(text: Option<&str>, top_n: usize) -> Vec<String> {
    DEFAULT_EXTRACTOR.extract_tags(text, top_n)
}
