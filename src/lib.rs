//! notewise: tagging and summarization core for a personal notes backend
//!
//! Two pure components do the actual text work:
//!
//! - [`tags::TagExtractor`]: most frequent non-stopword tokens as tags
//! - [`summary::Summarizer`]: extractive summary by sentence scoring
//!
//! ```
//! use notewise::{extract_tags, summarize};
//!
//! let tags = extract_tags(Some("cat dog cat bird cat dog"), 2);
//! assert_eq!(tags, vec!["cat", "dog"]);
//!
//! assert_eq!(summarize(Some("   "), 3), "No content to summarize.");
//! ```

pub mod core;
pub mod summary;
pub mod tags;
pub mod text;

pub use summary::{summarize, Summarizer, SummaryError};
pub use tags::{extract_tags, TagExtractor};
