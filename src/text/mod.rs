//! Text primitives shared by the tagger and the summarizer
//!
//! - `stopwords`: closed stopword sets
//! - `tokenizer`: word tokenizers behind the `Tokenizer` trait
//! - `sentence`: sentence segmentation

pub mod sentence;
pub mod stopwords;
pub mod tokenizer;

pub use sentence::split_sentences;
pub use stopwords::{StopwordSet, ENGLISH_STOPWORDS, TAG_STOPWORDS};
pub use tokenizer::{BasicWordTokenizer, TokenizeError, Tokenizer, WordRunTokenizer};

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Run `op`, turning a panic into an `Err` carrying the panic message.
///
/// Components use this at their public boundary so a faulty tokenizer can
/// never abort the caller.
pub(crate) fn contain_panic<T>(op: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(op)).map_err(panic_message)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
