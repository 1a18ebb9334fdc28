//! Note model
//!
//! Applies the tagger and the summarizer the way the notes service does:
//! new notes without tags get generated tags, and a summarize action
//! replaces the note body with its summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::summary::Summarizer;
use crate::tags::TagExtractor;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a note
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Input for updating a note
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            tags: None,
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Validate and build the note.
    ///
    /// Title and content are required. Without explicit tags, tags are
    /// generated from the content.
    pub fn into_note(self, extractor: &TagExtractor) -> Result<Note, NoteError> {
        let title = required(self.title, "title")?;
        let content = required(self.content, "content")?;

        let tags = match self.tags {
            Some(tags) if !tags.is_empty() => tags,
            _ => extractor.extract_tags_default(Some(&content)),
        };

        let now = Utc::now();
        Ok(Note {
            title,
            content,
            tags,
            is_pinned: false,
            created_at: now,
            updated_at: now,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, NoteError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(NoteError::MissingField(field)),
    }
}

impl Note {
    /// Apply an update. Tags are replaced as given, or cleared when absent.
    pub fn apply_update(&mut self, update: NoteUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        self.tags = update.tags.unwrap_or_default();
        self.touch();
    }

    /// Flip the pinned flag, returning the new value
    pub fn toggle_pin(&mut self) -> bool {
        self.is_pinned = !self.is_pinned;
        self.touch();
        self.is_pinned
    }

    /// Replace the content with its summary, returning the summary
    pub fn summarize(&mut self, summarizer: &Summarizer) -> String {
        let summary = summarizer.summarize_default(Some(&self.content));
        self.content = summary.clone();
        self.touch();
        summary
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
