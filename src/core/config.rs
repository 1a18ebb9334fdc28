//! notewise configuration
//!
//! Loaded from `.notewise.json` in the notewise home directory. Every field
//! is optional; missing fields fall back to the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::summary::Summarizer;
use crate::tags::TagExtractor;
use crate::text::StopwordSet;

pub const CONFIG_FILE_NAME: &str = ".notewise.json";
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub tags: TagConfig,

    #[serde(default)]
    pub summary: SummaryConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Tag extraction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Replaces the built-in list when set
    #[serde(default)]
    pub stopwords: Option<Vec<String>>,

    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

fn default_top_n() -> usize {
    TagExtractor::DEFAULT_TOP_N
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            stopwords: None,
            extra_stopwords: Vec::new(),
        }
    }
}

impl TagConfig {
    pub fn stopword_set(&self) -> StopwordSet {
        let base = match &self.stopwords {
            Some(words) => StopwordSet::from_words(words),
            None => StopwordSet::tag_default(),
        };
        base.with_extra(&self.extra_stopwords)
    }
}

/// Summarization settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default = "default_sentence_count")]
    pub sentence_count: usize,

    /// Replaces the built-in list when set
    #[serde(default)]
    pub stopwords: Option<Vec<String>>,

    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

fn default_sentence_count() -> usize {
    Summarizer::DEFAULT_SENTENCE_COUNT
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            sentence_count: default_sentence_count(),
            stopwords: None,
            extra_stopwords: Vec::new(),
        }
    }
}

impl SummaryConfig {
    pub fn stopword_set(&self) -> StopwordSet {
        let base = match &self.stopwords {
            Some(words) => StopwordSet::from_words(words),
            None => StopwordSet::english(),
        };
        base.with_extra(&self.extra_stopwords)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            tags: TagConfig::default(),
            summary: SummaryConfig::default(),
        }
    }
}

impl Config {
    /// Load config from `home`, falling back to defaults on any problem
    pub fn load(home: &Path) -> Self {
        let config_path = home.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::load_from_file(&config_path) {
            Ok(config) => {
                if config.version > CONFIG_VERSION {
                    warn!(
                        version = config.version,
                        supported = CONFIG_VERSION,
                        "config version is newer than supported"
                    );
                }
                config
            }
            Err(e) => {
                warn!(error = %e, "failed to load config, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write config to `home`, returning the file path
    pub fn save(&self, home: &Path) -> Result<PathBuf, ConfigError> {
        let config_path = home.join(CONFIG_FILE_NAME);
        let write_err = |source| ConfigError::Write {
            path: config_path.clone(),
            source,
        };

        fs::create_dir_all(home).map_err(write_err)?;
        fs::write(&config_path, self.to_json()).map_err(write_err)?;
        Ok(config_path)
    }

    pub fn to_json(&self) -> String {
        // Plain data structs: serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn tag_extractor(&self) -> TagExtractor {
        TagExtractor::with_stopwords(self.tags.stopword_set())
    }

    pub fn summarizer(&self) -> Summarizer {
        Summarizer::with_stopwords(self.summary.stopword_set())
    }
}
