pub mod config;
pub mod note;
pub mod paths;

pub use config::{Config, ConfigError, SummaryConfig, TagConfig, CONFIG_FILE_NAME};
pub use note::{NewNote, Note, NoteError, NoteUpdate};
pub use paths::{get_home_root, HOME_ENV};
