//! Home directory resolution
//!
//! The home directory holds `.notewise.json`.

use std::path::PathBuf;

use tracing::warn;

/// Environment variable for the home directory
pub const HOME_ENV: &str = "NOTEWISE_HOME";

/// Get home path from environment variable or current directory.
/// Priority: NOTEWISE_HOME env var > current directory
pub fn get_home_root() -> PathBuf {
    resolve_home(std::env::var(HOME_ENV).ok())
}

fn resolve_home(env_value: Option<String>) -> PathBuf {
    if let Some(path) = env_value {
        let home = PathBuf::from(&path);
        if home.is_dir() {
            return home;
        }
        warn!(
            "{} is set to '{}' but path does not exist. Falling back to current directory.",
            HOME_ENV, path
        );
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
