//! Environment-driven configuration

use std::env;
use std::path::PathBuf;

/// Where the calculation history lives. Overridable for tests and for
/// users who want per-project histories.
pub fn history_file() -> PathBuf {
    env::var("TALLY_HISTORY_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("tally_history.csv"))
}

/// Readline history dot-file in the home directory
pub fn line_history_file() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".tally_history"))
        .unwrap_or_else(|| PathBuf::from(".tally_history"))
}
