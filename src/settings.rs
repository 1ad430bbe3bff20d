//! Runtime settings resolved once at startup.
//!
//! The CI contract is environment-variable driven (`LOG_LEVEL`,
//! `CHANGED_DIR`, `GITHUB_OUTPUT`). Everything the run needs is read here
//! into one explicit struct instead of ad hoc lookups inside components.

use crate::cli::Cli;
use crate::config::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;
use tracing::Level;

/// Immutable per-run settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Minimum log level, from `LOG_LEVEL`.
    pub log_level: Level,
    /// Changed file paths, from `CHANGED_DIR`.
    pub changed_paths: Vec<String>,
    /// Output sink path, from `GITHUB_OUTPUT`. Absence only becomes fatal at
    /// the write phase.
    pub output_path: Option<PathBuf>,
    /// Tier definition config path.
    pub config_path: PathBuf,
    /// Boundary for the upward backend search.
    pub repo_root: PathBuf,
}

impl Settings {
    /// Resolve settings from the process environment and CLI flags.
    pub fn from_env(cli: &Cli) -> Self {
        let log_level = if cli.verbose {
            Level::DEBUG
        } else {
            std::env::var("LOG_LEVEL")
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(Level::INFO)
        };

        Self {
            log_level,
            changed_paths: split_changed_paths(
                &std::env::var("CHANGED_DIR").unwrap_or_default(),
            ),
            output_path: std::env::var("GITHUB_OUTPUT")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            config_path: cli
                .config
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
            repo_root: cli.repo_root.clone(),
        }
    }
}

/// Split the whitespace-separated `CHANGED_DIR` value into paths.
fn split_changed_paths(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Map a `LOG_LEVEL` value to a tracing level.
///
/// Accepts the conventional CI level names case-insensitively; CRITICAL has
/// no tracing equivalent and maps to ERROR. Unrecognized values return `None`
/// so the caller falls back to the default instead of failing the run.
fn parse_log_level(value: &str) -> Option<Level> {
    match value.to_ascii_uppercase().as_str() {
        "DEBUG" => Some(Level::DEBUG),
        "INFO" => Some(Level::INFO),
        "WARNING" | "WARN" => Some(Level::WARN),
        "ERROR" | "CRITICAL" => Some(Level::ERROR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(parse_log_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_log_level("Info"), Some(Level::INFO));
        assert_eq!(parse_log_level("WARNING"), Some(Level::WARN));
        assert_eq!(parse_log_level("error"), Some(Level::ERROR));
        assert_eq!(parse_log_level("CRITICAL"), Some(Level::ERROR));
    }

    #[test]
    fn unknown_level_degrades_to_none() {
        assert_eq!(parse_log_level("chatty"), None);
        assert_eq!(parse_log_level(""), None);
    }

    #[test]
    fn changed_paths_split_on_any_whitespace() {
        assert_eq!(
            split_changed_paths("a/main.tf  b/main.tf\nc/main.tf"),
            vec!["a/main.tf", "b/main.tf", "c/main.tf"]
        );
    }

    #[test]
    fn empty_changed_dir_yields_empty_list() {
        assert!(split_changed_paths("").is_empty());
        assert!(split_changed_paths("   \n ").is_empty());
    }
}
