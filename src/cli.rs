//! CLI definition for tf-matrix.

use clap::Parser;
use std::path::PathBuf;

/// Terraform change matrix generator for CI pipelines.
///
/// Reads the changed-path list from `CHANGED_DIR`, classifies each path into
/// an environment tier, and appends the tier matrix to `GITHUB_OUTPUT`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the tier definition config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Repository root bounding the upward backend search
    #[arg(long, default_value = ".")]
    pub repo_root: PathBuf,

    /// Enable verbose logging (overrides LOG_LEVEL)
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    pub log: String,
}
