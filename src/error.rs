//! Fatal error types for the matrix pipeline.
//!
//! Unmatched paths and paths without a reachable backend directory are not
//! errors; they are logged and skipped by the classifier. Everything here
//! aborts the run with a non-zero exit.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The config resource is missing or unreadable.
    #[error("failed to read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed YAML, or the `infra_types` key is missing or mis-shaped.
    #[error("failed to parse config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A tier alternation failed to compile, which happens when an overlay
    /// identifier carries regex metacharacters.
    #[error("failed to compile pattern for tier {tier}")]
    Pattern {
        tier: &'static str,
        #[source]
        source: regex_lite::Error,
    },

    /// `GITHUB_OUTPUT` is absent or empty at write time.
    #[error("GITHUB_OUTPUT is not set; nowhere to write the tier matrix")]
    OutputSinkUnset,

    /// The output line for a tier could not be JSON-encoded.
    #[error("failed to encode output line for tier {tier}")]
    OutputEncode {
        tier: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Opening or appending to the output sink failed. A mid-write failure
    /// leaves partial output behind, which the at-most-once CI contract
    /// tolerates.
    #[error("failed to write output file {}", path.display())]
    OutputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
