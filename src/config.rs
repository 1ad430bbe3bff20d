//! Typed loading of the tier definition config.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Default location of the config resource, relative to the repo root.
pub const DEFAULT_CONFIG_PATH: &str = ".github/actions/tf-matrix/config.yaml";

/// Overlay identifier lists per tier, from the `infra_types` key.
///
/// The base tier carries no identifier list; its pattern is a fixed literal.
/// Loaded once and immutable for the run.
#[derive(Debug, Clone, Deserialize)]
pub struct InfraTypes {
    /// Overlay names routed to the minor tier (e.g. dev, staging).
    pub minor_infra: Vec<String>,
    /// Overlay names routed to the major tier (e.g. prod).
    pub major_infra: Vec<String>,
}

/// Top-level shape of the config file.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    infra_types: InfraTypes,
}

impl InfraTypes {
    /// Load the tier definition from a YAML config file.
    ///
    /// Fails fast on a missing file, malformed YAML, or a missing or
    /// mis-shaped `infra_types` key.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading tier definition");
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile =
            serde_yaml::from_str(&content).map_err(|source| Error::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(file.infra_types)
    }
}
