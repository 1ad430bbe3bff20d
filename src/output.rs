//! Output writing for the CI pipeline.
//!
//! One `<tier>=<json-array>` line per tier, appended to the file named by
//! `GITHUB_OUTPUT` so a downstream workflow step can consume the matrix.

use crate::classify::Grouping;
use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Append one `key=value` line per tier to the output file.
///
/// Every tier is written, even when its set is empty (`[]`). The file is
/// created if absent and opened in append mode; the handle is scoped to this
/// call and released on every exit path. A `None` sink is fatal.
pub fn write_github_output(grouping: &Grouping, sink: Option<&Path>) -> Result<()> {
    let path = sink.ok_or(Error::OutputSinkUnset)?;
    info!(file = %path.display(), "writing tier matrix to output file");

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::OutputIo {
            path: path.to_path_buf(),
            source,
        })?;

    for (tier, dirs) in grouping {
        let value = serde_json::to_string(dirs).map_err(|source| Error::OutputEncode {
            tier: tier.key(),
            source,
        })?;
        let line = format!("{}={}", tier.key(), value);
        writeln!(file, "{line}").map_err(|source| Error::OutputIo {
            path: path.to_path_buf(),
            source,
        })?;
        info!(%line, "written output line");
    }

    Ok(())
}
