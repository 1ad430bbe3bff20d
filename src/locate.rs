//! Upward walk locating the nearest backend configuration directory.

use std::path::Path;
use tracing::{info, warn};

/// Marker file denoting a Terraform backend configuration directory.
pub const BACKEND_MARKER: &str = "backend.tf";

/// Walk upward from `start` until a directory containing [`BACKEND_MARKER`]
/// as a direct child is found, returning that directory as a string.
///
/// `start` is treated as a directory even when it names a file; the probe on
/// a file path simply misses and the walk steps to its parent. If `start`
/// itself holds the marker it is returned with zero upward steps. The walk
/// ends without a result at `repo_root` or when the path runs out of named
/// components, so termination is guaranteed.
pub fn locate_backend_dir(start: &Path, repo_root: &Path) -> Option<String> {
    info!(start = %start.display(), "searching for '{BACKEND_MARKER}'");
    let mut current = start;
    while current != repo_root && current.file_name().is_some() {
        if current.join(BACKEND_MARKER).exists() {
            info!(dir = %current.display(), "'{BACKEND_MARKER}' found");
            return Some(current.to_string_lossy().into_owned());
        }
        warn!(dir = %current.display(), "'{BACKEND_MARKER}' not found");
        current = current.parent()?;
    }
    None
}
