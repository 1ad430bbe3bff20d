//! Grouping of changed paths into the environment matrix.

use crate::locate::locate_backend_dir;
use crate::patterns::TierPatterns;
use crate::tier::Tier;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{debug, info};

/// Mapping from tier to the set of backend directories its changed paths
/// resolved to. Every tier key is always present, even when empty, and the
/// set deduplicates backend directories reached from multiple changed files.
pub type Grouping = BTreeMap<Tier, BTreeSet<String>>;

/// Outcome of classifying a single changed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A tier pattern matched and the upward walk found a backend directory.
    Located { tier: Tier, backend_dir: String },
    /// A tier pattern matched but no backend directory exists up to the
    /// repository root. Skipped, not an error.
    NotLocated { tier: Tier },
    /// No tier pattern matched. Skipped, not an error.
    Unmatched,
}

/// Classify one changed path against the tier patterns.
///
/// The first matching tier (base, minor, major order) claims the path and
/// short-circuits the remaining tiers.
pub fn classify_path(path: &str, patterns: &TierPatterns, repo_root: &Path) -> Classification {
    match patterns.match_tier(path) {
        Some(tier) => {
            info!(%path, %tier, "path matched tier");
            match locate_backend_dir(Path::new(path), repo_root) {
                Some(backend_dir) => Classification::Located { tier, backend_dir },
                None => Classification::NotLocated { tier },
            }
        }
        None => {
            debug!(%path, "path matched no tier");
            Classification::Unmatched
        }
    }
}

/// Group changed paths into the environment matrix.
///
/// Paths are processed in input order; duplicates are not pre-filtered and
/// simply collapse in the per-tier sets.
pub fn group_by_tier(
    changed_paths: &[String],
    patterns: &TierPatterns,
    repo_root: &Path,
) -> Grouping {
    info!(paths = changed_paths.len(), "grouping changed paths by tier");
    let mut grouping: Grouping = Tier::ALL
        .into_iter()
        .map(|tier| (tier, BTreeSet::new()))
        .collect();

    for path in changed_paths {
        if let Classification::Located { tier, backend_dir } =
            classify_path(path, patterns, repo_root)
        {
            info!(%tier, dir = %backend_dir, "backend directory added");
            grouping.entry(tier).or_default().insert(backend_dir);
        }
    }

    grouping
}
