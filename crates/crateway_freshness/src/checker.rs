//! The freshness check: manifest-first stat comparison, then a short-circuit
//! source tree walk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::verdict::{FreshnessVerdict, RebuildReason};

/// Decides whether the artifact at `reference_artifact` is still valid for
/// the sources under `source_dir` and the build manifest at `manifest_path`.
///
/// The check proceeds in three stages, stopping at the first decisive one:
///
/// 1. Stat the reference artifact. If it cannot be stat'd there is nothing to
///    reuse — rebuild.
/// 2. Stat the manifest. A manifest strictly newer than the reference is
///    decisive on its own (a descriptor change always matters) and skips the
///    tree walk entirely.
/// 3. Walk `source_dir` depth-first, comparing every file's and directory's
///    modification time against the reference. The walk terminates on the
///    first entry found to be newer.
///
/// Any filesystem error along the way resolves to a rebuild verdict: an
/// unreadable input means freshness cannot be proven, and staleness is the
/// safe default.
pub fn check_freshness(
    source_dir: &Path,
    manifest_path: &Path,
    reference_artifact: &Path,
) -> FreshnessVerdict {
    let reference_mtime = match modified(reference_artifact) {
        Some(t) => t,
        None => return FreshnessVerdict::Rebuild(RebuildReason::MissingReference),
    };

    let manifest_mtime = match modified(manifest_path) {
        Some(t) => t,
        None => return FreshnessVerdict::Rebuild(RebuildReason::MissingReference),
    };

    if manifest_mtime > reference_mtime {
        return FreshnessVerdict::Rebuild(RebuildReason::ManifestChanged);
    }

    match walk(source_dir, reference_mtime) {
        Ok(WalkOutcome::Stale(path)) => {
            FreshnessVerdict::Rebuild(RebuildReason::SourceChanged(path))
        }
        Ok(WalkOutcome::Clean) => FreshnessVerdict::Reuse,
        Err(_) => FreshnessVerdict::Rebuild(RebuildReason::Unverifiable),
    }
}

/// Returns the modification time of `path`, or `None` if it cannot be stat'd.
fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Tri-state result of the recursive walk.
///
/// Propagating `Stale` through every recursion frame gives full early exit:
/// once one stale entry is found, no further entry at any level is examined.
enum WalkOutcome {
    /// The first entry found strictly newer than the reference.
    Stale(PathBuf),
    /// Every entry in this subtree is at least as old as the reference.
    Clean,
}

fn walk(dir: &Path, reference: SystemTime) -> io::Result<WalkOutcome> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let metadata = entry.metadata()?;

        if metadata.modified()? > reference {
            return Ok(WalkOutcome::Stale(path));
        }
        if metadata.is_dir() {
            if let WalkOutcome::Stale(found) = walk(&path, reference)? {
                return Ok(WalkOutcome::Stale(found));
            }
        }
    }
    Ok(WalkOutcome::Clean)
}
