//! The result of a freshness check.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Outcome of comparing a source tree against a reference artifact.
///
/// `Reuse` means every input is at least as old as the artifact; `Rebuild`
/// carries the reason the artifact can no longer be trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessVerdict {
    /// The existing artifact is up to date and may be served as-is.
    Reuse,
    /// The artifact is stale or unprovable; the compiler must run again.
    Rebuild(RebuildReason),
}

impl FreshnessVerdict {
    /// Returns `true` if this verdict requires a rebuild.
    pub fn needs_rebuild(&self) -> bool {
        matches!(self, FreshnessVerdict::Rebuild(_))
    }
}

impl fmt::Display for FreshnessVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreshnessVerdict::Reuse => write!(f, "up to date"),
            FreshnessVerdict::Rebuild(reason) => write!(f, "rebuild ({reason})"),
        }
    }
}

/// Why a rebuild is required.
///
/// Ordered roughly by how early in the check each condition is detected:
/// reference stats run first, then the manifest comparison, then the source
/// tree walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebuildReason {
    /// The reference artifact or the build manifest could not be stat'd.
    /// Expected before the first build; staleness is the safe default.
    MissingReference,
    /// The build manifest is strictly newer than the reference artifact.
    ManifestChanged,
    /// A source entry (file or directory) is strictly newer than the
    /// reference artifact. Carries the first such path encountered.
    SourceChanged(PathBuf),
    /// The source tree could not be fully examined, so freshness cannot
    /// be proven.
    Unverifiable,
}

impl fmt::Display for RebuildReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RebuildReason::MissingReference => write!(f, "no previous build output"),
            RebuildReason::ManifestChanged => write!(f, "build manifest changed"),
            RebuildReason::SourceChanged(path) => {
                write!(f, "source changed: {}", path.display())
            }
            RebuildReason::Unverifiable => write!(f, "source tree unreadable"),
        }
    }
}
