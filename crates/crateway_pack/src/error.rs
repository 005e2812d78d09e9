//! Error types for relocation.

use std::path::PathBuf;

/// Errors raised while replacing a relocation destination.
///
/// "No prior state" conditions (missing output directory, unreadable
/// descriptor) are not errors — they surface as `None` from the fail-safe
/// readers. This enum covers genuine filesystem failures, which abort the
/// build loop rather than leave a partially relocated artifact behind.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    /// An I/O error occurred while removing, creating, reading, or writing
    /// a file or directory in the destination.
    #[error("relocation I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A file could not be copied from the compiler output to the destination.
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        /// The source file.
        from: PathBuf,
        /// The destination file.
        to: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
