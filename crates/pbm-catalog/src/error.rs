//! Error types for pbm-catalog

use std::path::PathBuf;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during catalog construction
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No `.git` marker found while auto-detecting the repository root.
    ///
    /// Only raised when no explicit root was supplied; discovery itself
    /// never fails, it degrades.
    #[error("not inside a git repository (searched upward from {start})")]
    RepoRootNotFound { start: PathBuf },
}
