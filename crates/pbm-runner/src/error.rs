//! Error types for pbm-runner

use std::path::PathBuf;

/// Result type for runner operations
pub type Result<T> = std::result::Result<T, RunnerError>;

/// Errors that can occur while planning an invocation.
///
/// Failures of packer itself are not errors here - they surface as the
/// propagated exit status.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// An explicitly requested variables file does not exist. Checked
    /// before any process is spawned for that invocation.
    #[error("variables file not found: {path}")]
    VarsFileNotFound { path: PathBuf },
}
