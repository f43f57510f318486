//! Error types for pbm-remote

/// Result type for remote-shell operations
pub type Result<T> = std::result::Result<T, RemoteError>;

/// Errors that can occur at the remote-shell boundary
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The transport failed before a status could be observed.
    #[error("transport error talking to {host}: {message}")]
    Transport { host: String, message: String },

    /// The remote command ran but exited non-zero.
    #[error("remote command exited with status {status}: {stderr}")]
    CommandFailed { status: i32, stderr: String },
}
