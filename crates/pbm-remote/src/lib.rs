//! Remote-shell collaborator boundary for Packer Build Manager.
//!
//! Models the WinRM session used to inspect Windows VMs mid-build as a
//! transport-agnostic contract: a [`RemoteShell`] takes a command string
//! and returns captured output plus an exit status. The orchestration core
//! does not call into this crate today; it exists as the interface a
//! remote-verification pipeline stage would consume. No transport is
//! implemented here.

pub mod error;
pub mod logs;
pub mod shell;

pub use error::{RemoteError, Result};
pub use logs::{collect_build_logs, read_remote_file, BUILD_LOG_FILES};
pub use shell::{Credentials, Endpoint, RemoteOutput, RemoteShell, DEFAULT_PORT};
