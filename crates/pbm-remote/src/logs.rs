//! Build-log retrieval helpers, generic over any [`RemoteShell`].

use tracing::debug;

use crate::error::{RemoteError, Result};
use crate::shell::{RemoteOutput, RemoteShell};

/// Conventional provisioning log locations on Windows build VMs, as
/// `(short name, remote path)` pairs.
pub const BUILD_LOG_FILES: &[(&str, &str)] = &[
    ("windows-init.log", r"C:\Windows\Temp\windows-init.log"),
    ("windows-prepare.log", r"C:\Windows\Temp\windows-prepare.log"),
];

/// Read a remote file's content via `Get-Content`.
pub fn read_remote_file(shell: &mut dyn RemoteShell, path: &str) -> Result<String> {
    let command = format!("Get-Content -Path '{path}' -ErrorAction Stop");
    let RemoteOutput {
        stdout,
        stderr,
        status,
    } = shell.run(&command)?;

    if status == 0 {
        Ok(stdout)
    } else {
        Err(RemoteError::CommandFailed { status, stderr })
    }
}

/// Fetch the conventional build logs, skipping any that are unavailable.
///
/// Returns `(short name, content)` pairs in [`BUILD_LOG_FILES`] order.
pub fn collect_build_logs(shell: &mut dyn RemoteShell) -> Vec<(String, String)> {
    BUILD_LOG_FILES
        .iter()
        .filter_map(|(name, path)| match read_remote_file(shell, path) {
            Ok(content) => Some((name.to_string(), content)),
            Err(e) => {
                debug!(log = name, error = %e, "skipping unavailable build log");
                None
            }
        })
        .collect()
}
