//! Tests for the remote-shell contract through an external implementation
//! of [`RemoteShell`].

use pbm_remote::{
    collect_build_logs, Credentials, Endpoint, RemoteOutput, RemoteShell, Result,
    BUILD_LOG_FILES, DEFAULT_PORT,
};
use pretty_assertions::assert_eq;

/// Serves a fixed filesystem of remote paths; unknown paths fail the way a
/// real `Get-Content` does.
struct FakeWindowsHost {
    files: Vec<(&'static str, &'static str)>,
}

impl RemoteShell for FakeWindowsHost {
    fn run(&mut self, command: &str) -> Result<RemoteOutput> {
        let hit = self
            .files
            .iter()
            .find(|(path, _)| command.contains(path))
            .map(|(_, content)| *content);

        Ok(match hit {
            Some(content) => RemoteOutput {
                stdout: content.to_string(),
                stderr: String::new(),
                status: 0,
            },
            None => RemoteOutput {
                stdout: String::new(),
                stderr: "Get-Content : Cannot find path".to_string(),
                status: 1,
            },
        })
    }
}

#[test]
fn endpoint_defaults_compose_the_wsman_url() {
    let endpoint = Endpoint::new("192.168.1.50");
    assert_eq!(endpoint.url(), "http://192.168.1.50:5985/wsman");

    let endpoint = Endpoint::with_port("buildvm", 5986);
    assert_eq!(endpoint.url(), "http://buildvm:5986/wsman");

    assert_eq!(DEFAULT_PORT, 5985);
    let creds = Credentials::default();
    assert_eq!(creds.username, "Administrator");
}

#[test]
fn collects_whatever_logs_the_host_has() {
    let mut host = FakeWindowsHost {
        files: vec![(r"C:\Windows\Temp\windows-init.log", "init done\n")],
    };

    let logs = collect_build_logs(&mut host);
    assert_eq!(logs, vec![("windows-init.log".to_string(), "init done\n".to_string())]);
}

#[test]
fn collects_all_conventional_logs_when_present() {
    let mut host = FakeWindowsHost {
        files: vec![
            (r"C:\Windows\Temp\windows-init.log", "init done\n"),
            (r"C:\Windows\Temp\windows-prepare.log", "prepare done\n"),
        ],
    };

    let logs = collect_build_logs(&mut host);
    assert_eq!(logs.len(), BUILD_LOG_FILES.len());
    assert_eq!(logs[1].0, "windows-prepare.log");
}
