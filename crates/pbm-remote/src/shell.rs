//! Remote-shell contract: endpoint, credentials, and the execution trait.

use crate::error::Result;

/// Default WinRM HTTP port.
pub const DEFAULT_PORT: u16 = 5985;

/// Default credentials packer provisions its Windows build VMs with.
const DEFAULT_USERNAME: &str = "Administrator";
const DEFAULT_PASSWORD: &str = "packer";

/// A remote host to connect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    /// Endpoint on the default WinRM port.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
        }
    }

    pub fn with_port(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// WS-Management endpoint URL for this host.
    pub fn url(&self) -> String {
        format!("http://{}:{}/wsman", self.host, self.port)
    }
}

/// Authentication material for a remote session.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

/// Captured result of one remote command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: i32,
}

impl RemoteOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Executes command strings on a remote host.
///
/// Implementations own transport and authentication; callers only see
/// command in, [`RemoteOutput`] out.
pub trait RemoteShell {
    fn run(&mut self, command: &str) -> Result<RemoteOutput>;
}
