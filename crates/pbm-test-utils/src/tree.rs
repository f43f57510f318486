//! [`BuildTree`] builder for build-repository test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary build repository with helper methods for laying out
/// `builds/<provider>/<category>/<leaf>/` configuration directories.
///
/// # Example
///
/// ```rust,no_run
/// use pbm_test_utils::BuildTree;
///
/// let tree = BuildTree::new();
/// tree.init_git();
/// let dir = tree.add_named_build("proxmox", "debian", "12", "debian-12-base");
/// tree.write_sources(&dir, &[("proxmox-iso", "debian_12_base")]);
/// ```
pub struct BuildTree {
    temp_dir: TempDir,
}

impl Default for BuildTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildTree {
    /// Create an empty temporary repository root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Repository root path.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `<root>/builds`, created on first use by the add helpers.
    pub fn builds_dir(&self) -> PathBuf {
        self.root().join("builds")
    }

    /// Drop a `.git` marker directory so the root is auto-detectable.
    pub fn init_git(&self) {
        fs::create_dir_all(self.root().join(".git")).unwrap();
    }

    /// Create `builds/<provider>/<category>/<leaf>/build.pkr.hcl` with an
    /// anonymous build block. Returns the configuration directory.
    pub fn add_build(&self, provider: &str, category: &str, leaf: &str) -> PathBuf {
        let dir = self.builds_dir().join(provider).join(category).join(leaf);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("build.pkr.hcl"), "build {\n  sources = []\n}\n").unwrap();
        dir
    }

    /// Like [`add_build`](Self::add_build) but with a declared build name.
    pub fn add_named_build(
        &self,
        provider: &str,
        category: &str,
        leaf: &str,
        name: &str,
    ) -> PathBuf {
        let dir = self.builds_dir().join(provider).join(category).join(leaf);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("build.pkr.hcl"),
            format!("build {{\n  name = \"{name}\"\n  sources = []\n}}\n"),
        )
        .unwrap();
        dir
    }

    /// Write a `sources.pkr.hcl` declaring one block per `(type, name)`
    /// pair, in order.
    pub fn write_sources(&self, dir: &Path, sources: &[(&str, &str)]) {
        let mut content = String::new();
        for (source_type, source_name) in sources {
            content.push_str(&format!(
                "source \"{source_type}\" \"{source_name}\" {{\n}}\n\n"
            ));
        }
        fs::write(dir.join("sources.pkr.hcl"), content).unwrap();
    }

    /// Write the conventional `variables.auto.pkrvars.hcl` into `dir`.
    pub fn write_variables(&self, dir: &Path) {
        fs::write(
            dir.join("variables.auto.pkrvars.hcl"),
            "iso_checksum = \"none\"\n",
        )
        .unwrap();
    }

    /// Assert that `path` (relative to the repo root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
