//! Filesystem discovery of build configurations.
//!
//! Discovery walks `<repo_root>/builds`: immediate subdirectories are
//! providers, and every `build.pkr.hcl` found anywhere below a provider
//! marks one build configuration directory. The walk is full and
//! unconditional - catalogs are small and discovery runs once per process.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::hcl;
use crate::record::{BuildRecord, Catalog, UNCLASSIFIED};

/// Directory under the repository root holding all build configurations.
pub const BUILDS_DIR: &str = "builds";

const GIT_MARKER: &str = ".git";

/// Auto-detect the repository root by walking up from `start` until a
/// `.git` marker is found.
///
/// Resolved once at startup and threaded through as an argument; nothing
/// else in the crate touches the process working directory.
pub fn find_repo_root(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(GIT_MARKER).exists() {
            return Ok(current);
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => {
                return Err(Error::RepoRootNotFound {
                    start: start.to_path_buf(),
                });
            }
        }
    }
}

impl Catalog {
    /// Discover every build configuration under `<repo_root>/builds`.
    ///
    /// A missing builds directory, unreadable subtrees, or malformed
    /// declaration files all degrade to fewer/leaner records; discovery
    /// itself never fails.
    pub fn discover(repo_root: &Path) -> Catalog {
        let builds_dir = repo_root.join(BUILDS_DIR);
        if !builds_dir.is_dir() {
            debug!(path = %builds_dir.display(), "no builds directory");
            return Catalog::default();
        }

        let providers = match fs::read_dir(&builds_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %builds_dir.display(), error = %e, "cannot read builds directory");
                return Catalog::default();
            }
        };

        let mut records = Vec::new();
        for entry in providers.flatten() {
            let provider_dir = entry.path();
            if !provider_dir.is_dir() {
                continue;
            }
            let provider = match provider_dir.file_name().and_then(|name| name.to_str()) {
                Some(name) if !name.starts_with('.') => name.to_string(),
                _ => continue,
            };

            for found in WalkDir::new(&provider_dir)
                .into_iter()
                .filter_map(|entry| entry.ok())
            {
                if found.file_type().is_file() && found.file_name() == hcl::BUILD_FILE {
                    if let Some(dir) = found.path().parent() {
                        records.push(build_record(dir, &provider, &provider_dir));
                    }
                }
            }
        }

        debug!(count = records.len(), "discovered build configurations");
        Catalog::from_records(records)
    }
}

fn build_record(dir: &Path, provider: &str, provider_dir: &Path) -> BuildRecord {
    // Category is purely positional: the first segment between the provider
    // directory and the build directory, if any.
    let category = dir
        .strip_prefix(provider_dir)
        .ok()
        .and_then(|rel| rel.iter().next())
        .and_then(|segment| segment.to_str())
        .unwrap_or(UNCLASSIFIED)
        .to_string();

    let leaf = dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(UNCLASSIFIED);

    BuildRecord {
        sources: hcl::extract_sources(dir),
        display_name: hcl::extract_build_name(dir, leaf),
        path: dir.to_path_buf(),
        provider: provider.to_string(),
        category,
    }
}
