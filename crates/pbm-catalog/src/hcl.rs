//! Best-effort metadata extraction from Packer HCL files.
//!
//! This is deliberately not an HCL parser. The two declarations we care
//! about (`source "type" "name" {` and `build { name = "..." }`) are picked
//! out with regular expressions over the raw file text. Malformed or
//! unusually formatted files degrade to empty/fallback metadata instead of
//! failing discovery.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Conventional file declaring the build's sources.
pub const SOURCES_FILE: &str = "sources.pkr.hcl";

/// Mandatory build declaration file; its presence marks a build directory.
pub const BUILD_FILE: &str = "build.pkr.hcl";

static SOURCE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"source\s+"([^"]+)"\s+"([^"]+)"\s*\{"#).unwrap());

static BUILD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"build\s*\{\s*name\s*=\s*"([^"]+)""#).unwrap());

/// Extract source identifiers (`<type>.<name>`) from `sources.pkr.hcl`.
///
/// Identifiers come back in declaration order, duplicates included. A
/// missing or unreadable file yields an empty vec, never an error.
pub fn extract_sources(dir: &Path) -> Vec<String> {
    let path = dir.join(SOURCES_FILE);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no readable sources file");
            return Vec::new();
        }
    };

    SOURCE_BLOCK
        .captures_iter(&content)
        .map(|cap| format!("{}.{}", &cap[1], &cap[2]))
        .collect()
}

/// Extract the declared build name from `build.pkr.hcl`.
///
/// The first `build { name = "..." }` match wins. Returns `fallback`
/// (normally the directory's leaf name) when the file is missing,
/// unreadable, or carries no name.
pub fn extract_build_name(dir: &Path, fallback: &str) -> String {
    let path = dir.join(BUILD_FILE);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no readable build file");
            return fallback.to_string();
        }
    };

    match BUILD_NAME.captures(&content) {
        Some(cap) => cap[1].to_string(),
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn extract_sources_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(extract_sources(temp.path()).is_empty());
    }

    #[test]
    fn extract_sources_in_declaration_order() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SOURCES_FILE),
            concat!(
                "source \"proxmox-iso\" \"debian_12_base\" {\n",
                "  iso_url = \"...\"\n",
                "}\n\n",
                "source \"proxmox-clone\" \"debian_12_docker\" {\n",
                "}\n",
            ),
        )
        .unwrap();

        assert_eq!(
            extract_sources(temp.path()),
            vec![
                "proxmox-iso.debian_12_base",
                "proxmox-clone.debian_12_docker"
            ]
        );
    }

    #[test]
    fn extract_sources_keeps_duplicates() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SOURCES_FILE),
            "source \"a\" \"x\" {\n}\nsource \"a\" \"x\" {\n}\n",
        )
        .unwrap();

        assert_eq!(extract_sources(temp.path()), vec!["a.x", "a.x"]);
    }

    #[test]
    fn extract_sources_ignores_malformed_blocks() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SOURCES_FILE),
            "source \"only-type\" {\n}\nnot hcl at all\n",
        )
        .unwrap();

        assert!(extract_sources(temp.path()).is_empty());
    }

    #[test]
    fn extract_build_name_reads_declaration() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(BUILD_FILE),
            "build {\n  name = \"debian-12-base\"\n  sources = []\n}\n",
        )
        .unwrap();

        assert_eq!(extract_build_name(temp.path(), "12"), "debian-12-base");
    }

    #[test]
    fn extract_build_name_first_match_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(BUILD_FILE),
            "build { name = \"first\" }\nbuild { name = \"second\" }\n",
        )
        .unwrap();

        assert_eq!(extract_build_name(temp.path(), "12"), "first");
    }

    #[test]
    fn extract_build_name_falls_back_when_unnamed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(BUILD_FILE), "build {\n  sources = []\n}\n").unwrap();

        assert_eq!(extract_build_name(temp.path(), "12"), "12");
    }

    #[test]
    fn extract_build_name_falls_back_when_missing() {
        let temp = TempDir::new().unwrap();
        assert_eq!(extract_build_name(temp.path(), "leaf"), "leaf");
    }
}
