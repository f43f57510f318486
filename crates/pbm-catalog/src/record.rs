//! Build record and catalog types.

use std::path::PathBuf;

/// Conventional per-build variables file. Its existence is only checked at
/// orchestration time, never during discovery.
pub const VARIABLES_FILE: &str = "variables.auto.pkrvars.hcl";

/// Category sentinel for builds that sit directly under a provider
/// directory.
pub const UNCLASSIFIED: &str = "unclassified";

/// One discoverable build configuration.
///
/// `path` is the identity key; every record's path was confirmed at
/// discovery time to contain a `build.pkr.hcl`. `sources` and a declared
/// display name may legitimately be absent - that is a degraded entry, not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRecord {
    /// Absolute path of the configuration directory.
    pub path: PathBuf,
    /// First path component under the builds root (e.g. "proxmox").
    pub provider: String,
    /// Second-level grouping segment (e.g. "debian"), or [`UNCLASSIFIED`].
    pub category: String,
    /// `<type>.<name>` identifiers in declaration order, duplicates kept.
    pub sources: Vec<String>,
    /// Declared build name, or the directory leaf name as fallback.
    pub display_name: String,
}

impl BuildRecord {
    /// Directory leaf name, e.g. "12" for `builds/proxmox/debian/12`.
    pub fn leaf_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
    }

    /// Convenience form `<category>-<leaf>`, e.g. "debian-12".
    pub fn slug(&self) -> String {
        format!("{}-{}", self.category, self.leaf_name())
    }

    /// Conventional variables file path under the configuration directory.
    pub fn variables_file(&self) -> PathBuf {
        self.path.join(VARIABLES_FILE)
    }
}

/// Ordered, immutable set of discovered builds.
///
/// Built once per process by [`Catalog::discover`](crate::discover) and
/// never persisted.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<BuildRecord>,
}

impl Catalog {
    /// Build a catalog from records, sorting them into presentation order:
    /// (`provider`, `category`, leaf name), case-sensitive ascending.
    pub fn from_records(mut records: Vec<BuildRecord>) -> Self {
        records.sort_by(|a, b| {
            (&a.provider, &a.category, a.leaf_name()).cmp(&(
                &b.provider,
                &b.category,
                b.leaf_name(),
            ))
        });
        Self { records }
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[BuildRecord] {
        &self.records
    }

    /// Record at `index` in catalog order.
    pub fn get(&self, index: usize) -> Option<&BuildRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BuildRecord;
    type IntoIter = std::slice::Iter<'a, BuildRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Test-only shorthand for building records without touching the
/// filesystem.
#[cfg(test)]
pub(crate) fn record(path: &str, provider: &str, category: &str, name: &str) -> BuildRecord {
    BuildRecord {
        path: PathBuf::from(path),
        provider: provider.to_string(),
        category: category.to_string(),
        sources: Vec::new(),
        display_name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    #[test]
    fn leaf_name_and_slug() {
        let rec = record("/repo/builds/proxmox/debian/12", "proxmox", "debian", "x");
        assert_eq!(rec.leaf_name(), "12");
        assert_eq!(rec.slug(), "debian-12");
    }

    #[test]
    fn variables_file_is_conventional_path() {
        let rec = record("/repo/builds/proxmox/debian/12", "proxmox", "debian", "x");
        assert_eq!(
            rec.variables_file(),
            Path::new("/repo/builds/proxmox/debian/12/variables.auto.pkrvars.hcl")
        );
    }

    #[test]
    fn from_records_sorts_by_provider_category_leaf() {
        let catalog = Catalog::from_records(vec![
            record("/b/vsphere/ubuntu/22", "vsphere", "ubuntu", "c"),
            record("/b/proxmox/windows/2022", "proxmox", "windows", "b"),
            record("/b/proxmox/debian/12", "proxmox", "debian", "a"),
            record("/b/proxmox/debian/11", "proxmox", "debian", "d"),
        ]);

        let leaves: Vec<&str> = catalog.records().iter().map(|r| r.leaf_name()).collect();
        assert_eq!(leaves, vec!["11", "12", "2022", "22"]);
    }

    #[test]
    fn sort_is_case_sensitive() {
        // Uppercase sorts before lowercase in a byte-wise comparison.
        let catalog = Catalog::from_records(vec![
            record("/b/p/os/zeta", "p", "os", "a"),
            record("/b/p/os/Alpha", "p", "os", "b"),
            record("/b/p/os/alpha", "p", "os", "c"),
        ]);

        let leaves: Vec<&str> = catalog.records().iter().map(|r| r.leaf_name()).collect();
        assert_eq!(leaves, vec!["Alpha", "alpha", "zeta"]);
    }
}
