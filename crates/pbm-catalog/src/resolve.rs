//! Catalog query resolution.
//!
//! Resolution is linear and first-match-wins: catalogs are small, queries
//! are almost always unambiguous in practice (one configuration per OS),
//! and a predictable scan beats ambiguity handling nobody can explain.

use crate::record::{BuildRecord, Catalog};

impl Catalog {
    /// Find a build by case-insensitive substring match.
    ///
    /// Per record, in catalog order, the pattern is checked against the
    /// display name, the full path text, and the `<category>-<leaf>` slug.
    /// The first record satisfying any of the three wins.
    pub fn find_by_pattern(&self, pattern: &str) -> Option<&BuildRecord> {
        let needle = pattern.to_lowercase();
        self.records().iter().find(|record| {
            record.display_name.to_lowercase().contains(&needle)
                || record
                    .path
                    .to_string_lossy()
                    .to_lowercase()
                    .contains(&needle)
                || record.slug().to_lowercase().contains(&needle)
        })
    }

    /// Find the build declaring `query` as a source, returning the record
    /// and the matched identifier.
    ///
    /// Exact and substring containment are checked per record before moving
    /// to the next one, so an earlier record's substring match wins over a
    /// later record's exact match. Callers relying on exact matches should
    /// pass the full identifier.
    pub fn find_by_source(&self, query: &str) -> Option<(&BuildRecord, String)> {
        for record in self.records() {
            if record.sources.iter().any(|source| source == query) {
                return Some((record, query.to_string()));
            }
            if let Some(hit) = record.sources.iter().find(|source| source.contains(query)) {
                return Some((record, hit.clone()));
            }
        }
        None
    }
}
