//! Build configuration discovery and resolution for Packer Build Manager.
//!
//! Walks a repository's `builds/` tree, turns every directory containing a
//! `build.pkr.hcl` into a [`BuildRecord`], and resolves user queries (an
//! OS/pattern string or a source identifier) against the resulting
//! [`Catalog`].
//!
//! Metadata extraction is best-effort by design: a partially configured
//! build directory still surfaces in the catalog with whatever metadata
//! could be read.

pub mod discover;
pub mod error;
pub mod hcl;
pub mod record;
mod resolve;

pub use discover::{find_repo_root, BUILDS_DIR};
pub use error::{Error, Result};
pub use record::{BuildRecord, Catalog, UNCLASSIFIED, VARIABLES_FILE};
