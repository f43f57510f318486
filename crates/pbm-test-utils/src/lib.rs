//! Shared test fixtures for Packer Build Manager crates.

pub mod tree;

pub use tree::BuildTree;
