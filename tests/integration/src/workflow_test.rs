//! End-to-end test for the library slice: discovery -> resolution ->
//! pipeline composition, over a real on-disk build tree.

use pbm_catalog::{find_repo_root, Catalog};
use pbm_runner::{run_pipeline, InvocationPlan, PipelineOptions, Stage};
use pbm_test_utils::BuildTree;
use pretty_assertions::assert_eq;

/// A repository with builds across two providers and mixed metadata.
fn setup_build_repo() -> BuildTree {
    let tree = BuildTree::new();
    tree.init_git();

    let debian = tree.add_named_build("proxmox", "debian", "12", "debian-12-base");
    tree.write_sources(&debian, &[("proxmox-iso", "debian_12_base")]);
    tree.write_variables(&debian);

    let windows = tree.add_named_build("proxmox", "windows", "2022", "windows-2022");
    tree.write_sources(
        &windows,
        &[
            ("proxmox-iso", "windows_2022_std"),
            ("proxmox-iso", "windows_2022_core"),
        ],
    );

    tree.add_build("vsphere", "ubuntu", "22-04");

    tree
}

#[test]
fn discovery_orders_and_populates_the_catalog() {
    let tree = setup_build_repo();

    let nested = tree.builds_dir().join("proxmox/debian/12");
    let root = find_repo_root(&nested).unwrap();
    assert_eq!(root, tree.root());

    let catalog = Catalog::discover(&root);
    assert_eq!(catalog.len(), 3);

    let slugs: Vec<String> = catalog.records().iter().map(|r| r.slug()).collect();
    assert_eq!(slugs, vec!["debian-12", "windows-2022", "ubuntu-22-04"]);
}

#[test]
fn source_resolution_feeds_plan_composition() {
    let tree = setup_build_repo();
    let catalog = Catalog::discover(tree.root());

    // Substring query resolves to the full identifier.
    let (record, matched) = catalog.find_by_source("windows_2022_core").unwrap();
    assert_eq!(record.display_name, "windows-2022");
    assert_eq!(matched, "proxmox-iso.windows_2022_core");

    let plan =
        InvocationPlan::new(record, Stage::Validate, Some(&matched), None, &[], true).unwrap();
    assert_eq!(
        plan.command_line(),
        "packer validate -only proxmox-iso.windows_2022_core ."
    );
    assert_eq!(plan.working_dir, record.path);
}

#[test]
fn pattern_resolution_picks_up_conventional_variables() {
    let tree = setup_build_repo();
    let catalog = Catalog::discover(tree.root());

    let record = catalog.find_by_pattern("debian-12").unwrap();
    let plan = InvocationPlan::new(record, Stage::Build, None, None, &[], true).unwrap();

    let line = plan.command_line();
    assert!(line.contains("-var-file"));
    assert!(line.contains("variables.auto.pkrvars.hcl"));
}

#[test]
fn full_dry_run_pipeline_over_discovered_build() {
    let tree = setup_build_repo();
    let catalog = Catalog::discover(tree.root());

    let (record, matched) = catalog.find_by_source("proxmox-iso.debian_12_base").unwrap();
    let options = PipelineOptions {
        source: Some(matched),
        force_init: true,
        dry_run: true,
        ..Default::default()
    };

    // init -upgrade, validate, build, all dry-run.
    let status = run_pipeline(record, &options).unwrap();
    assert_eq!(status, 0);
}

#[test]
fn build_without_metadata_still_runs() {
    let tree = setup_build_repo();
    let catalog = Catalog::discover(tree.root());

    // The vsphere build has no sources file and no build name; the leaf
    // directory stands in for both.
    let record = catalog.find_by_pattern("ubuntu").unwrap();
    assert_eq!(record.display_name, "22-04");
    assert!(record.sources.is_empty());

    let options = PipelineOptions {
        validate_only: true,
        dry_run: true,
        ..Default::default()
    };
    assert_eq!(run_pipeline(record, &options).unwrap(), 0);
}
