//! Packer Build Manager CLI
//!
//! Discovers declarative Packer build configurations under a repository's
//! `builds/` directory and drives `packer init -> validate -> build`
//! against a selected one.

mod cli;
mod commands;
mod error;
mod interactive;
mod prompt;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;
use pbm_catalog::{find_repo_root, Catalog};
use prompt::StdinPrompt;

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let repo_root = match &cli.repo_root {
        Some(root) => root.clone(),
        None => find_repo_root(&std::env::current_dir()?)?,
    };
    let catalog = Catalog::discover(&repo_root);

    if cli.list {
        commands::list::print_catalog(&catalog, &repo_root);
        return Ok(0);
    }

    if cli.os.is_none() && cli.source.is_none() {
        let mut prompt = StdinPrompt;
        return interactive::run_interactive(&catalog, &repo_root, &mut prompt, cli.dry_run);
    }

    commands::run::run_selection(&catalog, cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbm_test_utils::BuildTree;

    fn args_with_root(tree: &BuildTree, rest: &[&str]) -> Cli {
        let root = tree.root().to_str().unwrap().to_string();
        let mut args = vec!["pbm".to_string(), "--repo-root".to_string(), root];
        args.extend(rest.iter().map(|s| s.to_string()));
        Cli::parse_from(args)
    }

    #[test]
    fn list_with_explicit_root_succeeds() {
        let tree = BuildTree::new();
        tree.add_build("proxmox", "debian", "12");

        let cli = args_with_root(&tree, &["--list"]);
        assert_eq!(run(&cli).unwrap(), 0);
    }

    #[test]
    fn selector_dry_run_returns_zero() {
        let tree = BuildTree::new();
        let dir = tree.add_named_build("proxmox", "debian", "12", "debian-12-base");
        tree.write_sources(&dir, &[("proxmox-iso", "debian_12_base")]);

        let cli = args_with_root(&tree, &["--os", "debian-12", "--validate-only", "--dry-run"]);
        assert_eq!(run(&cli).unwrap(), 0);
    }

    #[test]
    fn unknown_selector_is_an_error() {
        let tree = BuildTree::new();
        tree.add_build("proxmox", "debian", "12");

        let cli = args_with_root(&tree, &["--os", "freebsd", "--dry-run"]);
        assert!(run(&cli).is_err());
    }
}
