//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Packer Build Manager - discover and run Packer builds
///
/// Without a selector (--os or --source) an interactive menu over the
/// discovered builds is shown.
///
/// Examples:
///   pbm --list
///   pbm --os debian-12
///   pbm --source proxmox-iso.debian_12_base
///   pbm --os debian-12 --vars custom.auto.pkrvars.hcl
///   pbm --os debian-12 --validate-only --dry-run
#[derive(Parser, Debug)]
#[command(name = "pbm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// List all discovered builds
    #[arg(short, long)]
    pub list: bool,

    /// Select a build by OS/pattern (e.g. "debian-12")
    #[arg(long)]
    pub os: Option<String>,

    /// Select a build by exact or partial source identifier
    /// (e.g. "proxmox-iso.debian_12_base")
    #[arg(short, long)]
    pub source: Option<String>,

    /// Path to a custom variables file
    #[arg(short, long)]
    pub vars: Option<PathBuf>,

    /// Only validate, don't build
    #[arg(long)]
    pub validate_only: bool,

    /// Only run packer init
    #[arg(long)]
    pub init_only: bool,

    /// Force re-initialization (packer init -upgrade)
    #[arg(long)]
    pub force_init: bool,

    /// Show commands without executing them
    #[arg(long)]
    pub dry_run: bool,

    /// Repository root (auto-detected from the working directory if omitted)
    #[arg(long)]
    pub repo_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Additional arguments passed through to packer
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub packer_args: Vec<String>,
}
