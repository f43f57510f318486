//! Resolution and pipeline glue for non-interactive runs

use colored::Colorize;
use pbm_catalog::Catalog;
use pbm_runner::{run_pipeline, PipelineOptions};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Resolve the build selected by `--source` or `--os` and run the
/// requested pipeline stages against it. Returns the pipeline's exit
/// status.
pub fn run_selection(catalog: &Catalog, cli: &Cli) -> Result<i32> {
    let (record, source) = if let Some(query) = &cli.source {
        let Some((record, matched)) = catalog.find_by_source(query) else {
            return Err(CliError::user(format!(
                "source '{query}' not found. Run 'pbm --list' to see available sources."
            )));
        };
        println!(
            "{} {}",
            "Found source in:".green(),
            record.display_name.bold()
        );
        (record, Some(matched))
    } else if let Some(pattern) = &cli.os {
        let Some(record) = catalog.find_by_pattern(pattern) else {
            return Err(CliError::user(format!(
                "no build matching '{pattern}'. Run 'pbm --list' to see available builds."
            )));
        };
        println!("{} {}", "Found build:".green(), record.display_name.bold());
        (record, None)
    } else {
        return Err(CliError::user("must specify --os or --source"));
    };

    let options = PipelineOptions {
        source,
        vars_file: cli.vars.clone(),
        extra_args: cli.packer_args.clone(),
        init_only: cli.init_only,
        force_init: cli.force_init,
        validate_only: cli.validate_only,
        dry_run: cli.dry_run,
    };

    Ok(run_pipeline(record, &options)?)
}
