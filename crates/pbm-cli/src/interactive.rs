//! Interactive selection menu.
//!
//! The whole flow is a pure function over a [`PromptSource`], so the menu
//! logic is tested with scripted input. Entry numbering matches the
//! `--list` output.

use std::path::Path;

use colored::Colorize;
use pbm_catalog::{BuildRecord, Catalog};
use pbm_runner::{run_pipeline, InvocationPlan, PipelineOptions, Stage};

use crate::commands::list::print_catalog;
use crate::error::Result;
use crate::prompt::PromptSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Init,
    Validate,
    Build,
    ValidateBuild,
}

/// Drive the interactive session: pick a build, a source, and an action,
/// then run it. Returns the resulting exit status; quitting at any prompt
/// returns 0.
pub fn run_interactive(
    catalog: &Catalog,
    repo_root: &Path,
    prompt: &mut dyn PromptSource,
    dry_run: bool,
) -> Result<i32> {
    if catalog.is_empty() {
        println!("{}", "No builds found. Nothing to do.".yellow());
        return Ok(0);
    }

    print_catalog(catalog, repo_root);

    let Some(record) = select_build(catalog, prompt)? else {
        return Ok(0);
    };
    println!("{} {}", "Selected:".green(), record.display_name.bold());

    let Some(source) = select_source(record, prompt)? else {
        return Ok(0);
    };
    let Some(action) = select_action(prompt)? else {
        return Ok(0);
    };

    match action {
        Action::Init => {
            let options = PipelineOptions {
                init_only: true,
                force_init: true,
                dry_run,
                ..Default::default()
            };
            Ok(run_pipeline(record, &options)?)
        }
        Action::Validate => {
            let options = PipelineOptions {
                source,
                validate_only: true,
                dry_run,
                ..Default::default()
            };
            Ok(run_pipeline(record, &options)?)
        }
        Action::Build => {
            // Build without a preceding validate, as requested.
            let plan = InvocationPlan::new(
                record,
                Stage::Build,
                source.as_deref(),
                None,
                &[],
                dry_run,
            )?;
            Ok(plan.execute())
        }
        Action::ValidateBuild => {
            let options = PipelineOptions {
                source,
                dry_run,
                ..Default::default()
            };
            Ok(run_pipeline(record, &options)?)
        }
    }
}

/// Prompt for a build number until a valid one is entered. `q` or end of
/// input quits.
fn select_build<'a>(
    catalog: &'a Catalog,
    prompt: &mut dyn PromptSource,
) -> Result<Option<&'a BuildRecord>> {
    loop {
        let Some(line) = prompt.read_line(&format!(
            "Select a build [1-{}] (q to quit): ",
            catalog.len()
        ))?
        else {
            return Ok(None);
        };
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match line.parse::<usize>() {
            Ok(n) if (1..=catalog.len()).contains(&n) => {
                return Ok(catalog.get(n - 1));
            }
            _ => {
                eprintln!("{}", "Invalid selection, try again.".yellow());
            }
        }
    }
}

/// Pick the source to restrict the run to. A build with no declared
/// sources or a single one needs no menu; `0` means all sources. The
/// outer `None` means the user quit, the inner one "no filter".
fn select_source(
    record: &BuildRecord,
    prompt: &mut dyn PromptSource,
) -> Result<Option<Option<String>>> {
    match record.sources.len() {
        0 => Ok(Some(None)),
        1 => {
            println!("{} {}", "Using source:".green(), record.sources[0]);
            Ok(Some(Some(record.sources[0].clone())))
        }
        _ => {
            println!();
            println!("{}", "Sources:".bold());
            println!("   0. all sources");
            for (index, source) in record.sources.iter().enumerate() {
                println!("  {:>2}. {}", index + 1, source);
            }
            loop {
                let Some(line) = prompt.read_line(&format!(
                    "Select a source [0-{}] (q to quit): ",
                    record.sources.len()
                ))?
                else {
                    return Ok(None);
                };
                if line.eq_ignore_ascii_case("q") {
                    return Ok(None);
                }
                match line.parse::<usize>() {
                    Ok(0) => return Ok(Some(None)),
                    Ok(n) if n <= record.sources.len() => {
                        return Ok(Some(Some(record.sources[n - 1].clone())));
                    }
                    _ => {
                        eprintln!("{}", "Invalid selection, try again.".yellow());
                    }
                }
            }
        }
    }
}

/// Prompt for what to do with the selected build. End of input or `q`
/// quits.
fn select_action(prompt: &mut dyn PromptSource) -> Result<Option<Action>> {
    println!();
    println!("{}", "Actions:".bold());
    println!("   1. init (download/upgrade plugins)");
    println!("   2. validate");
    println!("   3. build");
    println!("   4. validate + build");

    loop {
        let Some(line) = prompt.read_line("Select an action [1-4] (q to quit): ")? else {
            return Ok(None);
        };
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match line.as_str() {
            "1" => return Ok(Some(Action::Init)),
            "2" => return Ok(Some(Action::Validate)),
            "3" => return Ok(Some(Action::Build)),
            "4" => return Ok(Some(Action::ValidateBuild)),
            _ => {
                eprintln!("{}", "Invalid selection, try again.".yellow());
            }
        }
    }
}
