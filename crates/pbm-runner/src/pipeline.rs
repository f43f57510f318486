//! Pipeline execution and stage sequencing.
//!
//! Exit-status contract: the external tool's own status is propagated
//! verbatim; 130 when the invocation is interrupted; 1 when packer cannot
//! be launched at all. Dry-run reports the plan and returns 0 without
//! spawning anything.

use std::process::Command;

use colored::Colorize;
use pbm_catalog::BuildRecord;
use tracing::{debug, error};

use crate::error::Result;
use crate::plan::{InvocationPlan, Stage, PACKER_BIN};

/// Environment variable enabling packer's verbose diagnostics.
const PACKER_LOG_VAR: &str = "PACKER_LOG";

const EXIT_INTERRUPTED: i32 = 130;
const EXIT_LAUNCH_FAILED: i32 = 1;

impl InvocationPlan {
    /// Report and execute this invocation, blocking until packer exits.
    ///
    /// Returns packer's exit status, [`EXIT_INTERRUPTED`] when the child
    /// was killed by a signal, or [`EXIT_LAUNCH_FAILED`] when it could not
    /// be spawned. Dry-run returns 0 without spawning.
    pub fn execute(&self) -> i32 {
        println!();
        println!("{}", "Executing packer command:".bold());
        println!(
            "  {} {}",
            "Working directory:".cyan(),
            self.working_dir.display()
        );
        println!("  {} {}", "Command:".cyan(), self.command_line());
        println!();

        if self.dry_run {
            println!("{}", "[dry-run] command not executed".yellow());
            return 0;
        }

        debug!(stage = %self.stage, dir = %self.working_dir.display(), "spawning packer");

        let status = Command::new(PACKER_BIN)
            .args(&self.args)
            .current_dir(&self.working_dir)
            .env(PACKER_LOG_VAR, "1")
            .status();

        match status {
            Ok(status) => match status.code() {
                Some(code) => code,
                // No exit code means the child died of a signal. The only
                // one a foreground session delivers here is the user's
                // interrupt.
                None => {
                    eprintln!("\n{}", "Build interrupted by user".yellow());
                    EXIT_INTERRUPTED
                }
            },
            Err(e) => {
                error!(error = %e, "failed to launch {PACKER_BIN}");
                eprintln!(
                    "{} could not launch {}: {}",
                    "error:".red().bold(),
                    PACKER_BIN,
                    e
                );
                EXIT_LAUNCH_FAILED
            }
        }
    }
}

/// Executes composed invocations. The seam exists so sequencing can be
/// tested without a packer binary on the path.
pub trait Executor {
    fn run(&mut self, plan: &InvocationPlan) -> i32;
}

/// The real executor: spawns packer per [`InvocationPlan::execute`].
pub struct PackerExecutor;

impl Executor for PackerExecutor {
    fn run(&mut self, plan: &InvocationPlan) -> i32 {
        plan.execute()
    }
}

/// What to run and how, for one resolved build.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Restrict validate/build to this source (`-only`).
    pub source: Option<String>,
    /// Explicit variables file override.
    pub vars_file: Option<std::path::PathBuf>,
    /// Passthrough arguments forwarded to packer verbatim.
    pub extra_args: Vec<String>,
    /// Run `packer init` and stop.
    pub init_only: bool,
    /// Run `packer init -upgrade` before the rest of the pipeline.
    pub force_init: bool,
    /// Run `packer validate` and stop.
    pub validate_only: bool,
    pub dry_run: bool,
}

impl PipelineOptions {
    fn init_requested(&self) -> bool {
        self.init_only || self.force_init
    }
}

/// Run the requested pipeline stages against `record` with the real
/// packer executor.
pub fn run_pipeline(record: &BuildRecord, options: &PipelineOptions) -> Result<i32> {
    run_pipeline_with(record, options, &mut PackerExecutor)
}

/// Stage sequencing policy:
///
/// 1. When init is requested it runs first; init-only returns its status
///    immediately, success or not.
/// 2. validate-only runs validate and returns its status.
/// 3. Otherwise validate runs, a non-zero status is returned without
///    building, and build's status is returned otherwise.
///
/// No stage is ever retried and no two stages overlap: validate's status
/// is known before build starts.
pub fn run_pipeline_with(
    record: &BuildRecord,
    options: &PipelineOptions,
    executor: &mut dyn Executor,
) -> Result<i32> {
    if options.init_requested() {
        let init = InvocationPlan::new(
            record,
            Stage::Init {
                upgrade: options.force_init,
            },
            None,
            None,
            &[],
            options.dry_run,
        )?;
        let status = executor.run(&init);
        if options.init_only {
            return Ok(status);
        }
    }

    let validate = InvocationPlan::new(
        record,
        Stage::Validate,
        options.source.as_deref(),
        options.vars_file.as_deref(),
        &options.extra_args,
        options.dry_run,
    )?;
    let status = executor.run(&validate);
    if options.validate_only || status != 0 {
        return Ok(status);
    }

    let build = InvocationPlan::new(
        record,
        Stage::Build,
        options.source.as_deref(),
        options.vars_file.as_deref(),
        &options.extra_args,
        options.dry_run,
    )?;
    Ok(executor.run(&build))
}
