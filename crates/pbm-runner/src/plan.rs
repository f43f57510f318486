//! Packer command composition.

use std::path::{Path, PathBuf};

use pbm_catalog::BuildRecord;

use crate::error::{Result, RunnerError};

/// Name of the wrapped build tool, resolved through `PATH`.
pub const PACKER_BIN: &str = "packer";

/// One stage of the packer pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `packer init`, optionally with `-upgrade` to force plugin upgrades.
    Init { upgrade: bool },
    Validate,
    Build,
}

impl Stage {
    /// The packer subcommand for this stage.
    pub fn verb(&self) -> &'static str {
        match self {
            Stage::Init { .. } => "init",
            Stage::Validate => "validate",
            Stage::Build => "build",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.verb())
    }
}

/// A fully composed packer invocation: arguments, working directory, and
/// whether execution is real or dry-run. Short-lived; built per stage.
#[derive(Debug, Clone)]
pub struct InvocationPlan {
    pub stage: Stage,
    /// Arguments after the binary name, ending with the positional `.`.
    pub args: Vec<String>,
    /// Always the resolved record's configuration directory.
    pub working_dir: PathBuf,
    pub dry_run: bool,
}

impl InvocationPlan {
    /// Compose the invocation for `stage` against `record`.
    ///
    /// For `validate`/`build`: `-only <source>` first when a source filter
    /// is given, then the variables file (explicit override wins over the
    /// record's conventional file; no flag when neither applies), then any
    /// passthrough arguments verbatim. `init` takes only the optional
    /// `-upgrade`.
    ///
    /// Fails with [`RunnerError::VarsFileNotFound`] when an explicit
    /// override path does not exist, before anything is spawned.
    pub fn new(
        record: &BuildRecord,
        stage: Stage,
        source: Option<&str>,
        vars_file: Option<&Path>,
        extra_args: &[String],
        dry_run: bool,
    ) -> Result<Self> {
        let mut args = vec![stage.verb().to_string()];

        match stage {
            Stage::Init { upgrade } => {
                if upgrade {
                    args.push("-upgrade".to_string());
                }
            }
            Stage::Validate | Stage::Build => {
                if let Some(source) = source {
                    args.push("-only".to_string());
                    args.push(source.to_string());
                }

                match vars_file {
                    Some(path) => {
                        if !path.exists() {
                            return Err(RunnerError::VarsFileNotFound {
                                path: path.to_path_buf(),
                            });
                        }
                        args.push("-var-file".to_string());
                        args.push(path.display().to_string());
                    }
                    None => {
                        let conventional = record.variables_file();
                        if conventional.exists() {
                            args.push("-var-file".to_string());
                            args.push(conventional.display().to_string());
                        }
                    }
                }

                args.extend(extra_args.iter().cloned());
            }
        }

        // Packer operates on the current directory; the working directory
        // carries the actual location.
        args.push(".".to_string());

        Ok(Self {
            stage,
            args,
            working_dir: record.path.clone(),
            dry_run,
        })
    }

    /// The full command line as it would appear in a shell.
    pub fn command_line(&self) -> String {
        let mut parts = vec![PACKER_BIN.to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}
