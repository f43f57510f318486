//! Packer pipeline orchestration for Packer Build Manager.
//!
//! Takes a resolved [`BuildRecord`](pbm_catalog::BuildRecord) and drives
//! the `packer init -> validate -> build` sequence against it: flag
//! composition, working-directory scoping, dry-run, and stage-dependent
//! short-circuiting. Every invocation blocks until packer exits; stages
//! never overlap.

pub mod error;
mod pipeline;
mod plan;

pub use error::{Result, RunnerError};
pub use pipeline::{run_pipeline, run_pipeline_with, Executor, PackerExecutor, PipelineOptions};
pub use plan::{InvocationPlan, Stage, PACKER_BIN};
