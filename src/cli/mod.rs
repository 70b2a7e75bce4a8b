//! Command-line layer: argument parsing, planning and workflow orchestration.

pub mod args;
pub mod orchestration;
pub mod plan;

pub use args::Args;
pub use orchestration::{bump_all, execute_plan, BumpWorkflow, RunOutcome, WorkflowResult};
pub use plan::Plan;
