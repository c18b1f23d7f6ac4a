//! Domain Entities
//!
//! Per-invocation entities produced by the planning pipeline.
//! - `RunPlan` / `PrunePlan` / `RestorePlan` - what to act on
//! - `Invocation` - one engine command line
//! - `ExecutionResult` - captured output of a successful invocation

mod invocation;
mod plan;

pub use invocation::{ExecutionResult, Invocation};
pub use plan::{PrunePlan, RestorePlan, RunPlan};
