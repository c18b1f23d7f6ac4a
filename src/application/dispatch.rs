//! Concurrent dispatch of engine invocations
//!
//! Every invocation runs on its own scoped thread. All threads are joined
//! before any outcome is inspected, so a slow invocation is never abandoned
//! because a sibling failed. The reported failure is the one with the
//! lowest index, whatever order the threads actually finished in.

use std::thread;
use std::time::Instant;

use crate::domain::entities::{ExecutionResult, Invocation};
use crate::domain::ports::{CommandError, CommandExecutor};
use crate::error::{BackupError, BackupResult};

/// Run all `invocations` concurrently and collect their results in order.
pub fn execute_invocations<X>(
    invocations: &[Invocation],
    executor: &X,
) -> BackupResult<Vec<ExecutionResult>>
where
    X: CommandExecutor + ?Sized,
{
    let outcomes: Vec<thread::Result<Result<String, CommandError>>> = thread::scope(|scope| {
        let handles: Vec<_> = invocations
            .iter()
            .map(|invocation| scope.spawn(move || run_one(invocation, executor)))
            .collect();

        handles.into_iter().map(|handle| handle.join()).collect()
    });

    let mut settled = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            Ok(result) => settled.push(result),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    let mut results = Vec::with_capacity(settled.len());
    for (invocation, outcome) in invocations.iter().zip(settled) {
        match outcome {
            Ok(output) => results.push(ExecutionResult {
                target: invocation.target.clone(),
                output,
            }),
            Err(source) => {
                return Err(BackupError::Execution {
                    target: invocation.target.clone(),
                    source,
                })
            }
        }
    }
    Ok(results)
}

fn run_one<X>(invocation: &Invocation, executor: &X) -> Result<String, CommandError>
where
    X: CommandExecutor + ?Sized,
{
    tracing::info!(
        target_profile = %invocation.target,
        executable = %invocation.executable,
        args = invocation.args.len(),
        "starting invocation"
    );
    tracing::debug!(command = %invocation.command_line(), "invocation command line");

    let started = Instant::now();
    let outcome = executor.run(&invocation.executable, &invocation.args);
    let elapsed = started.elapsed();

    match &outcome {
        Ok(_) => tracing::info!(
            target_profile = %invocation.target,
            ?elapsed,
            "invocation finished"
        ),
        Err(e) => tracing::error!(
            target_profile = %invocation.target,
            ?elapsed,
            error = %e,
            "invocation failed"
        ),
    }
    outcome
}
