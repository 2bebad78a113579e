//! Resource-allocation analyzers: the safety algorithm, the banker's
//! request algorithm, and deadlock detection.
//!
//! All three operate on an Available vector plus per-process matrices and
//! share the same inner loop: repeatedly find the lowest-index unfinished
//! process whose demand fits inside the Work vector, fold its Holding row
//! into Work, and mark it finished. They differ in which matrix expresses
//! the demand and in how the Finish vector is seeded.
//!
//! Every analyzer copies its input before touching it and returns a full
//! derivation trace next to the verdict.

mod deadlock;
mod request;
mod safety;

pub use deadlock::{detect_deadlock, DeadlockOutcome};
pub use request::{bankers_request, RejectionReason, RequestOutcome};
pub use safety::{safety, SafetyOutcome};

use oslab_error::Result;
use oslab_types::{check_same_size, vector_le, Vector};

/// Index of the first unfinished process whose `demand` row fits in `work`,
/// scanning in process order so the lowest index always wins.
///
/// `demand_name` names the matrix ("Need" or "Request") for error contexts.
fn first_eligible(
    finish: &[bool],
    demand: &[Vector],
    work: &[i64],
    demand_name: &str,
) -> Result<Option<usize>> {
    let n = check_same_size(
        finish,
        demand,
        &format!("Finish[n] vs {demand_name}[n]"),
    )?;
    if let Some(first_row) = demand.first() {
        check_same_size(
            first_row,
            work,
            &format!("{demand_name}[n][m] vs Work[m]"),
        )?;
    }

    for i in 0..n {
        if !finish[i] && vector_le(&demand[i], work)? {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

fn all_finished(finish: &[bool]) -> bool {
    finish.iter().all(|f| *f)
}

fn process_list(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| format!("P{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn process_chain(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| format!("P{i}"))
        .collect::<Vec<_>>()
        .join(" -> ")
}
