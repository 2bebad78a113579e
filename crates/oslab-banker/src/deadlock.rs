//! Deadlock detection over outstanding requests.

use oslab_error::Result;
use oslab_types::{add_vectors, fmt_finish, fmt_vector, Trace, Vector};
use serde::Serialize;
use tracing::debug;

use crate::{all_finished, first_eligible, process_chain, process_list};

/// Verdict and derivation of one detection run.
#[derive(Debug, Clone, Serialize)]
pub struct DeadlockOutcome {
    /// Whether the system is deadlocked.
    pub deadlocked: bool,
    /// Order in which processes were shown able to complete (covers every
    /// process when no deadlock exists).
    pub completion_order: Vec<usize>,
    /// The deadlocked set; empty when `deadlocked` is false.
    pub deadlocked_processes: Vec<usize>,
    /// The full derivation.
    pub trace: Trace,
}

/// Run deadlock detection over Available / Holding / Request.
///
/// `request` holds each process's still-outstanding demands (not its
/// declared maximum). Finish is seeded `true` for every process holding
/// nothing at all — a process with an all-zero Holding row cannot be part
/// of a deadlock since reclaiming it frees nothing. The loop then folds in
/// any unfinished process whose Request row fits inside Work.
pub fn detect_deadlock(
    available: &[i64],
    holding: &[Vector],
    request: &[Vector],
) -> Result<DeadlockOutcome> {
    // Working copies; the caller's state stays untouched.
    let mut work: Vector = available.to_vec();
    let mut finish: Vec<bool> = holding
        .iter()
        .map(|row| row.iter().all(|cell| *cell == 0))
        .collect();

    let mut trace = Trace::new();
    trace.push(format!("Work vector:\n{}", fmt_vector(&work)));
    trace.push(format!("Finish vector:\n{}", fmt_finish(&finish)));
    trace.push("======== Begin loop ========");

    let mut looped_at_least_once = false;
    let mut completion_order = Vec::new();
    loop {
        let Some(i) = first_eligible(&finish, request, &work, "Request")? else {
            trace.push(
                "No further process i satisfies (Finish[i] == false) && (Request[i] <= Work)",
            );
            break;
        };
        looped_at_least_once = true;
        debug!(process = i, "assuming process completes and releases holdings");
        trace.push(format!(
            "Found process {i} satisfying (Finish[i] == false) && (Request[i] <= Work),\nspecifically {} <= {}",
            fmt_vector(&request[i]),
            fmt_vector(&work)
        ));

        let new_work = add_vectors(&work, &holding[i])?;
        finish[i] = true;
        trace.push(format!(
            "Work vector:\n= Work + Holding[{i}]\n= {} + {}\n= {}",
            fmt_vector(&work),
            fmt_vector(&holding[i]),
            fmt_vector(&new_work)
        ));
        work = new_work;
        trace.push(format!("Finish vector: {}", fmt_finish(&finish)));
        trace.push(format!("--- Process {i} is assumed to have finished ---"));
        completion_order.push(i);
    }
    trace.push("========= End loop =========");

    if !looped_at_least_once {
        trace.push(
            "No process satisfied (Finish[i] == false) && (Request[i] <= Work) from the start",
        );
    }

    let deadlocked = !all_finished(&finish);
    let deadlocked_processes: Vec<usize> = finish
        .iter()
        .enumerate()
        .filter(|(_, done)| !**done)
        .map(|(i, _)| i)
        .collect();

    if deadlocked {
        trace.push(format!(
            "Conclusion: the system is deadlocked.\nDeadlocked processes: {}",
            process_list(&deadlocked_processes)
        ));
    } else {
        trace.push(format!(
            "Conclusion: the system is not deadlocked.\nA chain letting every process finish:\n{}",
            process_chain(&completion_order)
        ));
    }

    Ok(DeadlockOutcome {
        deadlocked,
        completion_order,
        deadlocked_processes,
        trace,
    })
}
