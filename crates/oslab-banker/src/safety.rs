//! The safety algorithm.

use oslab_error::Result;
use oslab_types::{
    add_vectors, check_same_size, fmt_finish, fmt_matrix, fmt_vector, subtract_matrices, Trace,
    Vector,
};
use serde::Serialize;
use tracing::debug;

use crate::{all_finished, first_eligible, process_chain, process_list};

/// Verdict and derivation of one safety-algorithm run.
#[derive(Debug, Clone, Serialize)]
pub struct SafetyOutcome {
    /// Whether every process can be driven to completion.
    pub safe: bool,
    /// Discovery order of finishable processes (the safety sequence when
    /// `safe`; a partial chain otherwise).
    pub sequence: Vec<usize>,
    /// Processes that could not finish; empty when `safe`.
    pub unfinished: Vec<usize>,
    /// The full derivation.
    pub trace: Trace,
}

/// Run the safety algorithm over Available / Holding / Max.
///
/// Need is computed as `Max - Holding`; Work starts at Available; Finish
/// starts all-false. Each pass claims the lowest-index unfinished process
/// with `Need[i] <= Work`. The system is safe iff every process finishes.
pub fn safety(available: &[i64], holding: &[Vector], max: &[Vector]) -> Result<SafetyOutcome> {
    let num_processes = check_same_size(holding, max, "Holding[n][m] vs Max[n][m]")?;
    if let Some(first_row) = holding.first() {
        check_same_size(first_row, available, "Holding[0][m] vs Available[m]")?;
    }

    let need = subtract_matrices(max, holding)?;
    let mut work: Vector = available.to_vec();
    let mut finish = vec![false; num_processes];

    let mut trace = Trace::new();
    trace.push(format!(
        "Number of processes: n = {num_processes}\nNumber of resource types: m = {}",
        available.len()
    ));
    trace.push(format!("Work vector:\n{}", fmt_vector(&work)));
    trace.push(format!("Finish vector: {}", fmt_finish(&finish)));
    trace.push(format!("Need matrix:\n= Max - Holding\n= {}", fmt_matrix(&need)));
    trace.push("======== Begin loop ========");

    let mut looped_at_least_once = false;
    let mut sequence = Vec::new();
    loop {
        let Some(i) = first_eligible(&finish, &need, &work, "Need")? else {
            trace.push(
                "No further process i satisfies (Finish[i] == false) && (Need[i] <= Work)",
            );
            break;
        };
        looped_at_least_once = true;
        debug!(process = i, "process can run to completion");
        trace.push(format!(
            "Found process {i} satisfying (Finish[i] == false) && (Need[i] <= Work),\nspecifically {} <= {}",
            fmt_vector(&need[i]),
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
        trace.push(format!("--- Process {i} has finished ---"));
        sequence.push(i);
    }
    trace.push("========= End loop =========");

    if !looped_at_least_once {
        trace.push(
            "No process satisfied (Finish[i] == false) && (Need[i] <= Work) from the start",
        );
    }

    let safe = all_finished(&finish);
    let unfinished: Vec<usize> = finish
        .iter()
        .enumerate()
        .filter(|(_, done)| !**done)
        .map(|(i, _)| i)
        .collect();

    if safe {
        trace.push(format!(
            "Conclusion: the system is safe.\nSafety sequence:\n{}",
            process_chain(&sequence)
        ));
    } else {
        trace.push(format!(
            "Conclusion: the system is not safe.\nProcesses unable to finish: {}",
            process_list(&unfinished)
        ));
    }

    Ok(SafetyOutcome {
        safe,
        sequence,
        unfinished,
        trace,
    })
}
