//! The banker's request algorithm.

use oslab_error::{Result, SimError};
use oslab_types::{
    add_vectors, fmt_matrix, fmt_vector, subtract_matrices, subtract_vectors, vector_le, Trace,
    Vector,
};
use serde::Serialize;
use tracing::debug;

use crate::safety::safety;

/// Why a request was refused without running the safety algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// The request exceeds the process's own declared remaining need.
    ExceedsNeed,
    /// The request exceeds what is currently available.
    ExceedsAvailable,
}

/// Verdict and derivation of one request evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct RequestOutcome {
    /// Whether the request can be granted safely.
    pub granted: bool,
    /// Set when the request was refused before simulation.
    pub rejection: Option<RejectionReason>,
    /// The full derivation, including the embedded safety run when the
    /// request passed the preliminary checks.
    pub trace: Trace,
}

/// Evaluate a request from `process` against the current allocation state.
///
/// The request is rejected outright if it exceeds the process's Need or the
/// Available vector (two distinct reasons). Otherwise the grant is applied
/// provisionally — to copies, never to the caller's state — and the verdict
/// is whatever the safety algorithm says about the resulting state.
pub fn bankers_request(
    available: &[i64],
    holding: &[Vector],
    max: &[Vector],
    process: usize,
    request: &[i64],
) -> Result<RequestOutcome> {
    if process >= holding.len() {
        return Err(SimError::ProcessOutOfRange {
            index: process,
            num_processes: holding.len(),
        });
    }

    // Provisional working copies; the caller's state is never touched.
    let mut available: Vector = available.to_vec();
    let mut holding: Vec<Vector> = holding.to_vec();
    let max: Vec<Vector> = max.to_vec();

    let mut need = subtract_matrices(&max, &holding)?;
    let mut trace = Trace::new();
    trace.push(format!(
        "Need matrix:\n= Max - Holding\n= {}",
        fmt_matrix(&need)
    ));

    if !vector_le(request, &need[process])? {
        trace.push(format!(
            "The request of process {process} exceeds its own declared need, i.e. Request > Need[{process}].\nSpecifically: {} > {}",
            fmt_vector(request),
            fmt_vector(&need[process])
        ));
        trace.push("Decision: reject the request.");
        return Ok(RequestOutcome {
            granted: false,
            rejection: Some(RejectionReason::ExceedsNeed),
            trace,
        });
    }
    if !vector_le(request, &available)? {
        trace.push(format!(
            "The request of process {process} exceeds the available resources, i.e. Request > Available.\nSpecifically: {} > {}",
            fmt_vector(request),
            fmt_vector(&available)
        ));
        trace.push("Decision: reject the request.");
        return Ok(RequestOutcome {
            granted: false,
            rejection: Some(RejectionReason::ExceedsAvailable),
            trace,
        });
    }

    trace.push(format!(
        "The request of process {process} is well-formed, i.e. (Request <= Need[{process}]) and (Request <= Available).\nSpecifically:\nRequest={} <= Need[{process}]={}\nRequest={} <= Available={}",
        fmt_vector(request),
        fmt_vector(&need[process]),
        fmt_vector(request),
        fmt_vector(&available)
    ));
    trace.push(
        "Provisionally grant the request and check whether the resulting state is safe. After the provisional grant:",
    );

    available = subtract_vectors(&available, request)?;
    need[process] = subtract_vectors(&need[process], request)?;
    holding[process] = add_vectors(&holding[process], request)?;
    debug!(process, "provisional grant applied, running safety check");

    trace.push(format!("Available vector:\n{}", fmt_vector(&available)));
    trace.push(format!("Need matrix:\n{}", fmt_matrix(&need)));
    trace.push(format!("Holding matrix:\n{}", fmt_matrix(&holding)));

    trace.push("******** Begin safety algorithm ********");
    let safety_outcome = safety(&available, &holding, &max)?;
    trace.extend(safety_outcome.trace);
    trace.push("********* End safety algorithm *********");

    let granted = safety_outcome.safe;
    trace.push(format!(
        "Decision: {}",
        if granted {
            "the request is safe; grant the allocation."
        } else {
            "reject the request."
        }
    ));

    Ok(RequestOutcome {
        granted,
        rejection: None,
        trace,
    })
}
