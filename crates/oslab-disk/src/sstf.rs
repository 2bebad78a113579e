//! SSTF: always service the closest remaining request.

use oslab_error::{Result, SimError};
use tracing::trace;

use crate::base::{finish, nearest_any, validate};
use crate::types::{DiskInput, DiskOutput, HeadStatus};

/// Repeatedly remove and service the remaining cylinder nearest to the
/// current head position, on whichever side it lies.
///
/// When two candidates are exactly equidistant the one encountered first in
/// the remaining queue wins; that is a consequence of the scan order, not a
/// documented guarantee.
pub fn sstf(input: &DiskInput) -> Result<DiskOutput> {
    validate(input)?;
    let mut remaining = input.reference_string.clone();
    let mut head_statuses = Vec::with_capacity(remaining.len());

    let mut current = input.starting_cylinder;
    while !remaining.is_empty() {
        let i = nearest_any(current, &remaining)
            .ok_or_else(|| SimError::internal("no nearest cylinder despite pending requests"))?;
        let cylinder = remaining.remove(i);
        trace!(from = current, to = cylinder, "servicing nearest request");
        head_statuses.push(HeadStatus::seek(cylinder));
        current = cylinder;
    }

    Ok(finish(head_statuses, input.clone()))
}
