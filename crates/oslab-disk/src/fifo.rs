//! FIFO: service requests strictly in arrival order.

use oslab_error::Result;

use crate::base::{finish, validate};
use crate::types::{DiskInput, DiskOutput, HeadStatus};

/// Service the reference string in input order, every move an ordinary seek.
///
/// FIFO is the one policy that never consults the disk geometry, so instead
/// of rejecting references beyond the declared cylinder count it widens
/// `num_cylinders` to `max(declared, max(reference) + 1)` and echoes the
/// widened value in the output.
pub fn fifo(input: &DiskInput) -> Result<DiskOutput> {
    let mut input = input.clone();
    if let Some(&max_cylinder) = input.reference_string.iter().max() {
        input.num_cylinders = input.num_cylinders.max(max_cylinder.saturating_add(1));
    }
    validate(&input)?;

    let head_statuses: Vec<HeadStatus> = input
        .reference_string
        .iter()
        .map(|&cylinder| HeadStatus::seek(cylinder))
        .collect();

    Ok(finish(head_statuses, input))
}
