//! C-LOOK: like C-SCAN, but wrap directly to the farthest-side request.

use oslab_error::{Result, SimError};

use crate::base::{finish, nearest_toward, validate};
use crate::types::{Direction, DiskInput, DiskOutput, HeadStatus};

/// Sweep in `direction`; when the side is exhausted, jump straight to the
/// remaining request nearest the opposite extreme (servicing it as part of
/// the jump) and resume sweeping in the same direction. The head never
/// visits the physical extremes.
pub fn clook(input: &DiskInput, direction: Direction) -> Result<DiskOutput> {
    validate(input)?;
    let mut remaining = input.reference_string.clone();
    let mut head_statuses = Vec::new();
    let mut current = input.starting_cylinder;

    while !remaining.is_empty() {
        while let Some(i) = nearest_toward(direction, current, &remaining) {
            let cylinder = remaining.remove(i);
            head_statuses.push(HeadStatus::seek(cylinder));
            current = cylinder;
        }
        if remaining.is_empty() {
            break;
        }

        // Probe from the far extreme to find the first request of the next
        // pass; the wrap move itself is a jump that services that request.
        let probe = match direction {
            Direction::Right => 0,
            Direction::Left => input.num_cylinders - 1,
        };
        let i = nearest_toward(direction, probe, &remaining).ok_or_else(|| {
            SimError::internal("no wrap target despite pending requests")
        })?;
        let cylinder = remaining.remove(i);
        head_statuses.push(HeadStatus::jump(cylinder));
        current = cylinder;
    }

    Ok(finish(head_statuses, input.clone()))
}
