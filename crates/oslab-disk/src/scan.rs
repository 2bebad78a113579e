//! SCAN (elevator): sweep to the physical extreme, then reverse.

use oslab_error::Result;

use crate::base::{finish, nearest_toward, validate};
use crate::types::{Direction, DiskInput, DiskOutput, HeadStatus};

/// Sweep in `direction`, servicing the nearest request on that side until
/// none remain there; then seek to the physical extreme (0 or the last
/// cylinder) and reverse. The extreme visit is an ordinary seek even when
/// no request lives there.
pub fn scan(input: &DiskInput, direction: Direction) -> Result<DiskOutput> {
    validate(input)?;
    let mut remaining = input.reference_string.clone();
    let mut head_statuses = Vec::new();
    let mut current = input.starting_cylinder;
    let mut direction = direction;

    while !remaining.is_empty() {
        while let Some(i) = nearest_toward(direction, current, &remaining) {
            let cylinder = remaining.remove(i);
            head_statuses.push(HeadStatus::seek(cylinder));
            current = cylinder;
        }
        if remaining.is_empty() {
            break;
        }

        // Nothing left on this side: run out to the extreme and turn around.
        let extreme = match direction {
            Direction::Right => input.num_cylinders - 1,
            Direction::Left => 0,
        };
        head_statuses.push(HeadStatus::seek(extreme));
        current = extreme;
        direction = direction.flipped();
    }

    Ok(finish(head_statuses, input.clone()))
}
