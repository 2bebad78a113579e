//! C-SCAN: sweep one way, wrap to the far extreme, keep sweeping the same
//! way.

use oslab_error::Result;

use crate::base::{finish, nearest_toward, validate};
use crate::types::{Direction, DiskInput, DiskOutput, HeadStatus};

/// Sweep in `direction`; when the side is exhausted, seek to the extreme in
/// that direction, then jump (uncounted as seek cost) to the opposite
/// extreme and resume sweeping in the same direction.
pub fn cscan(input: &DiskInput, direction: Direction) -> Result<DiskOutput> {
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

        let (near_extreme, far_extreme) = match direction {
            Direction::Right => (input.num_cylinders - 1, 0),
            Direction::Left => (0, input.num_cylinders - 1),
        };
        head_statuses.push(HeadStatus::seek(near_extreme));
        head_statuses.push(HeadStatus::jump(far_extreme));
        current = far_extreme;
    }

    Ok(finish(head_statuses, input.clone()))
}
