//! LOOK: like SCAN, but reverse at the last request instead of the extreme.

use oslab_error::{Result, SimError};

use crate::base::{finish, nearest_toward, validate};
use crate::types::{Direction, DiskInput, DiskOutput, HeadStatus};

/// Sweep in `direction` servicing nearest-on-that-side requests; once the
/// side is empty simply reverse — the head never travels past the last
/// request toward the physical extreme.
pub fn look(input: &DiskInput, direction: Direction) -> Result<DiskOutput> {
    validate(input)?;
    let mut remaining = input.reference_string.clone();
    let mut head_statuses = Vec::new();
    let mut current = input.starting_cylinder;
    let mut direction = direction;

    let mut empty_sweeps = 0u32;
    while !remaining.is_empty() {
        let mut swept = 0usize;
        while let Some(i) = nearest_toward(direction, current, &remaining) {
            let cylinder = remaining.remove(i);
            head_statuses.push(HeadStatus::seek(cylinder));
            current = cylinder;
            swept += 1;
        }
        if remaining.is_empty() {
            break;
        }

        // Every pending request lies on one side of the head, so two empty
        // sweeps in a row mean the search itself is broken.
        empty_sweeps = if swept == 0 { empty_sweeps + 1 } else { 0 };
        if empty_sweeps >= 2 {
            return Err(SimError::internal(
                "no serviceable request on either side despite pending requests",
            ));
        }
        direction = direction.flipped();
    }

    Ok(finish(head_statuses, input.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook_input() -> DiskInput {
        DiskInput {
            reference_string: vec![98, 183, 37, 122, 14, 124, 65, 67],
            num_cylinders: 200,
            starting_cylinder: 53,
        }
    }

    #[test]
    fn reverses_at_last_request() {
        let output = look(&textbook_input(), Direction::Right).unwrap();
        let visited: Vec<u32> = output.head_statuses.iter().map(|s| s.cylinder).collect();
        assert_eq!(visited, vec![65, 67, 98, 122, 124, 183, 37, 14]);
        assert_eq!(output.seek_distance, 299);
        assert_eq!(output.total_distance, 299);
    }

    #[test]
    fn left_first_variant() {
        let output = look(&textbook_input(), Direction::Left).unwrap();
        let visited: Vec<u32> = output.head_statuses.iter().map(|s| s.cylinder).collect();
        assert_eq!(visited, vec![37, 14, 65, 67, 98, 122, 124, 183]);
        // 53 down to 14, then up to 183.
        assert_eq!(output.seek_distance, 39 + 169);
    }

    #[test]
    fn immediate_reverse_when_nothing_on_first_side() {
        let input = DiskInput {
            reference_string: vec![60, 70],
            num_cylinders: 100,
            starting_cylinder: 50,
        };
        let output = look(&input, Direction::Left).unwrap();
        let visited: Vec<u32> = output.head_statuses.iter().map(|s| s.cylinder).collect();
        assert_eq!(visited, vec![60, 70]);
    }
}
