//! Validation, candidate search, and cost accounting shared by every
//! scheduling policy.

use oslab_error::{Result, SimError};

use crate::types::{Direction, DiskInput, DiskOutput, HeadStatus, SeekAction};

/// Fail-fast validation: positive cylinder count, non-empty reference
/// string, every position on the disk.
pub(crate) fn validate(input: &DiskInput) -> Result<()> {
    if input.num_cylinders == 0 {
        return Err(SimError::NonPositiveCylinders {
            value: i64::from(input.num_cylinders),
        });
    }
    if input.reference_string.is_empty() {
        return Err(SimError::EmptyReferenceString);
    }
    if let Some(&cylinder) = input
        .reference_string
        .iter()
        .find(|&&c| c >= input.num_cylinders)
    {
        return Err(SimError::CylinderOutOfRange {
            cylinder,
            num_cylinders: input.num_cylinders,
        });
    }
    if input.starting_cylinder >= input.num_cylinders {
        return Err(SimError::StartingCylinderOutOfRange {
            cylinder: input.starting_cylinder,
            num_cylinders: input.num_cylinders,
        });
    }
    Ok(())
}

/// Derive the cost counters from a finished schedule.
pub(crate) fn finish(head_statuses: Vec<HeadStatus>, input: DiskInput) -> DiskOutput {
    let num_seek_operations = head_statuses
        .iter()
        .filter(|status| status.action == SeekAction::Seek)
        .count();

    let mut seek_distance = 0u64;
    let mut total_distance = 0u64;
    let mut last_cylinder = input.starting_cylinder;
    for status in &head_statuses {
        let leap = u64::from(last_cylinder.abs_diff(status.cylinder));
        if status.action == SeekAction::Seek {
            seek_distance += leap;
        }
        total_distance += leap;
        last_cylinder = status.cylinder;
    }

    DiskOutput {
        head_statuses,
        num_seek_operations,
        seek_distance,
        total_distance,
        input,
    }
}

/// Index of the remaining cylinder closest to `current`, in either
/// direction. Scans left to right, so on an exact distance tie the earlier
/// entry wins (not a guaranteed policy, just the scan order).
pub(crate) fn nearest_any(current: u32, remaining: &[u32]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (i, &cylinder) in remaining.iter().enumerate() {
        let distance = cylinder.abs_diff(current);
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the remaining cylinder closest to `current` on the given side.
///
/// A cylinder exactly at `current` counts for either side, so duplicate
/// requests at the head position are serviced rather than orbited forever.
pub(crate) fn nearest_toward(
    direction: Direction,
    current: u32,
    remaining: &[u32],
) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (i, &cylinder) in remaining.iter().enumerate() {
        let on_side = match direction {
            Direction::Left => cylinder <= current,
            Direction::Right => cylinder >= current,
        };
        if !on_side {
            continue;
        }
        let distance = cylinder.abs_diff(current);
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_bad_inputs() {
        let base = DiskInput {
            reference_string: vec![10, 20],
            num_cylinders: 100,
            starting_cylinder: 50,
        };
        assert!(validate(&base).is_ok());

        let mut input = base.clone();
        input.num_cylinders = 0;
        assert!(matches!(
            validate(&input),
            Err(SimError::NonPositiveCylinders { .. })
        ));

        let mut input = base.clone();
        input.reference_string.clear();
        assert!(matches!(
            validate(&input),
            Err(SimError::EmptyReferenceString)
        ));

        let mut input = base.clone();
        input.reference_string.push(100);
        assert!(matches!(
            validate(&input),
            Err(SimError::CylinderOutOfRange {
                cylinder: 100,
                num_cylinders: 100,
            })
        ));

        let mut input = base;
        input.starting_cylinder = 100;
        assert!(matches!(
            validate(&input),
            Err(SimError::StartingCylinderOutOfRange { .. })
        ));
    }

    #[test]
    fn nearest_any_prefers_first_on_tie() {
        // 50 and 56 are both 3 away from 53.
        assert_eq!(nearest_any(53, &[50, 56]), Some(0));
        assert_eq!(nearest_any(53, &[56, 50]), Some(0));
        assert_eq!(nearest_any(53, &[]), None);
    }

    #[test]
    fn nearest_toward_respects_side() {
        assert_eq!(nearest_toward(Direction::Left, 53, &[60, 40, 45]), Some(2));
        assert_eq!(nearest_toward(Direction::Right, 53, &[60, 40, 70]), Some(0));
        assert_eq!(nearest_toward(Direction::Right, 53, &[40]), None);
    }

    #[test]
    fn nearest_toward_accepts_current_position() {
        assert_eq!(nearest_toward(Direction::Left, 53, &[60, 53]), Some(1));
        assert_eq!(nearest_toward(Direction::Right, 53, &[53]), Some(0));
    }

    #[test]
    fn cost_accounting_splits_seeks_and_jumps() {
        let input = DiskInput {
            reference_string: vec![10],
            num_cylinders: 200,
            starting_cylinder: 53,
        };
        let statuses = vec![
            HeadStatus::seek(60),
            HeadStatus::jump(0),
            HeadStatus::seek(10),
        ];
        let output = finish(statuses, input);
        assert_eq!(output.num_seek_operations, 2);
        assert_eq!(output.seek_distance, 7 + 10);
        assert_eq!(output.total_distance, 7 + 60 + 10);
    }
}
