//! FIFO page replacement.

use oslab_error::{Result, SimError};

use crate::types::{finish, validate, PageRequest, PagingInput, PagingOutput};

/// Replace pages round-robin with a circular pointer.
///
/// The pointer advances by one slot after every eviction and is untouched
/// by hits and empty-frame fills, so the victim order is purely the order
/// in which frames were (re)populated.
pub fn fifo(input: &PagingInput) -> Result<PagingOutput> {
    validate(input)?;
    let mut frames: Vec<Option<String>> = vec![None; input.num_frames];
    let mut requests = Vec::with_capacity(input.reference_string.len());
    let mut pointer = 0usize;

    for reference in &input.reference_string {
        if frames
            .iter()
            .any(|f| f.as_deref() == Some(reference.as_str()))
        {
            requests.push(PageRequest::Hit {
                reference: reference.clone(),
                frames: frames.clone(),
                clock: None,
            });
            continue;
        }

        if let Some(empty) = frames.iter().position(Option::is_none) {
            frames[empty] = Some(reference.clone());
            requests.push(PageRequest::Fault {
                reference: reference.clone(),
                frames: frames.clone(),
                frame: empty,
                clock: None,
            });
            continue;
        }

        let evicted_page = frames[pointer]
            .replace(reference.clone())
            .ok_or_else(|| SimError::internal("replacement pointer at an empty frame"))?;
        requests.push(PageRequest::Eviction {
            reference: reference.clone(),
            frames: frames.clone(),
            frame: pointer,
            evicted_page,
            clock: None,
        });
        pointer = (pointer + 1) % input.num_frames;
    }

    Ok(finish(requests, input.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(refs: &[&str], num_frames: usize) -> PagingInput {
        PagingInput {
            reference_string: refs.iter().map(|s| (*s).to_owned()).collect(),
            num_frames,
        }
    }

    #[test]
    fn textbook_reference_string() {
        let input = input(
            &["7", "0", "1", "2", "0", "3", "0", "4", "2", "3", "0", "3", "2"],
            3,
        );
        let output = fifo(&input).unwrap();
        assert_eq!(output.num_faults, 10);
        assert_eq!(output.num_hits, 3);
        assert_eq!(output.num_faults + output.num_hits, 13);

        // Final frame contents after the last reference.
        let last = output.requests.last().unwrap();
        assert_eq!(
            last.frames(),
            &[
                Some("0".to_owned()),
                Some("2".to_owned()),
                Some("3".to_owned())
            ]
        );
    }

    #[test]
    fn pointer_ignores_hits() {
        // A hit on the page the pointer addresses must not save it.
        let input = input(&["a", "b", "a", "c", "d"], 2);
        let output = fifo(&input).unwrap();
        // a,b fill; hit a; c evicts frame 0 (a) despite the recent hit.
        match &output.requests[3] {
            PageRequest::Eviction {
                frame,
                evicted_page,
                ..
            } => {
                assert_eq!(*frame, 0);
                assert_eq!(evicted_page, "a");
            }
            other => panic!("expected eviction, got {other:?}"),
        }
        // d then evicts frame 1 (b).
        match &output.requests[4] {
            PageRequest::Eviction {
                frame,
                evicted_page,
                ..
            } => {
                assert_eq!(*frame, 1);
                assert_eq!(evicted_page, "b");
            }
            other => panic!("expected eviction, got {other:?}"),
        }
    }

    #[test]
    fn fills_lowest_empty_frame_first() {
        let input = input(&["x", "y"], 3);
        let output = fifo(&input).unwrap();
        assert!(matches!(
            output.requests[0],
            PageRequest::Fault { frame: 0, .. }
        ));
        assert!(matches!(
            output.requests[1],
            PageRequest::Fault { frame: 1, .. }
        ));
    }

    #[test]
    fn zero_frames_rejected() {
        let bad = input(&["a"], 0);
        assert!(matches!(
            fifo(&bad),
            Err(SimError::NonPositiveFrames { .. })
        ));
    }

    #[test]
    fn belady_anomaly_exists() {
        // The classic string where four frames fault more than three.
        let refs = ["1", "2", "3", "4", "1", "2", "5", "1", "2", "3", "4", "5"];
        let three = fifo(&input(&refs, 3)).unwrap();
        let four = fifo(&input(&refs, 4)).unwrap();
        assert_eq!(three.num_faults, 9);
        assert_eq!(four.num_faults, 10);
        assert!(four.num_faults > three.num_faults);
    }
}
