//! Optimal (Belady) page replacement.

use oslab_error::Result;

use crate::engine::{simulate, VictimPolicy};
use crate::types::{PagingInput, PagingOutput};

struct OptimalPolicy;

impl VictimPolicy for OptimalPolicy {
    fn select_victim(&self, _past: &[String], future: &[String], frames: &[String]) -> usize {
        let mut victim = 0usize;
        let mut farthest: Option<usize> = None;
        for (i, page) in frames.iter().enumerate() {
            match future.iter().position(|r| r == page) {
                // Never referenced again: nothing can beat it; the first
                // such frame wins.
                None => return i,
                Some(distance) => {
                    if farthest.map_or(true, |best| distance > best) {
                        farthest = Some(distance);
                        victim = i;
                    }
                }
            }
        }
        victim
    }
}

/// Evict the resident page whose next reference lies farthest in the
/// future; a page never referenced again is evicted immediately, first by
/// frame index.
pub fn optimal(input: &PagingInput) -> Result<PagingOutput> {
    simulate(input, &OptimalPolicy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageRequest;

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
        let output = optimal(&input).unwrap();
        assert_eq!(output.num_faults, 7);
        assert_eq!(output.num_hits, 6);
    }

    #[test]
    fn never_used_again_goes_first() {
        // "z" is never referenced again and must be the victim even though
        // other pages have farther next uses.
        let input = input(&["z", "a", "b", "c", "a", "b"], 3);
        let output = optimal(&input).unwrap();
        match &output.requests[3] {
            PageRequest::Eviction {
                frame,
                evicted_page,
                ..
            } => {
                assert_eq!(*frame, 0);
                assert_eq!(evicted_page, "z");
            }
            other => panic!("expected eviction, got {other:?}"),
        }
    }

    #[test]
    fn no_future_use_at_all_takes_frame_zero() {
        // None of a, b, c recurs; the first frame is taken.
        let input = input(&["a", "b", "c", "d"], 3);
        let output = optimal(&input).unwrap();
        assert!(matches!(
            &output.requests[3],
            PageRequest::Eviction { frame: 0, .. }
        ));
    }

    #[test]
    fn never_beaten_by_belady_string() {
        let refs = ["1", "2", "3", "4", "1", "2", "5", "1", "2", "3", "4", "5"];
        let three = optimal(&input(&refs, 3)).unwrap();
        let four = optimal(&input(&refs, 4)).unwrap();
        assert_eq!(three.num_faults, 7);
        assert_eq!(four.num_faults, 6);
        assert!(four.num_faults <= three.num_faults);
    }
}
