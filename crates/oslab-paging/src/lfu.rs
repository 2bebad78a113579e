//! LFU page replacement, with an optional least-recently-used tie-break.

use oslab_error::Result;

use crate::engine::{simulate, VictimPolicy};
use crate::types::{PagingInput, PagingOutput};

struct LfuPolicy {
    /// Break frequency ties by recency instead of frame index.
    lru_tiebreak: bool,
}

impl VictimPolicy for LfuPolicy {
    fn select_victim(&self, past: &[String], _future: &[String], frames: &[String]) -> usize {
        let mut victim = 0usize;
        let mut best_freq = usize::MAX;
        let mut best_distance = 0usize;
        for (i, page) in frames.iter().enumerate() {
            let freq = past.iter().filter(|r| *r == page).count();
            let distance = past
                .iter()
                .rposition(|r| r == page)
                .map_or(0, |last_use| past.len() - last_use);

            let wins = freq < best_freq
                || (freq == best_freq && self.lru_tiebreak && distance > best_distance);
            if wins {
                best_freq = freq;
                best_distance = distance;
                victim = i;
            }
        }
        victim
    }
}

/// Evict the resident page with the smallest historical reference count;
/// ties go to the lowest frame index.
pub fn lfu(input: &PagingInput) -> Result<PagingOutput> {
    simulate(
        input,
        &LfuPolicy {
            lru_tiebreak: false,
        },
    )
}

/// LFU, but frequency ties go to the least recently used of the tied pages.
pub fn lfu_then_lru(input: &PagingInput) -> Result<PagingOutput> {
    simulate(input, &LfuPolicy { lru_tiebreak: true })
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

    fn evicted(output: &PagingOutput, position: usize) -> &str {
        match &output.requests[position] {
            PageRequest::Eviction { evicted_page, .. } => evicted_page,
            other => panic!("expected eviction at {position}, got {other:?}"),
        }
    }

    #[test]
    fn evicts_least_frequent() {
        let refs = ["1", "1", "2", "2", "2", "3", "1", "4"];
        let output = lfu(&input(&refs, 2)).unwrap();
        // At "3": counts are 1×2, 2×3 — evict 1.
        assert_eq!(evicted(&output, 5), "1");
        // At "1": counts are 3×1, 2×3 — evict 3.
        assert_eq!(evicted(&output, 6), "3");
    }

    #[test]
    fn frequency_tie_goes_to_lowest_frame() {
        let refs = ["1", "1", "2", "2", "2", "3", "1", "4"];
        let output = lfu(&input(&refs, 2)).unwrap();
        // At "4": counts are 1×3, 2×3 — tied; frame 0 (page 1) loses.
        assert_eq!(evicted(&output, 7), "1");
    }

    #[test]
    fn lru_variant_breaks_tie_by_recency() {
        let refs = ["1", "1", "2", "2", "2", "3", "1", "4"];
        let output = lfu_then_lru(&input(&refs, 2)).unwrap();
        // Same tie, but 2 was used longer ago than 1.
        assert_eq!(evicted(&output, 7), "2");
    }

    #[test]
    fn variants_agree_without_ties() {
        let refs = ["a", "a", "b", "c", "a", "b", "d"];
        let plain = lfu(&input(&refs, 3)).unwrap();
        let tiebreak = lfu_then_lru(&input(&refs, 3)).unwrap();
        assert_eq!(plain.num_faults, tiebreak.num_faults);
    }
}
