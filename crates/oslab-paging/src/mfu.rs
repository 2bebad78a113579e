//! MFU page replacement.

use oslab_error::Result;

use crate::engine::{simulate, VictimPolicy};
use crate::types::{PagingInput, PagingOutput};

struct MfuPolicy;

impl VictimPolicy for MfuPolicy {
    fn select_victim(&self, past: &[String], _future: &[String], frames: &[String]) -> usize {
        let mut victim = 0usize;
        let mut best_freq: Option<usize> = None;
        for (i, page) in frames.iter().enumerate() {
            let freq = past.iter().filter(|r| *r == page).count();
            if best_freq.map_or(true, |best| freq > best) {
                best_freq = Some(freq);
                victim = i;
            }
        }
        victim
    }
}

/// Evict the resident page with the largest historical reference count;
/// ties go to the lowest frame index.
pub fn mfu(input: &PagingInput) -> Result<PagingOutput> {
    simulate(input, &MfuPolicy)
}
