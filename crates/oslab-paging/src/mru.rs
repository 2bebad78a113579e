//! MRU page replacement.

use oslab_error::Result;

use crate::engine::{simulate, VictimPolicy};
use crate::types::{PagingInput, PagingOutput};

struct MruPolicy;

impl VictimPolicy for MruPolicy {
    fn select_victim(&self, past: &[String], _future: &[String], frames: &[String]) -> usize {
        let mut victim = 0usize;
        let mut newest: Option<usize> = None;
        for (i, page) in frames.iter().enumerate() {
            match past.iter().rposition(|r| r == page) {
                // Never referenced before: still evicted immediately, first
                // by frame index.
                None => return i,
                Some(last_use) => {
                    let distance = past.len() - last_use;
                    if newest.map_or(true, |best| distance < best) {
                        newest = Some(distance);
                        victim = i;
                    }
                }
            }
        }
        victim
    }
}

/// Evict the resident page most recently referenced; a page with no past
/// reference is evicted immediately, first by frame index.
pub fn mru(input: &PagingInput) -> Result<PagingOutput> {
    simulate(input, &MruPolicy)
}
