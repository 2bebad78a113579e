//! LRU page replacement.

use oslab_error::Result;

use crate::engine::{simulate, VictimPolicy};
use crate::types::{PagingInput, PagingOutput};

struct LruPolicy;

impl VictimPolicy for LruPolicy {
    fn select_victim(&self, past: &[String], _future: &[String], frames: &[String]) -> usize {
        let mut victim = 0usize;
        let mut oldest: Option<usize> = None;
        for (i, page) in frames.iter().enumerate() {
            match past.iter().rposition(|r| r == page) {
                // Never referenced before: evict immediately, first by
                // frame index.
                None => return i,
                Some(last_use) => {
                    let distance = past.len() - last_use;
                    if oldest.map_or(true, |best| distance > best) {
                        oldest = Some(distance);
                        victim = i;
                    }
                }
            }
        }
        victim
    }
}

/// Evict the resident page least recently referenced; a page with no past
/// reference at all is evicted immediately, first by frame index.
pub fn lru(input: &PagingInput) -> Result<PagingOutput> {
    simulate(input, &LruPolicy)
}
