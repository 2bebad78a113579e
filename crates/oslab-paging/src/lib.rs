//! Page-replacement simulators.
//!
//! Every policy processes the reference string left to right over a
//! fixed-size frame array and emits one [`PageRequest`] per reference: a
//! hit, a fault that filled an empty frame, or a fault that evicted a
//! resident page. Outputs carry the full record sequence plus fault/hit
//! totals, and `faults + hits` always equals the reference-string length.

mod engine;
mod fifo;
mod lfu;
mod lru;
mod mfu;
mod mru;
mod optimal;
mod second_chance;
mod types;

pub use fifo::fifo;
pub use lfu::{lfu, lfu_then_lru};
pub use lru::lru;
pub use mfu::mfu;
pub use mru::mru;
pub use optimal::optimal;
pub use second_chance::second_chance;
pub use types::{ClockState, PageRequest, PagingInput, PagingOutput};

use std::str::FromStr;

use oslab_error::{Result, SimError};
use serde::Serialize;

/// Every selectable replacement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PagingAlgorithm {
    Fifo,
    Optimal,
    Lru,
    Mru,
    Lfu,
    LfuThenLru,
    Mfu,
    SecondChance,
}

impl PagingAlgorithm {
    pub const ALL: [Self; 8] = [
        Self::Fifo,
        Self::Optimal,
        Self::Lru,
        Self::Mru,
        Self::Lfu,
        Self::LfuThenLru,
        Self::Mfu,
        Self::SecondChance,
    ];

    /// Stable identifier used in saved form state and on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Optimal => "optimal",
            Self::Lru => "lru",
            Self::Mru => "mru",
            Self::Lfu => "lfu",
            Self::LfuThenLru => "lfu_then_lru",
            Self::Mfu => "mfu",
            Self::SecondChance => "second_chance",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO (First-In-First-Out)",
            Self::Optimal => "Optimal",
            Self::Lru => "LRU (Least Recently Used)",
            Self::Mru => "MRU (Most Recently Used)",
            Self::Lfu => "LFU (Least Frequently Used)",
            Self::LfuThenLru => "LFU then LRU",
            Self::Mfu => "MFU (Most Frequently Used)",
            Self::SecondChance => "Second Chance/Clock Algorithm",
        }
    }

    /// Run this policy over the given input.
    pub fn run(self, input: &PagingInput) -> Result<PagingOutput> {
        match self {
            Self::Fifo => fifo(input),
            Self::Optimal => optimal(input),
            Self::Lru => lru(input),
            Self::Mru => mru(input),
            Self::Lfu => lfu(input),
            Self::LfuThenLru => lfu_then_lru(input),
            Self::Mfu => mfu(input),
            Self::SecondChance => second_chance(input),
        }
    }
}

impl FromStr for PagingAlgorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.id() == s)
            .ok_or_else(|| SimError::UnknownAlgorithm { id: s.to_owned() })
    }
}

/// Run one policy across an inclusive range of frame counts, producing one
/// output per count. This is the batch mode used to compare fault counts
/// as memory grows (and to spot Belady's anomaly).
pub fn run_for_frame_range(
    algorithm: PagingAlgorithm,
    reference_string: &[String],
    start_frames: usize,
    end_frames: usize,
) -> Result<Vec<PagingOutput>> {
    if start_frames > end_frames {
        return Err(SimError::InvalidFrameRange {
            start: start_frames,
            end: end_frames,
        });
    }
    (start_frames..=end_frames)
        .map(|num_frames| {
            algorithm.run(&PagingInput {
                reference_string: reference_string.to_vec(),
                num_frames,
            })
        })
        .collect()
}
