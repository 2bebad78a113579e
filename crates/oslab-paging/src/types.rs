//! Input and output records for the page-replacement simulators.

use oslab_error::{Result, SimError};
use serde::Serialize;

/// Caller-supplied description of one simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagingInput {
    /// Referenced page identifiers, in order.
    pub reference_string: Vec<String>,
    /// Number of physical frames available.
    pub num_frames: usize,
}

/// Clock metadata recorded by Second-Chance on every step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockState {
    /// Per-frame reference bits after the step.
    pub reference_bits: Vec<bool>,
    /// Clock-hand position after the step.
    pub hand: usize,
}

/// One processed reference.
///
/// Exactly three shapes exist: a hit, a fault that filled an empty frame,
/// and a fault that evicted a resident page. `frames` is a snapshot taken
/// after the step; its length always equals the configured frame count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageRequest {
    /// The page was already resident.
    Hit {
        reference: String,
        frames: Vec<Option<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        clock: Option<ClockState>,
    },
    /// The page was loaded into an empty frame.
    Fault {
        reference: String,
        frames: Vec<Option<String>>,
        /// Frame that received the page.
        frame: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        clock: Option<ClockState>,
    },
    /// The page displaced a resident page.
    Eviction {
        reference: String,
        frames: Vec<Option<String>>,
        /// Frame that received the page.
        frame: usize,
        /// The page that was displaced.
        evicted_page: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        clock: Option<ClockState>,
    },
}

impl PageRequest {
    pub fn reference(&self) -> &str {
        match self {
            Self::Hit { reference, .. }
            | Self::Fault { reference, .. }
            | Self::Eviction { reference, .. } => reference,
        }
    }

    pub fn frames(&self) -> &[Option<String>] {
        match self {
            Self::Hit { frames, .. }
            | Self::Fault { frames, .. }
            | Self::Eviction { frames, .. } => frames,
        }
    }

    pub fn is_fault(&self) -> bool {
        !matches!(self, Self::Hit { .. })
    }
}

/// The processed reference string plus fault/hit totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagingOutput {
    pub requests: Vec<PageRequest>,
    pub num_faults: usize,
    pub num_hits: usize,
    pub input: PagingInput,
}

/// Fail-fast validation shared by every policy.
pub(crate) fn validate(input: &PagingInput) -> Result<()> {
    if input.num_frames == 0 {
        return Err(SimError::NonPositiveFrames { value: 0 });
    }
    Ok(())
}

/// Derive the totals from the processed requests.
pub(crate) fn finish(requests: Vec<PageRequest>, input: PagingInput) -> PagingOutput {
    let num_faults = requests.iter().filter(|r| r.is_fault()).count();
    let num_hits = requests.len() - num_faults;
    PagingOutput {
        requests,
        num_faults,
        num_hits,
        input,
    }
}
