//! Input and output records for the disk-head simulators.

use serde::Serialize;

/// Initial sweep direction for the directional algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward cylinder 0.
    Left,
    /// Toward the last cylinder.
    Right,
}

impl Direction {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// How the head reached a cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeekAction {
    /// Ordinary movement, counted toward the seek distance.
    Seek,
    /// A repositioning move (wraparound); still physical travel, but not
    /// counted as ordinary seek distance.
    Jump,
}

/// One step of the simulation: where the head went and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadStatus {
    pub cylinder: u32,
    pub action: SeekAction,
}

impl HeadStatus {
    pub const fn seek(cylinder: u32) -> Self {
        Self {
            cylinder,
            action: SeekAction::Seek,
        }
    }

    pub const fn jump(cylinder: u32) -> Self {
        Self {
            cylinder,
            action: SeekAction::Jump,
        }
    }
}

/// Caller-supplied description of one scheduling problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiskInput {
    /// Requested cylinders, in arrival order.
    pub reference_string: Vec<u32>,
    /// Total cylinders on the disk; positions are `0..num_cylinders`.
    pub num_cylinders: u32,
    /// Head position before the first request is serviced.
    pub starting_cylinder: u32,
}

/// The serviced schedule plus its derived costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiskOutput {
    /// Every head movement, in order.
    pub head_statuses: Vec<HeadStatus>,
    /// Number of seek actions (jumps excluded).
    pub num_seek_operations: usize,
    /// Cylinders traversed by seek actions only.
    pub seek_distance: u64,
    /// Cylinders traversed by all movement, jumps included.
    pub total_distance: u64,
    /// The input the schedule was computed from (FIFO may have widened
    /// `num_cylinders`).
    pub input: DiskInput,
}
