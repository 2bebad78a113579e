//! Public API facade for the oslab simulators.
//!
//! Each algorithm is a pure function: callers build a typed input, get back
//! a typed output holding both the verdict and a complete step trace, and
//! render it however they like. Nothing is shared between invocations.

pub use oslab_banker::{
    bankers_request, detect_deadlock, safety, DeadlockOutcome, RejectionReason, RequestOutcome,
    SafetyOutcome,
};
pub use oslab_calc::{
    calculate_ufs, solve_vmem_mapping, InvertedPageTable, PageTable, UfsInput, UfsOutput,
    VmemInput, VmemOutput,
};
pub use oslab_disk::{
    clook, cscan, fifo as disk_fifo, look, scan, sstf, Direction, DiskAlgorithm, DiskInput,
    DiskOutput, HeadStatus, SeekAction,
};
pub use oslab_error::{ErrorCategory, Result, SimError};
pub use oslab_paging::{
    fifo as paging_fifo, lfu, lfu_then_lru, lru, mfu, mru, optimal, run_for_frame_range,
    second_chance, ClockState, PageRequest, PagingAlgorithm, PagingInput, PagingOutput,
};
pub use oslab_types::{MemorySize, MemoryUnit, Separator, Trace};
