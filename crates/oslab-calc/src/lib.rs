//! Closed-form file-system and virtual-memory calculators.
//!
//! Unlike the simulators, nothing here loops over a reference string; these
//! are direct computations over exact rational arithmetic, shared with the
//! rest of the workspace through [`oslab_types`].

mod ufs;
mod vmem;

pub use ufs::{calculate_ufs, UfsInput, UfsOutput};
pub use vmem::{solve_vmem_mapping, InvertedPageTable, PageTable, VmemInput, VmemOutput};
