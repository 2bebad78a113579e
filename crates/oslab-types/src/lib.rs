//! Shared leaf types for the oslab simulators.
//!
//! Everything here is a small value type used by more than one simulator:
//! resource vectors and matrices with size-checked arithmetic, exact
//! memory-size quantities over rational arithmetic, reference-string
//! parsing, and the [`Trace`] builder that carries a derivation back to the
//! caller.

pub mod decimal;
pub mod matrix;
pub mod memory;
pub mod refstring;
pub mod trace;
pub mod vector;

pub use matrix::{add_matrices, fmt_matrix, matrices_equal, negate_matrix, subtract_matrices, Matrix};
pub use memory::{MemorySize, MemoryUnit};
pub use refstring::Separator;
pub use trace::Trace;
pub use vector::{
    add_vectors, check_same_size, fmt_finish, fmt_vector, negate_vector, subtract_vectors,
    vector_le, vectors_equal, FinishVector, Vector,
};
