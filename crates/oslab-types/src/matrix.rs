//! Process × resource matrices.
//!
//! A matrix is a list of rows, one per process, each row a [`Vector`] over
//! the resource types. Binary operations require equal row counts and equal
//! row lengths; the row-level checks come from the vector operations.

use oslab_error::Result;

use crate::vector::{add_vectors, check_same_size, subtract_vectors, Vector};

/// One row per process, one column per resource type.
pub type Matrix = Vec<Vector>;

/// Element-wise sum of two matrices.
pub fn add_matrices(a: &[Vector], b: &[Vector]) -> Result<Matrix> {
    check_same_size(a, b, &format!("{} vs {}", fmt_matrix(a), fmt_matrix(b)))?;
    a.iter()
        .zip(b)
        .map(|(ra, rb)| add_vectors(ra, rb))
        .collect()
}

/// Element-wise difference `a - b`.
pub fn subtract_matrices(a: &[Vector], b: &[Vector]) -> Result<Matrix> {
    check_same_size(a, b, &format!("{} vs {}", fmt_matrix(a), fmt_matrix(b)))?;
    a.iter()
        .zip(b)
        .map(|(ra, rb)| subtract_vectors(ra, rb))
        .collect()
}

/// Element-wise negation.
pub fn negate_matrix(a: &[Vector]) -> Matrix {
    a.iter()
        .map(|row| row.iter().map(|x| -x).collect())
        .collect()
}

/// Whether both matrices agree in shape and every cell.
pub fn matrices_equal(a: &[Vector], b: &[Vector]) -> Result<bool> {
    check_same_size(a, b, &format!("{} vs {}", fmt_matrix(a), fmt_matrix(b)))?;
    for (ra, rb) in a.iter().zip(b) {
        if !crate::vector::vectors_equal(ra, rb)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Render a matrix for trace output, one row per line.
pub fn fmt_matrix(m: &[Vector]) -> String {
    let rows: Vec<String> = m
        .iter()
        .map(|row| {
            row.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    format!("[\n{}\n]", rows.join("\n"))
}
