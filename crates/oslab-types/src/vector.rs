//! Resource vectors with size-checked element-wise arithmetic.
//!
//! A vector has one entry per resource type. Every binary operation demands
//! equal lengths and fails with [`SimError::SizeMismatch`] naming both
//! operands; nothing is ever truncated or padded.

use oslab_error::{Result, SimError};

/// One entry per resource type.
pub type Vector = Vec<i64>;

/// One entry per process; `true` once the process is proven able to finish.
pub type FinishVector = Vec<bool>;

/// Verify that two slices have the same length, returning that length.
///
/// `context` names the operands for the error message, e.g.
/// `"Finish[n] vs Need[n]"`.
pub fn check_same_size<T, U>(a: &[T], b: &[U], context: &str) -> Result<usize> {
    if a.len() != b.len() {
        return Err(SimError::size_mismatch(context));
    }
    Ok(a.len())
}

fn value_context(a: &[i64], b: &[i64]) -> String {
    format!("{} vs {}", fmt_vector(a), fmt_vector(b))
}

/// Element-wise sum.
pub fn add_vectors(a: &[i64], b: &[i64]) -> Result<Vector> {
    check_same_size(a, b, &value_context(a, b))?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Element-wise difference `a - b`.
pub fn subtract_vectors(a: &[i64], b: &[i64]) -> Result<Vector> {
    check_same_size(a, b, &value_context(a, b))?;
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

/// Element-wise negation.
pub fn negate_vector(a: &[i64]) -> Vector {
    a.iter().map(|x| -x).collect()
}

/// Whether `a[i] <= b[i]` for every `i`.
pub fn vector_le(a: &[i64], b: &[i64]) -> Result<bool> {
    check_same_size(a, b, &value_context(a, b))?;
    Ok(a.iter().zip(b).all(|(x, y)| x <= y))
}

/// Whether `a[i] == b[i]` for every `i`.
pub fn vectors_equal(a: &[i64], b: &[i64]) -> Result<bool> {
    check_same_size(a, b, &value_context(a, b))?;
    Ok(a.iter().zip(b).all(|(x, y)| x == y))
}

/// Render a vector for trace output: `[ 3 3 2 ]`.
pub fn fmt_vector(v: &[i64]) -> String {
    let cells: Vec<String> = v.iter().map(ToString::to_string).collect();
    format!("[ {} ]", cells.join(" "))
}

/// Render a finish vector for trace output: `[ T F T ]`.
pub fn fmt_finish(v: &[bool]) -> String {
    let cells: Vec<&str> = v.iter().map(|b| if *b { "T" } else { "F" }).collect();
    format!("[ {} ]", cells.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_subtract() {
        assert_eq!(add_vectors(&[1, 2, 3], &[4, 5, 6]).unwrap(), vec![5, 7, 9]);
        assert_eq!(
            subtract_vectors(&[4, 5, 6], &[1, 2, 3]).unwrap(),
            vec![3, 3, 3]
        );
    }

    #[test]
    fn negate() {
        assert_eq!(negate_vector(&[1, -2, 0]), vec![-1, 2, 0]);
    }

    #[test]
    fn comparisons() {
        assert!(vector_le(&[1, 2], &[1, 3]).unwrap());
        assert!(!vector_le(&[2, 2], &[1, 3]).unwrap());
        assert!(vectors_equal(&[1, 2], &[1, 2]).unwrap());
        assert!(!vectors_equal(&[1, 2], &[2, 1]).unwrap());
    }

    #[test]
    fn size_mismatch_names_operands() {
        let err = add_vectors(&[1, 2], &[1]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "operands must be of the same size (context: [ 1 2 ] vs [ 1 ])"
        );
    }

    #[test]
    fn named_context() {
        let err = check_same_size(&[true], &[1, 2], "Finish[n] vs Need[n]").unwrap_err();
        assert!(err.to_string().contains("Finish[n] vs Need[n]"));
    }

    #[test]
    fn formatting() {
        assert_eq!(fmt_vector(&[3, 3, 2]), "[ 3 3 2 ]");
        assert_eq!(fmt_vector(&[]), "[  ]");
        assert_eq!(fmt_finish(&[true, false]), "[ T F ]");
    }
}
