//! Validation errors raised by the value-type constructors
//!
//! Every constructor in this crate checks its structural invariants up front
//! and reports the first violation it finds. The codec in `tnsio-io` wraps
//! these into its own error type when imported data fails construction.
//!
//! # Examples
//!
//! ```
//! use tnsio_core::{CoreError, DenseTensor};
//!
//! let err = DenseTensor::from_vec(vec![1.0, 2.0, 3.0], &[2, 2]).unwrap_err();
//! assert!(matches!(err, CoreError::ElementCount { expected: 4, got: 3, .. }));
//! ```

use thiserror::Error;

/// Errors produced while building or validating a tensor value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Shape cannot be empty")]
    EmptyShape,

    #[error("Shape cannot contain zeros: {0:?}")]
    ZeroInShape(Vec<usize>),

    #[error("Shape {shape:?} requires {expected} elements, but got {got}")]
    ElementCount {
        shape: Vec<usize>,
        expected: usize,
        got: usize,
    },

    #[error("Shape {0:?} has more elements than can be addressed")]
    ShapeOverflow(Vec<usize>),

    #[error("Indices and values must have same length: {indices} indices vs {values} values")]
    LengthMismatch { indices: usize, values: usize },

    #[error("Index dimension mismatch: expected {expected}D, got {got}D")]
    IndexDimension { expected: usize, got: usize },

    #[error("Index out of bounds: index {index:?} exceeds shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Invalid rank: {0}")]
    InvalidRank(usize),

    #[error("Kruskal tensor needs at least one factor matrix")]
    NoFactors,

    #[error("Factor matrix {mode} has {got} columns, expected rank {expected}")]
    FactorRank {
        mode: usize,
        expected: usize,
        got: usize,
    },

    #[error("Factor matrix {mode} has no rows")]
    EmptyFactor { mode: usize },
}

/// Result alias for value-type construction
pub type CoreResult<T> = Result<T, CoreError>;

/// Check that a shape is non-empty and strictly positive in every mode
pub fn validate_shape(shape: &[usize]) -> CoreResult<()> {
    if shape.is_empty() {
        return Err(CoreError::EmptyShape);
    }
    if shape.contains(&0) {
        return Err(CoreError::ZeroInShape(shape.to_vec()));
    }
    Ok(())
}

/// Number of elements a shape spans, as long as an array can hold them
///
/// # Errors
///
/// [`CoreError::ShapeOverflow`] when the product leaves `isize` range.
pub fn element_count(shape: &[usize]) -> CoreResult<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .filter(|&count| count <= isize::MAX as usize)
        .ok_or_else(|| CoreError::ShapeOverflow(shape.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_shape() {
        assert!(validate_shape(&[2, 3, 4]).is_ok());
        assert_eq!(validate_shape(&[]), Err(CoreError::EmptyShape));
        assert_eq!(
            validate_shape(&[2, 0]),
            Err(CoreError::ZeroInShape(vec![2, 0]))
        );
    }

    #[test]
    fn test_element_count() {
        assert_eq!(element_count(&[2, 3, 4]), Ok(24));
        assert_eq!(element_count(&[7]), Ok(7));
        assert_eq!(
            element_count(&[usize::MAX, 2]),
            Err(CoreError::ShapeOverflow(vec![usize::MAX, 2]))
        );
        assert!(element_count(&[usize::MAX / 2 + 1, 2]).is_err());
        // fits in usize but not in an array
        assert!(element_count(&[isize::MAX as usize + 1]).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = CoreError::IndexOutOfBounds {
            index: vec![1, 4],
            shape: vec![2, 3],
        };
        assert_eq!(
            err.to_string(),
            "Index out of bounds: index [1, 4] exceeds shape [2, 3]"
        );

        let err = CoreError::FactorRank {
            mode: 1,
            expected: 2,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "Factor matrix 1 has 3 columns, expected rank 2"
        );
    }
}
