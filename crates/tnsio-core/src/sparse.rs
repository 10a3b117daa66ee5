//! Coordinate-list (COO) sparse tensor
//!
//! [`SparseTensor`] stores a list of `(coordinate, value)` entries together
//! with the tensor shape. Entries keep their insertion order and duplicates
//! are kept as separate entries; nothing here sorts or merges them. Reads
//! through [`SparseTensor::get`] and [`SparseTensor::to_dense`] treat
//! duplicates additively.
//!
//! # Format
//!
//! For an N-dimensional sparse tensor:
//! - `indices`: `Vec<Vec<usize>>`, each inner vec one 0-based coordinate
//! - `values`: `Vec<f64>`, the value of each entry
//! - `shape`: the extent of each mode
//!
//! # Examples
//!
//! ```
//! use tnsio_core::SparseTensor;
//!
//! let indices = vec![vec![0, 1], vec![1, 2], vec![2, 0]];
//! let values = vec![2.5, 3.0, 1.5];
//! let sparse = SparseTensor::new(indices, values, vec![3, 4]).unwrap();
//!
//! assert_eq!(sparse.nnz(), 3);
//! assert_eq!(sparse.get(&[1, 2]), Some(3.0));
//! assert_eq!(sparse.get(&[0, 0]), Some(0.0));
//! ```

use crate::dense::DenseTensor;
use crate::error::{element_count, validate_shape, CoreError, CoreResult};
use std::collections::BTreeMap;

/// Sparse tensor in coordinate-list form
#[derive(Debug, Clone, PartialEq)]
pub struct SparseTensor {
    /// 0-based coordinates, one `Vec` of length `order` per entry
    indices: Vec<Vec<usize>>,

    /// Value of each entry
    values: Vec<f64>,

    /// Extent of each mode
    shape: Vec<usize>,
}

impl SparseTensor {
    /// Create a sparse tensor from 0-based coordinates and values
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Indices and values have different lengths
    /// - The shape is empty or contains zeros
    /// - A coordinate has the wrong number of components
    /// - A coordinate component is out of bounds
    pub fn new(indices: Vec<Vec<usize>>, values: Vec<f64>, shape: Vec<usize>) -> CoreResult<Self> {
        if indices.len() != values.len() {
            return Err(CoreError::LengthMismatch {
                indices: indices.len(),
                values: values.len(),
            });
        }
        validate_shape(&shape)?;
        for index in &indices {
            check_index(index, &shape)?;
        }

        Ok(Self {
            indices,
            values,
            shape,
        })
    }

    /// Create a sparse tensor with no entries
    pub fn zeros(shape: Vec<usize>) -> CoreResult<Self> {
        validate_shape(&shape)?;
        Ok(Self {
            indices: Vec::new(),
            values: Vec::new(),
            shape,
        })
    }

    /// Build from the non-zero elements of a dense tensor, in row-major order
    pub fn from_dense(dense: &DenseTensor) -> Self {
        let shape = dense.shape().to_vec();
        let mut indices = Vec::new();
        let mut values = Vec::new();

        for (flat_idx, &value) in dense.iter().enumerate() {
            if value == 0.0 {
                continue;
            }
            let mut multi_idx = vec![0; shape.len()];
            let mut remaining = flat_idx;
            for (dim, &size) in shape.iter().enumerate().rev() {
                multi_idx[dim] = remaining % size;
                remaining /= size;
            }
            indices.push(multi_idx);
            values.push(value);
        }

        Self {
            indices,
            values,
            shape,
        }
    }

    /// Number of stored entries (duplicates counted separately)
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Shape of the tensor
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of modes
    pub fn order(&self) -> usize {
        self.shape.len()
    }

    /// Coordinates of the stored entries
    pub fn indices(&self) -> &[Vec<usize>] {
        &self.indices
    }

    /// Values of the stored entries
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate `(coordinate, value)` pairs in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&[usize], f64)> + '_ {
        self.indices
            .iter()
            .map(Vec::as_slice)
            .zip(self.values.iter().copied())
    }

    /// Append an entry
    ///
    /// Duplicates are accepted and kept as a separate entry.
    pub fn push(&mut self, index: Vec<usize>, value: f64) -> CoreResult<()> {
        check_index(&index, &self.shape)?;
        self.indices.push(index);
        self.values.push(value);
        Ok(())
    }

    /// Value at a coordinate, summing duplicate entries
    ///
    /// Returns `Some(0.0)` for in-bounds coordinates with no entry and
    /// `None` for coordinates outside the shape.
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        check_index(index, &self.shape).ok()?;
        Some(
            self.entries()
                .filter(|(idx, _)| *idx == index)
                .map(|(_, value)| value)
                .sum(),
        )
    }

    /// Expand into a dense tensor
    ///
    /// # Complexity
    ///
    /// Time: O(nnz + ∏ᵢ shape\[i\])
    ///
    /// # Errors
    ///
    /// [`CoreError::ShapeOverflow`] if the dense form cannot be addressed.
    pub fn to_dense(&self) -> CoreResult<DenseTensor> {
        let total_size = element_count(&self.shape)?;
        let mut data = vec![0.0; total_size];

        for (idx, value) in self.entries() {
            data[self.linear_index(idx)] += value;
        }

        DenseTensor::from_vec(data, &self.shape)
    }

    /// Semantic equality: same shape and the same value at every coordinate
    ///
    /// Entry order, duplicate splitting and explicit zeros do not matter.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.shape == other.shape && self.canonical() == other.canonical()
    }

    fn linear_index(&self, idx: &[usize]) -> usize {
        let mut linear_idx = 0;
        let mut stride = 1;
        for (dim, &coord) in idx.iter().enumerate().rev() {
            linear_idx += coord * stride;
            stride *= self.shape[dim];
        }
        linear_idx
    }

    /// Sorted, duplicate-summed entries with zeros dropped
    fn canonical(&self) -> Vec<(&[usize], f64)> {
        let mut merged: BTreeMap<&[usize], f64> = BTreeMap::new();
        for (idx, value) in self.entries() {
            *merged.entry(idx).or_insert(0.0) += value;
        }
        merged.into_iter().filter(|(_, v)| *v != 0.0).collect()
    }
}

fn check_index(index: &[usize], shape: &[usize]) -> CoreResult<()> {
    if index.len() != shape.len() {
        return Err(CoreError::IndexDimension {
            expected: shape.len(),
            got: index.len(),
        });
    }
    if index.iter().zip(shape).any(|(&coord, &size)| coord >= size) {
        return Err(CoreError::IndexOutOfBounds {
            index: index.to_vec(),
            shape: shape.to_vec(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_creation() {
        let indices = vec![vec![0, 1], vec![1, 2], vec![2, 0]];
        let values = vec![2.5, 3.0, 1.5];

        let sparse = SparseTensor::new(indices, values, vec![3, 4]).unwrap();
        assert_eq!(sparse.nnz(), 3);
        assert_eq!(sparse.shape(), &[3, 4]);
        assert_eq!(sparse.order(), 2);
    }

    #[test]
    fn test_sparse_validation() {
        let err = SparseTensor::new(vec![vec![0, 0]], vec![1.0, 2.0], vec![2, 2]).unwrap_err();
        assert!(matches!(err, CoreError::LengthMismatch { .. }));

        let err = SparseTensor::new(vec![vec![0, 0, 0]], vec![1.0], vec![2, 2]).unwrap_err();
        assert_eq!(
            err,
            CoreError::IndexDimension {
                expected: 2,
                got: 3
            }
        );

        let err = SparseTensor::new(vec![vec![0, 2]], vec![1.0], vec![2, 2]).unwrap_err();
        assert!(matches!(err, CoreError::IndexOutOfBounds { .. }));

        assert!(SparseTensor::zeros(vec![]).is_err());
    }

    #[test]
    fn test_duplicates_preserved() {
        let indices = vec![vec![1, 1], vec![0, 0], vec![1, 1]];
        let values = vec![1.0, 2.0, 4.0];
        let sparse = SparseTensor::new(indices, values, vec![2, 2]).unwrap();

        assert_eq!(sparse.nnz(), 3);
        assert_eq!(sparse.indices()[0], vec![1, 1]);
        assert_eq!(sparse.indices()[1], vec![0, 0]);
        assert_eq!(sparse.get(&[1, 1]), Some(5.0));
    }

    #[test]
    fn test_push() {
        let mut sparse = SparseTensor::zeros(vec![3, 3]).unwrap();
        sparse.push(vec![0, 0], 1.0).unwrap();
        sparse.push(vec![1, 1], 2.0).unwrap();
        assert!(sparse.push(vec![3, 0], 1.0).is_err());

        assert_eq!(sparse.nnz(), 2);
    }

    #[test]
    fn test_to_dense() {
        let indices = vec![vec![0, 1], vec![1, 0], vec![2, 2]];
        let values = vec![1.0, 2.0, 3.0];
        let sparse = SparseTensor::new(indices, values, vec![3, 3]).unwrap();

        let dense = sparse.to_dense().unwrap();
        assert_eq!(dense.shape(), &[3, 3]);
        assert_eq!(dense[&[0, 1]], 1.0);
        assert_eq!(dense[&[1, 0]], 2.0);
        assert_eq!(dense[&[2, 2]], 3.0);
        assert_eq!(dense[&[0, 0]], 0.0);
    }

    #[test]
    fn test_to_dense_huge_shape() {
        let mut sparse = SparseTensor::zeros(vec![usize::MAX, 2]).unwrap();
        sparse.push(vec![7, 1], 1.0).unwrap();
        assert_eq!(
            sparse.to_dense().unwrap_err(),
            CoreError::ShapeOverflow(vec![usize::MAX, 2])
        );
    }

    #[test]
    fn test_from_dense() {
        let dense = DenseTensor::from_vec(
            vec![0.0, 1.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 3.0],
            &[3, 3],
        )
        .unwrap();

        let sparse = SparseTensor::from_dense(&dense);
        assert_eq!(sparse.nnz(), 3);
        assert_eq!(sparse.indices(), &[vec![0, 1], vec![1, 0], vec![2, 2]]);
        assert_eq!(sparse.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_is_equal_ignores_entry_layout() {
        let a = SparseTensor::new(
            vec![vec![0, 0], vec![1, 1]],
            vec![1.0, 4.0],
            vec![2, 2],
        )
        .unwrap();
        let b = SparseTensor::new(
            vec![vec![1, 1], vec![0, 0], vec![1, 1], vec![0, 1]],
            vec![3.0, 1.0, 1.0, 0.0],
            vec![2, 2],
        )
        .unwrap();
        let c = SparseTensor::new(vec![vec![0, 0]], vec![1.0], vec![2, 2]).unwrap();

        assert!(a.is_equal(&b));
        assert!(!a.is_equal(&c));
        assert_ne!(a, b);
    }
}
