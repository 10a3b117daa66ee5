//! Dense N-dimensional tensor
//!
//! [`DenseTensor`] wraps a dynamic-dimensional `f64` array from
//! `scirs2_core::ndarray_ext`. Elements are always kept in row-major
//! (C-contiguous) order, which is also the order the `.tns` codec reads and
//! writes them in.
//!
//! # Examples
//!
//! ```
//! use tnsio_core::DenseTensor;
//!
//! let data: Vec<f64> = (1..=6).map(f64::from).collect();
//! let tensor = DenseTensor::from_vec(data, &[2, 3]).unwrap();
//! assert_eq!(tensor.shape(), &[2, 3]);
//! assert_eq!(tensor[&[1, 0]], 4.0);
//! ```

use crate::error::{element_count, validate_shape, CoreError, CoreResult};
use scirs2_core::ndarray_ext::{Array, ArrayView, IxDyn};

/// Dense tensor of `f64` values in row-major order
#[derive(Clone, Debug, PartialEq)]
pub struct DenseTensor {
    data: Array<f64, IxDyn>,
}

impl DenseTensor {
    /// Create a tensor from a flat vector in row-major order
    ///
    /// # Errors
    ///
    /// Fails if the shape is empty, contains a zero, spans more elements than
    /// an array can address, or does not account for exactly `vec.len()`
    /// elements.
    pub fn from_vec(vec: Vec<f64>, shape: &[usize]) -> CoreResult<Self> {
        validate_shape(shape)?;
        let expected = element_count(shape)?;
        if vec.len() != expected {
            return Err(CoreError::ElementCount {
                shape: shape.to_vec(),
                expected,
                got: vec.len(),
            });
        }
        let got = vec.len();
        let data =
            Array::from_shape_vec(IxDyn(shape), vec).map_err(|_| CoreError::ElementCount {
                shape: shape.to_vec(),
                expected,
                got,
            })?;
        Ok(Self { data })
    }

    /// Wrap an existing dynamic-dimensional array
    ///
    /// The array is copied into standard layout if it is not already, so
    /// [`iter`](Self::iter) always walks row-major order.
    pub fn from_array(array: Array<f64, IxDyn>) -> CoreResult<Self> {
        validate_shape(array.shape())?;
        let data = if array.is_standard_layout() {
            array
        } else {
            array.as_standard_layout().into_owned()
        };
        Ok(Self { data })
    }

    /// Create a tensor of zeros
    pub fn zeros(shape: &[usize]) -> CoreResult<Self> {
        validate_shape(shape)?;
        element_count(shape)?;
        Ok(Self {
            data: Array::zeros(IxDyn(shape)),
        })
    }

    /// Shape of the tensor
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Number of modes
    pub fn order(&self) -> usize {
        self.data.ndim()
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a validated tensor; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.data.iter()
    }

    /// Copy of the elements in row-major order
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    /// Immutable view of the underlying array
    pub fn view(&self) -> ArrayView<'_, f64, IxDyn> {
        self.data.view()
    }

    /// Borrow the underlying array
    pub fn as_array(&self) -> &Array<f64, IxDyn> {
        &self.data
    }

    /// Element at a multi-index, or `None` when out of bounds
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        if index.len() != self.order() {
            return None;
        }
        self.data.get(IxDyn(index)).copied()
    }

    /// Exact element-wise equality including shape
    pub fn is_equal(&self, other: &Self) -> bool {
        self == other
    }
}

impl std::ops::Index<&[usize]> for DenseTensor {
    type Output = f64;
    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[IxDyn(index)]
    }
}

impl<const N: usize> std::ops::Index<&[usize; N]> for DenseTensor {
    type Output = f64;
    fn index(&self, index: &[usize; N]) -> &Self::Output {
        &self.data[IxDyn(index)]
    }
}
