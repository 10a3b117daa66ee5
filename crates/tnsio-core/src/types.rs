//! Variant tags and the closed sum over the four tensor kinds
//!
//! - [`VariantTag`] names a kind and owns its on-disk keyword
//! - [`TensorData`] owns a value of any kind (what import returns)
//! - [`TensorRef`] borrows a value of any kind (what export consumes)
//!
//! Every consumer dispatches with one exhaustive `match`, so adding a kind
//! means touching exactly one arm per component.
//!
//! # Examples
//!
//! ```
//! use tnsio_core::{DenseTensor, Matrix, TensorData, VariantTag};
//!
//! let dense = TensorData::from(DenseTensor::zeros(&[2, 2]).unwrap());
//! let matrix = TensorData::from(Matrix::zeros((2, 2)));
//!
//! // Both are two-dimensional, but they are different kinds
//! assert_eq!(dense.tag(), VariantTag::Dense);
//! assert_eq!(matrix.tag(), VariantTag::Matrix);
//! assert_eq!(dense.shape().as_slice(), matrix.shape().as_slice());
//! ```

use crate::dense::DenseTensor;
use crate::kruskal::KruskalTensor;
use crate::sparse::SparseTensor;
use scirs2_core::ndarray_ext::Array2;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Inline up to 6 modes; higher orders spill to the heap.
pub type Shape = SmallVec<[usize; 6]>;

/// A bare two-dimensional array, stored as its own kind on disk
pub type Matrix = Array2<f64>;

/// The four kinds of tensor value the codec understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantTag {
    /// Dense tensor, keyword `tensor`
    Dense,
    /// Coordinate-list sparse tensor, keyword `sptensor`
    Sparse,
    /// Kruskal tensor, keyword `ktensor`
    Kruskal,
    /// Bare matrix, keyword `matrix`
    Matrix,
}

impl VariantTag {
    /// All tags, in declaration order
    pub const ALL: [VariantTag; 4] = [
        VariantTag::Dense,
        VariantTag::Sparse,
        VariantTag::Kruskal,
        VariantTag::Matrix,
    ];

    /// The keyword that opens a record of this kind
    pub fn keyword(self) -> &'static str {
        match self {
            VariantTag::Dense => "tensor",
            VariantTag::Sparse => "sptensor",
            VariantTag::Kruskal => "ktensor",
            VariantTag::Matrix => "matrix",
        }
    }
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Error returned when a keyword names no known kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant tag '{}'", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for VariantTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VariantTag::ALL
            .into_iter()
            .find(|tag| tag.keyword() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

/// An owned tensor value of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum TensorData {
    Dense(DenseTensor),
    Sparse(SparseTensor),
    Kruskal(KruskalTensor),
    Matrix(Matrix),
}

impl TensorData {
    pub fn tag(&self) -> VariantTag {
        self.view().tag()
    }

    /// Borrow as a [`TensorRef`]
    pub fn view(&self) -> TensorRef<'_> {
        match self {
            TensorData::Dense(t) => TensorRef::Dense(t),
            TensorData::Sparse(t) => TensorRef::Sparse(t),
            TensorData::Kruskal(t) => TensorRef::Kruskal(t),
            TensorData::Matrix(m) => TensorRef::Matrix(m),
        }
    }

    pub fn shape(&self) -> Shape {
        self.view().shape()
    }

    /// Kind-aware equality
    ///
    /// Values of different kinds are never equal, even when they describe
    /// the same numbers.
    pub fn is_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (TensorData::Dense(a), TensorData::Dense(b)) => a.is_equal(b),
            (TensorData::Sparse(a), TensorData::Sparse(b)) => a.is_equal(b),
            (TensorData::Kruskal(a), TensorData::Kruskal(b)) => a.is_equal(b),
            (TensorData::Matrix(a), TensorData::Matrix(b)) => a == b,
            _ => false,
        }
    }

    pub fn as_dense(&self) -> Option<&DenseTensor> {
        match self {
            TensorData::Dense(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_sparse(&self) -> Option<&SparseTensor> {
        match self {
            TensorData::Sparse(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_kruskal(&self) -> Option<&KruskalTensor> {
        match self {
            TensorData::Kruskal(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            TensorData::Matrix(m) => Some(m),
            _ => None,
        }
    }

    pub fn into_dense(self) -> Option<DenseTensor> {
        match self {
            TensorData::Dense(t) => Some(t),
            _ => None,
        }
    }

    pub fn into_sparse(self) -> Option<SparseTensor> {
        match self {
            TensorData::Sparse(t) => Some(t),
            _ => None,
        }
    }

    pub fn into_kruskal(self) -> Option<KruskalTensor> {
        match self {
            TensorData::Kruskal(t) => Some(t),
            _ => None,
        }
    }

    pub fn into_matrix(self) -> Option<Matrix> {
        match self {
            TensorData::Matrix(m) => Some(m),
            _ => None,
        }
    }
}

impl From<DenseTensor> for TensorData {
    fn from(t: DenseTensor) -> Self {
        TensorData::Dense(t)
    }
}

impl From<SparseTensor> for TensorData {
    fn from(t: SparseTensor) -> Self {
        TensorData::Sparse(t)
    }
}

impl From<KruskalTensor> for TensorData {
    fn from(t: KruskalTensor) -> Self {
        TensorData::Kruskal(t)
    }
}

impl From<Matrix> for TensorData {
    fn from(m: Matrix) -> Self {
        TensorData::Matrix(m)
    }
}

/// A borrowed tensor value of any kind
#[derive(Debug, Clone, Copy)]
pub enum TensorRef<'a> {
    Dense(&'a DenseTensor),
    Sparse(&'a SparseTensor),
    Kruskal(&'a KruskalTensor),
    Matrix(&'a Matrix),
}

impl<'a> TensorRef<'a> {
    pub fn tag(&self) -> VariantTag {
        match self {
            TensorRef::Dense(_) => VariantTag::Dense,
            TensorRef::Sparse(_) => VariantTag::Sparse,
            TensorRef::Kruskal(_) => VariantTag::Kruskal,
            TensorRef::Matrix(_) => VariantTag::Matrix,
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            TensorRef::Dense(t) => Shape::from_slice(t.shape()),
            TensorRef::Sparse(t) => Shape::from_slice(t.shape()),
            TensorRef::Kruskal(t) => Shape::from_vec(t.shape()),
            TensorRef::Matrix(m) => Shape::from_slice(m.shape()),
        }
    }

    /// Copy into an owned [`TensorData`]
    pub fn to_data(&self) -> TensorData {
        match *self {
            TensorRef::Dense(t) => TensorData::Dense(t.clone()),
            TensorRef::Sparse(t) => TensorData::Sparse(t.clone()),
            TensorRef::Kruskal(t) => TensorData::Kruskal(t.clone()),
            TensorRef::Matrix(m) => TensorData::Matrix(m.clone()),
        }
    }
}

impl<'a> From<&'a DenseTensor> for TensorRef<'a> {
    fn from(t: &'a DenseTensor) -> Self {
        TensorRef::Dense(t)
    }
}

impl<'a> From<&'a SparseTensor> for TensorRef<'a> {
    fn from(t: &'a SparseTensor) -> Self {
        TensorRef::Sparse(t)
    }
}

impl<'a> From<&'a KruskalTensor> for TensorRef<'a> {
    fn from(t: &'a KruskalTensor) -> Self {
        TensorRef::Kruskal(t)
    }
}

impl<'a> From<&'a Matrix> for TensorRef<'a> {
    fn from(m: &'a Matrix) -> Self {
        TensorRef::Matrix(m)
    }
}

impl<'a> From<&'a TensorData> for TensorRef<'a> {
    fn from(t: &'a TensorData) -> Self {
        t.view()
    }
}
