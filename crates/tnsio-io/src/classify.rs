//! Which variant does an exported value belong to?
//!
//! Export accepts any `'static` value and decides its variant by runtime
//! type. Anything outside the four kinds (and their [`TensorData`] sum) is
//! rejected with its type name.

use crate::error::{TnsResult, UnsupportedTypeError};
use std::any::{type_name, Any};
use tnsio_core::{
    DenseTensor, KruskalTensor, Matrix, SparseTensor, TensorData, TensorRef, VariantTag,
};

/// Borrow `value` as one of the four variants
///
/// A bare `Array2<f64>` is a [`VariantTag::Matrix`]; a [`DenseTensor`] of
/// order two stays [`VariantTag::Dense`].
///
/// # Examples
///
/// ```
/// use tnsio_io::classify::resolve;
/// use tnsio_core::{Matrix, VariantTag};
///
/// let m = Matrix::zeros((2, 3));
/// assert_eq!(resolve(&m).unwrap().tag(), VariantTag::Matrix);
/// assert!(resolve(&vec![1, 2, 3]).is_err());
/// ```
pub fn resolve<V: Any>(value: &V) -> TnsResult<TensorRef<'_>> {
    let any = value as &dyn Any;

    if let Some(data) = any.downcast_ref::<TensorData>() {
        return Ok(data.view());
    }
    if let Some(t) = any.downcast_ref::<DenseTensor>() {
        return Ok(TensorRef::Dense(t));
    }
    if let Some(t) = any.downcast_ref::<SparseTensor>() {
        return Ok(TensorRef::Sparse(t));
    }
    if let Some(t) = any.downcast_ref::<KruskalTensor>() {
        return Ok(TensorRef::Kruskal(t));
    }
    if let Some(m) = any.downcast_ref::<Matrix>() {
        return Ok(TensorRef::Matrix(m));
    }

    Err(UnsupportedTypeError::Export {
        type_name: type_name::<V>().to_string(),
    }
    .into())
}

/// Variant tag of `value`
pub fn classify<V: Any>(value: &V) -> TnsResult<VariantTag> {
    resolve(value).map(|tensor| tensor.tag())
}
