//! # tnsio-core
//!
//! Value types exchanged through the `.tns` text format.
//!
//! This crate provides the four kinds of tensor value that the codec in
//! `tnsio-io` reads and writes:
//!
//! - **Dense tensors** ([`DenseTensor`]) in row-major order
//! - **Sparse tensors** ([`SparseTensor`]) as coordinate lists
//! - **Kruskal tensors** ([`KruskalTensor`]): weights plus one factor matrix per mode
//! - **Matrices** ([`Matrix`]): a bare `Array2<f64>`
//!
//! plus the closed sum over them ([`TensorData`], [`TensorRef`], [`VariantTag`]).
//!
//! ## SciRS2 Integration
//!
//! All array storage goes through `scirs2_core::ndarray_ext`.
//!
//! ## Quick Start
//!
//! ```
//! use tnsio_core::{SparseTensor, TensorData, VariantTag};
//!
//! let sparse = SparseTensor::new(
//!     vec![vec![0, 0, 0], vec![4, 3, 2]],
//!     vec![1.0, 18.0],
//!     vec![5, 4, 3],
//! )
//! .unwrap();
//!
//! let data = TensorData::from(sparse);
//! assert_eq!(data.tag(), VariantTag::Sparse);
//! assert_eq!(data.shape().as_slice(), &[5, 4, 3]);
//! ```
//!
//! ## Errors
//!
//! Constructors validate their invariants and return [`CoreError`]; nothing in
//! this crate panics on malformed input.

#![deny(warnings)]

pub mod dense;
pub mod error;
pub mod kruskal;
pub mod sparse;
pub mod types;


pub use dense::DenseTensor;
pub use error::{CoreError, CoreResult};
pub use kruskal::KruskalTensor;
pub use sparse::SparseTensor;
pub use types::{Matrix, Shape, TensorData, TensorRef, UnknownTag, VariantTag};
