//! # tnsio-io
//!
//! Reader and writer for the `.tns` text interchange format.
//!
//! A `.tns` file holds exactly one record of one of four kinds, recognized
//! by the keyword on its first line:
//!
//! | Keyword | Value type |
//! |---|---|
//! | `tensor` | [`DenseTensor`](tnsio_core::DenseTensor) |
//! | `sptensor` | [`SparseTensor`](tnsio_core::SparseTensor) |
//! | `ktensor` | [`KruskalTensor`](tnsio_core::KruskalTensor) |
//! | `matrix` | [`Matrix`](tnsio_core::Matrix) |
//!
//! # Format
//!
//! ```text
//! sptensor        <- variant tag
//! 3               <- order
//! 5 4 3           <- shape
//! 2               <- nnz
//! 1 1 1 1.0e+00   <- 1-based subscripts, then the value
//! 5 4 3 1.8e+01
//! ```
//!
//! Dense payloads list every element in row-major order, one per line on
//! write and free-form on read. Kruskal records carry `rank`, the weights,
//! and one nested `matrix` record per mode.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tnsio_io::{read_tns, write_tns, ExportOptions, ImportOptions, NumberFormat};
//!
//! let text = "tensor\n2\n2 2\n1\n2\n3\n4\n";
//! let data = read_tns(Cursor::new(text), &ImportOptions::default()).unwrap();
//!
//! let opts = ExportOptions::new().with_fmt_data(NumberFormat::integer());
//! let mut out = Vec::new();
//! write_tns(&mut out, data.view(), &opts).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), text);
//! ```
//!
//! # Logging
//!
//! Every read and write emits `tracing` events under the `tnsio_io` target.
//! See [`tracing_support`] to install a subscriber.

#![deny(warnings)]

pub mod classify;
mod codec;
pub mod error;
pub mod facade;
pub mod format;
mod header;
pub mod index_base;
pub mod options;
mod tokens;
pub mod tracing_support;


pub use classify::{classify, resolve};
pub use error::{
    DimensionMismatchError, HeaderError, ShapeMismatchError, TnsError, TnsResult,
    UnsupportedTypeError,
};
pub use facade::{
    export_data, export_data_with, import_data, import_data_with, normalize_path, read_tns,
    write_tns,
};
pub use format::{parse_number, NumberFormat, DEFAULT_FORMAT};
pub use index_base::IndexBase;
pub use options::{ExportOptions, ImportOptions};
