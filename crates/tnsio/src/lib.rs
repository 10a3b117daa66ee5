//! # tnsio
//!
//! Read and write tensors in the `.tns` text interchange format.
//!
//! This is the **meta crate** that re-exports the value types and the codec.
//!
//! ## Quick Start
//!
//! ```
//! use std::io::Cursor;
//! use tnsio::prelude::*;
//!
//! let sparse = SparseTensor::new(
//!     vec![vec![0, 0, 0], vec![4, 3, 2]],
//!     vec![1.0, 18.0],
//!     vec![5, 4, 3],
//! )?;
//!
//! let opts = ExportOptions::new().with_fmt_data(NumberFormat::integer());
//! let mut out = Vec::new();
//! write_tns(&mut out, TensorRef::from(&sparse), &opts)?;
//! assert_eq!(
//!     String::from_utf8(out.clone())?,
//!     "sptensor\n3\n5 4 3\n2\n1 1 1 1\n5 4 3 18\n"
//! );
//!
//! let back = read_tns(Cursor::new(out), &ImportOptions::default())?;
//! assert!(back.as_sparse().unwrap().is_equal(&sparse));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Value Types ([`core`])
//!
//! [`DenseTensor`](core::DenseTensor), [`SparseTensor`](core::SparseTensor),
//! [`KruskalTensor`](core::KruskalTensor) and [`Matrix`](core::Matrix), plus
//! the closed sum over them.
//!
//! ### Codec ([`io`])
//!
//! `import_data` / `export_data` for files, `read_tns` / `write_tns` for
//! streams, printf-style number formats and the sparse index base.
//!
//! ```no_run
//! use tnsio::io::{import_data_with, ImportOptions, IndexBase};
//!
//! let opts = ImportOptions::new().with_index_base(IndexBase::Zero);
//! let data = import_data_with("zero_based.tns", &opts)?;
//! println!("{} with shape {:?}", data.tag(), data.shape());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): `init_tracing` installs a `tracing-subscriber`
//! - `serde`: serialize and deserialize the import/export options

#![deny(warnings)]

pub use tnsio_core as core;
pub use tnsio_io as io;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use tnsio::prelude::*;
    //!
    //! let m = Matrix::zeros((2, 2));
    //! assert_eq!(classify(&m).unwrap(), VariantTag::Matrix);
    //! ```

    // Value types
    pub use crate::core::{
        DenseTensor, KruskalTensor, Matrix, SparseTensor, TensorData, TensorRef, VariantTag,
    };

    // Codec entry points
    pub use crate::io::{
        classify, export_data, export_data_with, import_data, import_data_with, read_tns,
        write_tns,
    };

    // Options
    pub use crate::io::{ExportOptions, ImportOptions, IndexBase, NumberFormat};

    // Errors
    pub use crate::io::{TnsError, TnsResult};
}
