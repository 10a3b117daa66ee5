//! File and stream entry points
//!
//! [`import_data`] and [`export_data`] work on paths; [`read_tns`] and
//! [`write_tns`] expose the same codec over any `BufRead` / `Write`.

use crate::classify::resolve;
use crate::codec::{self, dense, kruskal, matrix, sparse};
use crate::error::{DimensionMismatchError, TnsError, TnsResult};
use crate::header;
use crate::options::{ExportOptions, ImportOptions};
use crate::tokens::TokenReader;
use crate::tracing_support::record_io;
use std::any::Any;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Component, Path, PathBuf};
use std::time::Instant;
use tnsio_core::{TensorData, TensorRef, VariantTag};
use tracing::debug;

/// Import a `.tns` file with default options
///
/// # Examples
///
/// ```no_run
/// use tnsio_io::import_data;
///
/// let data = import_data("tests/data/sptensor.tns").unwrap();
/// let sparse = data.as_sparse().unwrap();
/// println!("{} non-zeros", sparse.nnz());
/// ```
pub fn import_data(path: impl AsRef<Path>) -> TnsResult<TensorData> {
    import_data_with(path, &ImportOptions::default())
}

/// Import a `.tns` file
///
/// # Errors
///
/// - [`TnsError::FileNotFound`] naming the normalized path
/// - any read error of [`read_tns`]
pub fn import_data_with(path: impl AsRef<Path>, opts: &ImportOptions) -> TnsResult<TensorData> {
    let start = Instant::now();
    let path = normalize_path(path.as_ref());
    if !path.exists() {
        return Err(TnsError::FileNotFound(path));
    }

    let file = File::open(&path)?;
    let bytes = file.metadata()?.len();
    let data = read_tns(BufReader::new(file), opts)?;

    record_io("import", &path, data.tag(), bytes, start.elapsed());
    Ok(data)
}

/// Read one record from a stream
///
/// The whole stream must be the record: tokens left after it, or a payload
/// that does not match the size of the constructed value, are a
/// [`TnsError::DimensionMismatch`].
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use tnsio_io::{read_tns, ImportOptions};
///
/// let text = "matrix\n2 2\n1 2\n3 4\n";
/// let data = read_tns(Cursor::new(text), &ImportOptions::default()).unwrap();
/// assert_eq!(data.as_matrix().unwrap()[[1, 0]], 3.0);
/// ```
pub fn read_tns<R: BufRead>(reader: R, opts: &ImportOptions) -> TnsResult<TensorData> {
    let mut tokens = TokenReader::new(reader);
    let tag = header::read_tag(&mut tokens)?;
    debug!(variant = %tag, "reading record");

    let data = match tag {
        VariantTag::Dense => TensorData::Dense(dense::read(&mut tokens)?),
        VariantTag::Sparse => TensorData::Sparse(sparse::read(&mut tokens, opts.index_base)?),
        VariantTag::Kruskal => TensorData::Kruskal(kruskal::read(&mut tokens)?),
        VariantTag::Matrix => TensorData::Matrix(matrix::read(&mut tokens)?),
    };

    codec::check_payload(data.view(), tokens.consumed())?;
    if let Some(token) = tokens.leftover()? {
        return Err(DimensionMismatchError::TrailingData {
            token,
            line: tokens.line(),
        }
        .into());
    }

    Ok(data)
}

/// Export with default formats (`%.16e` for data and weights)
pub fn export_data<V: Any>(value: &V, path: impl AsRef<Path>) -> TnsResult<()> {
    export_data_with(value, path, &ExportOptions::default())
}

/// Export a value to a file, replacing any existing content
///
/// `value` may be a [`TensorData`], [`DenseTensor`](tnsio_core::DenseTensor),
/// [`SparseTensor`](tnsio_core::SparseTensor),
/// [`KruskalTensor`](tnsio_core::KruskalTensor) or a bare
/// [`Matrix`](tnsio_core::Matrix).
///
/// # Errors
///
/// [`TnsError::UnsupportedType`] for any other type; the file is not touched
/// in that case.
///
/// # Examples
///
/// ```no_run
/// use tnsio_core::DenseTensor;
/// use tnsio_io::{export_data_with, ExportOptions, NumberFormat};
///
/// let t = DenseTensor::from_vec((1..=8).map(f64::from).collect(), &[2, 2, 2]).unwrap();
/// let opts = ExportOptions::new().with_fmt_data(NumberFormat::integer());
/// export_data_with(&t, "/tmp/cube.tns", &opts).unwrap();
/// ```
pub fn export_data_with<V: Any>(
    value: &V,
    path: impl AsRef<Path>,
    opts: &ExportOptions,
) -> TnsResult<()> {
    let start = Instant::now();
    let tensor = resolve(value)?;
    let path = path.as_ref();

    let mut writer = BufWriter::new(File::create(path)?);
    write_tns(&mut writer, tensor, opts)?;
    writer.flush()?;
    let bytes = writer.get_ref().metadata()?.len();

    record_io("export", path, tensor.tag(), bytes, start.elapsed());
    Ok(())
}

/// Write one record to a stream
pub fn write_tns<W: Write>(
    writer: &mut W,
    tensor: TensorRef<'_>,
    opts: &ExportOptions,
) -> TnsResult<()> {
    debug!(variant = %tensor.tag(), "writing record");
    match tensor {
        TensorRef::Dense(t) => dense::write(writer, t, &opts.fmt_data),
        TensorRef::Sparse(t) => sparse::write(writer, t, &opts.fmt_data),
        TensorRef::Kruskal(t) => kruskal::write(writer, t, opts),
        TensorRef::Matrix(m) => matrix::write(writer, m, &opts.fmt_data),
    }
}

/// Lexical normalization: drop `.`, fold `..` into its parent
///
/// The filesystem is not consulted, so symlinks are not resolved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
