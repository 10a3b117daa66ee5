//! `matrix` records: `rows cols`, then one row per line
//!
//! The same record appears standalone and nested inside a `ktensor`, where
//! its size is fixed in advance by the enclosing header.

use super::read_values;
use crate::error::{ShapeMismatchError, TnsResult};
use crate::format::NumberFormat;
use crate::header;
use crate::tokens::TokenReader;
use scirs2_core::ndarray_ext::Array2;
use std::io::{BufRead, Write};
use tnsio_core::error::{element_count, validate_shape};
use tnsio_core::{CoreError, Matrix, VariantTag};
use tracing::debug;

/// Size a nested record must have
#[derive(Debug, Clone, Copy)]
pub(crate) struct Expected {
    pub mode: usize,
    pub rows: usize,
    pub cols: usize,
}

/// Standalone record, after its tag
pub(crate) fn read<R: BufRead>(tokens: &mut TokenReader<R>) -> TnsResult<Matrix> {
    let matrix = read_body(tokens, None)?;
    debug!(rows = matrix.nrows(), cols = matrix.ncols(), "read matrix");
    Ok(matrix)
}

/// Nested record, tag included
pub(crate) fn read_nested<R: BufRead>(
    tokens: &mut TokenReader<R>,
    expected: Expected,
) -> TnsResult<Matrix> {
    header::expect_nested_tag(tokens, VariantTag::Matrix, expected.mode)?;
    read_body(tokens, Some(expected))
}

fn read_body<R: BufRead>(
    tokens: &mut TokenReader<R>,
    expected: Option<Expected>,
) -> TnsResult<Matrix> {
    let (rows, cols) = header::read_matrix_shape(tokens)?;

    if let Some(expected) = expected {
        if rows != expected.rows {
            return Err(ShapeMismatchError::FactorRows {
                mode: expected.mode,
                expected: expected.rows,
                got: rows,
            }
            .into());
        }
        if cols != expected.cols {
            return Err(ShapeMismatchError::FactorCols {
                mode: expected.mode,
                expected: expected.cols,
                got: cols,
            }
            .into());
        }
    }
    validate_shape(&[rows, cols])?;

    let count = element_count(&[rows, cols])?;
    let what = if expected.is_some() {
        "factor matrix"
    } else {
        "matrix"
    };
    let values = read_values(tokens, count, what)?;
    let got = values.len();

    Ok(
        Array2::from_shape_vec((rows, cols), values).map_err(|_| CoreError::ElementCount {
            shape: vec![rows, cols],
            expected: count,
            got,
        })?,
    )
}

/// Whole record, tag included; used standalone and for Kruskal factors
pub(crate) fn write<W: Write>(w: &mut W, matrix: &Matrix, fmt: &NumberFormat) -> TnsResult<()> {
    header::write_tag(w, VariantTag::Matrix)?;
    header::write_matrix_shape(w, matrix.nrows(), matrix.ncols())?;
    for row in matrix.rows() {
        writeln!(w, "{}", header::join(row.iter().map(|&v| fmt.format(v))))?;
    }
    Ok(())
}
