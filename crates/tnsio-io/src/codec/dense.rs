//! `tensor` records: header, then every element in row-major order

use super::{read_values, write_column};
use crate::error::TnsResult;
use crate::format::NumberFormat;
use crate::header;
use crate::tokens::TokenReader;
use std::io::{BufRead, Write};
use tnsio_core::error::{element_count, validate_shape};
use tnsio_core::{DenseTensor, VariantTag};
use tracing::debug;

pub(crate) fn read<R: BufRead>(tokens: &mut TokenReader<R>) -> TnsResult<DenseTensor> {
    let shape = header::read_shape(tokens)?;
    validate_shape(&shape)?;

    let count = element_count(&shape)?;
    let values = read_values(tokens, count, "dense tensor")?;
    let tensor = DenseTensor::from_vec(values, &shape)?;

    debug!(shape = ?shape, elements = count, "read dense tensor");
    Ok(tensor)
}

pub(crate) fn write<W: Write>(
    w: &mut W,
    tensor: &DenseTensor,
    fmt: &NumberFormat,
) -> TnsResult<()> {
    header::write_tag(w, VariantTag::Dense)?;
    header::write_shape(w, tensor.shape())?;
    write_column(w, tensor.iter().copied(), fmt)?;

    debug!(shape = ?tensor.shape(), elements = tensor.len(), "wrote dense tensor");
    Ok(())
}
