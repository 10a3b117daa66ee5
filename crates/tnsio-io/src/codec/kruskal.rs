//! `ktensor` records: header with `rank`, the weights, then one nested
//! `matrix` record per mode

use super::matrix::{self, Expected};
use super::{read_values, write_column};
use crate::error::TnsResult;
use crate::header;
use crate::options::ExportOptions;
use crate::tokens::TokenReader;
use scirs2_core::ndarray_ext::Array1;
use std::io::{BufRead, Write};
use tnsio_core::error::validate_shape;
use tnsio_core::{CoreError, KruskalTensor, VariantTag};
use tracing::debug;

pub(crate) fn read<R: BufRead>(tokens: &mut TokenReader<R>) -> TnsResult<KruskalTensor> {
    let shape = header::read_shape(tokens)?;
    validate_shape(&shape)?;
    let rank = header::read_count(tokens, "rank")?;
    if rank == 0 {
        return Err(CoreError::InvalidRank(rank).into());
    }

    let weights = read_values(tokens, rank, "weights")?;
    let factors = shape
        .iter()
        .enumerate()
        .map(|(mode, &rows)| {
            matrix::read_nested(
                tokens,
                Expected {
                    mode,
                    rows,
                    cols: rank,
                },
            )
        })
        .collect::<TnsResult<Vec<_>>>()?;

    debug!(shape = ?shape, rank, "read kruskal tensor");
    Ok(KruskalTensor::new(Array1::from(weights), factors)?)
}

/// Weights use `fmt_weights`; factor entries use `fmt_data`
pub(crate) fn write<W: Write>(
    w: &mut W,
    tensor: &KruskalTensor,
    opts: &ExportOptions,
) -> TnsResult<()> {
    header::write_tag(w, VariantTag::Kruskal)?;
    header::write_shape(w, &tensor.shape())?;
    header::write_count(w, tensor.rank())?;
    write_column(w, tensor.weights().iter().copied(), &opts.fmt_weights)?;
    for factor in tensor.factors() {
        matrix::write(w, factor, &opts.fmt_data)?;
    }

    debug!(shape = ?tensor.shape(), rank = tensor.rank(), "wrote kruskal tensor");
    Ok(())
}
