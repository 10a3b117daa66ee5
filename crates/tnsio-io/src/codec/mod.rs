//! Payload readers and writers, one module per variant
//!
//! Readers start right after the variant tag; writers emit the whole record
//! including the tag.

pub(crate) mod dense;
pub(crate) mod kruskal;
pub(crate) mod matrix;
pub(crate) mod sparse;

use crate::error::{DimensionMismatchError, ShapeMismatchError, TnsError, TnsResult};
use crate::format::{parse_number, NumberFormat};
use crate::tokens::TokenReader;
use std::io::{BufRead, Write};
use tnsio_core::TensorRef;

/// Cap on up-front allocation driven by header counts
const MAX_PREALLOC: usize = 1 << 20;

/// Read exactly `count` numeric tokens
pub(crate) fn read_values<R: BufRead>(
    tokens: &mut TokenReader<R>,
    count: usize,
    what: &'static str,
) -> TnsResult<Vec<f64>> {
    let mut values = Vec::with_capacity(count.min(MAX_PREALLOC));
    while values.len() < count {
        let token = tokens
            .next_token()?
            .ok_or(ShapeMismatchError::Truncated {
                what,
                expected: count,
                found: values.len(),
            })?;
        values.push(parse_value(&token, tokens.line())?);
    }
    Ok(values)
}

pub(crate) fn parse_value(token: &str, line: usize) -> TnsResult<f64> {
    parse_number(token).ok_or_else(|| TnsError::InvalidNumber {
        token: token.to_string(),
        line,
    })
}

/// One formatted value per line
pub(crate) fn write_column<W: Write>(
    w: &mut W,
    values: impl Iterator<Item = f64>,
    fmt: &NumberFormat,
) -> TnsResult<()> {
    for value in values {
        writeln!(w, "{}", fmt.format(value))?;
    }
    Ok(())
}

/// Number of payload tokens a record of this value occupies
pub(crate) fn payload_len(tensor: TensorRef<'_>) -> usize {
    match tensor {
        TensorRef::Dense(t) => t.len(),
        TensorRef::Sparse(t) => t.nnz() * (t.order() + 1),
        TensorRef::Kruskal(t) => {
            t.rank() + t.factors().iter().map(|f| f.len()).sum::<usize>()
        }
        TensorRef::Matrix(m) => m.len(),
    }
}

/// Compare the payload tokens actually read against the constructed value
pub(crate) fn check_payload(tensor: TensorRef<'_>, consumed: usize) -> TnsResult<()> {
    let expected = payload_len(tensor);
    if consumed != expected {
        return Err(DimensionMismatchError::PayloadLength {
            tag: tensor.tag(),
            expected,
            consumed,
        }
        .into());
    }
    Ok(())
}
