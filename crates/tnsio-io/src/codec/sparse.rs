//! `sptensor` records: header with `nnz`, then one `subscripts... value`
//! line per entry
//!
//! Subscripts are written 1-based and shifted by the configured
//! [`IndexBase`] on read.

use super::parse_value;
use crate::error::{ShapeMismatchError, TnsError, TnsResult};
use crate::format::NumberFormat;
use crate::header;
use crate::index_base::IndexBase;
use crate::tokens::TokenReader;
use std::io::{BufRead, Write};
use tnsio_core::error::validate_shape;
use tnsio_core::{SparseTensor, VariantTag};
use tracing::debug;

const PREALLOC_ENTRIES: usize = 1 << 16;

pub(crate) fn read<R: BufRead>(
    tokens: &mut TokenReader<R>,
    base: IndexBase,
) -> TnsResult<SparseTensor> {
    let shape = header::read_shape(tokens)?;
    validate_shape(&shape)?;
    let nnz = header::read_count(tokens, "nnz")?;
    let order = shape.len();

    let mut indices = Vec::with_capacity(nnz.min(PREALLOC_ENTRIES));
    let mut values = Vec::with_capacity(nnz.min(PREALLOC_ENTRIES));

    for entry in 0..nnz {
        let fields = tokens
            .next_entry()?
            .ok_or(ShapeMismatchError::Truncated {
                what: "sparse entries",
                expected: nnz,
                found: entry,
            })?;
        let line = tokens.line();
        if fields.len() != order + 1 {
            return Err(ShapeMismatchError::EntryArity {
                entry,
                expected: order + 1,
                found: fields.len(),
                line,
            }
            .into());
        }

        let raw = fields[..order]
            .iter()
            .map(|token| parse_subscript(token, line))
            .collect::<TnsResult<Vec<i64>>>()?;
        let coordinate = raw
            .iter()
            .map(|&r| base.to_zero_based(r))
            .collect::<Option<Vec<i64>>>();
        let index = coordinate
            .as_deref()
            .and_then(|c| checked_index(c, &shape))
            .ok_or_else(|| TnsError::CoordinateRange {
                entry,
                // an adjustment that underflows reports the subscripts as written
                coordinate: coordinate.clone().unwrap_or_else(|| raw.clone()),
                shape: shape.clone(),
            })?;

        indices.push(index);
        values.push(parse_value(&fields[order], line)?);
    }

    debug!(shape = ?shape, nnz, index_base = %base, "read sparse tensor");
    Ok(SparseTensor::new(indices, values, shape)?)
}

pub(crate) fn write<W: Write>(
    w: &mut W,
    tensor: &SparseTensor,
    fmt: &NumberFormat,
) -> TnsResult<()> {
    header::write_tag(w, VariantTag::Sparse)?;
    header::write_shape(w, tensor.shape())?;
    header::write_count(w, tensor.nnz())?;

    for (index, value) in tensor.entries() {
        let subscripts = header::join(index.iter().map(|&i| IndexBase::written(i)));
        writeln!(w, "{} {}", subscripts, fmt.format(value))?;
    }

    debug!(shape = ?tensor.shape(), nnz = tensor.nnz(), "wrote sparse tensor");
    Ok(())
}

fn parse_subscript(token: &str, line: usize) -> TnsResult<i64> {
    token.parse::<i64>().map_err(|_| TnsError::InvalidNumber {
        token: token.to_string(),
        line,
    })
}

/// Adjusted coordinate as indices, if every component is inside the shape
fn checked_index(coordinate: &[i64], shape: &[usize]) -> Option<Vec<usize>> {
    coordinate
        .iter()
        .zip(shape)
        .map(|(&c, &dim)| usize::try_from(c).ok().filter(|&i| i < dim))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_str(text: &str, base: IndexBase) -> TnsResult<SparseTensor> {
        let mut tokens = TokenReader::new(Cursor::new(text.as_bytes()));
        read(&mut tokens, base)
    }

    #[test]
    fn test_read_one_based() {
        let t = read_str("3\n5 4 3\n2\n1 1 1 1.5\n5 4 3 -2\n", IndexBase::One).unwrap();
        assert_eq!(t.indices(), &[vec![0, 0, 0], vec![4, 3, 2]]);
        assert_eq!(t.values(), &[1.5, -2.0]);
    }

    #[test]
    fn test_read_zero_based() {
        let t = read_str("2\n2 2\n1\n0 1 7\n", IndexBase::Zero).unwrap();
        assert_eq!(t.get(&[0, 1]), Some(7.0));
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let t = read_str("1\n3\n3\n3 1\n1 2\n3 4\n", IndexBase::One).unwrap();
        assert_eq!(t.indices(), &[vec![2], vec![0], vec![2]]);
        assert_eq!(t.get(&[2]), Some(5.0));
    }

    #[test]
    fn test_coordinate_out_of_range() {
        let err = read_str("2\n2 2\n1\n0 1 7\n", IndexBase::One).unwrap_err();
        match err {
            TnsError::CoordinateRange {
                entry, coordinate, ..
            } => {
                assert_eq!(entry, 0);
                assert_eq!(coordinate, vec![-1, 0]);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = read_str("2\n2 2\n1\n3 1 7\n", IndexBase::One).unwrap_err();
        assert!(matches!(err, TnsError::CoordinateRange { .. }));
    }

    #[test]
    fn test_subscript_underflow_is_out_of_range() {
        let err = read_str("1\n3\n1\n-9223372036854775808 1.0\n", IndexBase::One).unwrap_err();
        match err {
            TnsError::CoordinateRange {
                entry,
                coordinate,
                shape,
            } => {
                assert_eq!(entry, 0);
                assert_eq!(coordinate, vec![i64::MIN]);
                assert_eq!(shape, vec![3]);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = read_str("1\n3\n1\n-9223372036854775808 1.0\n", IndexBase::Zero).unwrap_err();
        assert!(matches!(err, TnsError::CoordinateRange { .. }));
    }

    #[test]
    fn test_entry_arity() {
        let err = read_str("2\n2 2\n1\n1 1\n", IndexBase::One).unwrap_err();
        assert!(matches!(
            err,
            TnsError::ShapeMismatch(ShapeMismatchError::EntryArity {
                entry: 0,
                expected: 3,
                found: 2,
                line: 4
            })
        ));
    }

    #[test]
    fn test_missing_entries() {
        let err = read_str("2\n2 2\n3\n1 1 1\n", IndexBase::One).unwrap_err();
        assert!(matches!(
            err,
            TnsError::ShapeMismatch(ShapeMismatchError::Truncated {
                expected: 3,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_non_integer_subscript() {
        let err = read_str("1\n3\n1\n1.5 2\n", IndexBase::One).unwrap_err();
        assert!(matches!(err, TnsError::InvalidNumber { line: 4, .. }));
    }

    #[test]
    fn test_write_one_based() {
        let t = SparseTensor::new(vec![vec![0, 2], vec![1, 0]], vec![3.0, 4.0], vec![2, 3])
            .unwrap();
        let mut out = Vec::new();
        write(&mut out, &t, &NumberFormat::integer()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "sptensor\n2\n2 3\n2\n1 3 3\n2 1 4\n"
        );
    }
}
