//! Structural header fields
//!
//! ```text
//! tensor        sptensor      ktensor       matrix
//! <order>       <order>       <order>       <rows> <cols>
//! <shape...>    <shape...>    <shape...>
//!               <nnz>         <rank>
//! ```
//!
//! Each field sits on its own line. Matrix records may also carry a leading
//! order line (`2`) on read; it is never written.

use crate::error::{
    DimensionMismatchError, HeaderError, TnsResult, UnsupportedTypeError,
};
use crate::tokens::TokenReader;
use std::io::{BufRead, Write};
use tnsio_core::{UnknownTag, VariantTag};

/// Variant tag from the first non-blank line
pub(crate) fn read_tag<R: BufRead>(tokens: &mut TokenReader<R>) -> TnsResult<VariantTag> {
    let line = tokens.next_line()?.ok_or(HeaderError::MissingTag)?;
    let tag = line[0]
        .parse::<VariantTag>()
        .map_err(|UnknownTag(tag)| UnsupportedTypeError::Import { tag })?;
    single_token(&line, "variant tag", tokens.line())?;
    Ok(tag)
}

/// Tag line of a record nested inside another (a Kruskal factor)
pub(crate) fn expect_nested_tag<R: BufRead>(
    tokens: &mut TokenReader<R>,
    expected: VariantTag,
    mode: usize,
) -> TnsResult<()> {
    let after = tokens.line();
    let line = tokens.next_line()?.ok_or(HeaderError::MissingField {
        field: "nested record tag",
        line: after,
    })?;
    if line[0] != expected.keyword() {
        return Err(HeaderError::NestedTag {
            expected,
            found: line[0].clone(),
            mode,
            line: tokens.line(),
        }
        .into());
    }
    single_token(&line, "nested record tag", tokens.line())
}

fn single_token(line: &[String], field: &'static str, at: usize) -> TnsResult<()> {
    if line.len() != 1 {
        return Err(HeaderError::FieldArity {
            field,
            found: line.len(),
            line: at,
        }
        .into());
    }
    Ok(())
}

/// A single non-negative integer on its own line
pub(crate) fn read_count<R: BufRead>(
    tokens: &mut TokenReader<R>,
    field: &'static str,
) -> TnsResult<usize> {
    let after = tokens.line();
    let line = tokens
        .next_line()?
        .ok_or(HeaderError::MissingField { field, line: after })?;
    if line.len() != 1 {
        return Err(HeaderError::FieldArity {
            field,
            found: line.len(),
            line: tokens.line(),
        }
        .into());
    }
    parse_integer(field, &line[0], tokens.line())
}

/// Order line followed by a shape line of exactly `order` dimensions
pub(crate) fn read_shape<R: BufRead>(tokens: &mut TokenReader<R>) -> TnsResult<Vec<usize>> {
    let order = read_count(tokens, "order")?;
    let after = tokens.line();
    let line = tokens.next_line()?.ok_or(HeaderError::MissingField {
        field: "shape",
        line: after,
    })?;
    let shape = line
        .iter()
        .map(|token| parse_integer("shape", token, tokens.line()))
        .collect::<TnsResult<Vec<usize>>>()?;

    if shape.len() != order {
        return Err(DimensionMismatchError::Order {
            declared: order,
            found: shape.len(),
        }
        .into());
    }
    Ok(shape)
}

/// `rows cols`, tolerating a legacy order line in front
pub(crate) fn read_matrix_shape<R: BufRead>(
    tokens: &mut TokenReader<R>,
) -> TnsResult<(usize, usize)> {
    let mut after = tokens.line();
    let mut line = tokens.next_line()?.ok_or(HeaderError::MissingField {
        field: "matrix shape",
        line: after,
    })?;

    if line.len() == 1 {
        let order = parse_integer("order", &line[0], tokens.line())?;
        if order != 2 {
            return Err(DimensionMismatchError::Order {
                declared: order,
                found: 2,
            }
            .into());
        }
        after = tokens.line();
        line = tokens.next_line()?.ok_or(HeaderError::MissingField {
            field: "matrix shape",
            line: after,
        })?;
    }

    if line.len() != 2 {
        return Err(HeaderError::FieldArity {
            field: "matrix shape",
            found: line.len(),
            line: tokens.line(),
        }
        .into());
    }
    let rows = parse_integer("rows", &line[0], tokens.line())?;
    let cols = parse_integer("cols", &line[1], tokens.line())?;
    Ok((rows, cols))
}

fn parse_integer(field: &'static str, token: &str, line: usize) -> TnsResult<usize> {
    token.parse::<usize>().map_err(|_| {
        HeaderError::InvalidInteger {
            field,
            token: token.to_string(),
            line,
        }
        .into()
    })
}

pub(crate) fn write_tag<W: Write>(w: &mut W, tag: VariantTag) -> TnsResult<()> {
    writeln!(w, "{}", tag)?;
    Ok(())
}

pub(crate) fn write_shape<W: Write>(w: &mut W, shape: &[usize]) -> TnsResult<()> {
    writeln!(w, "{}", shape.len())?;
    writeln!(w, "{}", join(shape.iter()))?;
    Ok(())
}

pub(crate) fn write_count<W: Write>(w: &mut W, count: usize) -> TnsResult<()> {
    writeln!(w, "{}", count)?;
    Ok(())
}

pub(crate) fn write_matrix_shape<W: Write>(w: &mut W, rows: usize, cols: usize) -> TnsResult<()> {
    writeln!(w, "{} {}", rows, cols)?;
    Ok(())
}

/// Space-separated rendering of any displayable items
pub(crate) fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TnsError;
    use std::io::Cursor;

    fn reader(text: &str) -> TokenReader<Cursor<&[u8]>> {
        TokenReader::new(Cursor::new(text.as_bytes()))
    }

    #[test]
    fn test_read_tag() {
        assert_eq!(read_tag(&mut reader("\n  ktensor\n")).unwrap(), VariantTag::Kruskal);

        let err = read_tag(&mut reader("list\n3\n")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid data type found: list");

        let err = read_tag(&mut reader("\n\n")).unwrap_err();
        assert!(matches!(
            err,
            TnsError::MalformedHeader(HeaderError::MissingTag)
        ));
    }

    #[test]
    fn test_tag_line_with_extra_tokens() {
        let err = read_tag(&mut reader("tensor garbage 99\n1\n1\n0\n")).unwrap_err();
        assert!(matches!(
            err,
            TnsError::MalformedHeader(HeaderError::FieldArity {
                field: "variant tag",
                found: 3,
                line: 1
            })
        ));

        let err = expect_nested_tag(&mut reader("matrix 4 2\n"), VariantTag::Matrix, 0).unwrap_err();
        assert!(matches!(
            err,
            TnsError::MalformedHeader(HeaderError::FieldArity { found: 3, .. })
        ));
    }

    #[test]
    fn test_read_shape() {
        let mut tokens = reader("3\n5 4 3\n18\n");
        assert_eq!(read_shape(&mut tokens).unwrap(), vec![5, 4, 3]);
        assert_eq!(read_count(&mut tokens, "nnz").unwrap(), 18);
    }

    #[test]
    fn test_order_disagrees_with_shape() {
        let err = read_shape(&mut reader("3\n3 3\n")).unwrap_err();
        assert!(matches!(
            err,
            TnsError::DimensionMismatch(DimensionMismatchError::Order {
                declared: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_bad_fields() {
        let err = read_shape(&mut reader("three\n3 3 3\n")).unwrap_err();
        assert!(matches!(
            err,
            TnsError::MalformedHeader(HeaderError::InvalidInteger { field: "order", line: 1, .. })
        ));

        let err = read_shape(&mut reader("2\n3 -1\n")).unwrap_err();
        assert!(matches!(
            err,
            TnsError::MalformedHeader(HeaderError::InvalidInteger { field: "shape", .. })
        ));

        let err = read_count(&mut reader("4 2\n"), "rank").unwrap_err();
        assert!(matches!(
            err,
            TnsError::MalformedHeader(HeaderError::FieldArity { field: "rank", found: 2, .. })
        ));

        let err = read_shape(&mut reader("3\n")).unwrap_err();
        assert!(matches!(
            err,
            TnsError::MalformedHeader(HeaderError::MissingField { field: "shape", line: 1 })
        ));
    }

    #[test]
    fn test_matrix_shape_forms() {
        assert_eq!(read_matrix_shape(&mut reader("4 2\n")).unwrap(), (4, 2));
        assert_eq!(read_matrix_shape(&mut reader("2\n4 2\n")).unwrap(), (4, 2));

        let err = read_matrix_shape(&mut reader("3\n4 2 1\n")).unwrap_err();
        assert!(matches!(err, TnsError::DimensionMismatch(_)));

        let err = read_matrix_shape(&mut reader("4 2 1\n")).unwrap_err();
        assert!(matches!(
            err,
            TnsError::MalformedHeader(HeaderError::FieldArity { found: 3, .. })
        ));
    }

    #[test]
    fn test_nested_tag() {
        assert!(expect_nested_tag(&mut reader("matrix\n"), VariantTag::Matrix, 0).is_ok());

        let err = expect_nested_tag(&mut reader("\ntensor\n"), VariantTag::Matrix, 2).unwrap_err();
        assert!(matches!(
            err,
            TnsError::MalformedHeader(HeaderError::NestedTag { mode: 2, line: 2, .. })
        ));
    }

    #[test]
    fn test_writers() {
        let mut out = Vec::new();
        write_tag(&mut out, VariantTag::Sparse).unwrap();
        write_shape(&mut out, &[5, 4, 3]).unwrap();
        write_count(&mut out, 18).unwrap();
        write_tag(&mut out, VariantTag::Matrix).unwrap();
        write_matrix_shape(&mut out, 4, 2).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "sptensor\n3\n5 4 3\n18\nmatrix\n4 2\n"
        );
    }
}
