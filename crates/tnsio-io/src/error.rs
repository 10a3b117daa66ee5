//! Error types for `.tns` import and export
//!
//! # Design
//!
//! - **`TnsError`**: top-level enum returned by every codec entry point
//! - **Detail enums**: header, shape, dimension and type errors, converted
//!   into `TnsError` with `#[from]`
//! - **I/O errors** from the filesystem pass through unchanged
//!
//! # Examples
//!
//! ```
//! use tnsio_io::error::{DimensionMismatchError, TnsError};
//!
//! let err: TnsError = DimensionMismatchError::Order { declared: 3, found: 2 }.into();
//! assert!(err
//!     .to_string()
//!     .starts_with("Imported dimensions are not of expected size"));
//! ```

use std::path::PathBuf;
use thiserror::Error;
use tnsio_core::{CoreError, VariantTag};

/// Top-level error type for the `.tns` codec
#[derive(Error, Debug)]
pub enum TnsError {
    /// Import path does not exist (path is lexically normalized)
    #[error("File path {} does not exist.", .0.display())]
    FileNotFound(PathBuf),

    /// Export value or import tag names no known kind
    #[error(transparent)]
    UnsupportedType(#[from] UnsupportedTypeError),

    /// A structural header field is missing or unparseable
    #[error("Malformed header: {0}")]
    MalformedHeader(#[from] HeaderError),

    /// Declared dimensions disagree with each other or the payload is short
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(#[from] ShapeMismatchError),

    /// The imported object does not account for the data in the file
    #[error("Imported dimensions are not of expected size: {0}")]
    DimensionMismatch(#[from] DimensionMismatchError),

    /// A sparse subscript falls outside the shape after base adjustment
    #[error(
        "Coordinate out of range: entry {entry} has coordinate {coordinate:?} outside shape {shape:?}"
    )]
    CoordinateRange {
        entry: usize,
        coordinate: Vec<i64>,
        shape: Vec<usize>,
    },

    /// A payload token is not a number
    #[error("Invalid numeric token '{token}' at line {line}")]
    InvalidNumber { token: String, line: usize },

    /// A printf-style format specifier could not be parsed
    #[error("Invalid format specifier '{spec}': {reason}")]
    InvalidFormat { spec: String, reason: String },

    /// Index base outside {0, 1}
    #[error("Invalid index base {0}: expected 0 or 1")]
    InvalidIndexBase(u8),

    /// The parsed data was rejected by the value-type constructor
    #[error("Tensor construction failed: {0}")]
    Construction(#[from] CoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Unknown kinds, on either side of the codec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedTypeError {
    #[error("Invalid data type for export: {type_name}")]
    Export { type_name: String },

    #[error("Invalid data type found: {tag}")]
    Import { tag: String },
}

/// Header framing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("no variant tag before end of input")]
    MissingTag,

    #[error("missing {field} line after line {line}")]
    MissingField { field: &'static str, line: usize },

    #[error("{field} at line {line} must be a non-negative integer, got '{token}'")]
    InvalidInteger {
        field: &'static str,
        token: String,
        line: usize,
    },

    #[error("{field} at line {line} must be a single value, got {found} tokens")]
    FieldArity {
        field: &'static str,
        found: usize,
        line: usize,
    },

    #[error("expected nested '{expected}' record for mode {mode} at line {line}, found '{found}'")]
    NestedTag {
        expected: VariantTag,
        found: String,
        mode: usize,
        line: usize,
    },
}

/// Declared structure that the payload or a nested record contradicts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeMismatchError {
    #[error("{what} needs {expected} values, but input ended after {found}")]
    Truncated {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("factor matrix {mode} declares {got} rows, expected {expected} from the tensor shape")]
    FactorRows {
        mode: usize,
        expected: usize,
        got: usize,
    },

    #[error("factor matrix {mode} declares {got} columns, expected rank {expected}")]
    FactorCols {
        mode: usize,
        expected: usize,
        got: usize,
    },

    #[error("sparse entry {entry} at line {line} has {found} tokens, expected {expected}")]
    EntryArity {
        entry: usize,
        expected: usize,
        found: usize,
        line: usize,
    },
}

/// The constructed object and the file content disagree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionMismatchError {
    #[error("declared order {declared} but the shape line lists {found} dimensions")]
    Order { declared: usize, found: usize },

    #[error("{tag} expects {expected} data values, but {consumed} were read")]
    PayloadLength {
        tag: VariantTag,
        expected: usize,
        consumed: usize,
    },

    #[error("unexpected trailing data '{token}' at line {line}")]
    TrailingData { token: String, line: usize },
}

/// Result type alias for codec operations
pub type TnsResult<T> = Result<T, TnsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message() {
        let err = TnsError::FileNotFound(PathBuf::from("/data/invalid_filename.tns"));
        assert_eq!(
            err.to_string(),
            "File path /data/invalid_filename.tns does not exist."
        );
    }

    #[test]
    fn test_unsupported_type_messages() {
        let err: TnsError = UnsupportedTypeError::Import {
            tag: "list".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid data type found: list");

        let err: TnsError = UnsupportedTypeError::Export {
            type_name: "alloc::vec::Vec<i32>".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid data type for export: alloc::vec::Vec<i32>"
        );
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err: TnsError = DimensionMismatchError::TrailingData {
            token: "28".to_string(),
            line: 31,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Imported dimensions are not of expected size: unexpected trailing data '28' at line 31"
        );
    }

    #[test]
    fn test_io_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TnsError = io.into();
        assert_eq!(err.to_string(), "denied");
        assert!(matches!(err, TnsError::Io(_)));
    }
}
