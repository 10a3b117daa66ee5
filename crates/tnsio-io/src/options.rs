//! Import and export configuration

use crate::error::TnsResult;
use crate::format::NumberFormat;
use crate::index_base::IndexBase;

/// Options for reading a `.tns` file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImportOptions {
    /// Base of sparse subscripts in the file
    pub index_base: IndexBase,
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subscript base
    pub fn with_index_base(mut self, index_base: IndexBase) -> Self {
        self.index_base = index_base;
        self
    }
}

/// Options for writing a `.tns` file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExportOptions {
    /// Format of data values (dense elements, sparse values, factor entries)
    pub fmt_data: NumberFormat,
    /// Format of Kruskal weights
    pub fmt_weights: NumberFormat,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from two printf-style specifiers
    ///
    /// # Errors
    ///
    /// [`TnsError::InvalidFormat`](crate::error::TnsError::InvalidFormat) if
    /// either specifier does not parse.
    pub fn from_specs(fmt_data: &str, fmt_weights: &str) -> TnsResult<Self> {
        Ok(Self {
            fmt_data: NumberFormat::parse(fmt_data)?,
            fmt_weights: NumberFormat::parse(fmt_weights)?,
        })
    }

    /// Set the data format
    pub fn with_fmt_data(mut self, fmt: NumberFormat) -> Self {
        self.fmt_data = fmt;
        self
    }

    /// Set the weights format
    pub fn with_fmt_weights(mut self, fmt: NumberFormat) -> Self {
        self.fmt_weights = fmt;
        self
    }
}
