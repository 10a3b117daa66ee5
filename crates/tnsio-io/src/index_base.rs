//! Subscript base for sparse coordinates
//!
//! Files are written 1-based. On read, each subscript becomes
//! `raw - base`, so a 0-based file can be imported with [`IndexBase::Zero`].

use crate::error::TnsError;
use std::fmt;

/// First valid subscript in a sparse file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub enum IndexBase {
    Zero,
    #[default]
    One,
}

impl IndexBase {
    /// The amount subtracted from every subscript on read
    pub fn offset(self) -> i64 {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }

    /// Adjust a raw subscript from disk; may go negative for bad input.
    /// `None` when the adjustment leaves the `i64` range.
    pub fn to_zero_based(self, raw: i64) -> Option<i64> {
        raw.checked_sub(self.offset())
    }

    /// Subscript as written on export, always 1-based
    pub fn written(coordinate: usize) -> usize {
        coordinate + 1
    }
}

impl TryFrom<u8> for IndexBase {
    type Error = TnsError;

    fn try_from(base: u8) -> Result<Self, Self::Error> {
        match base {
            0 => Ok(IndexBase::Zero),
            1 => Ok(IndexBase::One),
            other => Err(TnsError::InvalidIndexBase(other)),
        }
    }
}

impl From<IndexBase> for u8 {
    fn from(base: IndexBase) -> Self {
        match base {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }
}

impl fmt::Display for IndexBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_based() {
        assert_eq!(IndexBase::default(), IndexBase::One);
        assert_eq!(IndexBase::default().to_zero_based(1), Some(0));
    }

    #[test]
    fn test_adjustment() {
        assert_eq!(IndexBase::Zero.to_zero_based(0), Some(0));
        assert_eq!(IndexBase::Zero.to_zero_based(4), Some(4));
        assert_eq!(IndexBase::One.to_zero_based(0), Some(-1));
        assert_eq!(IndexBase::written(0), 1);
    }

    #[test]
    fn test_adjustment_underflow() {
        assert_eq!(IndexBase::One.to_zero_based(i64::MIN), None);
        assert_eq!(IndexBase::Zero.to_zero_based(i64::MIN), Some(i64::MIN));
    }

    #[test]
    fn test_try_from() {
        assert_eq!(IndexBase::try_from(0).unwrap(), IndexBase::Zero);
        assert_eq!(IndexBase::try_from(1).unwrap(), IndexBase::One);
        assert!(matches!(
            IndexBase::try_from(2),
            Err(TnsError::InvalidIndexBase(2))
        ));
        assert_eq!(u8::from(IndexBase::Zero), 0);
        assert_eq!(IndexBase::One.to_string(), "1");
    }
}
