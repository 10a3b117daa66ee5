//! printf-style numeric formatting for written values
//!
//! Writers take a [`NumberFormat`] parsed from a C-style conversion
//! specification:
//!
//! ```text
//! %[flags][width][.precision][length]conversion
//! ```
//!
//! - flags: `-` (left-justify), `+` (always sign), space, `0` (zero pad), `#`
//!   (keep the decimal point / trailing zeros)
//! - length modifiers `h`, `l`, `ll`, `L`, `q`, `j`, `z`, `t` are accepted and ignored
//! - conversions: `d`/`i`/`u` (value truncated toward zero), `f`/`F`,
//!   `e`/`E`, `g`/`G`
//!
//! Exponents are rendered the C way (`e+02`, at least two digits), so output
//! matches what other tools emit for the same specifier.
//!
//! Reading never depends on the specifier: [`parse_number`] accepts any
//! integer or floating-point literal.
//!
//! # Examples
//!
//! ```
//! use tnsio_io::format::{parse_number, NumberFormat};
//!
//! let default = NumberFormat::default();
//! assert_eq!(default.format(27.0), "2.7000000000000000e+01");
//!
//! let int: NumberFormat = "%d".parse().unwrap();
//! assert_eq!(int.format(27.0), "27");
//!
//! assert_eq!(parse_number("2.7000000000000000e+01"), Some(27.0));
//! assert_eq!(parse_number("27"), Some(27.0));
//! ```

use crate::error::{TnsError, TnsResult};
use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};

/// Default specifier for data and weights
///
/// 17 significant digits, enough for any `f64` to survive a write/read cycle
/// bit for bit.
pub const DEFAULT_FORMAT: &str = "%.16e";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Integer,
    Fixed { upper: bool },
    Exponent { upper: bool },
    General { upper: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Flags {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alternate: bool,
}

/// A parsed printf-style numeric conversion
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct NumberFormat {
    spec: String,
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: Conversion,
}

impl NumberFormat {
    /// Parse a conversion specification such as `%.16e` or `%d`
    pub fn parse(spec: &str) -> TnsResult<Self> {
        let invalid = |reason: String| TnsError::InvalidFormat {
            spec: spec.to_string(),
            reason,
        };

        let rest = spec
            .strip_prefix('%')
            .ok_or_else(|| invalid("must start with '%'".to_string()))?;
        let mut chars = rest.chars().peekable();

        let mut flags = Flags::default();
        while let Some(&c) = chars.peek() {
            match c {
                '-' => flags.left = true,
                '+' => flags.plus = true,
                ' ' => flags.space = true,
                '0' => flags.zero = true,
                '#' => flags.alternate = true,
                _ => break,
            }
            chars.next();
        }

        let width = take_number(&mut chars).map_err(invalid)?;
        let precision = if chars.peek() == Some(&'.') {
            chars.next();
            Some(take_number(&mut chars).map_err(invalid)?.unwrap_or(0))
        } else {
            None
        };

        while matches!(
            chars.peek(),
            Some('h' | 'l' | 'L' | 'q' | 'j' | 'z' | 't')
        ) {
            chars.next();
        }

        let conversion = match chars.next() {
            Some('d' | 'i' | 'u') => Conversion::Integer,
            Some('f') => Conversion::Fixed { upper: false },
            Some('F') => Conversion::Fixed { upper: true },
            Some('e') => Conversion::Exponent { upper: false },
            Some('E') => Conversion::Exponent { upper: true },
            Some('g') => Conversion::General { upper: false },
            Some('G') => Conversion::General { upper: true },
            Some(c) => return Err(invalid(format!("unsupported conversion '{}'", c))),
            None => return Err(invalid("missing conversion character".to_string())),
        };

        if let Some(c) = chars.next() {
            return Err(invalid(format!(
                "unexpected '{}' after the conversion character",
                c
            )));
        }

        Ok(Self {
            spec: spec.to_string(),
            flags,
            width,
            precision,
            conversion,
        })
    }

    /// The `%d` integer format
    pub fn integer() -> Self {
        Self {
            spec: "%d".to_string(),
            flags: Flags::default(),
            width: None,
            precision: None,
            conversion: Conversion::Integer,
        }
    }

    /// The specifier this format was parsed from
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// True for `%d`, `%i` and `%u`
    pub fn is_integer(&self) -> bool {
        self.conversion == Conversion::Integer
    }

    /// Render one value
    pub fn format(&self, value: f64) -> String {
        let (negative, body) = if value.is_finite() {
            self.format_finite(value)
        } else {
            (value == f64::NEG_INFINITY, self.format_non_finite(value))
        };

        let sign = if negative {
            "-"
        } else if self.flags.plus {
            "+"
        } else if self.flags.space {
            " "
        } else {
            ""
        };

        let len = sign.len() + body.len();
        match self.width {
            Some(width) if width > len => {
                let pad = width - len;
                if self.flags.left {
                    format!("{}{}{}", sign, body, " ".repeat(pad))
                } else if self.flags.zero && value.is_finite() {
                    format!("{}{}{}", sign, "0".repeat(pad), body)
                } else {
                    format!("{}{}{}", " ".repeat(pad), sign, body)
                }
            }
            _ => format!("{}{}", sign, body),
        }
    }

    /// Sign and unsigned digits for a finite value
    fn format_finite(&self, value: f64) -> (bool, String) {
        let abs = value.abs();
        match self.conversion {
            Conversion::Integer => {
                let truncated = value.trunc();
                let mut digits = format!("{:.0}", truncated.abs());
                if let Some(min_digits) = self.precision {
                    if digits.len() < min_digits {
                        digits = format!("{}{}", "0".repeat(min_digits - digits.len()), digits);
                    }
                }
                (truncated < 0.0, digits)
            }
            Conversion::Fixed { .. } => {
                let precision = self.precision.unwrap_or(6);
                let mut digits = format!("{:.*}", precision, abs);
                if self.flags.alternate && precision == 0 {
                    digits.push('.');
                }
                (value.is_sign_negative(), digits)
            }
            Conversion::Exponent { upper } => {
                let precision = self.precision.unwrap_or(6);
                let (mantissa, exp) = exponent_parts(abs, precision);
                let mut mantissa = mantissa;
                if self.flags.alternate && precision == 0 {
                    mantissa.push('.');
                }
                (
                    value.is_sign_negative(),
                    render_exponent(&mantissa, exp, upper),
                )
            }
            Conversion::General { upper } => {
                (value.is_sign_negative(), self.format_general(abs, upper))
            }
        }
    }

    /// `%g`: fixed or exponent form by magnitude, trailing zeros removed
    fn format_general(&self, abs: f64, upper: bool) -> String {
        let precision = match self.precision {
            Some(0) => 1,
            Some(p) => p,
            None => 6,
        };

        let exp = if abs == 0.0 {
            0
        } else {
            exponent_parts(abs, precision - 1).1
        };

        if (precision as i32) > exp && exp >= -4 {
            let decimals = (precision as i32 - 1 - exp) as usize;
            let digits = format!("{:.*}", decimals, abs);
            if self.flags.alternate {
                digits
            } else {
                strip_fraction_zeros(&digits).to_string()
            }
        } else {
            let (mantissa, exp) = exponent_parts(abs, precision - 1);
            let mantissa = if self.flags.alternate {
                mantissa
            } else {
                strip_fraction_zeros(&mantissa).to_string()
            };
            render_exponent(&mantissa, exp, upper)
        }
    }

    fn format_non_finite(&self, value: f64) -> String {
        let upper = matches!(
            self.conversion,
            Conversion::Fixed { upper: true }
                | Conversion::Exponent { upper: true }
                | Conversion::General { upper: true }
        );
        let text = if value.is_nan() { "nan" } else { "inf" };
        if upper {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            spec: DEFAULT_FORMAT.to_string(),
            flags: Flags::default(),
            width: None,
            precision: Some(16),
            conversion: Conversion::Exponent { upper: false },
        }
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}

impl FromStr for NumberFormat {
    type Err = TnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NumberFormat {
    type Error = TnsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<NumberFormat> for String {
    fn from(format: NumberFormat) -> Self {
        format.spec
    }
}

/// Parse a payload token as a number, whatever specifier wrote it
pub fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok()
}

fn take_number(chars: &mut Peekable<Chars<'_>>) -> Result<Option<usize>, String> {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    if digits.is_empty() {
        return Ok(None);
    }
    digits
        .parse::<usize>()
        .map(Some)
        .map_err(|_| format!("'{}' is too large", digits))
}

/// Mantissa with `precision` decimals and the decimal exponent, after rounding
fn exponent_parts(abs: f64, precision: usize) -> (String, i32) {
    let formatted = format!("{:.*e}", precision, abs);
    match formatted.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse().unwrap_or(0)),
        None => (formatted, 0),
    }
}

fn render_exponent(mantissa: &str, exp: i32, upper: bool) -> String {
    let e = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}{}{}{:02}", mantissa, e, sign, exp.unsigned_abs())
}

fn strip_fraction_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
