//! Amount type for the numeric column of the input.
//!
//! This module provides the `Amount` type which holds a `Decimal` whenever the value fits and an
//! `f64` when it does not. Parsing is strict: only conventional numeric text is accepted.

use crate::model::Cell;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Add;
use std::str::FromStr;

/// Represents a numeric amount.
///
/// Values within the range of `Decimal` (about ±7.9e28) accumulate exactly, so integral inputs
/// produce integral sums and short decimals add up without binary floating point noise. Values
/// beyond that range, and any sum that overflows it, are carried as `f64` from then on.
/// `Amount` serializes as a JSON floating point number.
///
/// # Examples
///
/// ```
/// # use category_totals::model::Amount;
/// # use std::str::FromStr;
/// let a = Amount::from_str("0.1").unwrap();
/// let b = Amount::from_str("0.2").unwrap();
/// assert_eq!((a + b).to_string(), "0.3");
/// ```
///
/// Numbers too large for `Decimal` are still numbers:
/// ```
/// # use category_totals::model::Amount;
/// # use std::str::FromStr;
/// let big = Amount::from_str("1e40").unwrap();
/// assert_eq!(big.to_f64(), 1e40);
/// assert!(Amount::from_str("N/A").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Amount {
    /// A value held exactly.
    Exact(Decimal),
    /// A finite value outside the range of `Decimal`.
    Approx(f64),
}

impl Amount {
    pub const ZERO: Amount = Amount::Exact(Decimal::ZERO);

    /// Returns the exact value, if the amount is held exactly.
    pub fn decimal(&self) -> Option<Decimal> {
        match self {
            Amount::Exact(d) => Some(*d),
            Amount::Approx(_) => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Amount::Exact(d) => d.is_zero(),
            Amount::Approx(f) => *f == 0.0,
        }
    }

    /// Interprets a raw cell as a number, or returns `None` if it is not one.
    pub fn parse_cell(cell: &Cell) -> Option<Self> {
        match cell {
            Cell::Empty | Cell::Bool(_) | Cell::Other(_) => None,
            Cell::Int(i) => Some(Amount::Exact(Decimal::from(*i))),
            Cell::Float(f) => from_f64(*f),
            Cell::Text(s) => Amount::from_str(s).ok(),
        }
    }

    /// The value as an `f64`. Zero is always positive zero.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        match self {
            // Going through the decimal text gives the nearest f64, so 150.3 stays 150.3
            Amount::Exact(d) => d
                .to_string()
                .parse::<f64>()
                .ok()
                .or_else(|| d.to_f64())
                .unwrap_or_default(),
            Amount::Approx(f) => *f,
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::ZERO
    }
}

/// Equality is by numeric value. Two exact amounts compare exactly, anything else compares as
/// `f64`.
impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Amount::Exact(a), Amount::Exact(b)) => a == b,
            _ => self.to_f64() == other.to_f64(),
        }
    }
}

/// `None` for non-finite values. Finite values beyond the range of `Decimal` become `Approx`.
fn from_f64(f: f64) -> Option<Amount> {
    if !f.is_finite() {
        return None;
    }
    Some(match Decimal::from_f64(f) {
        Some(d) => Amount::Exact(d),
        None => Amount::Approx(f),
    })
}

/// An error that occurs when a string is not a conventional number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountError(String);

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a number", self.0)
    }
}

impl std::error::Error for AmountError {}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !is_numeric_literal(trimmed) {
            return Err(AmountError(s.to_string()));
        }

        let exact = if trimmed.contains(['e', 'E']) {
            None
        } else {
            Decimal::from_str(&canonical_decimal(trimmed)).ok()
        };

        match exact {
            Some(value) => Ok(Amount::Exact(value)),
            // Exponent notation, or too many digits for Decimal
            None => trimmed
                .parse::<f64>()
                .ok()
                .and_then(from_f64)
                .ok_or_else(|| AmountError(s.to_string())),
        }
    }
}

/// Rewrites a plain decimal literal into the shape `Decimal::from_str` expects: no leading plus
/// sign, a digit before the point, and no dangling point.
fn canonical_decimal(s: &str) -> String {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.strip_prefix('+').unwrap_or(s)),
    };
    let digits = digits.strip_suffix('.').unwrap_or(digits);
    if digits.starts_with('.') {
        format!("{sign}0{digits}")
    } else {
        format!("{sign}{digits}")
    }
}

/// Checks for `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
fn is_numeric_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Exact(d) => Display::fmt(&d.normalize(), f),
            Amount::Approx(v) => Display::fmt(v, f),
        }
    }
}

impl Add for Amount {
    type Output = Amount;

    /// Adds exactly while the sum fits in `Decimal`, and in `f64` once it does not.
    fn add(self, rhs: Amount) -> Amount {
        if let (Amount::Exact(a), Amount::Exact(b)) = (self, rhs) {
            if let Some(sum) = a.checked_add(b) {
                return Amount::Exact(sum);
            }
        }
        Amount::Approx(self.to_f64() + rhs.to_f64())
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.to_f64())
    }
}
