//! # Money Module
//!
//! Provides the `Money` type for shipping costs and per-item rates.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OVERAGE DRIFT                                                          │
//! │                                                                         │
//! │  Floating point:                                                        │
//! │    17.90 + 5 × 1.12 = 23.500000000000004                               │
//! │                                                                         │
//! │  Integer cents:                                                         │
//! │    1790 + 5 × 112 = 2350  → $23.50 exactly                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tiership_core::money::Money;
//!
//! let base: Money = "17.90".parse().unwrap();
//! let per_item = Money::from_cents(112);
//!
//! let total = base + per_item.multiply_quantity(5);
//! assert_eq!(total.cents(), 2350);
//! assert_eq!(total.to_string(), "$23.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;
use ts_rs::TS;

/// Number of minor units in one major unit.
const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// Signed so that a mistyped negative amount survives parsing and can be
/// reported by validation instead of being silently clamped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use tiership_core::money::Money;
    ///
    /// let price = Money::from_cents(595); // $5.95
    /// assert_eq!(price.cents(), 595);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a per-unit amount by a quantity.
    ///
    /// Saturates at the `i64` bounds instead of wrapping.
    ///
    /// ## Example
    /// ```rust
    /// use tiership_core::money::Money;
    ///
    /// let per_item = Money::from_cents(112);
    /// assert_eq!(per_item.multiply_quantity(5).cents(), 560);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Adds two amounts, saturating at the `i64` bounds.
    #[inline]
    pub const fn saturating_add(self, other: Money) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Why a decimal amount string could not be read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseMoneyError {
    #[error("amount is empty")]
    Empty,

    #[error("expected a decimal amount such as 12.65")]
    InvalidDigits,

    #[error("at most 2 decimal places are allowed")]
    TooManyDecimals,

    #[error("amount is too large")]
    Overflow,
}

/// Parses operator-typed amounts: `"5.95"`, `"12.5"`, `"2"`, `" 1.12 "`.
///
/// A leading `-` is accepted so that validation can report negative amounts
/// with a proper message. Thousands separators and currency symbols are not.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (major, minor) = match unsigned.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (unsigned, ""),
        };

        if major.is_empty() && minor.is_empty() {
            return Err(ParseMoneyError::InvalidDigits);
        }
        if !major.chars().chain(minor.chars()).all(|c| c.is_ascii_digit()) {
            return Err(ParseMoneyError::InvalidDigits);
        }
        if minor.len() > 2 {
            return Err(ParseMoneyError::TooManyDecimals);
        }

        let major_value: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| ParseMoneyError::Overflow)?
        };
        // "5" → 0, "5.5" → 50, "5.05" → 5
        let minor_value: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| ParseMoneyError::InvalidDigits)? * 10,
            _ => minor.parse().map_err(|_| ParseMoneyError::InvalidDigits)?,
        };

        let cents = major_value
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|c| c.checked_add(minor_value))
            .ok_or(ParseMoneyError::Overflow)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$17.90`.
///
/// ## Note
/// For logs and error messages. The storefront formats with its own locale.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Saturating, same as [`Money::saturating_add`].
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
