//! Money type for representing currency amounts
//!
//! Amounts are plain `f64` values. Sums are compared with a tolerance of
//! [`EPSILON`] rather than exact equality. Construction from text or from a
//! raw float is validated: non-numeric and non-finite input is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::{WalletsError, WalletsResult};

/// Tolerance used when comparing derived sums of money
pub const EPSILON: f64 = 1e-10;

/// A validated monetary amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from a float, rejecting NaN and infinities
    pub fn new(amount: f64) -> WalletsResult<Self> {
        if amount.is_finite() {
            Ok(Self(amount))
        } else {
            Err(WalletsError::InvalidAmount(amount.to_string()))
        }
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw amount
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Equality within [`EPSILON`]
    pub fn approx_eq(&self, other: Money) -> bool {
        (self.0 - other.0).abs() < EPSILON
    }

    /// Parse a money amount from a string
    ///
    /// Accepts anything Rust reads as a float ("10.50", "-3", "1e3"), with at
    /// most one leading sign and an optional `$` after it. The error echoes
    /// the input as given.
    pub fn parse(s: &str) -> WalletsResult<Self> {
        let invalid = || WalletsError::InvalidAmount(s.to_string());
        let trimmed = s.trim();

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, trimmed.strip_prefix('+').unwrap_or(trimmed))
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        if rest.starts_with(['+', '-']) {
            return Err(invalid());
        }

        let value: f64 = rest.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol and two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{:.2}", symbol, self.0.abs())
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Conversion of caller input into a validated [`Money`]
///
/// Engine operations accept anything implementing this, so both typed amounts
/// and raw user text flow through the same validation.
pub trait IntoMoney {
    fn into_money(self) -> WalletsResult<Money>;
}

impl IntoMoney for Money {
    fn into_money(self) -> WalletsResult<Money> {
        Ok(self)
    }
}

impl IntoMoney for f64 {
    fn into_money(self) -> WalletsResult<Money> {
        Money::new(self)
    }
}

impl IntoMoney for &str {
    fn into_money(self) -> WalletsResult<Money> {
        Money::parse(self)
    }
}

impl IntoMoney for &String {
    fn into_money(self) -> WalletsResult<Money> {
        Money::parse(self)
    }
}

impl IntoMoney for String {
    fn into_money(self) -> WalletsResult<Money> {
        Money::parse(&self)
    }
}
