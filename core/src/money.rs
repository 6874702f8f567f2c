use core::fmt;
use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Monetary amount with two decimal places, stored as whole cents.
///
/// Every amount the game produces is already rounded to the cent, so balances stay exact no matter how many rounds
/// are played.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `Money::from_units(100)` is `100.00`.
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Lossy conversion for renderers that want a plain number.
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_always_shows_two_decimals() {
        assert_eq!(Money::from_units(1019).to_string(), "1019.00");
        assert_eq!(Money::from_cents(11_905).to_string(), "119.05");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
        assert_eq!(Money::from_cents(-250).to_string(), "-2.50");
    }

    #[test]
    fn arithmetic_is_exact_over_many_operations() {
        let mut balance = Money::from_units(1000);
        for _ in 0..10_000 {
            balance = balance - Money::from_cents(10) + Money::from_cents(10);
        }
        assert_eq!(balance, Money::from_units(1000));
    }

    #[test]
    fn serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(11_900)).unwrap();
        assert_eq!(json, "11900");
    }
}
