//! Payout math. Everything here is a pure function of its inputs.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{CellCount, Money};

/// Payout growth factor with two decimal places, stored in hundredths.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Multiplier(u32);

impl Multiplier {
    /// `x1.00`, the factor before any risk is taken.
    pub const ONE: Self = Self(100);

    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    pub const fn hundredths(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// `round2(1 + safe_opened * 0.15 * (1 + mine_count * 0.08))`, or `x1.00` with nothing opened.
///
/// Worked in thousandths so the rounding is exact: `0.15 * (1 + 0.08 m) = (150 + 12 m) / 1000`.
pub const fn multiplier(safe_opened: CellCount, mine_count: CellCount) -> Multiplier {
    if safe_opened == 0 {
        return Multiplier::ONE;
    }

    let growth = safe_opened as u32 * (150 + 12 * mine_count as u32);
    // half-up from thousandths to hundredths
    Multiplier((1000 + growth + 5) / 10)
}

/// `round2(stake * multiplier)`, rounding half away from zero.
pub const fn potential_win(stake: Money, multiplier: Multiplier) -> Money {
    let product = stake.cents() as i128 * multiplier.hundredths() as i128;
    let rounded = if product >= 0 {
        (product + 50) / 100
    } else {
        (product - 50) / 100
    };

    let cents = if rounded > i64::MAX as i128 {
        i64::MAX
    } else if rounded < i64::MIN as i128 {
        i64::MIN
    } else {
        rounded as i64
    };
    Money::from_cents(cents)
}
