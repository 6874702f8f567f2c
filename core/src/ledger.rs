use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_BALANCE: Money = Money::from_units(1000);

/// Player balance. Independent of any particular game; the engine only borrows it for the duration of a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    balance: Money,
}

impl Ledger {
    /// Negative opening balances are clamped to zero.
    pub const fn new(balance: Money) -> Self {
        let balance = if balance.is_positive() {
            balance
        } else {
            Money::ZERO
        };
        Self { balance }
    }

    pub const fn balance(&self) -> Money {
        self.balance
    }

    pub fn can_afford(&self, amount: Money) -> bool {
        amount <= self.balance
    }

    /// Removes `amount`, never dropping below zero. Callers check [`Ledger::can_afford`] first.
    pub fn debit(&mut self, amount: Money) -> Money {
        debug_assert!(self.can_afford(amount), "debit of {amount} exceeds {}", self.balance);
        self.balance = self.balance.saturating_sub(amount).max(Money::ZERO);
        self.balance
    }

    pub fn credit(&mut self, amount: Money) -> Money {
        self.balance = self.balance + amount;
        self.balance
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(DEFAULT_BALANCE)
    }
}
