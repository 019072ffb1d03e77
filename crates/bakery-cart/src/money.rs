//! Prices in integer cents.
//!
//! Prices arrive as decimal numbers but every sum is taken over whole
//! cents, so a cart of `0.10 + 0.20` always totals `0.30`.

use serde::{Deserialize, Serialize};
use std::fmt;

const CENTS_PER_UNIT: i64 = 100;

/// Currencies a cart can be priced in. All of them have two minor digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Symbol printed in front of an amount.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }
}

/// An amount of money in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Round a decimal price to the nearest cent.
    ///
    /// ```
    /// use bakery_cart::money::{Currency, Money};
    /// let price = Money::from_decimal(2.5, Currency::USD);
    /// assert_eq!(price.amount_cents, 250);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * CENTS_PER_UNIT as f64).round() as i64, currency)
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// The amount as a decimal number, for the persisted format.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Amount with symbol, e.g. "$18.00".
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Amount with exactly two decimals and no symbol, e.g. "18.00".
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let cents = self.amount_cents.unsigned_abs();
        format!(
            "{}{}.{:02}",
            sign,
            cents / CENTS_PER_UNIT as u64,
            cents % CENTS_PER_UNIT as u64
        )
    }

    /// `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Sum amounts in `currency`. `None` on overflow or if any amount is in
    /// another currency.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| {
            if m.currency != currency {
                return None;
            }
            acc.amount_cents
                .checked_add(m.amount_cents)
                .map(|cents| Money::new(cents, currency))
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
