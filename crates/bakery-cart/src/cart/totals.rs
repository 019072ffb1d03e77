//! Derived cart totals.

use serde::{Deserialize, Serialize};

use crate::cart::CartEntry;
use crate::ids::EntryId;
use crate::money::{Currency, Money};

/// Totals derived from the current entries. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of all quantities.
    pub item_count: u64,
    /// Sum of `price * quantity` over all entries.
    pub total: Money,
    /// Per-entry breakdown, in cart order.
    pub lines: Vec<LineTotal>,
}

/// Pricing for a single entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTotal {
    pub entry_id: EntryId,
    pub unit_price: Money,
    pub quantity: u32,
    pub total: Money,
}

impl CartTotals {
    /// Compute totals for `entries`.
    ///
    /// Prices are bounded on the way in, so the saturating fallback is only
    /// reachable with an absurd number of entries.
    pub fn compute(entries: &[CartEntry], currency: Currency) -> Self {
        let lines: Vec<LineTotal> = entries
            .iter()
            .map(|entry| LineTotal {
                entry_id: entry.id.clone(),
                unit_price: entry.price,
                quantity: entry.quantity,
                total: entry.line_total(),
            })
            .collect();

        let item_count = entries.iter().map(|e| u64::from(e.quantity)).sum();
        let total = Money::try_sum(lines.iter().map(|l| &l.total), currency)
            .unwrap_or(Money::new(i64::MAX, currency));

        Self {
            item_count,
            total,
            lines,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, cents: i64, quantity: u32) -> CartEntry {
        CartEntry {
            id: EntryId::new(id),
            name: id.to_string(),
            price: Money::new(cents, Currency::USD),
            image: String::new(),
            quantity,
        }
    }

    #[test]
    fn test_totals() {
        let entries = vec![entry("baguette", 300, 2), entry("cake", 1200, 1)];
        let totals = CartTotals::compute(&entries, Currency::USD);

        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.total.display_amount(), "18.00");
        assert_eq!(totals.lines[0].total.amount_cents, 600);
        assert_eq!(totals.lines[1].entry_id, EntryId::new("cake"));
    }

    #[test]
    fn test_empty_totals() {
        let totals = CartTotals::compute(&[], Currency::USD);
        assert!(totals.is_empty());
        assert_eq!(totals.item_count, 0);
        assert_eq!(totals.total.display_amount(), "0.00");
    }
}
