//! Order confirmation produced by a (simulated) checkout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartEntry;
use crate::ids::OrderId;
use crate::money::Money;

/// One purchased line, frozen at checkout time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

/// Summary handed back to the shopper after checkout.
///
/// No payment is taken; this only records what the cart held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub lines: Vec<OrderLine>,
    pub item_count: u64,
    pub total: Money,
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    pub(crate) fn new(entries: &[CartEntry], item_count: u64, total: Money) -> Self {
        let lines = entries
            .iter()
            .map(|entry| OrderLine {
                name: entry.name.clone(),
                quantity: entry.quantity,
                unit_price: entry.price,
                line_total: entry.line_total(),
            })
            .collect();

        Self {
            order_id: OrderId::generate(),
            lines,
            item_count,
            total,
            placed_at: Utc::now(),
        }
    }

    /// Total formatted with two decimals, without a symbol.
    pub fn total_display(&self) -> String {
        self.total.display_amount()
    }

    /// The thank-you text shown to the shopper.
    pub fn message(&self) -> String {
        format!(
            "Thank you for your order! Total: {}\n\nThis is a demo - no actual payment will be processed.",
            self.total.display()
        )
    }
}
