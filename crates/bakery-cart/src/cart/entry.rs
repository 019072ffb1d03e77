//! Cart entry type and its persisted form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::MAX_UNIT_PRICE;
use crate::ids::EntryId;
use crate::money::{Currency, Money};

/// One line in the cart: a product and how many of it.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    /// Unique entry identifier, stable for the entry's lifetime.
    pub id: EntryId,
    /// Display name; also the merge key.
    pub name: String,
    /// Unit price, fixed when the entry was created.
    pub price: Money,
    /// Image URI.
    pub image: String,
    /// Always within `1..=max_quantity`.
    pub quantity: u32,
}

impl CartEntry {
    /// Price of this line (`price * quantity`).
    pub fn line_total(&self) -> Money {
        self.price
            .try_multiply(i64::from(self.quantity))
            .unwrap_or(Money::new(i64::MAX, self.price.currency))
    }
}

/// Wire shape of an entry in durable storage.
///
/// Prices are plain decimal numbers so the payload stays readable by any
/// other client of the same storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct StoredEntry {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl From<&CartEntry> for StoredEntry {
    fn from(entry: &CartEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.clone(),
            price: entry.price.to_decimal(),
            image: entry.image.clone(),
            quantity: entry.quantity,
        }
    }
}

/// Why a stored payload was discarded.
#[derive(Error, Debug, PartialEq)]
pub(crate) enum InvalidEntry {
    #[error("entry {id} has quantity {quantity}, allowed range is 1..={max}")]
    Quantity { id: String, quantity: u32, max: u32 },

    #[error("entry {id} has invalid price {price}")]
    Price { id: String, price: f64 },

    #[error("entry id {0} appears more than once")]
    DuplicateId(String),

    #[error("product {0} appears in more than one entry")]
    DuplicateName(String),
}

impl StoredEntry {
    /// Convert back to a [`CartEntry`], checking the per-entry invariants.
    pub(crate) fn into_entry(self, currency: Currency, max_quantity: u32) -> Result<CartEntry, InvalidEntry> {
        if self.quantity == 0 || self.quantity > max_quantity {
            return Err(InvalidEntry::Quantity {
                id: self.id,
                quantity: self.quantity,
                max: max_quantity,
            });
        }
        if !is_valid_price(self.price) {
            return Err(InvalidEntry::Price {
                id: self.id,
                price: self.price,
            });
        }

        Ok(CartEntry {
            id: EntryId::new(self.id),
            name: self.name,
            price: Money::from_decimal(self.price, currency),
            image: self.image,
            quantity: self.quantity,
        })
    }
}

/// A unit price the cart will accept.
pub(crate) fn is_valid_price(price: f64) -> bool {
    price.is_finite() && (0.0..=MAX_UNIT_PRICE).contains(&price)
}
