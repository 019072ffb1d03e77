//! Cart state management for the bakery storefront.
//!
//! [`CartStore`] is the single source of truth for what a shopper has
//! selected. It enforces the cart invariants after every call:
//!
//! - every entry's quantity stays within `1..=max_quantity` (20 by default)
//! - at most one entry exists per product name
//! - totals are always derived from the entries, never stored
//!
//! Every change is persisted through the injected storage [`Backend`]
//! before the call returns. Side effects the display layer cares about
//! (refresh, notices, order confirmations) are queued as [`CartEvent`]s
//! and drained by the caller; the store never knows who renders it.
//!
//! # Example
//!
//! ```rust
//! use bakery_cart::prelude::*;
//! use bakery_storage::MemoryBackend;
//!
//! let mut cart = CartStore::new(MemoryBackend::new());
//! cart.add_item("Baguette", 3.0, "baguette.jpg").unwrap();
//! cart.add_item("Baguette", 3.0, "baguette.jpg").unwrap();
//!
//! assert_eq!(cart.total_item_count(), 2);
//! assert_eq!(cart.total_price().display_amount(), "6.00");
//! ```
//!
//! [`Backend`]: bakery_storage::Backend

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod events;
pub mod ids;
pub mod money;

pub use cart::{CartEntry, CartStore, CartTotals, LineTotal, MAX_QUANTITY};
pub use checkout::{OrderConfirmation, OrderLine};
pub use config::CartConfig;
pub use error::CartError;
pub use events::{CartEvent, Notice, NoticeKind};
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{CartEntry, CartStore, CartTotals, LineTotal, MAX_QUANTITY};
    pub use crate::checkout::{OrderConfirmation, OrderLine};
    pub use crate::config::CartConfig;
    pub use crate::error::CartError;
    pub use crate::events::{CartEvent, Notice, NoticeKind};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
}
