//! Shopping cart module.
//!
//! Contains the cart entry type, derived totals, and the store that owns
//! and persists them.

mod entry;
mod store;
mod totals;

pub use entry::CartEntry;
pub use store::CartStore;
pub use totals::{CartTotals, LineTotal};

/// Maximum quantity allowed per entry.
pub const MAX_QUANTITY: u32 = 20;

/// Upper bound on a unit price, in major currency units.
///
/// Keeps `price * quantity` sums far away from `i64` overflow.
pub const MAX_UNIT_PRICE: f64 = 1_000_000.0;
