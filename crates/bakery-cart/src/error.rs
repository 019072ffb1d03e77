//! Cart error types.
//!
//! Every variant is recoverable and local to the operation that raised it.
//! The `Display` text is what the shopper sees in the error notice.

use bakery_storage::StorageError;
use thiserror::Error;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// Adding or increasing would push an entry past the per-item cap.
    #[error("{}", quantity_limit_message(*limit, name.as_deref()))]
    QuantityLimitExceeded { limit: u32, name: Option<String> },

    /// Checkout was requested with nothing in the cart.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// The unit price is negative, not a number, or absurdly large.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// Writing the cart to durable storage failed. The in-memory cart is
    /// still authoritative when this is reported from a mutation.
    #[error("Your cart could not be saved: {0}")]
    PersistFailed(#[from] StorageError),

    /// Configuration values are out of range.
    #[error("Invalid cart configuration: {0}")]
    InvalidConfig(String),
}

fn quantity_limit_message(limit: u32, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Maximum quantity of {} reached for {}", limit, name),
        None => format!("Maximum quantity of {} reached", limit),
    }
}
