//! Cart configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cart::MAX_QUANTITY;
use crate::error::CartError;
use crate::money::Currency;

/// Storage key the cart is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "cartItems";

/// How long a notice stays visible.
pub const DEFAULT_NOTICE_TTL_MS: u64 = 3000;

/// Tunables for a [`CartStore`](crate::CartStore).
///
/// Missing fields fall back to their defaults when deserialized, so a
/// config file only needs to mention what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Key the entries are stored under.
    pub storage_key: String,
    /// Per-entry quantity cap. May lower [`MAX_QUANTITY`], never raise it.
    pub max_quantity: u32,
    /// Notice auto-dismiss delay in milliseconds.
    pub notice_ttl_ms: u64,
    /// Currency prices are interpreted in.
    pub currency: Currency,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_quantity: MAX_QUANTITY,
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
            currency: Currency::USD,
        }
    }
}

impl CartConfig {
    /// Check that the values can uphold the cart invariants.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.storage_key.trim().is_empty() {
            return Err(CartError::InvalidConfig(
                "storage_key must not be empty".to_string(),
            ));
        }
        if self.max_quantity == 0 || self.max_quantity > MAX_QUANTITY {
            return Err(CartError::InvalidConfig(format!(
                "max_quantity must be between 1 and {}, got {}",
                MAX_QUANTITY, self.max_quantity
            )));
        }
        Ok(())
    }

    /// Notice auto-dismiss delay.
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }
}
