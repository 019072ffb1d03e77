//! The cart store: owns entries, enforces limits, persists every change.

use std::collections::HashSet;

use bakery_storage::{Backend, Store};
use tracing::{debug, info, warn};

use super::entry::{is_valid_price, InvalidEntry, StoredEntry};
use super::{CartEntry, CartTotals};
use crate::checkout::OrderConfirmation;
use crate::config::CartConfig;
use crate::error::CartError;
use crate::events::{CartEvent, Notice};
use crate::ids::EntryId;
use crate::money::{Currency, Money};

/// Single source of truth for cart contents.
///
/// Constructed explicitly by the caller with a storage [`Backend`]; there is
/// no global instance. All mutations go through `&mut self`, and each one
/// that changes state is written to storage before it returns.
///
/// Product identity is name equality: adding a name that is already in the
/// cart bumps that entry's quantity instead of appending a second line.
#[derive(Debug)]
pub struct CartStore<B> {
    store: Store<B>,
    config: CartConfig,
    entries: Vec<CartEntry>,
    events: Vec<CartEvent>,
}

impl<B: Backend> CartStore<B> {
    /// Open a cart with the default configuration, loading whatever the
    /// backend already holds.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, CartConfig::default())
    }

    /// Open a cart with a validated configuration.
    pub fn open(backend: B, config: CartConfig) -> Result<Self, CartError> {
        config.validate()?;
        Ok(Self::with_config(backend, config))
    }

    fn with_config(backend: B, config: CartConfig) -> Self {
        let mut cart = Self {
            store: Store::new(backend),
            config,
            entries: Vec::new(),
            events: Vec::new(),
        };
        cart.entries = cart.load();
        debug!(
            key = %cart.config.storage_key,
            entries = cart.entries.len(),
            "cart loaded"
        );
        cart
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add one unit of a product.
    ///
    /// Merges into the existing entry with the same `name`, otherwise
    /// appends a new entry with quantity 1. Fails without mutating if the
    /// merge would exceed the quantity cap or the price is invalid.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Result<EntryId, CartError> {
        let name = name.into();
        let limit = self.config.max_quantity;

        let id = match self.position_by_name(&name) {
            Some(pos) => {
                if self.entries[pos].quantity >= limit {
                    return Err(self.reject(CartError::QuantityLimitExceeded {
                        limit,
                        name: Some(name),
                    }));
                }
                let entry = &mut self.entries[pos];
                entry.quantity += 1;
                debug!(id = %entry.id, name = %entry.name, quantity = entry.quantity, "merged into entry");
                entry.id.clone()
            }
            None => {
                if !is_valid_price(price) {
                    return Err(self.reject(CartError::InvalidPrice(price)));
                }
                let entry = CartEntry {
                    id: self.fresh_id(),
                    name: name.clone(),
                    price: Money::from_decimal(price, self.config.currency),
                    image: image.into(),
                    quantity: 1,
                };
                debug!(id = %entry.id, name = %entry.name, "appended entry");
                let id = entry.id.clone();
                self.entries.push(entry);
                id
            }
        };

        if self.persist() {
            self.events
                .push(CartEvent::Notified(Notice::success(format!("{} added to cart!", name))));
        }
        Ok(id)
    }

    /// Increment an entry's quantity by one.
    ///
    /// Returns `Ok(false)` if no entry has this id.
    pub fn increase_quantity(&mut self, id: &EntryId) -> Result<bool, CartError> {
        let limit = self.config.max_quantity;
        let Some(pos) = self.position(id) else {
            return Ok(false);
        };

        if self.entries[pos].quantity >= limit {
            return Err(self.reject(CartError::QuantityLimitExceeded { limit, name: None }));
        }

        self.entries[pos].quantity += 1;
        debug!(%id, quantity = self.entries[pos].quantity, "increased quantity");
        self.persist();
        Ok(true)
    }

    /// Decrement an entry's quantity by one.
    ///
    /// Never goes below 1; removing an entry takes [`remove_item`]. Returns
    /// whether anything changed.
    ///
    /// [`remove_item`]: Self::remove_item
    pub fn decrease_quantity(&mut self, id: &EntryId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        if self.entries[pos].quantity <= 1 {
            return false;
        }

        self.entries[pos].quantity -= 1;
        debug!(%id, quantity = self.entries[pos].quantity, "decreased quantity");
        self.persist();
        true
    }

    /// Remove an entry. Persists even when nothing matched.
    pub fn remove_item(&mut self, id: &EntryId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| &e.id != id);
        let removed = self.entries.len() < len_before;
        debug!(%id, removed, "remove entry");
        self.persist();
        removed
    }

    /// Place a (simulated) order and clear the cart.
    pub fn checkout(&mut self) -> Result<OrderConfirmation, CartError> {
        if self.entries.is_empty() {
            return Err(self.reject(CartError::EmptyCart));
        }

        let totals = self.totals();
        let confirmation = OrderConfirmation::new(&self.entries, totals.item_count, totals.total);
        info!(
            order_id = %confirmation.order_id,
            items = confirmation.item_count,
            total = %confirmation.total,
            "order placed"
        );

        self.entries.clear();
        self.persist();
        self.events.push(CartEvent::CheckedOut(confirmation.clone()));
        Ok(confirmation)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Write the current entries under the configured key, replacing any
    /// previous value.
    pub fn save(&self) -> Result<(), CartError> {
        let stored: Vec<StoredEntry> = self.entries.iter().map(StoredEntry::from).collect();
        self.store.set(&self.config.storage_key, &stored)?;
        Ok(())
    }

    /// Read entries from storage.
    ///
    /// A missing key, an undecodable payload, or entries that break the cart
    /// invariants all yield an empty cart. Nothing is surfaced to the
    /// shopper; the reason is logged.
    pub fn load(&self) -> Vec<CartEntry> {
        let key = &self.config.storage_key;
        let stored = match self.store.get::<Vec<StoredEntry>>(key) {
            Ok(Some(stored)) => stored,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "discarding unreadable cart");
                return Vec::new();
            }
        };

        match validate_entries(stored, self.config.currency, self.config.max_quantity) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(key = %key, error = %e, "discarding invalid cart");
                Vec::new()
            }
        }
    }

    /// Persist and queue a refresh. Returns whether the write succeeded.
    ///
    /// A failed write leaves the in-memory entries in place and queues an
    /// error notice instead.
    fn persist(&mut self) -> bool {
        let saved = match self.save() {
            Ok(()) => true,
            Err(e) => {
                warn!(key = %self.config.storage_key, error = %e, "failed to persist cart");
                self.events.push(CartEvent::Notified(Notice::error(e.to_string())));
                false
            }
        };
        self.events.push(CartEvent::Changed);
        saved
    }

    /// Queue an error notice for a rejected request and hand the error back.
    fn reject(&mut self, err: CartError) -> CartError {
        debug!(error = %err, "cart request rejected");
        self.events
            .push(CartEvent::Notified(Notice::error(err.to_string())));
        err
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &EntryId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Look up an entry by product name.
    pub fn find_by_name(&self, name: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of quantities across all entries.
    pub fn total_item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Sum of `price * quantity` across all entries.
    pub fn total_price(&self) -> Money {
        self.totals().total
    }

    /// Full derived pricing breakdown.
    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.entries, self.config.currency)
    }

    pub fn currency(&self) -> Currency {
        self.config.currency
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// The storage backend this cart persists to.
    pub fn backend(&self) -> &B {
        self.store.backend()
    }

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<CartEvent> {
        std::mem::take(&mut self.events)
    }

    fn position(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    fn fresh_id(&self) -> EntryId {
        loop {
            let id = EntryId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}

/// Convert a stored payload, rejecting it as a whole if any entry breaks an
/// invariant.
fn validate_entries(
    stored: Vec<StoredEntry>,
    currency: Currency,
    max_quantity: u32,
) -> Result<Vec<CartEntry>, InvalidEntry> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    let mut entries = Vec::with_capacity(stored.len());

    for item in stored {
        let entry = item.into_entry(currency, max_quantity)?;
        if !ids.insert(entry.id.clone()) {
            return Err(InvalidEntry::DuplicateId(entry.id.into_inner()));
        }
        if !names.insert(entry.name.clone()) {
            return Err(InvalidEntry::DuplicateName(entry.name));
        }
        entries.push(entry);
    }

    Ok(entries)
}
