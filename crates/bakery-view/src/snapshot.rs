//! Pure projection of cart state into display data.

use bakery_cart::{CartStore, EntryId};
use bakery_storage::Backend;
use serde::Serialize;

/// Shown in place of the item list when the cart has no entries.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// Display data for one cart entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineView {
    /// Target for the increase/decrease/remove controls.
    pub id: EntryId,
    pub name: String,
    pub image: String,
    /// Unit price with two decimals, no symbol.
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Everything a surface needs to draw the cart panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSnapshot {
    /// Item count for the badge; `None` hides the badge.
    pub count_badge: Option<u64>,
    pub lines: Vec<LineView>,
    /// Shown instead of `lines` when the cart is empty.
    pub empty_message: Option<&'static str>,
    /// Whether the total + checkout footer is shown.
    pub footer_visible: bool,
    /// Cart total with two decimals, no symbol.
    pub total: String,
    pub currency_symbol: &'static str,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<B: Backend> From<&CartStore<B>> for CartSnapshot {
    fn from(store: &CartStore<B>) -> Self {
        let count = store.total_item_count();
        let lines: Vec<LineView> = store
            .entries()
            .iter()
            .map(|entry| LineView {
                id: entry.id.clone(),
                name: entry.name.clone(),
                image: entry.image.clone(),
                price: entry.price.display_amount(),
                quantity: entry.quantity,
                line_total: entry.line_total().display_amount(),
            })
            .collect();
        let empty = lines.is_empty();

        Self {
            count_badge: (count > 0).then_some(count),
            lines,
            empty_message: empty.then_some(EMPTY_CART_MESSAGE),
            footer_visible: !empty,
            total: store.total_price().display_amount(),
            currency_symbol: store.currency().symbol(),
        }
    }
}
