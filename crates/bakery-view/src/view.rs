//! Intent dispatch and re-rendering.

use bakery_cart::{CartEvent, CartStore, EntryId};
use bakery_storage::Backend;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::notify::Notifications;
use crate::panel::{ClickTarget, Panel};
use crate::snapshot::CartSnapshot;
use crate::surface::Surface;

/// A shopper action coming from the UI wiring layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// "Add to cart" on a menu item.
    AddItem {
        name: String,
        price: f64,
        image: String,
    },
    Increase(EntryId),
    Decrease(EntryId),
    Remove(EntryId),
    Checkout,
    ToggleCart,
    CloseCart,
    /// A click inside the cart overlay.
    Click(ClickTarget),
}

/// Projects a [`CartStore`] onto a [`Surface`] and forwards intents to it.
///
/// Holds no cart state of its own; the store is passed in on each call.
#[derive(Debug)]
pub struct CartView<S, C = SystemClock> {
    surface: S,
    notifications: Notifications<C>,
    panel: Panel,
}

impl<S: Surface> CartView<S, SystemClock> {
    /// A view driven by the wall clock, dismissing notices after `ttl`.
    pub fn new(surface: S, ttl: std::time::Duration) -> Self {
        Self::with_clock(surface, SystemClock::new(), ttl)
    }
}

impl<S: Surface, C: Clock> CartView<S, C> {
    pub fn with_clock(surface: S, clock: C, ttl: std::time::Duration) -> Self {
        Self {
            surface,
            notifications: Notifications::new(clock, ttl),
            panel: Panel::default(),
        }
    }

    /// Draw the initial state.
    pub fn mount<B: Backend>(&mut self, store: &CartStore<B>) {
        self.surface.set_panel_visible(self.panel.is_visible());
        self.render(store);
    }

    /// Handle one shopper intent.
    ///
    /// Cart errors are shown as notices, not returned: nothing escapes the
    /// event handler.
    pub fn dispatch<B: Backend>(&mut self, store: &mut CartStore<B>, intent: Intent) {
        debug!(?intent, "dispatch");
        // Rejections reach the shopper as queued notices; `sync` shows them.
        match intent {
            Intent::AddItem { name, price, image } => {
                if let Err(e) = store.add_item(name, price, image) {
                    debug!(error = %e, "add rejected");
                }
            }
            Intent::Increase(id) => {
                if let Err(e) = store.increase_quantity(&id) {
                    debug!(%id, error = %e, "increase rejected");
                }
            }
            Intent::Decrease(id) => {
                store.decrease_quantity(&id);
            }
            Intent::Remove(id) => {
                store.remove_item(&id);
            }
            Intent::Checkout => {
                if let Err(e) = store.checkout() {
                    debug!(error = %e, "checkout rejected");
                }
            }
            Intent::ToggleCart => self.update_panel(|p| p.toggle()),
            Intent::CloseCart => self.update_panel(|p| p.close()),
            Intent::Click(target) => self.update_panel(|p| p.click(target)),
        }
        self.sync(store);
    }

    /// Apply whatever the store reported since the last sync.
    fn sync<B: Backend>(&mut self, store: &mut CartStore<B>) {
        let mut changed = false;
        for event in store.drain_events() {
            match event {
                CartEvent::Changed => changed = true,
                CartEvent::Notified(notice) => {
                    self.surface.show_notice(&notice);
                    self.notifications.show(notice);
                }
                CartEvent::CheckedOut(confirmation) => {
                    self.surface.show_confirmation(&confirmation);
                    self.update_panel(|p| p.close());
                }
            }
        }
        if changed {
            self.render(store);
        }
    }

    /// Fire any notice dismissal that has come due.
    pub fn tick(&mut self) {
        if self.notifications.poll() {
            self.surface.clear_notice();
        }
    }

    fn render<B: Backend>(&mut self, store: &CartStore<B>) {
        self.surface.render(&CartSnapshot::from(store));
    }

    fn update_panel(&mut self, f: impl FnOnce(&mut Panel)) {
        let before = self.panel.is_visible();
        f(&mut self.panel);
        if self.panel.is_visible() != before {
            self.surface.set_panel_visible(self.panel.is_visible());
        }
    }

    pub fn is_panel_visible(&self) -> bool {
        self.panel.is_visible()
    }

    pub fn notifications(&self) -> &Notifications<C> {
        &self.notifications
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
