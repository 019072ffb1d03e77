//! Display projection and intent dispatch for the bakery cart.
//!
//! The view never owns cart state. It reads a [`CartStore`] into a
//! [`CartSnapshot`], hands that to a platform [`Surface`], and forwards
//! shopper intents back to the store:
//!
//! ```text
//! Intent ──▶ CartView::dispatch ──▶ CartStore ──events──▶ CartView ──▶ Surface
//! ```
//!
//! Transient notices are owned by [`Notifications`]: one visible at a time,
//! each dismissed by a cancelable timer measured on an injected [`Clock`].
//!
//! [`CartStore`]: bakery_cart::CartStore

mod clock;
mod notify;
mod panel;
mod snapshot;
mod surface;
mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use notify::{Notifications, TimerHandle};
pub use panel::{ClickTarget, Panel};
pub use snapshot::{CartSnapshot, LineView, EMPTY_CART_MESSAGE};
pub use surface::{MemorySurface, Surface};
pub use view::{CartView, Intent};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CartSnapshot, CartView, ClickTarget, Clock, Intent, ManualClock, MemorySurface, Surface,
        SystemClock,
    };
}
