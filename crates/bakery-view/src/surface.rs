//! Display surfaces the view renders onto.

use bakery_cart::{Notice, OrderConfirmation};

use crate::snapshot::CartSnapshot;

/// A platform-specific display target.
///
/// Implementations only draw; they never touch the cart.
pub trait Surface {
    /// Redraw count badge, item list, and total.
    fn render(&mut self, snapshot: &CartSnapshot);

    /// Show `notice`, replacing any notice currently shown.
    fn show_notice(&mut self, notice: &Notice);

    /// Remove the shown notice. Must tolerate nothing being shown.
    fn clear_notice(&mut self);

    fn set_panel_visible(&mut self, visible: bool);

    /// Present the order summary after checkout.
    fn show_confirmation(&mut self, confirmation: &OrderConfirmation);
}

/// Headless surface that keeps whatever was last drawn.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    pub snapshot: Option<CartSnapshot>,
    pub notice: Option<Notice>,
    pub panel_visible: bool,
    pub confirmations: Vec<OrderConfirmation>,
    /// Number of `render` calls.
    pub renders: usize,
}

impl Surface for MemorySurface {
    fn render(&mut self, snapshot: &CartSnapshot) {
        self.snapshot = Some(snapshot.clone());
        self.renders += 1;
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.notice = Some(notice.clone());
    }

    fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn set_panel_visible(&mut self, visible: bool) {
        self.panel_visible = visible;
    }

    fn show_confirmation(&mut self, confirmation: &OrderConfirmation) {
        self.confirmations.push(confirmation.clone());
    }
}
