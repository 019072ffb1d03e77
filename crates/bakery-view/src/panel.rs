//! Cart panel visibility.

/// Where a click inside the cart overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed backdrop around the panel.
    Backdrop,
    /// Anywhere on the panel itself.
    Content,
}

/// Shown/hidden state of the cart panel, independent of its contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panel {
    visible: bool,
}

impl Panel {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Backdrop clicks close the panel; clicks on the panel do nothing.
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }
}
