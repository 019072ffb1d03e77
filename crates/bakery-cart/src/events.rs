//! Side effects the store reports to whoever renders it.

use serde::{Deserialize, Serialize};

use crate::checkout::OrderConfirmation;

/// Classification of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// A short user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    /// A success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    /// An error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Something the display layer should react to.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    /// Entries changed (or were re-persisted); count, list and total need
    /// a refresh.
    Changed,
    /// Show a notice.
    Notified(Notice),
    /// An order was placed and the cart cleared.
    CheckedOut(OrderConfirmation),
}
