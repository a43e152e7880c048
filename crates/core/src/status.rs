//! The single user-visible status slot.

use std::fmt;

/// Shown after a successful create, update, retrieve or search.
pub const SUCCESS: &str = "Success";

/// Shown after a successful like.
pub const LIKED: &str = "The product has been liked!";

/// Shown after a successful delete.
pub const DELETED: &str = "Product has been Deleted!";

/// Shown when a failure carries no server-provided message, and for every
/// delete failure.
pub const SERVER_ERROR: &str = "Server error!";

/// Holds at most one message. Every write replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSink {
    message: Option<String>,
}

impl StatusSink {
    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for StatusSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or_default())
    }
}
