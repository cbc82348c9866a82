//! User-facing notifications.
//!
//! Components that can fail take a `&dyn Notify` and report through it.
//! [`AlertBus`] is the standard sink: it holds a single active message and
//! each new notification replaces the previous one.

use std::sync::{Mutex, OnceLock, PoisonError};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertMessage {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub text: String,
}

/// Sink for user-visible notifications.
pub trait Notify: Send + Sync {
    fn notify(&self, kind: AlertKind, text: &str);
}

/// Single-slot message holder.
#[derive(Debug, Default)]
pub struct AlertBus {
    active: Mutex<Option<AlertMessage>>,
}

impl AlertBus {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: Mutex::new(None),
        }
    }

    /// The process-wide bus.
    pub fn global() -> &'static Self {
        static BUS: OnceLock<AlertBus> = OnceLock::new();
        BUS.get_or_init(Self::new)
    }

    /// The active message, if any.
    #[must_use]
    pub fn current(&self) -> Option<AlertMessage> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clear the active message and return it.
    pub fn close(&self) -> Option<AlertMessage> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Notify for AlertBus {
    fn notify(&self, kind: AlertKind, text: &str) {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        *active = Some(AlertMessage {
            kind,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bus_is_empty() {
        assert!(AlertBus::new().current().is_none());
    }

    #[test]
    fn notify_replaces_active_message() {
        let bus = AlertBus::new();
        bus.notify(AlertKind::Error, "first");
        bus.notify(AlertKind::Success, "second");

        let current = bus.current().unwrap();
        assert_eq!(current.kind, AlertKind::Success);
        assert_eq!(current.text, "second");
    }

    #[test]
    fn close_clears_the_slot() {
        let bus = AlertBus::new();
        bus.notify(AlertKind::Error, "boom");
        assert_eq!(bus.close().map(|m| m.text), Some(String::from("boom")));
        assert!(bus.current().is_none());
        assert!(bus.close().is_none());
    }

    #[test]
    fn message_serializes_with_type_key() {
        let message = AlertMessage {
            kind: AlertKind::Error,
            text: "Erro".into(),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json, serde_json::json!({"type": "error", "text": "Erro"}));
    }
}
