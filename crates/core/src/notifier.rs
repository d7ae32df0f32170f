//! Alert presentation capability.
//!
//! The classifier calls into a [`Notifier`] whenever a reading is critical or
//! in a warning band. How the alert reaches a human (console text, a flashing
//! indicator, a pager) is up to the implementation.

use serde::Serialize;

use crate::registry::Vital;
use crate::status::Status;
use crate::types::Timestamp;

/// A single critical or warning condition raised by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub vital: Vital,
    pub status: Status,
    /// Message from the vital's definition matching `status`.
    pub message: String,
    /// The reading as supplied by the caller, e.g. `37°C` or `70`.
    pub display_value: String,
    pub raised_at: Timestamp,
}

/// Receives notifications from the classifier.
///
/// `on_critical` may block for as long as the alert takes to present;
/// `on_warning` should return promptly.
pub trait Notifier {
    fn on_critical(&mut self, notification: &Notification);
    fn on_warning(&mut self, notification: &Notification);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn on_critical(&mut self, notification: &Notification) {
        (**self).on_critical(notification);
    }

    fn on_warning(&mut self, notification: &Notification) {
        (**self).on_warning(notification);
    }
}

/// Drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn on_critical(&mut self, _notification: &Notification) {}
    fn on_warning(&mut self, _notification: &Notification) {}
}

/// Records every notification in call order without any delay.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub received: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Critical notifications only, in call order.
    pub fn criticals(&self) -> impl Iterator<Item = &Notification> {
        self.received.iter().filter(|n| n.status.is_critical())
    }

    /// Warning notifications only, in call order.
    pub fn warnings(&self) -> impl Iterator<Item = &Notification> {
        self.received
            .iter()
            .filter(|n| matches!(n.status, Status::Warning(_)))
    }
}

impl Notifier for RecordingNotifier {
    fn on_critical(&mut self, notification: &Notification) {
        self.received.push(notification.clone());
    }

    fn on_warning(&mut self, notification: &Notification) {
        self.received.push(notification.clone());
    }
}
