//! User-facing error notification sink.

use std::sync::{Arc, Mutex};

/// Fire-and-forget sink for human-readable error messages.
///
/// The reconciler routes one message per failed operation here; no return
/// value is consumed and delivery failures are invisible to the caller.
pub trait NotificationSink: Send + Sync {
    /// Delivers a human-readable error message.
    fn notify_error(&self, message: &str);
}

/// Notification sink that routes messages to the `tracing` log stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates a new tracing-backed notifier.
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for TracingNotifier {
    fn notify_error(&self, message: &str) {
        tracing::warn!(target: "cart::notifications", "{message}");
    }
}

/// Notification sink that records messages for assertions in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    /// Creates a new recording notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded messages in delivery order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Returns the most recently recorded message.
    pub fn last(&self) -> Option<String> {
        self.messages.lock().unwrap().last().cloned()
    }

    /// Returns the number of recorded messages.
    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    /// Returns true if no message has been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.lock().unwrap().is_empty()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
