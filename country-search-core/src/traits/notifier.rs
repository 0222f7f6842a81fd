//! User-facing notifications

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::utils::lock;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Failure,
}

/// A shown notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// Fire-and-forget notification channel.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);

    fn success(&self, message: &str) {
        self.notify(Severity::Success, message);
    }

    fn info(&self, message: &str) {
        self.notify(Severity::Info, message);
    }

    fn failure(&self, message: &str) {
        self.notify(Severity::Failure, message);
    }
}

/// Notifier that keeps every notification in memory.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<Notification> {
        lock(&self.entries).last().cloned()
    }

    pub fn all(&self) -> Vec<Notification> {
        lock(&self.entries).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, severity: Severity, message: &str) {
        log::debug!("notify {severity:?}: {message}");
        lock(&self.entries).push(Notification {
            severity,
            message: message.to_string(),
        });
    }
}
