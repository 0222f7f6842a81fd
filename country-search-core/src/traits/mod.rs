//! Page surface and notification traits, with in-memory implementations

mod notifier;
mod page;

pub use notifier::{Notification, NotificationLog, Notifier, Severity};
pub use page::{Container, MemoryContainer, MemoryInput, PageHandles, SearchInput};
