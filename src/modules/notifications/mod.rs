//! Notification module for transient user messages
//!
//! Provides the `Notifier` sink plus an in-memory queue a UI can drain
//! and a tracing-backed sink for headless runs.

mod notifier;

pub use notifier::{Notification, NotificationLevel, NotificationQueue, Notifier, TracingNotifier};
