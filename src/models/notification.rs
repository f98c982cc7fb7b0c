//! User-facing notifications and the sink that shows them.

/// Severity of a user-facing notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    #[default]
    Info,
}

/// A notification queued for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
}

/// Sink for user-facing messages.
pub trait Notifier {
    fn notify(&self, message: &str, level: NotificationLevel);
}
