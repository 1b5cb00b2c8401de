//! Transient notifications
//!
//! The service raises a success notification after every mutation and the
//! editing session raises error notifications when a submit is rejected.
//! How (and whether) they are shown is up to the [`Notifier`].

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Success message
    Success,
    /// Error message
    Error,
}

impl NotificationType {
    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "+",
            Self::Error => "x",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message
    pub message: String,
    /// Type of notification
    pub notification_type: NotificationType,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
        }
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Whether this reports a failure
    pub fn is_error(&self) -> bool {
        self.notification_type == NotificationType::Error
    }

    /// One-line rendering, e.g. `[+] Budget head "Insurance" created`
    pub fn line(&self) -> String {
        format!("[{}] {}", self.notification_type.icon(), self.message)
    }
}

/// Receiver of notifications
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// In-memory notification queue
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far, oldest first
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Most recent notification
    pub fn last(&self) -> Option<&Notification> {
        self.entries.last()
    }

    /// Take all pending notifications, leaving the log empty
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.entries)
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        self.entries.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_constructors() {
        assert_eq!(
            Notification::success("ok").notification_type,
            NotificationType::Success
        );
        assert_eq!(
            Notification::error("bad").notification_type,
            NotificationType::Error
        );
        assert_eq!(Notification::success("done").line(), "[+] done");
        assert_eq!(Notification::error("failed").line(), "[x] failed");
    }

    #[test]
    fn test_log_collects_and_drains() {
        let mut log = NotificationLog::new();
        log.notify(Notification::success("one"));
        log.notify(Notification::error("two"));

        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.last().unwrap().message, "two");
        assert!(!log.entries()[0].is_error());
        assert!(log.entries()[1].is_error());

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.entries().is_empty());
    }
}
