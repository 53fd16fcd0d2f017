//! User-facing notifications
//!
//! Fetch and export failures raise a toast-style notification as a side
//! effect. The data layer only knows the `Notifier` trait; the UI renders
//! toasts, the CLI writes log lines.

use super::Resource;

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// A toast-style message
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        variant: NotificationVariant,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant,
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NotificationVariant::Default)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NotificationVariant::Destructive)
    }

    /// Raised once per failed fetch
    pub fn fetch_failed(resource: Resource) -> Self {
        Self::error(
            "Error",
            format!(
                "Failed to fetch {}. Please try again later.",
                resource.label()
            ),
        )
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Sink for notifications
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Writes notifications to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Destructive => {
                tracing::error!(title = %notification.title, "{}", notification.description)
            }
            NotificationVariant::Default => {
                tracing::info!(title = %notification.title, "{}", notification.description)
            }
        }
    }
}
