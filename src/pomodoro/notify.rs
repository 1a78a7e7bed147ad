//! Desktop notifications for interval completion.

use notify_rust::Notification;

/// Best-effort delivery of a titled message to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Show a notification. Delivery failures are swallowed.
    fn notify(&self, title: &str, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, title: &str, message: &str) {
        (**self).notify(title, message);
    }
}

/// Notifier backed by the operating system's notification center.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    app_name: String,
    enabled: bool,
}

impl DesktopNotifier {
    /// Create an enabled notifier.
    #[must_use]
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            enabled: true,
        }
    }

    /// Create a notifier that drops every message.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            app_name: String::new(),
            enabled: false,
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new("pomo")
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) {
        if !self.enabled {
            log::debug!("notifications disabled, dropping '{title}'");
            return;
        }

        if let Err(e) = Notification::new()
            .appname(&self.app_name)
            .summary(title)
            .body(message)
            .show()
        {
            log::debug!("notification '{title}' not delivered: {e}");
        }
    }
}
