//! User-facing notification port.
//!
//! Code that needs to tell the user something takes a `&dyn Notifier` and
//! calls [`Notifier::notify`]. Delivery is fire-and-forget: the caller never
//! waits on, or branches on, what the presenter does with the alert.

use tokio::sync::mpsc;

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    /// Ask the presenter to offer a cancel choice next to OK.
    pub show_cancel: bool,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            show_cancel: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new("Success", message)
    }

    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            show_cancel: true,
            ..Self::new(title, message)
        }
    }

    pub fn is_error(&self) -> bool {
        self.title == "Error"
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, alert: Alert);
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, alert: Alert) {
        (**self).notify(alert)
    }
}

/// Queues alerts for a presenter that drains the receiving end.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Alert>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Alert>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, alert: Alert) {
        if self.sender.send(alert).is_err() {
            tracing::debug!("alert dropped, presenter is gone");
        }
    }
}

/// Writes alerts to the log. Used when no presenter is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, alert: Alert) {
        if alert.is_error() {
            tracing::warn!(title = %alert.title, "{}", alert.message);
        } else {
            tracing::info!(title = %alert.title, "{}", alert.message);
        }
    }
}
