//! Transient message support.
//!
//! The picker reports a confirmed date through a [`Notifier`]:
//! - in-app toasts, queued through an mpsc channel and drawn by the host
//! - native desktop notifications, with de-duplication

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use notify_rust::{Notification, Timeout};
use serde::Deserialize;
use tokio::sync::mpsc::UnboundedSender;

use crate::log;

/// Severity of a transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn title(&self) -> &'static str {
        match self {
            ToastKind::Info => "Info",
            ToastKind::Success => "Success",
            ToastKind::Error => "Error",
        }
    }
}

/// A message waiting to be shown.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created: Instant::now(),
        }
    }
}

/// Anything that can show a short-lived message to the user.
pub trait Notifier {
    fn show(&mut self, message: &str, kind: ToastKind);
}

/// Feeds the host's toast queue.
impl Notifier for UnboundedSender<Toast> {
    fn show(&mut self, message: &str, kind: ToastKind) {
        // Receiver gone means the host is shutting down
        let _ = self.send(Toast::new(message, kind));
    }
}

/// Shows the same message through several notifiers.
impl Notifier for Vec<Box<dyn Notifier>> {
    fn show(&mut self, message: &str, kind: ToastKind) {
        for notifier in self.iter_mut() {
            notifier.show(message, kind);
        }
    }
}

/// Configuration for notifications.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Also send native desktop notifications
    pub desktop: bool,
    /// How long an in-app toast stays on screen
    pub toast_ttl_ms: u64,
    /// Minimum seconds between same desktop notification kind (prevents spam)
    pub dedupe_interval_secs: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            desktop: false,
            toast_ttl_ms: 3000,
            dedupe_interval_secs: 2,
        }
    }
}

/// In-app toasts, oldest first, dropped once their time is up.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
    capacity: usize,
}

impl ToastQueue {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() == self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    /// Drop toasts older than the TTL.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created) < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Sends desktop notifications with deduplication.
pub struct DesktopNotifier {
    config: NotificationConfig,
    last_notification: Option<(ToastKind, Instant)>,
}

impl DesktopNotifier {
    /// Create a new desktop notifier with the given configuration.
    pub fn new(config: NotificationConfig) -> Self {
        Self {
            config,
            last_notification: None,
        }
    }

    /// Send a notification if enabled and not a duplicate.
    ///
    /// Returns `true` if the notification was sent.
    pub fn send(&mut self, kind: ToastKind, body: &str) -> bool {
        if !self.config.desktop {
            return false;
        }

        if self.is_duplicate(kind) {
            return false;
        }

        let result = Notification::new()
            .summary(kind.title())
            .body(body)
            .timeout(self.timeout())
            .show();

        match result {
            Ok(_) => {
                self.last_notification = Some((kind, Instant::now()));
                true
            }
            Err(e) => {
                log::log(&format!("Desktop notification failed: {}", e));
                false
            }
        }
    }

    /// Desktop timeout matching the toast lifetime, saturating at `u32::MAX` ms.
    fn timeout(&self) -> Timeout {
        Timeout::Milliseconds(u32::try_from(self.config.toast_ttl_ms).unwrap_or(u32::MAX))
    }

    /// Check if this notification kind was recently sent.
    fn is_duplicate(&self, kind: ToastKind) -> bool {
        self.last_notification
            .map(|(k, when)| {
                k == kind && when.elapsed().as_secs() < self.config.dedupe_interval_secs
            })
            .unwrap_or(false)
    }
}

impl Notifier for DesktopNotifier {
    fn show(&mut self, message: &str, kind: ToastKind) {
        self.send(kind, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_disabled_desktop_notifications() {
        let mut notifier = DesktopNotifier::new(NotificationConfig::default());
        assert!(!notifier.send(ToastKind::Success, "Body"));
    }

    #[test]
    fn test_timeout_saturates() {
        let notifier = DesktopNotifier::new(NotificationConfig {
            toast_ttl_ms: u64::MAX,
            ..NotificationConfig::default()
        });
        assert_eq!(notifier.timeout(), Timeout::Milliseconds(u32::MAX));

        let notifier = DesktopNotifier::new(NotificationConfig::default());
        assert_eq!(notifier.timeout(), Timeout::Milliseconds(3000));
    }

    #[test]
    fn test_default_config() {
        let config = NotificationConfig::default();
        assert!(!config.desktop);
        assert_eq!(config.toast_ttl_ms, 3000);
        assert_eq!(config.dedupe_interval_secs, 2);
    }

    #[test]
    fn test_channel_notifier_delivers_toast() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut notifier: Box<dyn Notifier> = Box::new(tx);
        notifier.show("Date selected", ToastKind::Success);

        let toast = rx.try_recv().unwrap();
        assert_eq!(toast.message, "Date selected");
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn test_channel_notifier_survives_closed_receiver() {
        let (mut tx, rx) = mpsc::unbounded_channel::<Toast>();
        drop(rx);
        tx.show("nobody listening", ToastKind::Info);
    }

    #[test]
    fn test_fanout_notifier() {
        let (tx_a, mut rx_a) = mpsc::unbounded_channel();
        let (tx_b, mut rx_b) = mpsc::unbounded_channel();
        let mut fanout: Vec<Box<dyn Notifier>> = vec![Box::new(tx_a), Box::new(tx_b)];
        fanout.show("hello", ToastKind::Info);

        assert_eq!(rx_a.try_recv().unwrap().message, "hello");
        assert_eq!(rx_b.try_recv().unwrap().message, "hello");
    }

    #[test]
    fn test_toast_queue_expires() {
        let mut queue = ToastQueue::new(Duration::from_millis(100), 4);
        let start = Instant::now();
        queue.push(Toast {
            message: "old".into(),
            kind: ToastKind::Info,
            created: start,
        });
        queue.push(Toast {
            message: "new".into(),
            kind: ToastKind::Error,
            created: start + Duration::from_millis(80),
        });

        queue.prune(start + Duration::from_millis(120));
        let left: Vec<_> = queue.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(left, vec!["new"]);

        queue.prune(start + Duration::from_millis(200));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_toast_queue_capacity() {
        let mut queue = ToastQueue::new(Duration::from_secs(10), 2);
        queue.push(Toast::new("a", ToastKind::Info));
        queue.push(Toast::new("b", ToastKind::Info));
        queue.push(Toast::new("c", ToastKind::Info));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.iter().next().map(|t| t.message.as_str()), Some("b"));
    }
}
