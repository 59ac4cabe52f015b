//! Transient user notices over a `tokio::sync::broadcast` channel.
//!
//! [`NoticeBus`] is the in-process hub the lifecycle controller publishes
//! to: the "nothing to save" info notice and transport-error notices.
//! Shared via `Arc<NoticeBus>`; any number of UI surfaces can subscribe.

use tokio::sync::broadcast;

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient, user-visible notification.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// Fan-out bus for transient notices.
pub struct NoticeBus {
    sender: broadcast::Sender<Notice>,
}

impl NoticeBus {
    /// Create a bus with a specific channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a notice to all current subscribers.
    ///
    /// With zero subscribers the notice is silently dropped.
    pub fn publish(&self, notice: Notice) {
        // Ignore the SendError — it only means there are no receivers.
        let _ = self.sender.send(notice);
    }

    /// Publish an informational notice.
    pub fn info(&self, message: impl Into<String>) {
        self.publish(Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        });
    }

    /// Publish an error notice.
    pub fn error(&self, message: impl Into<String>) {
        self.publish(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }

    /// Subscribe to all notices published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.sender.subscribe()
    }
}

impl Default for NoticeBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
