use crate::dto::Notification;
use tokio::sync::broadcast;

#[cfg_attr(test, mockall::automock)]
pub trait PushChannelService: Send + Sync {
    ///
    /// Register a subscriber for live notifications.
    ///
    /// The transport delivers every message at most once,
    /// end-to-end duplicate suppression belongs to the feed.
    /// Dropping the receiver deregisters the subscriber.
    ///
    fn subscribe(&self) -> broadcast::Receiver<Notification>;
}
