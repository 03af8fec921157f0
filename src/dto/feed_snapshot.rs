use super::Notification;

///
/// Render-ready view of the feed: merged and de-duplicated,
/// newest first.
///
#[derive(Clone, Debug, Default)]
pub struct FeedSnapshot {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

impl FeedSnapshot {
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}
