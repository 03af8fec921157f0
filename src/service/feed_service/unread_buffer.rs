use crate::dto::Notification;
use time::OffsetDateTime;

///
/// Notifications received live since the feed was created and
/// not yet confirmed present in the polled source.
/// Most recent entry first.
///
pub struct UnreadBuffer {
    notifications: Vec<Notification>,
}

impl UnreadBuffer {
    pub fn new() -> Self {
        let notifications = Vec::new();

        Self { notifications }
    }

    ///
    /// Prepend a live notification.
    /// Entries arriving without a server timestamp are stamped with
    /// `received_at` so every entry has a concrete ordering key.
    ///
    pub fn append(&mut self, mut notification: Notification, received_at: OffsetDateTime) {
        notification.created_at.get_or_insert(received_at);
        self.notifications.insert(0, notification);
    }

    ///
    /// ### Returns
    /// whether the entry existed and was flipped to read
    ///
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) if !notification.is_read => {
                notification.is_read = true;
                true
            }
            _ => false,
        }
    }

    pub fn unmark_read(&mut self, id: &str) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            notification.is_read = false;
        }
    }

    ///
    /// ### Returns
    /// ids of the entries that were flipped to read
    ///
    pub fn mark_all_read(&mut self) -> Vec<String> {
        self.notifications
            .iter_mut()
            .filter(|n| !n.is_read)
            .map(|n| {
                n.is_read = true;
                n.id.clone()
            })
            .collect()
    }

    ///
    /// ### Returns
    /// position and entry, so a failed deletion can restore it
    ///
    pub fn remove(&mut self, id: &str) -> Option<(usize, Notification)> {
        let index = self.notifications.iter().position(|n| n.id == id)?;
        let notification = self.notifications.remove(index);

        Some((index, notification))
    }

    pub fn restore(&mut self, index: usize, notification: Notification) {
        let index = index.min(self.notifications.len());
        self.notifications.insert(index, notification);
    }

    pub fn clear(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn restore_all(&mut self, notifications: Vec<Notification>) {
        self.notifications = notifications;
    }

    pub fn snapshot(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}
