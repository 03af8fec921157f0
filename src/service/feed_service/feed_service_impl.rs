use super::{unread_buffer::UnreadBuffer, FeedService, FeedServiceConfig};
use crate::{
    dto::{FeedSnapshot, Notification, NotificationPage},
    error::Error,
    service::{alerts_service::AlertsService, notifications_api_service::NotificationsApiService},
};
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use time::OffsetDateTime;
use tokio::sync::Mutex;

pub struct FeedServiceImpl {
    config: FeedServiceConfig,
    api: Arc<dyn NotificationsApiService>,
    alerts: Arc<dyn AlertsService>,
    state: Mutex<FeedState>,
}

impl FeedServiceImpl {
    pub fn new(
        config: FeedServiceConfig,
        api: Arc<dyn NotificationsApiService>,
        alerts: Arc<dyn AlertsService>,
    ) -> Self {
        let state = FeedState::new();
        let state = Mutex::new(state);

        Self {
            config,
            api,
            alerts,
            state,
        }
    }

    async fn current_snapshot(&self) -> FeedSnapshot {
        let state = self.state.lock().await;
        state.snapshot(OffsetDateTime::now_utc())
    }

    ///
    /// The client has no push confirmation channel for its own
    /// writes, so every successful mutation is followed by a
    /// refetch. A failed refetch keeps the stale cache.
    ///
    async fn refetch_after_mutation(&self) {
        if let Err(err) = self.refresh().await {
            tracing::warn!(%err, "refetch after mutation failed, keeping cached feed");
        }
    }
}

#[async_trait]
impl FeedService for FeedServiceImpl {
    async fn ingest_live(&self, notification: Notification) -> FeedSnapshot {
        tracing::info!(id = %notification.id, "live notification received");

        self.alerts.raise(&notification).await;

        let now = OffsetDateTime::now_utc();
        let mut state = self.state.lock().await;
        state.buffer.append(notification, now);

        state.snapshot(now)
    }

    async fn snapshot(&self) -> FeedSnapshot {
        self.current_snapshot().await
    }

    async fn refresh(&self) -> Result<FeedSnapshot, Error> {
        tracing::info!("refreshing feed");

        let page = self.api.find_notifications(1, self.config.page_limit).await?;

        let mut state = self.state.lock().await;
        state.replace_with_first_page(page);

        Ok(state.snapshot(OffsetDateTime::now_utc()))
    }

    async fn load_more(&self) -> Result<FeedSnapshot, Error> {
        let next_page = {
            let state = self.state.lock().await;
            match state.has_more(self.config.page_limit) {
                true => state.pages_fetched + 1,
                false => return Ok(state.snapshot(OffsetDateTime::now_utc())),
            }
        };
        tracing::info!(page = next_page, "loading more of the feed");

        let page = self
            .api
            .find_notifications(next_page, self.config.page_limit)
            .await?;

        let mut state = self.state.lock().await;
        state.extend_with_page(page);

        Ok(state.snapshot(OffsetDateTime::now_utc()))
    }

    async fn mark_as_read(&self, id: &str) -> Result<FeedSnapshot, Error> {
        tracing::info!(id, "marking notification read");

        // Capture the undo set under the lock, release it for the
        // network call, reacquire to commit or roll back.
        let (flipped_polled, flipped_buffered) = {
            let mut state = self.state.lock().await;
            (state.flip_read(id), state.buffer.mark_read(id))
        };

        match self.api.mark_notification_read(id).await {
            Ok(()) => {
                self.alerts.confirm("notification marked as read").await;
                self.refetch_after_mutation().await;

                Ok(self.current_snapshot().await)
            }
            Err(err) => {
                tracing::warn!(%err, id, "failed to mark notification read");
                {
                    let mut state = self.state.lock().await;
                    if flipped_polled {
                        state.unflip_read(id);
                    }
                    if flipped_buffered {
                        state.buffer.unmark_read(id);
                    }
                }
                self.alerts
                    .report_failure("failed to mark notification as read")
                    .await;

                Err(err)
            }
        }
    }

    async fn mark_all_read(&self) -> Result<FeedSnapshot, Error> {
        tracing::info!("marking all notifications read");

        let (flipped_polled, flipped_buffered) = {
            let mut state = self.state.lock().await;
            let flipped_polled = state.flip_all_read();
            let flipped_buffered = state.buffer.mark_all_read();
            (flipped_polled, flipped_buffered)
        };

        match self.api.mark_all_notifications_read().await {
            Ok(()) => {
                self.alerts.confirm("all notifications marked as read").await;
                self.refetch_after_mutation().await;

                Ok(self.current_snapshot().await)
            }
            Err(err) => {
                tracing::warn!(%err, "failed to mark all notifications read");
                {
                    let mut state = self.state.lock().await;
                    for id in &flipped_polled {
                        state.unflip_read(id);
                    }
                    for id in &flipped_buffered {
                        state.buffer.unmark_read(id);
                    }
                }
                self.alerts
                    .report_failure("failed to mark all notifications as read")
                    .await;

                Err(err)
            }
        }
    }

    async fn delete_notification(&self, id: &str) -> Result<FeedSnapshot, Error> {
        tracing::info!(id, "deleting notification");

        let (removed_polled, removed_buffered) = {
            let mut state = self.state.lock().await;
            (state.remove(id), state.buffer.remove(id))
        };

        match self.api.delete_notification(id).await {
            Ok(()) => {
                self.alerts.confirm("notification deleted").await;
                self.refetch_after_mutation().await;

                Ok(self.current_snapshot().await)
            }
            Err(err) => {
                tracing::warn!(%err, id, "failed to delete notification");
                {
                    let mut state = self.state.lock().await;
                    if let Some((index, notification)) = removed_polled {
                        state.restore(index, notification);
                    }
                    if let Some((index, notification)) = removed_buffered {
                        state.buffer.restore(index, notification);
                    }
                }
                self.alerts
                    .report_failure("failed to delete notification")
                    .await;

                Err(err)
            }
        }
    }

    async fn clear_all(&self) -> Result<FeedSnapshot, Error> {
        tracing::info!("clearing all notifications");

        let backup = {
            let mut state = self.state.lock().await;
            state.take_all()
        };

        match self.api.clear_all_notifications().await {
            Ok(()) => {
                self.alerts.confirm("notifications cleared").await;
                self.refetch_after_mutation().await;

                Ok(self.current_snapshot().await)
            }
            Err(err) => {
                tracing::warn!(%err, "failed to clear notifications");
                {
                    let mut state = self.state.lock().await;
                    state.restore_all(backup);
                }
                self.alerts
                    .report_failure("failed to clear notifications")
                    .await;

                Err(err)
            }
        }
    }
}

struct FeedState {
    ///
    /// Cached pages of the persisted history, in server order
    ///
    polled: Vec<Notification>,
    total: u64,
    pages_fetched: u32,
    buffer: UnreadBuffer,
}

struct FeedBackup {
    polled: Vec<Notification>,
    total: u64,
    pages_fetched: u32,
    buffered: Vec<Notification>,
}

impl FeedState {
    fn new() -> Self {
        Self {
            polled: Vec::new(),
            total: 0,
            pages_fetched: 0,
            buffer: UnreadBuffer::new(),
        }
    }

    fn replace_with_first_page(&mut self, page: NotificationPage) {
        self.total = page.total;
        self.pages_fetched = page.page;
        self.polled = page.notifications;
    }

    fn extend_with_page(&mut self, page: NotificationPage) {
        self.total = page.total;
        self.pages_fetched = page.page;
        // the server may have shifted pages since the last fetch
        for notification in page.notifications {
            if !self.polled.iter().any(|n| n.id == notification.id) {
                self.polled.push(notification);
            }
        }
    }

    fn has_more(&self, limit: u32) -> bool {
        u64::from(self.pages_fetched) * u64::from(limit) < self.total
    }

    fn flip_read(&mut self, id: &str) -> bool {
        match self.polled.iter_mut().find(|n| n.id == id) {
            Some(notification) if !notification.is_read => {
                notification.is_read = true;
                true
            }
            _ => false,
        }
    }

    fn unflip_read(&mut self, id: &str) {
        if let Some(notification) = self.polled.iter_mut().find(|n| n.id == id) {
            notification.is_read = false;
        }
    }

    fn flip_all_read(&mut self) -> Vec<String> {
        self.polled
            .iter_mut()
            .filter(|n| !n.is_read)
            .map(|n| {
                n.is_read = true;
                n.id.clone()
            })
            .collect()
    }

    fn remove(&mut self, id: &str) -> Option<(usize, Notification)> {
        let index = self.polled.iter().position(|n| n.id == id)?;
        let notification = self.polled.remove(index);

        Some((index, notification))
    }

    fn restore(&mut self, index: usize, notification: Notification) {
        let index = index.min(self.polled.len());
        self.polled.insert(index, notification);
    }

    fn take_all(&mut self) -> FeedBackup {
        FeedBackup {
            polled: std::mem::take(&mut self.polled),
            total: std::mem::replace(&mut self.total, 0),
            pages_fetched: std::mem::replace(&mut self.pages_fetched, 0),
            buffered: self.buffer.clear(),
        }
    }

    fn restore_all(&mut self, backup: FeedBackup) {
        self.polled = backup.polled;
        self.total = backup.total;
        self.pages_fetched = backup.pages_fetched;
        self.buffer.restore_all(backup.buffered);
    }

    ///
    /// Merge the polled history with the live buffer into the view
    /// the UI renders.
    ///
    /// A notification may exist in both stores at once (a refetch
    /// promoted a previously-live entry), so the merge is keyed by
    /// id. For a duplicate the read flag is the OR of both copies:
    /// a read observed anywhere sticks.
    ///
    fn snapshot(&self, now: OffsetDateTime) -> FeedSnapshot {
        let mut notifications = self.polled.clone();
        let mut index_by_id = HashMap::with_capacity(notifications.len());
        for (index, notification) in notifications.iter().enumerate() {
            index_by_id.insert(notification.id.clone(), index);
        }

        for buffered in self.buffer.snapshot() {
            match index_by_id.get(&buffered.id) {
                Some(&index) => notifications[index].is_read |= buffered.is_read,
                None => notifications.push(buffered.clone()),
            }
        }

        // stable sort keeps arrival order for equal timestamps
        notifications.sort_by(|a, b| {
            let a_key = a.created_at.unwrap_or(now);
            let b_key = b.created_at.unwrap_or(now);
            b_key.cmp(&a_key)
        });

        let unread_count = notifications.iter().filter(|n| !n.is_read).count();

        FeedSnapshot {
            notifications,
            unread_count,
        }
    }
}
