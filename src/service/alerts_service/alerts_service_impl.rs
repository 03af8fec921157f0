use super::AlertsService;
use crate::dto::Notification;
use async_trait::async_trait;

pub struct AlertsServiceImpl;

#[async_trait]
impl AlertsService for AlertsServiceImpl {
    async fn raise(&self, notification: &Notification) {
        tracing::info!(
            id = %notification.id,
            kind = ?notification.kind,
            title = %notification.title,
            message = %notification.message,
            "new notification",
        );
    }

    async fn confirm(&self, text: &str) {
        tracing::info!(text, "action completed");
    }

    async fn report_failure(&self, text: &str) {
        tracing::warn!(text, "action failed");
    }
}
