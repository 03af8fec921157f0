use super::{NotificationsApiService, NotificationsApiServiceConfig};
use crate::{dto::NotificationPage, error::Error, identity::Role};
use async_trait::async_trait;
use reqwest::{Client, Response};

pub struct NotificationsApiServiceImpl {
    config: NotificationsApiServiceConfig,
    client: Client,
    role: Role,
}

impl NotificationsApiServiceImpl {
    pub fn new(config: NotificationsApiServiceConfig, client: Client, role: Role) -> Self {
        Self {
            config,
            client,
            role,
        }
    }

    fn url(&self, suffix: &str) -> String {
        format!(
            "{}/{}/notifications{}",
            self.config.base_url,
            self.role.api_segment(),
            suffix
        )
    }

    fn ensure_success(response: &Response) -> Result<(), Error> {
        let status = response.status();
        match status.is_success() {
            true => Ok(()),
            false => Err(Error::ApiStatus {
                status: status.as_u16(),
            }),
        }
    }
}

#[async_trait]
impl NotificationsApiService for NotificationsApiServiceImpl {
    async fn find_notifications(&self, page: u32, limit: u32) -> Result<NotificationPage, Error> {
        tracing::info!(page, limit, "fetching notifications");

        let response = self
            .client
            .get(self.url(""))
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;
        Self::ensure_success(&response)?;

        let bytes = response.bytes().await?;
        let page = serde_json::from_slice::<NotificationPage>(&bytes)?;
        tracing::info!(
            count = page.notifications.len(),
            total = page.total,
            "fetched notifications"
        );

        Ok(page)
    }

    async fn mark_notification_read(&self, id: &str) -> Result<(), Error> {
        tracing::info!(id, "marking notification read");

        let response = self
            .client
            .patch(self.url(&format!("/{id}/read")))
            .send()
            .await?;
        Self::ensure_success(&response)?;
        tracing::info!(id, "marked notification read");

        Ok(())
    }

    async fn mark_all_notifications_read(&self) -> Result<(), Error> {
        tracing::info!("marking all notifications read");

        let response = self.client.patch(self.url("/read-all")).send().await?;
        Self::ensure_success(&response)?;
        tracing::info!("marked all notifications read");

        Ok(())
    }

    async fn delete_notification(&self, id: &str) -> Result<(), Error> {
        tracing::info!(id, "deleting notification");

        let response = self
            .client
            .delete(self.url(&format!("/{id}")))
            .send()
            .await?;
        Self::ensure_success(&response)?;
        tracing::info!(id, "deleted notification");

        Ok(())
    }

    async fn clear_all_notifications(&self) -> Result<(), Error> {
        tracing::info!("clearing all notifications");

        let response = self.client.delete(self.url("")).send().await?;
        Self::ensure_success(&response)?;
        tracing::info!("cleared all notifications");

        Ok(())
    }
}
