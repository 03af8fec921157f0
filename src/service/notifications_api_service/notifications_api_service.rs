use crate::{dto::NotificationPage, error::Error};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsApiService: Send + Sync {
    ///
    /// Fetch one page of the user's persisted notifications.
    ///
    /// ### Returns
    /// page of notifications with pagination metadata
    ///
    /// ### Errors
    /// - [Error::Api] when the request cannot be sent
    /// - [Error::ApiStatus] when the server rejects the request
    /// - [Error::Payload] when the response body cannot be decoded
    ///
    async fn find_notifications(&self, page: u32, limit: u32) -> Result<NotificationPage, Error>;

    ///
    /// Mark one notification as read.
    ///
    /// ### Errors
    /// - [Error::Api] when the request cannot be sent
    /// - [Error::ApiStatus] when the server rejects the request
    ///
    async fn mark_notification_read(&self, id: &str) -> Result<(), Error>;

    ///
    /// Mark every notification of the user as read.
    ///
    /// ### Errors
    /// - [Error::Api] when the request cannot be sent
    /// - [Error::ApiStatus] when the server rejects the request
    ///
    async fn mark_all_notifications_read(&self) -> Result<(), Error>;

    ///
    /// Delete one notification.
    /// Not every role's backend exposes this endpoint,
    /// callers treat a rejection as best-effort.
    ///
    /// ### Errors
    /// - [Error::Api] when the request cannot be sent
    /// - [Error::ApiStatus] when the server rejects the request
    ///
    async fn delete_notification(&self, id: &str) -> Result<(), Error>;

    ///
    /// Delete every notification of the user.
    ///
    /// ### Errors
    /// - [Error::Api] when the request cannot be sent
    /// - [Error::ApiStatus] when the server rejects the request
    ///
    async fn clear_all_notifications(&self) -> Result<(), Error>;
}
