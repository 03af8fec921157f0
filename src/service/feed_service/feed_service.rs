use crate::{
    dto::{FeedSnapshot, Notification},
    error::Error,
};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedService: Send + Sync {
    ///
    /// Take in a notification delivered over the push channel:
    /// surface its transient alert and buffer it until a refetch
    /// confirms it persisted.
    ///
    /// ### Returns
    /// updated feed snapshot
    ///
    async fn ingest_live(&self, notification: Notification) -> FeedSnapshot;

    ///
    /// Current merged view: polled history and live buffer combined
    /// into one de-duplicated list, newest first.
    ///
    async fn snapshot(&self) -> FeedSnapshot;

    ///
    /// Refetch the first page of the persisted history and replace
    /// the cached one.
    ///
    /// ### Errors
    /// - [Error::Api], [Error::ApiStatus], [Error::Payload] when the
    ///   fetch fails; the previously cached page stays in place
    ///
    async fn refresh(&self) -> Result<FeedSnapshot, Error>;

    ///
    /// Fetch the next page of the persisted history and extend the
    /// cached list. Does nothing when everything is already fetched.
    ///
    /// ### Errors
    /// - [Error::Api], [Error::ApiStatus], [Error::Payload] when the
    ///   fetch fails
    ///
    async fn load_more(&self) -> Result<FeedSnapshot, Error>;

    ///
    /// Mark one notification as read: flip it locally, then issue
    /// the authoritative request and refetch on success.
    /// The local flip is rolled back when the request fails.
    ///
    /// ### Errors
    /// - [Error::Api], [Error::ApiStatus] when the request fails
    ///
    async fn mark_as_read(&self, id: &str) -> Result<FeedSnapshot, Error>;

    ///
    /// Mark every notification as read with one bulk request.
    /// Rolls back exactly the entries the call itself flipped.
    ///
    /// ### Errors
    /// - [Error::Api], [Error::ApiStatus] when the request fails
    ///
    async fn mark_all_read(&self) -> Result<FeedSnapshot, Error>;

    ///
    /// Remove one notification locally and request its deletion.
    /// The removed entry is restored when the request fails.
    ///
    /// ### Errors
    /// - [Error::Api], [Error::ApiStatus] when the request fails
    ///
    async fn delete_notification(&self, id: &str) -> Result<FeedSnapshot, Error>;

    ///
    /// Empty the feed locally and request deletion of everything.
    /// The emptied state is restored when the request fails.
    ///
    /// ### Errors
    /// - [Error::Api], [Error::ApiStatus] when the request fails
    ///
    async fn clear_all(&self) -> Result<FeedSnapshot, Error>;
}
