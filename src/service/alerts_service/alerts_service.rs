use crate::dto::Notification;
use async_trait::async_trait;

///
/// Transient user-facing alerts, the headless counterpart
/// of the UI's toast messages.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertsService: Send + Sync {
    ///
    /// Surface a newly arrived notification.
    /// Called exactly once per live notification.
    ///
    async fn raise(&self, notification: &Notification);

    ///
    /// Surface a confirmation of a completed action.
    ///
    async fn confirm(&self, text: &str);

    ///
    /// Surface a failed action.
    ///
    async fn report_failure(&self, text: &str);
}
