use super::Notification;
use serde::Deserialize;

///
/// One page of the persisted notification history,
/// ordering is server-determined
///
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NotificationPage {
    pub notifications: Vec<Notification>,
    pub total: u64,
    ///
    /// indexing starts at 1
    ///
    pub page: u32,
    pub limit: u32,
}

impl NotificationPage {
    pub fn has_more(&self) -> bool {
        u64::from(self.page) * u64::from(self.limit) < self.total
    }
}
