use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    #[serde(default)]
    pub is_read: bool,
    ///
    /// Live notifications may arrive without a timestamp,
    /// the feed stamps them on arrival
    ///
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Notification {
    ///
    /// Relative age used for display, e.g. "5m ago".
    /// Entries without a timestamp count as just arrived.
    ///
    pub fn age_label(&self, now: OffsetDateTime) -> String {
        let created_at = match self.created_at {
            Some(created_at) => created_at,
            None => return "just now".to_string(),
        };

        let elapsed = now - created_at;
        let seconds = elapsed.whole_seconds();

        if seconds < 60 {
            "just now".to_string()
        } else if seconds < 3600 {
            format!("{}m ago", seconds / 60)
        } else if seconds < 86400 {
            format!("{}h ago", seconds / 3600)
        } else {
            format!("{}d ago", seconds / 86400)
        }
    }
}

///
/// Drives icon and color only, no behavioral effect.
/// Unknown values coming from the server are carried as-is.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
    #[serde(untagged)]
    Other(String),
}

impl Default for NotificationKind {
    fn default() -> Self {
        Self::Info
    }
}
