use crate::dto::Notification;
use serde::{Deserialize, Serialize};

///
/// Frame sent to the live-update server.
/// Every frame is a JSON object tagged by its `event` field.
///
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClientEvent {
    Join { channel: String },
}

///
/// Frame received from the live-update server.
///
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ServerEvent {
    Notification { data: Notification },
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn client_event_join_json() {
        let event = ClientEvent::Join {
            channel: "jane.doe@example.com".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();

        assert_eq!(
            json,
            r#"{"event":"join","channel":"jane.doe@example.com"}"#
        );
    }

    #[test]
    fn server_event_notification_json() {
        let json = r#"{
            "event": "notification",
            "data": { "id": "x", "title": "t", "message": "m" }
        }"#;

        let event = serde_json::from_str::<ServerEvent>(json).unwrap();

        let ServerEvent::Notification { data } = event else {
            panic!("invalid event type");
        };
        assert_eq!(data.id, "x");
    }

    #[test]
    fn server_event_unknown_json() {
        let json = r#"{ "event": "presence", "data": { "online": 3 } }"#;

        let event = serde_json::from_str::<ServerEvent>(json).unwrap();

        assert!(matches!(event, ServerEvent::Unknown));
    }
}
