use async_trait::async_trait;
use crewdesk_notifier_feed::{
    dto::{Notification, NotificationKind},
    identity::Role,
    service::{
        alerts_service::AlertsService,
        feed_service::{FeedServiceConfig, FeedServiceImpl},
        notifications_api_service::{NotificationsApiServiceConfig, NotificationsApiServiceImpl},
    },
};
use futures::{SinkExt, StreamExt};
use serde_json::{json, Value};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{net::TcpListener, sync::mpsc, time::timeout};
use tokio_tungstenite::tungstenite::Message;
use wiremock::MockServer;

pub fn notification_json(id: &str, is_read: bool, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": format!("title {id}"),
        "message": format!("message {id}"),
        "type": "info",
        "isRead": is_read,
        "createdAt": created_at,
    })
}

pub fn page_json(notifications: &[Value], total: u64, page: u32, limit: u32) -> Value {
    json!({
        "notifications": notifications,
        "total": total,
        "page": page,
        "limit": limit,
    })
}

pub fn live_notification(id: &str) -> Notification {
    Notification {
        id: id.to_string(),
        title: format!("title {id}"),
        message: format!("message {id}"),
        kind: NotificationKind::Info,
        is_read: false,
        created_at: None,
        link: None,
    }
}

pub fn feed_over(
    server: &MockServer,
    role: Role,
    alerts: Arc<dyn AlertsService>,
) -> FeedServiceImpl {
    let api = NotificationsApiServiceImpl::new(
        NotificationsApiServiceConfig {
            base_url: server.uri(),
        },
        reqwest::Client::new(),
        role,
    );

    FeedServiceImpl::new(FeedServiceConfig { page_limit: 10 }, Arc::new(api), alerts)
}

pub struct CountingAlerts {
    raised: AtomicUsize,
}

impl CountingAlerts {
    pub fn new() -> Self {
        Self {
            raised: AtomicUsize::new(0),
        }
    }

    pub fn raised_count(&self) -> usize {
        self.raised.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AlertsService for CountingAlerts {
    async fn raise(&self, _notification: &Notification) {
        self.raised.fetch_add(1, Ordering::SeqCst);
    }

    async fn confirm(&self, _text: &str) {}

    async fn report_failure(&self, _text: &str) {}
}

pub struct PushServer {
    pub url: String,
    joined_rx: mpsc::Receiver<String>,
    frames_tx: mpsc::Sender<String>,
}

///
/// Loopback stand-in for the live-update server: accepts one
/// connection, records the joined channel and forwards the frames
/// the test hands it.
///
pub async fn start_push_server() -> PushServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let (joined_tx, joined_rx) = mpsc::channel(4);
    let (frames_tx, mut frames_rx) = mpsc::channel::<String>(16);

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut websocket = tokio_tungstenite::accept_async(stream).await.unwrap();

        // first frame is the join
        if let Some(Ok(Message::Text(payload))) = websocket.next().await {
            let value = serde_json::from_str::<Value>(&payload).unwrap();
            let channel = value["channel"].as_str().unwrap_or_default().to_string();
            let _ = joined_tx.send(channel).await;
        }

        while let Some(frame) = frames_rx.recv().await {
            if websocket.send(Message::Text(frame)).await.is_err() {
                break;
            }
        }
    });

    PushServer {
        url: format!("ws://{address}/ws"),
        joined_rx,
        frames_tx,
    }
}

impl PushServer {
    pub async fn joined_channel(&mut self) -> String {
        timeout(Duration::from_secs(5), self.joined_rx.recv())
            .await
            .unwrap()
            .unwrap()
    }

    pub async fn push_notification(&self, notification: Value) {
        let frame = json!({
            "event": "notification",
            "data": notification,
        })
        .to_string();

        self.frames_tx.send(frame).await.unwrap();
    }
}
