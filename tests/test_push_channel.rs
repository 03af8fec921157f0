pub mod common;

use common::*;
use crewdesk_notifier_feed::{
    identity::{Role, UserIdentity},
    service::{
        feed_service::FeedService,
        push_channel_service::{
            PushChannelService, PushChannelServiceConfig, PushChannelServiceImpl,
        },
    },
};
use serde_json::json;
use std::{sync::Arc, time::Duration};
use tokio::time::timeout;
use wiremock::MockServer;

fn config(url: &str) -> PushChannelServiceConfig {
    PushChannelServiceConfig {
        url: url.to_string(),
        subscriber_capacity: 16,
    }
}

#[tokio::test]
async fn join_uses_case_folded_email() {
    let mut server = start_push_server().await;
    let identity = UserIdentity::new("Jane.Doe@Example.com", Role::Candidate);

    let push_channel = PushChannelServiceImpl::connect(config(&server.url), &identity)
        .await
        .unwrap();

    assert_eq!(server.joined_channel().await, "jane.doe@example.com");

    push_channel.close().await;
}

#[tokio::test]
async fn live_notification_alerts_once_and_increments_unread() {
    let mut server = start_push_server().await;
    let identity = UserIdentity::new("jane.doe@example.com", Role::Candidate);
    let push_channel = PushChannelServiceImpl::connect(config(&server.url), &identity)
        .await
        .unwrap();
    server.joined_channel().await;
    let mut notifications_rx = push_channel.subscribe();

    let api_server = MockServer::start().await;
    let alerts = Arc::new(CountingAlerts::new());
    let feed = feed_over(&api_server, Role::Candidate, alerts.clone());

    server
        .push_notification(json!({
            "id": "x",
            "title": "Interview scheduled",
            "message": "Tomorrow 9:00",
            "type": "info",
            "isRead": false,
        }))
        .await;

    let notification = timeout(Duration::from_secs(5), notifications_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(notification.id, "x");

    let snapshot = feed.ingest_live(notification).await;

    assert_eq!(alerts.raised_count(), 1);
    assert_eq!(snapshot.unread_count, 1);
    assert_eq!(snapshot.notifications.len(), 1);

    push_channel.close().await;
}

#[tokio::test]
async fn resubscribe_receives_only_new_notifications() {
    let mut server = start_push_server().await;
    let identity = UserIdentity::new("jane.doe@example.com", Role::Candidate);
    let push_channel = PushChannelServiceImpl::connect(config(&server.url), &identity)
        .await
        .unwrap();
    server.joined_channel().await;

    let mut first_rx = push_channel.subscribe();
    server
        .push_notification(notification_json("n1", false, "2024-05-20T10:00:00.000Z"))
        .await;
    let first = timeout(Duration::from_secs(5), first_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.id, "n1");

    // the view unmounted, its subscription is gone
    drop(first_rx);

    let mut second_rx = push_channel.subscribe();
    server
        .push_notification(notification_json("n2", false, "2024-05-20T11:00:00.000Z"))
        .await;
    let second = timeout(Duration::from_secs(5), second_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second.id, "n2");

    push_channel.close().await;
}
