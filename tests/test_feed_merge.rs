pub mod common;

use common::*;
use crewdesk_notifier_feed::{
    error::Error, identity::Role, service::feed_service::FeedService,
};
use std::sync::Arc;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn merged_feed_deduplicates_live_and_polled() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/candidate/notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            &[notification_json("a", true, "2024-05-20T10:00:00.000Z")],
            1,
            1,
            10,
        )))
        .mount(&server)
        .await;
    let feed = feed_over(&server, Role::Candidate, Arc::new(CountingAlerts::new()));

    // the live copy arrives first, the refetch promotes it already read
    feed.ingest_live(live_notification("a")).await;
    feed.refresh().await?;

    let snapshot = feed.snapshot().await;

    assert_eq!(snapshot.notifications.len(), 1);
    assert!(snapshot.notifications[0].is_read);
    assert_eq!(snapshot.unread_count, 0);

    Ok(())
}

#[tokio::test]
async fn merged_feed_ordered_and_counted() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/employee/notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            &[
                notification_json("b", true, "2024-05-20T10:00:00.000Z"),
                notification_json("a", false, "2024-05-20T09:00:00.000Z"),
            ],
            2,
            1,
            10,
        )))
        .mount(&server)
        .await;
    let feed = feed_over(&server, Role::Employee, Arc::new(CountingAlerts::new()));
    feed.refresh().await?;

    let snapshot = feed.ingest_live(live_notification("c")).await;

    let ids = snapshot
        .notifications
        .iter()
        .map(|n| n.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, ["c", "b", "a"]);
    assert_eq!(snapshot.unread_count, 2);

    Ok(())
}

#[tokio::test]
async fn fetch_failure_keeps_previous_feed() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            &[notification_json("a", false, "2024-05-20T10:00:00.000Z")],
            1,
            1,
            10,
        )))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/notifications"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let feed = feed_over(&server, Role::Admin, Arc::new(CountingAlerts::new()));
    feed.refresh().await?;

    let result = feed.refresh().await;

    assert!(matches!(result, Err(Error::ApiStatus { status: 500 })));
    let snapshot = feed.snapshot().await;
    assert_eq!(snapshot.notifications.len(), 1);
    assert_eq!(snapshot.notifications[0].id, "a");

    Ok(())
}
