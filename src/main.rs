use crewdesk_notifier_feed::{
    application::{self, ApplicationEnv},
    dto::FeedSnapshot,
    service::{feed_service::FeedService, push_channel_service::PushChannelService},
};
use time::OffsetDateTime;
use tokio::sync::broadcast::error::RecvError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let state = application::create_state(&env).await?;

    match state.feed.refresh().await {
        Ok(snapshot) => log_snapshot(&snapshot),
        Err(err) => tracing::warn!(%err, "initial fetch failed, starting with empty feed"),
    }

    match state.push_channel {
        Some(push_channel) => {
            let mut notifications_rx = push_channel.subscribe();
            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    received = notifications_rx.recv() => match received {
                        Ok(notification) => {
                            let snapshot = state.feed.ingest_live(notification).await;
                            log_snapshot(&snapshot);
                        }
                        Err(RecvError::Lagged(count)) => {
                            tracing::warn!(count, "notifications missed, refreshing feed");
                            if let Ok(snapshot) = state.feed.refresh().await {
                                log_snapshot(&snapshot);
                            }
                        }
                        Err(RecvError::Closed) => {
                            tracing::info!("live updates ended");
                            break;
                        }
                    }
                }
            }
            push_channel.close().await;
        }
        None => {
            tokio::signal::ctrl_c().await?;
        }
    }

    tracing::info!("shutting down");

    Ok(())
}

fn log_snapshot(snapshot: &FeedSnapshot) {
    tracing::info!(
        unread = snapshot.unread_count,
        count = snapshot.notifications.len(),
        "feed updated"
    );

    let now = OffsetDateTime::now_utc();
    for notification in &snapshot.notifications {
        tracing::info!(
            id = %notification.id,
            read = notification.is_read,
            age = %notification.age_label(now),
            title = %notification.title,
            "notification",
        );
    }
}
