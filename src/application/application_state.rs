use super::ApplicationEnv;
use crate::{
    identity::UserIdentity,
    service::{
        alerts_service::AlertsServiceImpl,
        feed_service::{FeedService, FeedServiceConfig, FeedServiceImpl},
        notifications_api_service::{NotificationsApiServiceConfig, NotificationsApiServiceImpl},
        push_channel_service::{PushChannelServiceConfig, PushChannelServiceImpl},
    },
};
use std::sync::Arc;

const SUBSCRIBER_CAPACITY: usize = 64;

pub struct ApplicationState {
    pub feed: Arc<dyn FeedService>,
    pub push_channel: Option<PushChannelServiceImpl>,
}

pub async fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!("creating services");
    let api = NotificationsApiServiceImpl::new(
        NotificationsApiServiceConfig {
            base_url: env.api_base_url.clone(),
        },
        reqwest::Client::new(),
        env.user_role,
    );
    let alerts = AlertsServiceImpl;
    let feed = FeedServiceImpl::new(
        FeedServiceConfig {
            page_limit: env.page_limit,
        },
        Arc::new(api),
        Arc::new(alerts),
    );
    let feed = Arc::new(feed);

    let push_channel = match &env.user_email {
        Some(email) => {
            let identity = UserIdentity::new(email.clone(), env.user_role);
            let config = PushChannelServiceConfig {
                url: env.push_url.clone(),
                subscriber_capacity: SUBSCRIBER_CAPACITY,
            };
            match PushChannelServiceImpl::connect(config, &identity).await {
                Ok(push_channel) => Some(push_channel),
                Err(err) => {
                    tracing::warn!(%err, "cannot connect to live updates, running poll-only");
                    None
                }
            }
        }
        None => {
            tracing::info!("no user email configured, running poll-only");
            None
        }
    };

    Ok(ApplicationState { feed, push_channel })
}
