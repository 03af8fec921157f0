use super::{
    dto::ClientEvent, push_channel_listener::PushChannelListener, PushChannelService,
    PushChannelServiceConfig,
};
use crate::{dto::Notification, error::Error, identity::UserIdentity};
use futures::{SinkExt, StreamExt};
use tokio::{sync::broadcast, task::JoinHandle};
use tokio_tungstenite::tungstenite::Message;

pub struct PushChannelServiceImpl {
    notifications_tx: broadcast::Sender<Notification>,
    listener: JoinHandle<()>,
}

impl PushChannelServiceImpl {
    ///
    /// Connect to the live-update server and join the channel
    /// of the user.
    ///
    /// ### Errors
    /// - [Error::PushChannel] when the connection cannot be
    ///   established or the join frame cannot be sent
    ///
    pub async fn connect(
        config: PushChannelServiceConfig,
        identity: &UserIdentity,
    ) -> Result<Self, Error> {
        let channel_key = identity.channel_key();
        tracing::info!(url = %config.url, %channel_key, "connecting to live updates");

        let (mut websocket, _) = tokio_tungstenite::connect_async(config.url.as_str()).await?;

        let join = ClientEvent::Join {
            channel: channel_key,
        };
        let frame = serde_json::to_string(&join)?;
        websocket.send(Message::Text(frame)).await?;
        tracing::info!("joined live-update channel");

        let (notifications_tx, _) = broadcast::channel(config.subscriber_capacity);
        let (ws_tx, ws_rx) = websocket.split();
        let listener = PushChannelListener::new(notifications_tx.clone(), ws_tx, ws_rx);
        let listener = tokio::spawn(listener.run());

        Ok(Self {
            notifications_tx,
            listener,
        })
    }

    ///
    /// Stop listening and drop the connection.
    ///
    pub async fn close(self) {
        self.listener.abort();
        let _ = self.listener.await;
        tracing::info!("live updates closed");
    }
}

impl PushChannelService for PushChannelServiceImpl {
    fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifications_tx.subscribe()
    }
}
