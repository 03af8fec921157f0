use super::dto::ServerEvent;
use crate::dto::Notification;
use futures::{Sink, SinkExt, Stream, StreamExt};
use std::fmt::Display;
use tokio::sync::broadcast;
use tokio_tungstenite::tungstenite::Message;

///
/// Reads frames from an established live-update connection and
/// fans decoded notifications out to subscribers.
///
/// Generic over the socket halves so it can be driven by
/// in-memory channels in tests.
///
pub struct PushChannelListener<WebSocketSink, WebSocketStream> {
    notifications_tx: broadcast::Sender<Notification>,
    ws_tx: WebSocketSink,
    ws_rx: WebSocketStream,
}

impl<WebSocketSink, WebSocketStream, SinkError, StreamError>
    PushChannelListener<WebSocketSink, WebSocketStream>
where
    WebSocketSink: Sink<Message, Error = SinkError> + Unpin,
    WebSocketStream: Stream<Item = Result<Message, StreamError>> + Unpin,
    SinkError: Display,
    StreamError: Display,
{
    pub fn new(
        notifications_tx: broadcast::Sender<Notification>,
        ws_tx: WebSocketSink,
        ws_rx: WebSocketStream,
    ) -> Self {
        Self {
            notifications_tx,
            ws_tx,
            ws_rx,
        }
    }

    #[tracing::instrument(name = "Push Channel", skip_all)]
    pub async fn run(mut self) {
        tracing::info!("listening for live notifications");

        while let Some(message) = self.ws_rx.next().await {
            let message = match message {
                Ok(message) => message,
                Err(err) => {
                    tracing::warn!(%err, "live-update transport error");
                    break;
                }
            };

            match message {
                Message::Text(payload) => self.process_payload(&payload),
                Message::Ping(payload) => {
                    tracing::trace!("ping received");
                    if let Err(err) = self.ws_tx.send(Message::Pong(payload)).await {
                        tracing::warn!(%err, "failed to send pong");
                        break;
                    }
                }
                Message::Close(_) => {
                    tracing::info!("live-update server closed connection");
                    break;
                }
                _ => {}
            }
        }

        tracing::info!("stopped listening for live notifications");
    }

    fn process_payload(&self, payload: &str) {
        let event = match serde_json::from_str::<ServerEvent>(payload) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(%err, "invalid live-update frame");
                return;
            }
        };

        match event {
            ServerEvent::Notification { data } => {
                tracing::info!(id = %data.id, "live notification received");
                // Err means there is no subscriber right now
                let _ = self.notifications_tx.send(data);
            }
            ServerEvent::Unknown => tracing::trace!("ignored unknown live-update event"),
        }
    }
}
