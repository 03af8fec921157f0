use tokio_tungstenite::tungstenite;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("api error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("api error: unexpected status {status}")]
    ApiStatus { status: u16 },

    #[error("payload error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("push channel error: {0}")]
    PushChannel(#[from] tungstenite::Error),
}
