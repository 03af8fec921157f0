pub struct PushChannelServiceConfig {
    ///
    /// URL of the live-update server, e.g. "ws://localhost:5001"
    ///
    pub url: String,

    ///
    /// How many notifications a slow subscriber may lag behind
    /// before missing some
    ///
    pub subscriber_capacity: usize,
}
