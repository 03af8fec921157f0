pub struct FeedServiceConfig {
    ///
    /// How many notifications are requested per polled page
    ///
    pub page_limit: u32,
}
