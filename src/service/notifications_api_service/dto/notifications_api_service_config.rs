pub struct NotificationsApiServiceConfig {
    ///
    /// Base URL of the REST API, without trailing slash
    ///
    pub base_url: String,
}
