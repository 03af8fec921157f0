pub mod alerts_service;
pub mod feed_service;
pub mod notifications_api_service;
pub mod push_channel_service;
