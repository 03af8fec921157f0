mod feed_service_config;

pub use feed_service_config::*;
