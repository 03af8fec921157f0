mod push_channel_service_config;
mod push_envelope;

pub use push_channel_service_config::*;
pub use push_envelope::*;
