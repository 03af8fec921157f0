mod dto;
mod push_channel_listener;
mod push_channel_service;
mod push_channel_service_impl;

pub use dto::PushChannelServiceConfig;
pub use push_channel_service::*;
pub use push_channel_service_impl::*;
