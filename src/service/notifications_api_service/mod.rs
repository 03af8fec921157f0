mod dto;
mod notifications_api_service;
mod notifications_api_service_impl;

pub use dto::NotificationsApiServiceConfig;
pub use notifications_api_service::*;
pub use notifications_api_service_impl::*;
