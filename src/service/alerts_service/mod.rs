mod alerts_service;
mod alerts_service_impl;

pub use alerts_service::*;
pub use alerts_service_impl::*;
