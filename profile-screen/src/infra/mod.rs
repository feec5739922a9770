//! Infrastructure: HTTP client, token source, configuration, services.

pub mod api_client;
pub mod config;
pub mod services;
pub mod token_store;
