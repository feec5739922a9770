use std::sync::Arc;

use log::info;

use crate::domains::profile::CommandContext;
use crate::infra::api_client::{ApiClient, ApiResult};
use crate::infra::config::Config;
use crate::infra::services::ProfileApiAdapter;
use crate::infra::token_store::FileTokenStore;

/// Runtime configuration for the profile screen binary.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub config: Config,
}

impl AppConfig {
    pub fn from_environment() -> Self {
        Self {
            config: Config::load(),
        }
    }

    /// Wire the token store, HTTP client and profile service.
    pub fn build_context(&self) -> ApiResult<CommandContext> {
        let tokens =
            Arc::new(FileTokenStore::new(self.config.token_store_path()));
        info!("Reading bearer token from {}", tokens.path().display());

        let client = ApiClient::with_timeout(
            &self.config.server_url,
            tokens,
            self.config.request_timeout(),
        )?;
        let service = Arc::new(ProfileApiAdapter::new(Arc::new(client)));

        Ok(CommandContext::new(service, self.config.toast_duration()))
    }
}
