use std::sync::Arc;

use async_trait::async_trait;
use profile_model::{PasswordChangeRequest, PersonalInfo, ProfileInfo};

use crate::infra::api_client::{ApiClient, ApiResult};

/// Profile endpoints, relative to the configured base URL.
pub mod routes {
    pub const PROFILE: &str = "/profile";
    pub const PROFILE_PASSWORD: &str = "/profile/password";
}

/// Remote profile operations used by the profile screen.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Read the signed-in user's personal info.
    async fn fetch_profile(&self) -> ApiResult<PersonalInfo>;

    /// Persist the full personal info form.
    async fn update_personal_info(&self, info: PersonalInfo) -> ApiResult<()>;

    /// Persist the secondary profile fields.
    async fn update_profile_info(&self, info: ProfileInfo) -> ApiResult<()>;

    /// Change the password; the request never carries the confirmation.
    async fn change_password(
        &self,
        request: PasswordChangeRequest,
    ) -> ApiResult<()>;
}

#[derive(Debug, Clone)]
pub struct ProfileApiAdapter {
    client: Arc<ApiClient>,
}

impl ProfileApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileService for ProfileApiAdapter {
    async fn fetch_profile(&self) -> ApiResult<PersonalInfo> {
        self.client.get(routes::PROFILE).await
    }

    async fn update_personal_info(&self, info: PersonalInfo) -> ApiResult<()> {
        self.client.put_no_content(routes::PROFILE, &info).await
    }

    async fn update_profile_info(&self, info: ProfileInfo) -> ApiResult<()> {
        self.client.put_no_content(routes::PROFILE, &info).await
    }

    async fn change_password(
        &self,
        request: PasswordChangeRequest,
    ) -> ApiResult<()> {
        self.client
            .put_no_content(routes::PROFILE_PASSWORD, &request)
            .await
    }
}
