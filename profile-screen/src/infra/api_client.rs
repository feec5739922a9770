use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use profile_model::ErrorBody;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::infra::token_store::TokenProvider;

/// Failure of a single profile API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unreachable host, timeout, malformed or non-JSON body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        /// `message` field of the JSON error body, when there was one.
        message: Option<String>,
    },
}

impl ApiError {
    /// Server supplied explanation, if the response carried a non-empty one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// API client with bearer authentication
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("tokens", &self.tokens)
            .finish()
    }
}

/// Add `http://` when no scheme was given and drop trailing slashes.
///
/// Users tend to type "localhost:5000/api", which reqwest rejects.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let normalized =
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        };
    if normalized != raw {
        warn!(
            "[ApiClient] Normalized base URL from '{}' to '{}'",
            raw, normalized
        );
    }
    normalized
}

impl ApiClient {
    /// Create a client without a request timeout.
    pub fn new(
        base_url: &str,
        tokens: Arc<dyn TokenProvider>,
    ) -> ApiResult<Self> {
        Self::with_timeout(base_url, tokens, None)
    }

    /// Create a client; `timeout` bounds every request when set.
    pub fn with_timeout(
        base_url: &str,
        tokens: Arc<dyn TokenProvider>,
        timeout: Option<Duration>,
    ) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url);

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self {
            client,
            base_url,
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let path = path.as_ref().trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    /// Attach the bearer token, read fresh from the provider.
    pub fn build_request(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.token() {
            Some(token) => {
                builder.header("Authorization", format!("Bearer {}", token))
            }
            None => {
                warn!(
                    "[ApiClient] No bearer token, request sent unauthenticated"
                );
                builder
            }
        }
    }

    /// GET request with authentication, decoding a JSON body.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let request = self.build_request(self.client.get(&url));
        let response = Self::ensure_success(request.send().await?).await?;
        Ok(response.json::<R>().await?)
    }

    /// PUT request with authentication; any 2xx counts and the body is ignored.
    pub async fn put_no_content<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> ApiResult<()> {
        let url = self.build_url(path);
        debug!("PUT {}", url);

        let request = self.build_request(self.client.put(&url).json(body));
        Self::ensure_success(request.send().await?).await?;
        Ok(())
    }

    async fn ensure_success(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.text().await {
            Ok(text) => serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message),
            Err(err) => {
                warn!("[ApiClient] Could not read error body: {}", err);
                None
            }
        };
        warn!(
            "[ApiClient] Request failed with status {}: {}",
            status,
            message.as_deref().unwrap_or("<no message>")
        );
        Err(ApiError::Status { status, message })
    }
}
