//! Typed client for the recipe backend's REST API.

mod auth;
mod custom;
mod favorites;
mod recipes;

pub use favorites::FavoriteSaved;

use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::session::Session;

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        Self::with_base_url(&config.base_url, config.timeout())
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, FinderError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("kitchen-finder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FinderError::BuilderError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Attach the session's bearer token. Fails without sending if nobody is logged in.
    fn authorized(
        &self,
        builder: RequestBuilder,
        session: &Session,
    ) -> Result<RequestBuilder, FinderError> {
        let token = session.token().ok_or(FinderError::NotAuthenticated)?;
        Ok(builder.bearer_auth(token))
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, FinderError> {
        let response = check_status(builder.send().await?).await?;
        let body = response.text().await?;
        debug!("Response body: {} bytes", body.len());
        serde_json::from_str(&body).map_err(|e| FinderError::Decode(e.to_string()))
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), FinderError> {
        check_status(builder.send().await?).await?;
        Ok(())
    }
}

/// Turn a non-success response into the matching error
async fn check_status(response: Response) -> Result<Response, FinderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!("{} {}: {}", status.as_u16(), status.canonical_reason().unwrap_or(""), body);
    Err(FinderError::from_status(status, error_detail(&body)))
}

/// Extract the `detail` field of an error body. Validation errors carry a list of `{msg}`.
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match &value["detail"] {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items.iter().filter_map(|i| i["msg"].as_str()).collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
