//! HTTP client shared by all gateways.

use std::sync::Arc;
use std::time::Duration;

use contesthub_common::{AppError, AppResult};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ApiConfig;
use crate::session::IdentityProvider;

/// Error body shape the backend uses for non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Thin wrapper around `reqwest::Client` that knows the API base URL and
/// attaches the current session's bearer token to every request.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    provider: Arc<dyn IdentityProvider>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, provider: Arc<dyn IdentityProvider>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("HTTP client construction failed: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            provider,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.provider.bearer_token() {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder) -> AppResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| AppError::DataFetch(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        debug!(status = %status, "backend returned an error status");
        Err(Self::classify_status(status, response).await)
    }

    async fn classify_status(status: StatusCode, response: Response) -> AppError {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body
                .message
                .or(body.error)
                .unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        };
        AppError::from_status(status.as_u16(), message)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Serialization(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let response = self.send(self.request(Method::GET, path).query(query)).await?;
        Self::decode(response).await
    }

    pub async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self.send(self.request(Method::POST, path).json(body)).await?;
        Self::decode(response).await
    }

    pub async fn patch_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .send(self.request(Method::PATCH, path).json(body))
            .await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> AppResult<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shapes() {
        let with_message: ErrorBody =
            serde_json::from_str(r#"{"message": "Contest not found"}"#).unwrap();
        assert_eq!(with_message.message.as_deref(), Some("Contest not found"));

        let with_error: ErrorBody = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert_eq!(with_error.error.as_deref(), Some("boom"));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.message.is_none() && empty.error.is_none());
    }
}
