//! HTTP client for the entity store

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::ApiResponse;

use crate::{ClientConfig, ClientError, ClientResult};

/// Thin JSON client bound to one base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// GET with query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<T> {
        let request = self.authorized(self.client.get(self.url(path)).query(query));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// POST with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorized(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// PUT with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorized(self.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// DELETE, ignoring any response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = self.authorized(self.client.delete(self.url(path)));
        let response = request.send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        // Prefer the message of an ApiResponse envelope over the raw body
        let text = serde_json::from_str::<ApiResponse<Value>>(&body)
            .map(|envelope| envelope.message)
            .unwrap_or(body);
        tracing::debug!(status = %status, message = %text, "Entity store returned an error");
        match status {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY | StatusCode::CONFLICT => {
                Err(ClientError::Validation(text))
            }
            _ => Err(ClientError::Internal(format!("{status}: {text}"))),
        }
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}
