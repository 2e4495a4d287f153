use std::time::Duration;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::error;

use crate::errors::ClientError;

/// Default per-request timeout for the generic verbs.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error body shape returned by the services behind the gateway.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Generic HTTP verbs against a fixed base URL.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client with a bounded per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).send().await;
        Self::handle(path, response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.post(self.url(path)).json(body).send().await;
        Self::handle(path, response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.put(self.url(path)).json(body).send().await;
        Self::handle(path, response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self.http.delete(self.url(path)).send().await;
        let response = Self::check(path, response).await?;
        // 204 bodies are empty; nothing further to decode.
        drop(response);
        Ok(())
    }

    /// Checks transport and status; logs and re-raises failures.
    async fn check(
        path: &str,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<reqwest::Response, ClientError> {
        let response = response.map_err(|e| {
            error!(path, error = %e, "request failed");
            ClientError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        error!(path, status = status.as_u16(), %message, "server returned an error");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn handle<T: DeserializeOwned>(
        path: &str,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<T, ClientError> {
        let response = Self::check(path, response).await?;
        response.json::<T>().await.map_err(|e| {
            error!(path, error = %e, "malformed response body");
            ClientError::from(e)
        })
    }
}
