use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Shared HTTP transport for the backend API. Built once at startup and
/// handed to each gateway.
#[derive(Clone)]
pub struct ApiConnection {
    client: reqwest::Client,
    base_url: String,
}

impl ApiConnection {
    pub fn connect(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| AppError::NetworkError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path`, optionally with a bearer credential, and decode the
    /// JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&SecretString>,
    ) -> AppResult<T> {
        let mut request = self.client.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(AppError::from)?;
        Self::decode(path, response).await
    }

    /// POST `body` as JSON to `path` and decode the JSON response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&SecretString>,
    ) -> AppResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(AppError::from)?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            log::warn!("Request to {} failed with status {}", path, status);
            return Err(match status.as_u16() {
                401 => AppError::Unauthorized("Bearer credential was rejected".to_string()),
                404 => AppError::NotFound(format!("No resource at {}", path)),
                code => AppError::NetworkError(format!(
                    "Request to {} failed with status {}",
                    path, code
                )),
            });
        }

        response.json::<T>().await.map_err(|e| {
            AppError::NetworkError(format!("Failed to decode response from {}: {}", path, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiConnection>();
    }

    #[test]
    fn test_base_url_is_normalized() {
        let mut config = Config::test_config();
        config.api_base_url = "http://127.0.0.1:8080/api/".to_string();

        let conn = ApiConnection::connect(&config).unwrap();
        assert_eq!(conn.base_url(), "http://127.0.0.1:8080/api");
        assert_eq!(conn.url("/lessons"), "http://127.0.0.1:8080/api/lessons");
    }
}
