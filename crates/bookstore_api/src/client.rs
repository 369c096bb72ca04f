use std::sync::RwLock;

use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{map_reqwest_error, ApiError};
use crate::settings::{ApiSettings, Platform};

/// HTTP client shared by every typed endpoint client.
///
/// Owns the base address, the configured timeouts and the optional bearer
/// token. Typed clients hold it behind an `Arc` and add paths relative to
/// the base, which already ends in `/api`.
pub struct StoreClient {
    http: reqwest::Client,
    base: Url,
    bearer: RwLock<Option<String>>,
}

impl StoreClient {
    /// Client for `base_address` with default settings.
    pub fn new(base_address: &str) -> Result<Self, ApiError> {
        Self::with_settings(base_address, &ApiSettings::default())
    }

    /// Client for `base_address` with explicit settings.
    pub fn with_settings(base_address: &str, settings: &ApiSettings) -> Result<Self, ApiError> {
        let base =
            Url::parse(base_address).map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout())
            .timeout(settings.request_timeout())
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            http,
            base,
            bearer: RwLock::new(None),
        })
    }

    /// Client for the address `settings` assigns to `platform`.
    pub fn from_settings(settings: &ApiSettings, platform: Platform) -> Result<Self, ApiError> {
        Self::with_settings(&settings.base_address_for(platform), settings)
    }

    /// Attach `token` to subsequent requests as a bearer credential.
    pub fn set_bearer_token(&self, token: impl Into<String>) {
        *self.bearer.write().expect("bearer token lock") = Some(token.into());
    }

    /// Drop the stored credential; subsequent requests go out anonymous.
    pub fn clear_bearer_token(&self) {
        *self.bearer.write().expect("bearer token lock") = None;
    }

    fn endpoint(&self, path: &str, query: &[(String, String)]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        {
            // Url::join would swallow the `/api` suffix; append segments
            // relative to it instead.
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ApiError::InvalidUrl("base address cannot carry paths".into()))?;
            segments.pop_if_empty();
            for part in path.split('/').filter(|part| !part.is_empty()) {
                segments.push(part);
            }
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }

    fn authorised(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.bearer.read().expect("bearer token lock").as_deref() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path, query)?;
        let response = self
            .authorised(self.http.get(url))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Self::read_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(path, &[])?;
        let response = self
            .authorised(self.http.post(url))
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Self::expect_success(response).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let url = self.endpoint(path, &[])?;
        let response = self
            .authorised(self.http.post(url))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Self::expect_success(response).await
    }

    pub(crate) async fn put_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(path, &[])?;
        let response = self
            .authorised(self.http.put(url))
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Self::expect_success(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.endpoint(path, &[])?;
        let response = self
            .authorised(self.http.delete(url))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Self::expect_success(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Malformed(err.to_string()))
    }

    async fn expect_success(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::status_error(status, response).await)
    }

    async fn status_error(status: StatusCode, response: reqwest::Response) -> ApiError {
        let message = match response.text().await {
            Ok(body) if !body.trim().is_empty() => {
                friendly_message(&body).unwrap_or_else(|| clip(body.trim(), 240))
            }
            _ => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

/// Pull the useful text out of an ASP.NET problem-details body.
fn friendly_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["detail", "message", "title"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars).collect()
}
