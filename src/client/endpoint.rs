use crate::error::{Result, StudioError};
use crate::models::GenerationResult;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

/// HTTP connection to the gateway shared by the per-modality clients.
#[derive(Clone)]
pub struct Endpoint {
    http: Client,
    base_url: Url,
}

impl Endpoint {
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| StudioError::Config(format!("cannot build url for '{}': {}", path, e)))
    }

    pub fn post(&self, path: &str, api_key: &str) -> Result<RequestBuilder> {
        Ok(self
            .http
            .post(self.url(path)?)
            .header(AUTHORIZATION, format!("Bearer {}", api_key)))
    }

    pub fn get(&self, path: &str, api_key: &str) -> Result<RequestBuilder> {
        Ok(self
            .http
            .get(self.url(path)?)
            .header(AUTHORIZATION, format!("Bearer {}", api_key)))
    }

    /// Sends the request and parses the generation envelope whatever the status.
    pub async fn send_generation(&self, request: RequestBuilder) -> Result<GenerationResult> {
        let response = request.send().await?;
        read_json(response).await
    }
}

/// Parses a JSON body without looking at the status; error statuses carry `detail`.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let url = response.url().clone();
    let body = response.bytes().await?;

    if !status.is_success() {
        log::warn!("Gateway answered {} for {}", status, url);
    }
    log::debug!(
        "Response body from {}: {}",
        url,
        String::from_utf8_lossy(&body[..body.len().min(500)])
    );

    serde_json::from_slice(&body).map_err(|e| {
        log::error!("Response from {} is not valid JSON: {}", url, e);
        StudioError::Decode(e.to_string())
    })
}
