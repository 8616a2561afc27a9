pub mod endpoint;
pub mod image_client;
pub mod video_client;

use crate::{
    config::Config,
    error::{Result, StudioError},
    models::{
        detail_text, GenerationResult, ImageEditRequest, ModelList, TextToImageRequest,
        VideoRequest,
    },
};
use async_trait::async_trait;

pub use endpoint::Endpoint;
pub use image_client::ImageClient;
pub use video_client::VideoClient;

pub const MODELS_PATH: &str = "v1/models";

/// The gateway operations the studio submits through.
///
/// Every call takes the bearer key explicitly; implementations must not cache it.
#[async_trait]
pub trait GenerationApi: Send + Sync {
    async fn generate_image(
        &self,
        api_key: &str,
        request: TextToImageRequest,
    ) -> Result<GenerationResult>;

    async fn edit_image(&self, api_key: &str, request: ImageEditRequest)
        -> Result<GenerationResult>;

    async fn generate_video(&self, api_key: &str, request: VideoRequest)
        -> Result<GenerationResult>;

    async fn list_models(&self, api_key: &str) -> Result<ModelList>;
}

#[derive(Clone)]
pub struct GenerationClient {
    endpoint: Endpoint,
    image_client: ImageClient,
    video_client: VideoClient,
}

impl GenerationClient {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = config.parsed_base_url()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        log::debug!("Generation client targets {}", base_url);
        let endpoint = Endpoint::new(http, base_url);

        Ok(Self {
            image_client: ImageClient::new(endpoint.clone()),
            video_client: VideoClient::new(endpoint.clone()),
            endpoint,
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn video(&self) -> &VideoClient {
        &self.video_client
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationApi for GenerationClient {
    async fn generate_image(
        &self,
        api_key: &str,
        request: TextToImageRequest,
    ) -> Result<GenerationResult> {
        self.image().generate(api_key, request).await
    }

    async fn edit_image(
        &self,
        api_key: &str,
        request: ImageEditRequest,
    ) -> Result<GenerationResult> {
        self.image().edit(api_key, request).await
    }

    async fn generate_video(
        &self,
        api_key: &str,
        request: VideoRequest,
    ) -> Result<GenerationResult> {
        self.video().generate(api_key, request).await
    }

    /// A rejected key comes back as `{detail}` instead of a list and fails as a service error.
    async fn list_models(&self, api_key: &str) -> Result<ModelList> {
        log::info!("Listing gateway models");
        let response = self.endpoint.get(MODELS_PATH, api_key)?.send().await?;
        let body: serde_json::Value = endpoint::read_json(response).await?;

        if let Some(detail) = body.get("detail").and_then(detail_text) {
            log::error!("Model listing rejected: {}", detail);
            return Err(StudioError::Service(detail));
        }
        Ok(serde_json::from_value(body)?)
    }
}
