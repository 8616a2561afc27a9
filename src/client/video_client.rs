use super::endpoint::Endpoint;
use crate::{
    error::Result,
    models::{GenerationResult, VideoRequest},
};

pub const VIDEO_GENERATIONS_PATH: &str = "v1/video/generations";

#[derive(Clone)]
pub struct VideoClient {
    endpoint: Endpoint,
}

impl VideoClient {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub async fn generate(&self, api_key: &str, request: VideoRequest) -> Result<GenerationResult> {
        log::info!(
            "Generating video from image: {}",
            request
                .image
                .as_ref()
                .map(|image| image.file_name.as_str())
                .unwrap_or("<none>")
        );

        let form = request.into_form()?;
        let builder = self.endpoint.post(VIDEO_GENERATIONS_PATH, api_key)?.multipart(form);
        self.endpoint.send_generation(builder).await
    }
}
