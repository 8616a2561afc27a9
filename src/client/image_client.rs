use super::endpoint::Endpoint;
use crate::{
    error::Result,
    models::{GenerationResult, ImageEditRequest, TextToImageRequest},
};

pub const GENERATIONS_PATH: &str = "v1/images/generations";
pub const EDITS_PATH: &str = "v1/images/edits";

#[derive(Clone)]
pub struct ImageClient {
    endpoint: Endpoint,
}

impl ImageClient {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub async fn generate(
        &self,
        api_key: &str,
        request: TextToImageRequest,
    ) -> Result<GenerationResult> {
        log::info!("Generating image with model: {}", request.model);
        log::debug!(
            "Text-to-image payload: {}",
            serde_json::to_string(&request).unwrap_or_default()
        );

        let builder = self.endpoint.post(GENERATIONS_PATH, api_key)?.json(&request);
        self.endpoint.send_generation(builder).await
    }

    pub async fn edit(&self, api_key: &str, request: ImageEditRequest) -> Result<GenerationResult> {
        log::info!("Editing image");
        log::debug!(
            "Image-to-image fields: prompt='{}', creative={}, control={}, image={}",
            request.prompt,
            request.creative_strength,
            request.control_strength,
            request
                .image
                .as_ref()
                .map(|image| image.file_name.as_str())
                .unwrap_or("<none>")
        );

        let form = request.into_form()?;
        let builder = self.endpoint.post(EDITS_PATH, api_key)?.multipart(form);
        self.endpoint.send_generation(builder).await
    }
}
