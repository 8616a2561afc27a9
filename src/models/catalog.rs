use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ModelCategory {
    TextToImage,
    ImageToImage,
    ImageToVideo,
}

/// Models the gateway advertises: (id, display name, category).
pub const KNOWN_MODELS: &[(&str, &str, ModelCategory)] = &[
    ("vheer-text-to-image-pro", "Pro Model", ModelCategory::TextToImage),
    ("vheer-text-to-image-max", "Max Model", ModelCategory::TextToImage),
    ("vheer-image-to-image", "Image-to-Image", ModelCategory::ImageToImage),
    ("vheer-image-to-video", "Image-to-Video", ModelCategory::ImageToVideo),
];

pub const DEFAULT_TEXT_TO_IMAGE_MODEL: &str = "vheer-text-to-image-pro";

impl ModelCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelCategory::TextToImage => "text-to-image",
            ModelCategory::ImageToImage => "image-to-image",
            ModelCategory::ImageToVideo => "image-to-video",
        }
    }
}

/// Display name and category of a model id the gateway is known to serve.
pub fn known_model(id: &str) -> Option<(&'static str, ModelCategory)> {
    KNOWN_MODELS
        .iter()
        .find(|(known, _, _)| *known == id)
        .map(|(_, name, category)| (*name, *category))
}

/// One entry of `GET /v1/models`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    #[serde(default = "model_object")]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub owned_by: String,
}

fn model_object() -> String {
    "model".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub object: String,
    pub data: Vec<ModelInfo>,
}

impl ModelList {
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|model| model.id.as_str())
    }
}
