use super::ids;
use crate::models::{
    ImageEditRequest, ImageUpload, MediaKind, TextToImageRequest, VideoRequest, DEFAULT_SIZE,
    DEFAULT_TEXT_TO_IMAGE_MODEL,
};

/// The three submission forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    TextToImage,
    ImageToImage,
    ImageToVideo,
}

impl FormKind {
    pub fn form_id(&self) -> &'static str {
        match self {
            FormKind::TextToImage => ids::T2I_FORM,
            FormKind::ImageToImage => ids::I2I_FORM,
            FormKind::ImageToVideo => ids::I2V_FORM,
        }
    }

    /// Panel that holds the form.
    pub fn tab_id(&self) -> &'static str {
        match self {
            FormKind::TextToImage => ids::TEXT_TO_IMAGE_TAB,
            FormKind::ImageToImage => ids::IMAGE_TO_IMAGE_TAB,
            FormKind::ImageToVideo => ids::IMAGE_TO_VIDEO_TAB,
        }
    }

    pub fn media_kind(&self) -> MediaKind {
        match self {
            FormKind::TextToImage | FormKind::ImageToImage => MediaKind::Image,
            FormKind::ImageToVideo => MediaKind::Video,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextToImageForm {
    pub prompt: String,
    pub model: String,
    pub size: String,
}

impl Default for TextToImageForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            model: DEFAULT_TEXT_TO_IMAGE_MODEL.to_string(),
            size: DEFAULT_SIZE.to_string(),
        }
    }
}

impl TextToImageForm {
    pub fn to_request(&self) -> TextToImageRequest {
        TextToImageRequest::new(self.prompt.clone(), self.model.clone(), self.size.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageToImageForm {
    pub image: Option<ImageUpload>,
    pub prompt: String,
}

impl ImageToImageForm {
    /// Strengths come from the sliders, which live outside the form.
    pub fn to_request(&self, creative_strength: &str, control_strength: &str) -> ImageEditRequest {
        ImageEditRequest {
            image: self.image.clone(),
            prompt: self.prompt.clone(),
            creative_strength: creative_strength.to_string(),
            control_strength: control_strength.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageToVideoForm {
    pub image: Option<ImageUpload>,
}

impl ImageToVideoForm {
    pub fn to_request(&self) -> VideoRequest {
        VideoRequest {
            image: self.image.clone(),
        }
    }
}
