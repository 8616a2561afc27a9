use crate::error::{Result, StudioError};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;

pub const DEFAULT_SIZE: &str = "1:1";
pub const DEFAULT_CREATIVE_STRENGTH: &str = "10";
pub const DEFAULT_CONTROL_STRENGTH: &str = "2";

/// Which media element a successful result is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// JSON body of `POST /v1/images/generations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextToImageRequest {
    pub prompt: String,
    pub model: String,
    pub size: String,
    pub n: u32,
    pub response_format: String,
}

impl TextToImageRequest {
    pub fn new(
        prompt: impl Into<String>,
        model: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            size: size.into(),
            n: 1,
            response_format: "url".to_string(),
        }
    }
}

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::from_bytes(file_name, bytes))
    }

    fn into_part(self) -> Result<Part> {
        Ok(Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)?)
    }
}

/// Multipart body of `POST /v1/images/edits`. Strengths are sent as the slider reports them.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEditRequest {
    pub image: Option<ImageUpload>,
    pub prompt: String,
    pub creative_strength: String,
    pub control_strength: String,
}

impl ImageEditRequest {
    pub fn into_form(self) -> Result<Form> {
        let mut form = Form::new();
        if let Some(image) = self.image {
            form = form.part("image", image.into_part()?);
        }
        Ok(form
            .text("prompt", self.prompt)
            .text("creative_strength", self.creative_strength)
            .text("control_strength", self.control_strength))
    }
}

/// Multipart body of `POST /v1/video/generations`.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRequest {
    pub image: Option<ImageUpload>,
}

impl VideoRequest {
    pub fn into_form(self) -> Result<Form> {
        let mut form = Form::new();
        if let Some(image) = self.image {
            form = form.part("image", image.into_part()?);
        }
        Ok(form)
    }
}

/// Response envelope shared by the three generation endpoints.
///
/// Success carries `data[0].url`; failure carries `detail`, which the gateway
/// sends as a string or, for rejected form fields, as a JSON list. Only those
/// two are read, so `created` and `data` stay untyped and never reject a reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl GenerationResult {
    pub fn success(url: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            created: None,
            data: Some(json!([{ "url": url }])),
            detail: None,
        }
    }

    pub fn failure(detail: impl Into<String>) -> Self {
        Self {
            created: None,
            data: None,
            detail: Some(Value::String(detail.into())),
        }
    }

    /// Creation time in whole seconds, whether the gateway sent an integer or a float.
    pub fn created_secs(&self) -> Option<i64> {
        let created = self.created.as_ref()?;
        created
            .as_i64()
            .or_else(|| created.as_f64().map(|secs| secs as i64))
    }

    /// The service-reported failure, if any.
    pub fn detail_message(&self) -> Option<String> {
        self.detail.as_ref().and_then(detail_text)
    }

    pub fn first_url(&self) -> Option<&str> {
        self.data.as_ref()?.pointer("/0/url")?.as_str()
    }

    /// Resolves the envelope: a detail wins over any data that came with it.
    pub fn into_url(self) -> Result<String> {
        if let Some(detail) = self.detail_message() {
            return Err(StudioError::Service(detail));
        }
        self.first_url()
            .map(str::to_string)
            .ok_or(StudioError::MalformedResponse)
    }
}

/// Text of a `detail` value. Falsy values (null, false, zero, "") count as absent;
/// strings are taken verbatim and anything else as compact JSON.
pub fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
