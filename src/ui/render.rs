use crate::error::StudioError;
use crate::models::{GenerationResult, MediaKind};

/// What the result area shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultOutput {
    #[default]
    Empty,
    Media { kind: MediaKind, url: String },
    Error(String),
}

impl ResultOutput {
    pub fn error(message: impl Into<String>) -> Self {
        ResultOutput::Error(message.into())
    }

    pub fn from_error(err: &StudioError) -> Self {
        ResultOutput::Error(err.to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultOutput::Error(_))
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ResultOutput::Media { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Markup for the output element. The URL is inserted as the service returned it.
    pub fn to_html(&self) -> String {
        match self {
            ResultOutput::Empty => String::new(),
            ResultOutput::Media {
                kind: MediaKind::Image,
                url,
            } => format!(
                r#"<img src="{url}" alt="Generated Image"><p><a href="{url}" target="_blank">{url}</a></p>"#
            ),
            ResultOutput::Media {
                kind: MediaKind::Video,
                url,
            } => format!(
                r#"<video controls src="{url}"></video><p><a href="{url}" target="_blank">{url}</a></p>"#
            ),
            ResultOutput::Error(message) => {
                format!(r#"<div class="error">错误: {message}</div>"#)
            }
        }
    }
}

/// A `detail` wins regardless of `kind`; a success without `data[0].url` renders as an error.
pub fn render(result: GenerationResult, kind: MediaKind) -> ResultOutput {
    match result.into_url() {
        Ok(url) => ResultOutput::Media { kind, url },
        Err(err) => {
            if matches!(err, StudioError::MalformedResponse) {
                log::warn!("Success response carried no result url");
            }
            ResultOutput::from_error(&err)
        }
    }
}
