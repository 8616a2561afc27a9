pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod ui;

pub use client::{GenerationApi, GenerationClient, ImageClient, VideoClient};
pub use config::Config;
pub use error::{Result, StudioError};
pub use models::*;
pub use ui::{FormKind, PageView, ResultOutput, Studio, StudioState, SubmissionReport};
