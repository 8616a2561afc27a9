use crate::error::{Result, StudioError};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8088";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub request_timeout: Option<Duration>,
    pub discard_stale: bool,
    pub log_level: Option<String>,
    pub log_json: bool,
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            request_timeout: None,
            discard_stale: false,
            log_level: None,
            log_json: false,
            log_file: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `STUDIO_*` variables. Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        let base_url =
            env::var("STUDIO_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = env::var("STUDIO_API_KEY").unwrap_or_default();
        let request_timeout = env::var("STUDIO_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs);
        let discard_stale = env::var("STUDIO_DISCARD_STALE")
            .ok()
            .map_or(false, |val| val == "true");
        let log_level = env::var("STUDIO_LOG_LEVEL").ok();
        let log_json = env::var("STUDIO_LOG_JSON")
            .ok()
            .map_or(false, |val| val == "true");
        let log_file = env::var("STUDIO_LOG_FILE").ok().filter(|path| !path.is_empty());

        Config {
            base_url,
            api_key,
            request_timeout,
            discard_stale,
            log_level,
            log_json,
            log_file,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_discard_stale(mut self, enabled: bool) -> Self {
        self.discard_stale = enabled;
        self
    }

    pub fn with_log_json(mut self, enabled: bool) -> Self {
        self.log_json = enabled;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<String>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Parses the base URL, guaranteeing a trailing slash so endpoint paths join under it.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw).map_err(|e| {
            StudioError::Config(format!("invalid base url '{}': {}", self.base_url, e))
        })?;
        if url.cannot_be_a_base() {
            return Err(StudioError::Config(format!(
                "base url '{}' cannot carry endpoint paths",
                self.base_url
            )));
        }
        Ok(url)
    }
}
