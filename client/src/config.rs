//! # Client Configuration
//!
//! Environment variables:
//! - `ARTMARKET_API_URL`: API base URL (default: `http://localhost:5000`)
//! - `ARTMARKET_SESSION_FILE`: session file (default: `<data dir>/artmarket/session.json`)
//! - `ARTMARKET_REQUEST_TIMEOUT_SECS`: per-request timeout; unset means none

use std::path::PathBuf;
use std::time::Duration;

use lib_utils::{get_env_opt_parse, get_env_or};

use crate::core::error::{AppError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

pub const ENV_API_URL: &str = "ARTMARKET_API_URL";
pub const ENV_SESSION_FILE: &str = "ARTMARKET_SESSION_FILE";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "ARTMARKET_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every request path is joined onto
    pub api_base_url: String,
    /// Where the signed-in identity and credential are kept
    pub session_file: PathBuf,
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            session_file: default_session_file(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Defaults with a different base URL.
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    /// Load from the environment and validate.
    pub fn from_env() -> Result<Self> {
        let session_file = match get_env_opt_parse::<PathBuf>(ENV_SESSION_FILE)? {
            Some(path) => path,
            None => default_session_file(),
        };
        let config = Self {
            api_base_url: get_env_or(ENV_API_URL, DEFAULT_API_URL),
            session_file,
            request_timeout: get_env_opt_parse::<u64>(ENV_REQUEST_TIMEOUT_SECS)?
                .map(Duration::from_secs),
        };
        config.validate()?;

        tracing::debug!(
            api_base_url = %config.api_base_url,
            session_file = %config.session_file.display(),
            timeout_secs = ?config.request_timeout.map(|t| t.as_secs()),
            "Configuration loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.api_base_url.trim();
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .ok_or_else(|| AppError::Config(format!("API URL must start with http:// or https://: {url}")))?;
        if rest.trim_matches('/').is_empty() {
            return Err(AppError::Config(format!("API URL has no host: {url}")));
        }
        if self.request_timeout == Some(Duration::ZERO) {
            return Err(AppError::Config("Request timeout must be greater than zero".to_string()));
        }
        Ok(())
    }
}

fn default_session_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("artmarket")
        .join("session.json")
}
