// Judge backend configuration
//
// The base URL is a process-start requirement: binaries fail at boot when it
// is absent rather than surfacing a per-call error later.

use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },
}

/// Connection settings for the remote execution backend.
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Base URL of the judge service, e.g. `https://judge0-ce.p.rapidapi.com`
    pub base_url: String,
    /// Sent as `X-RapidAPI-Key` when present
    pub api_key: Option<String>,
    /// Sent as `X-RapidAPI-Host` when present
    pub api_host: Option<String>,
    /// Hard cap on each wait-for-result submission call
    pub request_timeout: Duration,
    /// Extra attempts for transient backend failures; 0 means submit once
    pub max_retries: u32,
}

impl JudgeConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            api_host: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: 0,
        }
    }

    /// Read configuration from the environment.
    ///
    /// `JUDGE_URL` is required; `JUDGE_API_KEY`, `JUDGE_API_HOST`,
    /// `JUDGE_TIMEOUT_SECS` and `JUDGE_MAX_RETRIES` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var("JUDGE_URL").map_err(|_| ConfigError::MissingVar("JUDGE_URL"))?;

        let mut config = Self::new(base_url);
        config.api_key = std::env::var("JUDGE_API_KEY").ok();
        config.api_host = std::env::var("JUDGE_API_HOST").ok();

        if let Ok(value) = std::env::var("JUDGE_TIMEOUT_SECS") {
            let secs: u64 = value.parse().map_err(|_| ConfigError::InvalidVar {
                var: "JUDGE_TIMEOUT_SECS",
                value: value.clone(),
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Ok(value) = std::env::var("JUDGE_MAX_RETRIES") {
            config.max_retries = value.parse().map_err(|_| ConfigError::InvalidVar {
                var: "JUDGE_MAX_RETRIES",
                value: value.clone(),
            })?;
        }

        Ok(config)
    }
}
