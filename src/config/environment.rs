// ABOUTME: Environment configuration for the Arvo MCP bridge
// ABOUTME: Reads the API credential, base URL override, and HTTP timeout from the process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

//! Environment-based configuration
//!
//! The credential is the only required value. Everything else has a
//! default so the bridge starts with just `ARVO_API_KEY` set.

use std::env;
use std::fmt;
use std::time::Duration;

use tracing::info;
use url::Url;

use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};

/// Opaque bearer token for the Arvo API.
///
/// `Debug` and `Display` never reveal the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw token, rejecting blank values
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when the token is empty or whitespace
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(missing_key_error());
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw token value, for the `Authorization` header only
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(5).collect();
        write!(f, "{prefix}***")
    }
}

/// Server configuration loaded once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Credential attached to every outbound call
    pub api_key: ApiKey,
    /// Arvo API base URL without trailing slash
    pub api_base_url: String,
    /// Timeout applied to each outbound HTTP request
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if `ARVO_API_KEY` is absent or blank and
    /// `ConfigInvalid` if an optional value cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Same conditions as [`ServerConfig::from_env`]
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(env_config::ARVO_API_KEY)
            .ok_or_else(missing_key_error)
            .and_then(ApiKey::new)?;

        let api_base_url = match lookup(env_config::ARVO_API_URL) {
            Some(raw) if !raw.trim().is_empty() => normalize_base_url(&raw)?,
            _ => defaults::API_BASE_URL.to_owned(),
        };

        let request_timeout = match lookup(env_config::ARVO_REQUEST_TIMEOUT_SECS) {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key,
            api_base_url,
            request_timeout,
        })
    }

    /// Replace the base URL (command-line override)
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the URL is not an absolute http(s) URL
    pub fn with_api_base_url(mut self, raw: &str) -> AppResult<Self> {
        self.api_base_url = normalize_base_url(raw)?;
        Ok(self)
    }

    /// One-line human readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Arvo MCP Configuration: api_url={}, api_key={}, request_timeout={}s",
            self.api_base_url,
            self.api_key,
            self.request_timeout.as_secs()
        )
    }
}

fn missing_key_error() -> AppError {
    AppError::config_missing(format!(
        "{} environment variable is required. Get your API key from {}",
        env_config::ARVO_API_KEY,
        defaults::API_KEY_SETTINGS_URL
    ))
}

/// Validate an http(s) base URL and strip trailing slashes
fn normalize_base_url(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|e| {
        AppError::config_invalid(format!("Invalid Arvo API URL '{trimmed}': {e}")).with_source(e)
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(format!(
            "Invalid Arvo API URL '{trimmed}': scheme must be http or https"
        )));
    }

    Ok(trimmed.trim_end_matches('/').to_owned())
}

fn parse_timeout(raw: &str) -> AppResult<Duration> {
    let secs: u64 = raw.trim().parse().map_err(|e| {
        AppError::config_invalid(format!(
            "Invalid {} value '{raw}': {e}",
            env_config::ARVO_REQUEST_TIMEOUT_SECS
        ))
    })?;
    if secs == 0 {
        return Err(AppError::config_invalid(format!(
            "{} must be greater than zero",
            env_config::ARVO_REQUEST_TIMEOUT_SECS
        )));
    }
    Ok(Duration::from_secs(secs))
}
