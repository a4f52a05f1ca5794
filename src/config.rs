//! Application configuration.
//!
//! Configuration is stored in `.ticketdesk/config.yaml` and includes:
//! - The base URL of the ticket backend
//! - The dashboard's default page size
//!
//! The base URL can also come from the `TICKETDESK_API_URL` environment
//! variable or a `--api-url` flag. There is no built-in default: a missing URL
//! is a startup error.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DeskError, Result};
use crate::paths;
use crate::types::DEFAULT_PAGE_SIZE;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "TICKETDESK_API_URL";

/// Keys accepted by `config get` / `config set`.
pub const CONFIG_KEYS: &[&str] = &["api_url", "page_size"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the ticket backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Default page size for the dashboard and `ls`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        paths::config_path()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get the API URL from the environment or the config file
    pub fn api_url(&self) -> Option<String> {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            return Some(url);
        }

        self.api_url.clone().filter(|u| !u.trim().is_empty())
    }

    /// Resolve and validate the backend base URL.
    ///
    /// `override_url` (from the command line) wins over the environment, which
    /// wins over the config file.
    pub fn resolve_api_url(&self, override_url: Option<&str>) -> Result<ApiBaseUrl> {
        let raw = override_url
            .map(str::to_string)
            .or_else(|| self.api_url())
            .ok_or_else(|| {
                DeskError::Config(format!(
                    "API base URL not configured. Pass --api-url, set {API_URL_ENV}, or run: ticketdesk config set api_url <url>"
                ))
            })?;

        ApiBaseUrl::parse(&raw)
    }

    /// Page size to use when none is given on the command line
    pub fn page_size(&self) -> u32 {
        self.page_size.filter(|n| *n > 0).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Read a single key as text
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "api_url" => Ok(self.api_url.clone()),
            "page_size" => Ok(self.page_size.map(|n| n.to_string())),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a single key from text, validating the value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" => {
                let url = ApiBaseUrl::parse(value)?;
                self.api_url = Some(url.to_string());
            }
            "page_size" => {
                let size = value
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| {
                        DeskError::Config(format!(
                            "invalid page_size '{value}', expected a positive integer"
                        ))
                    })?;
                self.page_size = Some(size);
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> DeskError {
    DeskError::Config(format!(
        "unknown config key '{key}', expected one of: {}",
        CONFIG_KEYS.join(", ")
    ))
}

/// A validated backend base URL without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let parsed = url::Url::parse(trimmed)
            .map_err(|e| DeskError::Config(format!("invalid API URL '{trimmed}': {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DeskError::Config(format!(
                "invalid API URL '{trimmed}': scheme must be http or https"
            )));
        }
        if parsed.host_str().is_none() {
            return Err(DeskError::Config(format!(
                "invalid API URL '{trimmed}': missing host"
            )));
        }

        Ok(ApiBaseUrl(trimmed.trim_end_matches('/').to_string()))
    }

    /// Host portion for display in the dashboard header
    pub fn host(&self) -> String {
        url::Url::parse(&self.0)
            .ok()
            .and_then(|u| {
                u.host_str().map(|h| match u.port() {
                    Some(port) => format!("{h}:{port}"),
                    None => h.to_string(),
                })
            })
            .unwrap_or_else(|| self.0.clone())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
