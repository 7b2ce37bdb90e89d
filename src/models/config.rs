//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings for URL downloads
    #[serde(default)]
    pub http: HttpConfig,

    /// Image acquisition settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Translation behavior
    #[serde(default)]
    pub translation: TranslationConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Load configuration for the Lambda environment.
    ///
    /// Starts from `CONFIG_PATH` when set, then applies `IMAGE_PATH`,
    /// `IMAGE_BODY_ENCODING`, `TRANSLATION_MODE` and `HTTP_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var("CONFIG_PATH") {
            Ok(path) => Self::load(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(path) = std::env::var("IMAGE_PATH") {
            config.source.image_path = PathBuf::from(path);
        }

        if let Ok(encoding) = std::env::var("IMAGE_BODY_ENCODING") {
            config.source.body_encoding = encoding.parse()?;
        }

        if let Ok(mode) = std::env::var("TRANSLATION_MODE") {
            config.translation.mode = mode.parse()?;
        }

        if let Ok(timeout) = std::env::var("HTTP_TIMEOUT_SECS") {
            let secs = timeout.parse().map_err(|_| {
                AppError::config(format!("HTTP_TIMEOUT_SECS is not a number: {timeout}"))
            })?;
            config.http.timeout_secs = Some(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == Some(0) {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.source.image_path.as_os_str().is_empty() {
            return Err(AppError::validation("source.image_path is empty"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for image downloads
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds; no timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: None,
        }
    }
}

/// How a downloaded response body maps to image bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyEncoding {
    /// The body is the image itself
    #[default]
    Raw,
    /// The body is base64 text wrapping the image
    Base64,
}

impl FromStr for BodyEncoding {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(BodyEncoding::Raw),
            "base64" => Ok(BodyEncoding::Base64),
            other => Err(AppError::config(format!("Unknown body encoding: {other}"))),
        }
    }
}

/// Image acquisition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Interpretation of downloaded bodies
    #[serde(default)]
    pub body_encoding: BodyEncoding,

    /// Fixed image read by the file variant
    #[serde(default = "defaults::image_path")]
    pub image_path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            body_encoding: BodyEncoding::default(),
            image_path: defaults::image_path(),
        }
    }
}

/// Strategy for translating the detected label names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationMode {
    /// One call with all names joined, split afterwards and count-checked
    #[default]
    Joined,
    /// One call per label name
    PerLabel,
}

impl FromStr for TranslationMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "joined" => Ok(TranslationMode::Joined),
            "per_label" => Ok(TranslationMode::PerLabel),
            other => Err(AppError::config(format!(
                "Unknown translation mode: {other}"
            ))),
        }
    }
}

/// Translation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default)]
    pub mode: TranslationMode,
}

mod defaults {
    use std::path::PathBuf;

    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; image-labeler/0.1)".into()
    }
    pub fn image_path() -> PathBuf {
        PathBuf::from("images/dog.jpg")
    }
}
