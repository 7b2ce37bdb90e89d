// src/error.rs

//! Unified error handling for the image labeler.

use std::fmt;

use thiserror::Error;

/// Result type alias for labeler operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Pipeline stage an error originated from, used for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Image,
    Detection,
    Translation,
    Config,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Image => "image",
            Stage::Detection => "detection",
            Stage::Translation => "translation",
            Stage::Config => "config",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Image body was not valid base64
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Request carried no `imageUrl` query parameter
    #[error("Missing imageUrl query parameter")]
    MissingImageUrl,

    /// Image URL parsed but cannot be downloaded
    #[error("Invalid image URL: {0}")]
    InvalidImageUrl(String),

    /// Label detection service failed
    #[error("Detection error: {0}")]
    Detection(String),

    /// Translation service failed
    #[error("Translation error: {0}")]
    Translation(String),

    /// Translated text did not split back into one fragment per label
    #[error("Translation returned {actual} fragments for {expected} labels")]
    TranslationMismatch { expected: usize, actual: usize },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a detection service error.
    pub fn detection(message: impl fmt::Display) -> Self {
        Self::Detection(message.to_string())
    }

    /// Create a translation service error.
    pub fn translation(message: impl fmt::Display) -> Self {
        Self::Translation(message.to_string())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Classify the error by the pipeline stage that raised it.
    pub fn stage(&self) -> Stage {
        match self {
            AppError::Io(_)
            | AppError::Http(_)
            | AppError::Url(_)
            | AppError::Base64(_)
            | AppError::MissingImageUrl
            | AppError::InvalidImageUrl(_) => Stage::Image,
            AppError::Detection(_) => Stage::Detection,
            AppError::Translation(_) | AppError::TranslationMismatch { .. } => Stage::Translation,
            AppError::Json(_)
            | AppError::Toml(_)
            | AppError::Config(_)
            | AppError::Validation(_) => Stage::Config,
        }
    }
}
