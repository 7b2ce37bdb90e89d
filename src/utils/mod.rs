//! Utility functions and helpers.

pub mod http;

use url::Url;

use crate::error::{AppError, Result};

/// Parse and check an image URL, accepting only http(s).
pub fn parse_image_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::InvalidImageUrl(format!(
            "unsupported scheme {other}"
        ))),
    }
}
