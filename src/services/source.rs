// src/services/source.rs

//! Image acquisition.
//!
//! An [`ImageSource`] yields the raw bytes handed to the label detector.
//! Downloads go through a shared `reqwest::Client`; local files are read
//! with `tokio::fs`.

use std::path::PathBuf;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use url::Url;

use crate::error::Result;
use crate::models::BodyEncoding;
use crate::utils::http::fetch_bytes;

/// Source of raw image bytes for one request.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Acquire the image bytes.
    async fn load(&self) -> Result<Vec<u8>>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Image downloaded over HTTP.
pub struct UrlImageSource<'a> {
    client: &'a reqwest::Client,
    url: Url,
    encoding: BodyEncoding,
}

impl<'a> UrlImageSource<'a> {
    pub fn new(client: &'a reqwest::Client, url: Url, encoding: BodyEncoding) -> Self {
        Self {
            client,
            url,
            encoding,
        }
    }
}

#[async_trait]
impl ImageSource for UrlImageSource<'_> {
    async fn load(&self) -> Result<Vec<u8>> {
        let body = fetch_bytes(self.client, self.url.as_str()).await?;
        decode_body(body, self.encoding)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Image read from a local path.
pub struct FileImageSource {
    path: PathBuf,
}

impl FileImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ImageSource for FileImageSource {
    async fn load(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Turn a downloaded body into image bytes according to `encoding`.
pub fn decode_body(body: Vec<u8>, encoding: BodyEncoding) -> Result<Vec<u8>> {
    match encoding {
        BodyEncoding::Raw => Ok(body),
        BodyEncoding::Base64 => {
            let text = body.trim_ascii();
            Ok(STANDARD.decode(text)?)
        }
    }
}
