//! AWS-backed capabilities.
//!
//! - [`RekognitionLabels`]: `DetectLabels` on raw image bytes
//! - [`AmazonTranslate`]: `TranslateText`
//!
//! Credentials and region come from the default provider chain.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::Image;

use crate::error::{AppError, Result};
use crate::models::Label;
use crate::services::{LabelService, TranslationRequest, TranslationService};

/// Load the shared AWS configuration from the environment.
pub async fn load_sdk_config() -> SdkConfig {
    aws_config::load_defaults(BehaviorVersion::latest()).await
}

/// Rekognition label detection.
#[derive(Clone)]
pub struct RekognitionLabels {
    client: aws_sdk_rekognition::Client,
}

impl RekognitionLabels {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_rekognition::Client::new(config),
        }
    }
}

#[async_trait]
impl LabelService for RekognitionLabels {
    async fn detect_labels(&self, image: Vec<u8>) -> Result<Vec<Label>> {
        let output = self
            .client
            .detect_labels()
            .image(Image::builder().bytes(Blob::new(image)).build())
            .send()
            .await
            .map_err(|e| AppError::detection(e.into_service_error()))?;

        let labels = output
            .labels()
            .iter()
            .filter_map(|label| {
                let name = label.name()?;
                let confidence = label.confidence()?;
                Some(Label::new(name, confidence))
            })
            .collect();

        Ok(labels)
    }
}

/// Amazon Translate text translation.
#[derive(Clone)]
pub struct AmazonTranslate {
    client: aws_sdk_translate::Client,
}

impl AmazonTranslate {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_translate::Client::new(config),
        }
    }
}

#[async_trait]
impl TranslationService for AmazonTranslate {
    async fn translate_text(&self, request: TranslationRequest) -> Result<String> {
        let output = self
            .client
            .translate_text()
            .source_language_code(request.source_language)
            .target_language_code(request.target_language)
            .text(request.text)
            .send()
            .await
            .map_err(|e| AppError::translation(e.into_service_error()))?;

        Ok(output.translated_text().to_string())
    }
}
