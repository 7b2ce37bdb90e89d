// src/services/translator.rs

//! Label translation service.
//!
//! Labels arrive in English and are rendered in Portuguese. In
//! [`TranslationMode::Joined`] every name travels in one request and the
//! answer is split on [`FRAGMENT_SEPARATOR`]; the fragment count must match
//! the label count. [`TranslationMode::PerLabel`] sends one request per name.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{DetectedLabels, FRAGMENT_SEPARATOR, TranslationMode};

pub const SOURCE_LANGUAGE: &str = "en";
pub const TARGET_LANGUAGE: &str = "pt";

/// A single text translation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_language: String,
    pub target_language: String,
    pub text: String,
}

impl TranslationRequest {
    /// English to Portuguese request for `text`.
    pub fn en_to_pt(text: impl Into<String>) -> Self {
        Self {
            source_language: SOURCE_LANGUAGE.to_string(),
            target_language: TARGET_LANGUAGE.to_string(),
            text: text.into(),
        }
    }
}

/// External capability that translates text.
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Return the translated text.
    async fn translate_text(&self, request: TranslationRequest) -> Result<String>;
}

/// Service for translating detected label names.
#[derive(Clone)]
pub struct Translator {
    service: Arc<dyn TranslationService>,
    mode: TranslationMode,
}

impl Translator {
    pub fn new(service: Arc<dyn TranslationService>, mode: TranslationMode) -> Self {
        Self { service, mode }
    }

    /// Translate a joined name string and split it into fragments.
    ///
    /// Empty input yields no fragments without calling the service.
    pub async fn translate(&self, joined_names: &str) -> Result<Vec<String>> {
        if joined_names.is_empty() {
            return Ok(Vec::new());
        }

        let translated = self
            .service
            .translate_text(TranslationRequest::en_to_pt(joined_names))
            .await?;

        Ok(split_fragments(&translated))
    }

    /// Translate every detected label, one fragment per label in label order.
    pub async fn translate_labels(&self, detected: &DetectedLabels) -> Result<Vec<String>> {
        match self.mode {
            TranslationMode::Joined => {
                let fragments = self.translate(&detected.joined_names).await?;
                if fragments.len() != detected.len() {
                    return Err(AppError::TranslationMismatch {
                        expected: detected.len(),
                        actual: fragments.len(),
                    });
                }
                Ok(fragments)
            }
            TranslationMode::PerLabel => {
                let mut fragments = Vec::with_capacity(detected.len());
                for label in &detected.labels {
                    let translated = self
                        .service
                        .translate_text(TranslationRequest::en_to_pt(&label.name))
                        .await?;
                    fragments.push(translated);
                }
                Ok(fragments)
            }
        }
    }
}

/// Split translated text on the Portuguese conjunction.
pub fn split_fragments(translated: &str) -> Vec<String> {
    translated
        .split(FRAGMENT_SEPARATOR)
        .map(str::to_string)
        .collect()
}
