// src/services/detector.rs

//! Label detection service.
//!
//! Wraps a [`LabelService`] capability and reduces its output to the
//! confident labels plus the joined name string used for translation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{DetectedLabels, Label, NAME_SEPARATOR};

/// External capability that labels an image.
#[async_trait]
pub trait LabelService: Send + Sync {
    /// Return every label the service found, in service order.
    async fn detect_labels(&self, image: Vec<u8>) -> Result<Vec<Label>>;
}

/// Service for detecting confident labels in an image.
#[derive(Clone)]
pub struct LabelDetector {
    service: Arc<dyn LabelService>,
}

impl LabelDetector {
    pub fn new(service: Arc<dyn LabelService>) -> Self {
        Self { service }
    }

    /// Detect labels and keep those above the confidence threshold.
    pub async fn detect(&self, image: &[u8]) -> Result<DetectedLabels> {
        let raw = self.service.detect_labels(image.to_vec()).await?;
        let total = raw.len();

        let labels = filter_confident(raw);
        log::debug!("Kept {} of {} labels", labels.len(), total);

        Ok(DetectedLabels {
            joined_names: join_names(&labels),
            labels,
        })
    }
}

/// Keep labels with confidence strictly above the threshold, preserving order.
pub fn filter_confident(labels: Vec<Label>) -> Vec<Label> {
    labels.into_iter().filter(Label::is_confident).collect()
}

/// Join label names with the translation separator.
pub fn join_names(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|label| label.name.as_str())
        .collect::<Vec<_>>()
        .join(NAME_SEPARATOR)
}
