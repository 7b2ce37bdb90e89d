//! Label data structures.

use serde::{Deserialize, Serialize};

/// Labels at or below this confidence are discarded.
pub const CONFIDENCE_THRESHOLD: f32 = 80.0;

/// Separator used to join label names before translation.
pub const NAME_SEPARATOR: &str = " and ";

/// Separator the Portuguese translation is split on.
pub const FRAGMENT_SEPARATOR: &str = " e ";

/// A label returned by the detection service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Label {
    /// Entity name, in English
    pub name: String,

    /// Confidence score in the range 0..=100
    pub confidence: f32,
}

impl Label {
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }

    /// Whether the label clears the confidence threshold.
    pub fn is_confident(&self) -> bool {
        self.confidence > CONFIDENCE_THRESHOLD
    }
}

/// Confident labels together with the joined name string sent for translation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectedLabels {
    /// Label names joined with [`NAME_SEPARATOR`]
    pub joined_names: String,

    /// Labels kept after filtering, in service order
    pub labels: Vec<Label>,
}

impl DetectedLabels {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_confident_is_strict() {
        assert!(Label::new("Dog", 80.01).is_confident());
        assert!(!Label::new("Dog", 80.0).is_confident());
        assert!(!Label::new("Dog", 12.0).is_confident());
    }
}
