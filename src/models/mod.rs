// src/models/mod.rs

//! Domain models for the image labeler.

mod config;
mod label;

// Re-export all public types
pub use config::{BodyEncoding, Config, HttpConfig, SourceConfig, TranslationConfig, TranslationMode};
pub use label::{CONFIDENCE_THRESHOLD, DetectedLabels, FRAGMENT_SEPARATOR, Label, NAME_SEPARATOR};
