//! Service layer for the image labeler.
//!
//! This module contains the pipeline stages:
//! - Image acquisition (`ImageSource`)
//! - Label detection (`LabelDetector`)
//! - Label translation (`Translator`)
//! - Result formatting (`format_results`)

#[cfg(feature = "aws")]
pub mod aws;
mod detector;
mod formatter;
mod source;
mod translator;

#[cfg(test)]
pub(crate) mod testing;

pub use detector::{LabelDetector, LabelService, filter_confident, join_names};
pub use formatter::{LINE_SEPARATOR, format_line, format_results};
pub use source::{FileImageSource, ImageSource, UrlImageSource, decode_body};
pub use translator::{
    SOURCE_LANGUAGE, TARGET_LANGUAGE, TranslationRequest, TranslationService, Translator,
    split_fragments,
};
