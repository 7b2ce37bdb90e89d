//! Labeling pipeline.
//!
//! - `Pipeline::run`: acquire → detect → translate → format, failing fast
//! - `Pipeline::handle`: `run` behind the error boundary, as an HTTP response

mod response;

use std::sync::Arc;

use crate::error::Result;
use crate::models::{Label, TranslationMode};
use crate::services::{
    ImageSource, LabelDetector, LabelService, TranslationService, Translator, format_results,
};

pub use response::{ERROR_BODY, HttpResponse, SUCCESS_PREFIX};

/// Outcome of a successful pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Confident labels, in service order
    pub labels: Vec<Label>,
    /// Portuguese fragment per label
    pub fragments: Vec<String>,
    /// Formatted lines joined for display
    pub summary: String,
}

/// Shared pipeline, built once per process.
#[derive(Clone)]
pub struct Pipeline {
    detector: LabelDetector,
    translator: Translator,
}

impl Pipeline {
    pub fn new(detector: LabelDetector, translator: Translator) -> Self {
        Self {
            detector,
            translator,
        }
    }

    /// Build a pipeline from raw capabilities.
    pub fn from_services(
        labels: Arc<dyn LabelService>,
        translation: Arc<dyn TranslationService>,
        mode: TranslationMode,
    ) -> Self {
        Self::new(LabelDetector::new(labels), Translator::new(translation, mode))
    }

    /// Run every stage once, propagating the first failure.
    pub async fn run(&self, source: &dyn ImageSource) -> Result<Analysis> {
        log::info!("Downloading image from {}...", source.describe());
        let image = source.load().await?;

        log::info!("Detecting labels in {} bytes...", image.len());
        let detected = self.detector.detect(&image).await?;

        log::info!("Translating {} labels to Portuguese...", detected.len());
        let fragments = self.translator.translate_labels(&detected).await?;

        log::info!("Formatting results...");
        let summary = format_results(&fragments, &detected.labels);

        Ok(Analysis {
            labels: detected.labels,
            fragments,
            summary,
        })
    }

    /// Run the pipeline and map the outcome to an HTTP response.
    ///
    /// Failures are logged with their stage; the body never carries details.
    pub async fn handle(&self, source: &dyn ImageSource) -> HttpResponse {
        match self.run(source).await {
            Ok(analysis) => HttpResponse::success(&analysis.summary),
            Err(e) => {
                log::error!("Pipeline failed at {} stage: {}", e.stage(), e);
                HttpResponse::internal_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{StubLabels, StubSource, StubTranslation};

    fn pipeline(labels: StubLabels, translation: StubTranslation) -> Pipeline {
        Pipeline::from_services(
            Arc::new(labels),
            Arc::new(translation),
            TranslationMode::Joined,
        )
    }

    #[tokio::test]
    async fn test_handle_success() {
        let pipeline = pipeline(
            StubLabels::new(vec![Label::new("Dog", 91.0)]),
            StubTranslation::fixed("Cachorro"),
        );

        let response = pipeline.handle(&StubSource::new(b"jpeg")).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "A imagem tem\n 91.00% de ser to tipo Cachorro");
    }

    #[tokio::test]
    async fn test_run_two_labels() {
        let pipeline = pipeline(
            StubLabels::new(vec![
                Label::new("Cat", 95.5),
                Label::new("Couch", 40.0),
                Label::new("Dog", 82.333),
            ]),
            StubTranslation::fixed("gato e cachorro"),
        );

        let analysis = pipeline.run(&StubSource::new(b"jpeg")).await.unwrap();
        assert_eq!(analysis.labels.len(), 2);
        assert_eq!(analysis.fragments, vec!["gato", "cachorro"]);
        assert_eq!(
            analysis.summary,
            "95.50% de ser to tipo gato\n 82.33% de ser to tipo cachorro"
        );
    }

    #[tokio::test]
    async fn test_handle_no_confident_labels() {
        let translation = Arc::new(StubTranslation::fixed("unused"));
        let pipeline = Pipeline::from_services(
            Arc::new(StubLabels::new(vec![Label::new("Blur", 10.0)])),
            translation.clone(),
            TranslationMode::Joined,
        );

        let response = pipeline.handle(&StubSource::new(b"jpeg")).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, SUCCESS_PREFIX);
        assert!(translation.requests().is_empty());
    }

    #[tokio::test]
    async fn test_handle_image_failure_is_opaque() {
        let pipeline = pipeline(
            StubLabels::new(vec![Label::new("Dog", 91.0)]),
            StubTranslation::fixed("Cachorro"),
        );

        let response = pipeline.handle(&StubSource::missing()).await;
        assert_eq!(response, HttpResponse::internal_error());
        assert!(!response.body.contains("secret"));
    }

    #[tokio::test]
    async fn test_handle_detection_failure_is_opaque() {
        let pipeline = pipeline(
            StubLabels::failing("InvalidImageFormatException"),
            StubTranslation::fixed("Cachorro"),
        );

        let response = pipeline.handle(&StubSource::new(b"jpeg")).await;
        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, "Erro interno");
    }

    #[tokio::test]
    async fn test_handle_translation_failure_is_opaque() {
        let pipeline = pipeline(
            StubLabels::new(vec![Label::new("Dog", 91.0)]),
            StubTranslation::failing("AccessDeniedException"),
        );

        let response = pipeline.handle(&StubSource::new(b"jpeg")).await;
        assert_eq!(response.status_code, 500);
        assert!(!response.body.contains("AccessDenied"));
    }

    #[tokio::test]
    async fn test_handle_fragment_mismatch_fails() {
        let pipeline = pipeline(
            StubLabels::new(vec![Label::new("Cat", 95.0), Label::new("Dog", 90.0)]),
            StubTranslation::fixed("gato, cachorro"),
        );

        let response = pipeline.handle(&StubSource::new(b"jpeg")).await;
        assert_eq!(response, HttpResponse::internal_error());
    }
}
