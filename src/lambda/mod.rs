// src/lambda/mod.rs

//! AWS Lambda handlers for the image labeler.
//!
//! Two functions share one [`Pipeline`]:
//! 1. `image-analysis-request` labels the image at `?imageUrl=`
//! 2. `image-analysis` labels the image at the configured local path
//!
//! Both answer with `{ statusCode, body }` and never fail the invocation.

use std::collections::HashMap;
use std::sync::Arc;

use lambda_runtime::{Error as LambdaError, LambdaEvent};

use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::pipeline::{HttpResponse, Pipeline};
use crate::services::aws::{AmazonTranslate, RekognitionLabels, load_sdk_config};
use crate::services::{FileImageSource, UrlImageSource};
use crate::utils::{http, parse_image_url};

/// API Gateway proxy event, reduced to the fields the handlers read.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayRequest {
    /// Query string parameters; `null` when the request had none
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl ApiGatewayRequest {
    /// The `imageUrl` query parameter.
    pub fn image_url(&self) -> Result<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get("imageUrl"))
            .map(String::as_str)
            .ok_or(AppError::MissingImageUrl)
    }
}

/// Process-lifetime state shared by every invocation.
pub struct LambdaState {
    pub config: Config,
    pub pipeline: Pipeline,
    pub client: reqwest::Client,
}

impl LambdaState {
    pub fn new(config: Config, pipeline: Pipeline) -> Result<Self> {
        let client = http::create_async_client(&config.http)?;
        Ok(Self {
            config,
            pipeline,
            client,
        })
    }

    /// Build state from environment configuration and AWS clients.
    pub async fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        let sdk_config = load_sdk_config().await;

        let pipeline = Pipeline::from_services(
            Arc::new(RekognitionLabels::new(&sdk_config)),
            Arc::new(AmazonTranslate::new(&sdk_config)),
            config.translation.mode,
        );

        info!(
            "Initialized pipeline: translation_mode={:?}, body_encoding={:?}",
            config.translation.mode, config.source.body_encoding
        );
        Self::new(config, pipeline)
    }

    /// Label the image referenced by the request's `imageUrl`.
    pub async fn respond_to_url(&self, request: &ApiGatewayRequest) -> HttpResponse {
        let url = match request.image_url().and_then(parse_image_url) {
            Ok(url) => url,
            Err(e) => {
                error!(stage = %e.stage(), "Rejected request: {}", e);
                return HttpResponse::internal_error();
            }
        };

        let source = UrlImageSource::new(&self.client, url, self.config.source.body_encoding);
        self.pipeline.handle(&source).await
    }

    /// Label the configured local image.
    pub async fn respond_to_file(&self) -> HttpResponse {
        let source = FileImageSource::new(&self.config.source.image_path);
        self.pipeline.handle(&source).await
    }
}

/// Handler for the URL variant.
#[instrument(skip(state, event))]
pub async fn handle_url_request(
    state: &LambdaState,
    event: LambdaEvent<ApiGatewayRequest>,
) -> std::result::Result<HttpResponse, LambdaError> {
    let (request, context) = event.into_parts();
    info!("Handling request {}", context.request_id);

    let response = state.respond_to_url(&request).await;
    info!("Responding with status {}", response.status_code);
    Ok(response)
}

/// Handler for the fixed-file variant. The payload is ignored.
#[instrument(skip(state, event))]
pub async fn handle_file_request(
    state: &LambdaState,
    event: LambdaEvent<Value>,
) -> std::result::Result<HttpResponse, LambdaError> {
    let (_payload, context) = event.into_parts();
    info!("Handling request {}", context.request_id);

    let response = state.respond_to_file().await;
    info!("Responding with status {}", response.status_code);
    Ok(response)
}
