//! AWS Lambda entry point: label the bundled image.
//!
//! The image path comes from `IMAGE_PATH` or `source.image_path` in the
//! file named by `CONFIG_PATH`.

use image_labeler::lambda::{LambdaState, handle_file_request};
use lambda_runtime::{Error as LambdaError, LambdaEvent, service_fn};

use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the AWS Lambda function.
#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Image analysis (file) starting...");
    let state = LambdaState::from_env().await?;
    info!("Reading image from {}", state.config.source.image_path.display());
    let state = &state;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_file_request(state, event).await
    }))
    .await
}
