//! AWS Lambda entry point: label the image at `?imageUrl=`.
//!
//! Deploy with `cargo lambda build --release --features lambda`.

use image_labeler::lambda::{ApiGatewayRequest, LambdaState, handle_url_request};
use lambda_runtime::{Error as LambdaError, LambdaEvent, service_fn};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the AWS Lambda function.
#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Image analysis (URL) starting...");
    let state = LambdaState::from_env().await?;
    let state = &state;

    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<ApiGatewayRequest>| async move {
            handle_url_request(state, event).await
        },
    ))
    .await
}
