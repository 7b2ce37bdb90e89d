//! Image labeler CLI
//!
//! Local execution entry point. For AWS Lambda, use `image-analysis` or
//! `image-analysis-request`.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use image_labeler::{
    config::load_config,
    error::Result,
    pipeline::{HttpResponse, Pipeline},
    services::{
        FileImageSource, ImageSource, UrlImageSource,
        aws::{AmazonTranslate, RekognitionLabels, load_sdk_config},
    },
    utils::{http, parse_image_url},
};

/// Describe an image's contents in Portuguese
#[derive(Parser, Debug)]
#[command(name = "image-labeler", version, about = "Image label detection and translation")]
struct Cli {
    /// Path to a TOML config file (default: ./image-labeler.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Label an image downloaded from a URL
    Url {
        /// Image URL
        image_url: String,
    },

    /// Label a local image file
    File {
        /// Image path (default: source.image_path from config)
        path: Option<PathBuf>,
    },

    /// Validate configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let client = http::create_async_client(&config.http)?;

    let source: Box<dyn ImageSource + '_> = match cli.command {
        Command::Validate => {
            log::info!("✓ Config OK");
            log::debug!("{:?}", config);
            return Ok(());
        }
        Command::Url { image_url } => {
            let url = parse_image_url(&image_url)?;
            Box::new(UrlImageSource::new(
                &client,
                url,
                config.source.body_encoding,
            ))
        }
        Command::File { path } => {
            let path = path.unwrap_or_else(|| config.source.image_path.clone());
            Box::new(FileImageSource::new(path))
        }
    };

    let sdk_config = load_sdk_config().await;
    let pipeline = Pipeline::from_services(
        Arc::new(RekognitionLabels::new(&sdk_config)),
        Arc::new(AmazonTranslate::new(&sdk_config)),
        config.translation.mode,
    );

    match pipeline.run(source.as_ref()).await {
        Ok(analysis) => {
            log::info!(
                "Detected {} labels in {}",
                analysis.labels.len(),
                source.describe()
            );
            println!("{}", HttpResponse::success(&analysis.summary).body);
            Ok(())
        }
        Err(e) => {
            log::error!("Failed at {} stage: {}", e.stage(), e);
            Err(e)
        }
    }
}
