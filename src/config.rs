// src/config.rs

//! Configuration loading utilities.

use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::Config;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "image-labeler.toml";

/// Load and validate configuration for local runs.
///
/// An explicit path must load. Without one, `image-labeler.toml` is used
/// when present and defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path).map_err(|e| {
            AppError::config(format!("Failed to load {}: {e}", path.display()))
        })?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Config::load_or_default(DEFAULT_CONFIG_FILE)
        }
        None => Config::default(),
    };

    config
        .validate()
        .map_err(|e| AppError::config(format!("Invalid configuration: {e}")))?;

    Ok(config)
}
