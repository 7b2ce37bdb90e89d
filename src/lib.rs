// src/lib.rs

//! Image labeler library
//!
//! Detects labels in an image with Amazon Rekognition, translates them to
//! Portuguese with Amazon Translate and formats a short summary.

pub mod config;
pub mod error;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
