//! Unified application error type.
//! Engine, driver, config and cli all return AppError so that a failure in
//! one evaluation stays local and the caller decides what to do with it.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid date/time: {0} (expected YYYY-MM-DD HH:MM[:SS])")]
    InvalidDateTime(String),

    // ---------------------------
    // Schedule configuration
    // ---------------------------
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // ---------------------------
    // Config file errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration from {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration to {0}")]
    ConfigSave(String),

    // ---------------------------
    // Presentation
    // ---------------------------
    #[error("Notification error: {0}")]
    Notify(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
