//! Error types for review sentiment scoring

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Please enter a review to analyze")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, ReviewError>;
