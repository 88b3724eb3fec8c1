//! Error types for drishti-nav

use thiserror::Error;

/// drishti-nav error type
#[derive(Error, Debug)]
pub enum DrishtiError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, DrishtiError>;
