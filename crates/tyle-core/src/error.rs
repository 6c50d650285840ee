//! Error types for Tyle
//!
//! Style resolution itself never fails. These errors only surface at the
//! edges: parsing style or weight names, loading font files.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TyleError>;

/// Main error type for Tyle
#[derive(Debug, Error)]
pub enum TyleError {
    #[error("Unknown text style: {0}")]
    UnknownStyle(String),

    #[error("Unknown font weight: {0}")]
    UnknownWeight(String),

    #[error("Flag --{flag} does not apply to style {style}")]
    InvalidFlag { flag: String, style: String },

    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Cannot read font file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid font data")]
    InvalidData,

    #[error("Font file too large: {size} bytes (max: {max} bytes) at {path}")]
    FontTooLarge { path: String, size: u64, max: u64 },
}
