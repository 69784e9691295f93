//! Unified error handling for the rankwise crate
//!
//! This module provides a unified error type that consolidates all domain-specific
//! errors into a single `Error` enum, while maintaining the ability to use
//! domain-specific errors when needed.
//!
//! # Architecture
//!
//! - [`RankwiseErrorTrait`] - Common interface implemented by all error types
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum wrapping all domain-specific errors
//!
//! # Usage
//!
//! ```rust,ignore
//! use rankwise::error::{Error, RankwiseErrorTrait};
//!
//! fn handle_error(err: Error) {
//!     if err.is_recoverable() {
//!         eprintln!("Retry with corrected input: {}", err.localized_desc());
//!     } else {
//!         eprintln!("Fatal error: {}", err);
//!     }
//! }
//! ```

use std::io;
use thiserror::Error;

use crate::i18n::t;

// Re-export domain-specific errors for convenience
pub use crate::utils::error::{ReportError, ValidationError};

/// Common trait for all rankwise error types
pub trait RankwiseErrorTrait: std::error::Error {
    /// Check if this error is recoverable (fixable by correcting the input)
    fn is_recoverable(&self) -> bool;

    /// Get localized description for user-facing messages
    fn localized_desc(&self) -> String;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Rejected input values
    Validation,
    /// Malformed input documents
    Parsing,
    /// Configuration errors
    Config,
    /// Report rendering errors
    Report,
    /// File system errors
    Io,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    /// Get localized description for the category
    pub fn localized_desc(&self) -> String {
        match self {
            Self::Validation => t!("errors.category.validation").to_string(),
            Self::Parsing => t!("errors.category.parsing").to_string(),
            Self::Config => t!("errors.category.config").to_string(),
            Self::Report => t!("errors.category.report").to_string(),
            Self::Io => t!("errors.category.io").to_string(),
            Self::Other => t!("errors.category.other").to_string(),
        }
    }
}

impl RankwiseErrorTrait for ValidationError {
    fn is_recoverable(&self) -> bool {
        true
    }

    fn localized_desc(&self) -> String {
        format!("{}: {self}", t!("errors.validation.error"))
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

impl RankwiseErrorTrait for ReportError {
    fn is_recoverable(&self) -> bool {
        matches!(self, Self::Write { .. })
    }

    fn localized_desc(&self) -> String {
        format!("{}: {self}", t!("errors.report.error"))
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Write { .. } => ErrorCategory::Io,
            _ => ErrorCategory::Report,
        }
    }
}

/// Unified error type for the rankwise crate
#[derive(Error, Debug)]
pub enum Error {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Report rendering and writing errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Failure carried in from an `anyhow` chain
    #[error("{context}")]
    Other { context: String },
}

impl RankwiseErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Validation(e) => e.is_recoverable(),
            Self::Report(e) => e.is_recoverable(),
            Self::Io(_) => true,
            Self::Json(_) | Self::Toml(_) => true,
            Self::Config(_) => false,
            Self::Other { .. } => false,
        }
    }

    fn localized_desc(&self) -> String {
        match self {
            Self::Validation(e) => e.localized_desc(),
            Self::Report(e) => e.localized_desc(),
            Self::Io(e) => format!("{}: {e}", t!("errors.io.error")),
            Self::Json(e) => format!("{}: {e}", t!("errors.json.error")),
            Self::Toml(e) => format!("{}: {e}", t!("errors.toml.error")),
            Self::Config(msg) => format!("{}: {msg}", t!("errors.config.error")),
            Self::Other { context, .. } => context.clone(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(e) => e.category(),
            Self::Report(e) => e.category(),
            Self::Io(_) => ErrorCategory::Io,
            Self::Json(_) | Self::Toml(_) => ErrorCategory::Parsing,
            Self::Config(_) => ErrorCategory::Config,
            Self::Other { .. } => ErrorCategory::Other,
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

}

// Conversion from anyhow::Error
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            context: format!("{err:#}"),
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
