//! Error types for the rankwise engine
//!
//! This module defines the domain error types used at the ingestion
//! boundary and by the report writer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when raw input cannot be coerced into the data model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Calendar month outside 1-12
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(i64),

    /// Negative amount where only non-negative values make sense
    #[error("Negative value for {field}: {value}")]
    NegativeValue { field: &'static str, value: f64 },

    /// NaN or infinite amount
    #[error("Non-finite value for {field}")]
    NonFinite { field: &'static str },

    /// Value outside its documented range
    #[error("Value for {field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Keyword text is empty after trimming
    #[error("Keyword must not be empty")]
    EmptyKeyword,

    /// Search result positions start at 1
    #[error("Invalid search result position: {0} (must be >= 1)")]
    InvalidPosition(u32),

    /// Unknown enum label in textual input
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl ValidationError {
    /// Create a non-negative check failure
    pub fn negative(field: &'static str, value: f64) -> Self {
        Self::NegativeValue { field, value }
    }

    /// Create a range check failure
    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// Create an unknown label error
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}

/// Errors that can occur while rendering or saving keyword reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// Template failed to compile
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Template failed to render
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Output could not be written
    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReportError {
    /// Create a write error for a path
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
