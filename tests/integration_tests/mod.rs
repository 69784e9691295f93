//! Integration tests module
//!
//! End-to-end tests for the rankwise engine, including:
//! - JSON input → analysis → JSON/Markdown report
//! - Rejected input and error classification

pub mod error_scenarios;
pub mod fixtures;
pub mod report_pipeline;
