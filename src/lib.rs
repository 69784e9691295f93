//! rankwise - SEO Metrics & Forecasting Engine
//!
//! Pure numeric computations that turn monthly search-volume series and
//! keyword attributes into trend, forecast and opportunity insights.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`reference`] - Reference tables (CTR curves, weights, dictionaries)
//! - [`models`] - Input data model and the ingestion boundary
//! - [`analytics`] - Statistics, seasonality, growth, forecasting, anomalies
//! - [`scoring`] - Keyword value, traffic, difficulty and search intent
//! - [`report`] - Per-keyword report bundling and Markdown rendering
//! - [`config`] - Configuration management and settings
//! - [`utils`] - Common utilities and domain error types
//!
//! # Example
//!
//! ```no_run
//! use rankwise::analytics::TrendAnalyzer;
//! use rankwise::models::{MonthlyVolumePoint, VolumeSeries};
//! use rankwise::reference::ReferenceTables;
//!
//! fn main() -> anyhow::Result<()> {
//!     let points = (1..=12)
//!         .map(|m| MonthlyVolumePoint::new(2024, m, 1000))
//!         .collect::<Result<Vec<_>, _>>()?;
//!     let series = VolumeSeries::from_points(points);
//!
//!     let tables = ReferenceTables::default();
//!     let analyzer = TrendAnalyzer::new(&tables);
//!     let analysis = analyzer.analyze("running shoes", &series, 3);
//!     println!("seasonal: {}", analysis.is_seasonal);
//!     Ok(())
//! }
//! ```

// Initialize rust-i18n at crate root level
rust_i18n::i18n!("locales", fallback = "en");

pub mod analytics;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod reference;
pub mod report;
pub mod scoring;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{TrendAnalysis, TrendAnalyzer};
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, RankwiseErrorTrait, Result};
    pub use crate::models::{DuplicatePolicy, KeywordAttributes, MonthlyVolumePoint, VolumeSeries};
    pub use crate::reference::ReferenceTables;
    pub use crate::report::{KeywordReport, ReportWriter};
    pub use crate::scoring::{IntentAnalysis, IntentClassifier, KeywordScorer, KeywordValue};
}

// Direct re-exports for convenience
pub use models::{KeywordAttributes, MonthlyVolumePoint, VolumeSeries};
