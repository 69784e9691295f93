//! Configuration management for rankwise
//!
//! This module handles loading and validating configuration from environment variables
//! and TOML files. Reference tables can be partially overridden in a file;
//! anything not mentioned keeps its built-in value.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::i18n::{self, DEFAULT_LOCALE, SUPPORTED_LOCALES};
use crate::models::DuplicatePolicy;
use crate::reference::ReferenceTables;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Analysis configuration
    pub analysis: AnalysisConfig,

    /// Reference tables (CTR curves, weights, thresholds, dictionaries)
    pub reference: ReferenceTables,

    /// Report configuration
    pub report: ReportConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Analysis-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Forecast horizon in months
    pub forecast_months: usize,

    /// Anomaly threshold in standard deviations
    pub anomaly_multiplier: f64,

    /// How duplicate (year, month) entries are merged
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            forecast_months: 6,
            anomaly_multiplier: 2.0,
            duplicate_policy: DuplicatePolicy::Average,
        }
    }
}

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Language for recommendations and report headings (en, ko)
    pub locale: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            locale: String::from(DEFAULT_LOCALE),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

/// Longest accepted forecast horizon
pub const MAX_FORECAST_MONTHS: usize = 36;

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = AnalysisConfig::default();

        let forecast_months = std::env::var("RANKWISE_FORECAST_MONTHS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.forecast_months);

        let anomaly_multiplier = std::env::var("RANKWISE_ANOMALY_MULTIPLIER")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(defaults.anomaly_multiplier);

        let duplicate_policy = match std::env::var("RANKWISE_DUPLICATE_POLICY") {
            Ok(v) => v
                .parse::<DuplicatePolicy>()
                .with_context(|| format!("Invalid RANKWISE_DUPLICATE_POLICY: {v}"))?,
            Err(_) => defaults.duplicate_policy,
        };

        let locale =
            std::env::var("RANKWISE_LANG").unwrap_or_else(|_| String::from(DEFAULT_LOCALE));

        let log_level =
            std::env::var("RANKWISE_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let log_format =
            std::env::var("RANKWISE_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            analysis: AnalysisConfig {
                forecast_months,
                anomaly_multiplier,
                duplicate_policy,
            },
            reference: ReferenceTables::default(),
            report: ReportConfig { locale },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let analysis = &self.analysis;
        if analysis.forecast_months == 0 || analysis.forecast_months > MAX_FORECAST_MONTHS {
            anyhow::bail!("forecast_months must be between 1 and {MAX_FORECAST_MONTHS}");
        }

        if !analysis.anomaly_multiplier.is_finite() || analysis.anomaly_multiplier <= 0.0 {
            anyhow::bail!("anomaly_multiplier must be positive");
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!("log format must be 'text' or 'json'");
        }

        if !i18n::is_supported(&self.report.locale) {
            anyhow::bail!(
                "unsupported locale '{}' (expected one of {})",
                self.report.locale,
                SUPPORTED_LOCALES.join(", ")
            );
        }

        self.validate_reference()
    }

    fn validate_reference(&self) -> Result<()> {
        let tables = &self.reference;

        let ctr_in_range = |curve: &[f64]| curve.iter().all(|c| (0.0..=1.0).contains(c));
        if tables.ctr.desktop.is_empty() || !ctr_in_range(&tables.ctr.desktop) {
            anyhow::bail!("desktop CTR curve must be non-empty with values in [0, 1]");
        }
        if tables.ctr.mobile.is_empty() || !ctr_in_range(&tables.ctr.mobile) {
            anyhow::bail!("mobile CTR curve must be non-empty with values in [0, 1]");
        }

        if tables.difficulty.total() <= 0.0 {
            anyhow::bail!("difficulty weights must sum to a positive value");
        }

        let opportunity = &tables.opportunity;
        if opportunity.medium_threshold > opportunity.high_threshold {
            anyhow::bail!("opportunity medium_threshold must not exceed high_threshold");
        }

        let seasonality = &tables.seasonality;
        if seasonality.low_ratio >= seasonality.peak_ratio {
            anyhow::bail!("seasonality low_ratio must be below peak_ratio");
        }
        let months = seasonality
            .holiday_months
            .iter()
            .chain(&seasonality.back_to_school_months)
            .chain(&seasonality.summer_months)
            .chain(&seasonality.new_year_months);
        for month in months {
            if !(1..=12).contains(month) {
                anyhow::bail!("seasonality month {month} is outside 1-12");
            }
        }

        let forecast = &tables.forecast;
        if forecast.min_confidence > forecast.max_confidence || forecast.max_confidence > 100 {
            anyhow::bail!("forecast confidence bounds must satisfy min <= max <= 100");
        }
        if forecast.growth_window == 0 || forecast.baseline_window == 0 {
            anyhow::bail!("forecast windows must be greater than 0");
        }

        if tables.intent.default_confidence > 100 {
            anyhow::bail!("intent default_confidence must be at most 100");
        }

        Ok(())
    }
}
