//! Per-keyword reports
//!
//! A [`KeywordReport`] bundles the trend analysis, value estimate and
//! search intent for one keyword. Reports serialize to JSON and render to
//! Markdown through [`ReportWriter`].

pub mod markdown;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::{TrendAnalysis, TrendAnalyzer};
use crate::config::Config;
use crate::models::{KeywordAttributes, VolumeSeries};
use crate::scoring::{IntentAnalysis, IntentClassifier, KeywordScorer, KeywordValue};
use crate::utils::error::ReportError;

pub use markdown::ReportWriter;

/// Complete analysis of one keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    pub keyword: String,
    pub generated_at: DateTime<Utc>,
    pub trend: TrendAnalysis,
    /// Present when keyword attributes were supplied
    pub value: Option<KeywordValue>,
    pub intent: IntentAnalysis,
}

impl KeywordReport {
    /// Run every analysis configured in `config` for one keyword
    ///
    /// # Arguments
    /// * `config` - Forecast horizon, anomaly multiplier, reference tables and
    ///   recommendation locale
    /// * `keyword` - Keyword text
    /// * `series` - Normalized monthly volumes
    /// * `attributes` - Volume, CPC and difficulty; enables value scoring and
    ///   the CPC boost of the commercial score
    #[must_use]
    pub fn generate(
        config: &Config,
        keyword: &str,
        series: &VolumeSeries,
        attributes: Option<&KeywordAttributes>,
    ) -> Self {
        let tables = &config.reference;

        let trend = TrendAnalyzer::new(tables)
            .with_anomaly_multiplier(config.analysis.anomaly_multiplier)
            .analyze(keyword, series, config.analysis.forecast_months);

        let value = attributes.map(|attrs| KeywordScorer::new(tables).score(attrs));
        let intent = IntentClassifier::new(&tables.intent)
            .with_locale(&config.report.locale)
            .classify(keyword, attributes.map(|a| a.cpc));

        Self {
            keyword: keyword.trim().to_string(),
            generated_at: Utc::now(),
            trend,
            value,
            intent,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthlyVolumePoint;
    use crate::scoring::{Priority, SearchIntent};

    fn flat_series() -> VolumeSeries {
        VolumeSeries::from_points(
            (0..24).map(|i| MonthlyVolumePoint::new(2023 + i / 12, (i % 12 + 1) as u32, 1000).unwrap()),
        )
    }

    #[test]
    fn test_generate_with_attributes() {
        let config = Config::default();
        let attrs = KeywordAttributes::new("best running shoes", 10_000.0, 2.5, 20.0).unwrap();
        let report = KeywordReport::generate(&config, " best running shoes ", &flat_series(), Some(&attrs));

        assert_eq!(report.keyword, "best running shoes");
        assert_eq!(report.trend.forecast.len(), config.analysis.forecast_months);
        assert_eq!(report.value.as_ref().map(|v| v.priority), Some(Priority::High));
        assert_eq!(report.intent.primary, SearchIntent::Commercial);
    }

    #[test]
    fn test_generate_without_attributes() {
        let config = Config::default();
        let report = KeywordReport::generate(&config, "tent", &VolumeSeries::default(), None);

        assert!(report.value.is_none());
        assert_eq!(report.trend.data_points, 0);
        assert!(report.trend.forecast.is_empty());
    }

    #[test]
    fn test_generate_uses_configured_locale() {
        let mut config = Config::default();
        config.report.locale = String::from("ko");
        let report = KeywordReport::generate(&config, "how to pitch a tent", &flat_series(), None);

        assert_eq!(report.intent.primary, SearchIntent::Informational);
        assert!(report.intent.recommendation.contains("가이드"));
    }

    #[test]
    fn test_json_uses_camel_case() {
        let config = Config::default();
        let report = KeywordReport::generate(&config, "tent", &flat_series(), None);
        let json = report.to_json().unwrap();

        assert!(json.contains("\"generatedAt\""));
        assert!(json.contains("\"growthRatePercent\""));
        assert!(json.contains("\"buyingStage\""));

        let parsed: KeywordReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
