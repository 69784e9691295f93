//! Keyword trend analysis over monthly search volumes
//!
//! This module composes the individual analyzers into one report:
//! - Seasonality verdict with peak and low months
//! - Year-over-year growth and volatility
//! - Multi-month forecast with decaying confidence
//! - Spike/drop anomalies
//! - Seasonality pattern and an overall confidence score

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::anomaly::{Anomaly, AnomalyDetector};
use super::forecast::{ForecastGenerator, MonthlyForecast};
use super::growth::GrowthAnalyzer;
use super::seasonality::SeasonalityDetector;
use crate::models::VolumeSeries;
use crate::reference::{ConfidenceWeights, ReferenceTables, SeasonalityTables};
use crate::utils::{clamp_score, normalize_keyword};

/// Shape of a keyword's demand over the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalityPattern {
    /// No meaningful calendar peaks
    Stable,
    /// Peaks in the holiday season
    Holiday,
    /// Peaks around recurring events (back-to-school, many peaks)
    Event,
    /// Peaks driven by weather (summer, new year)
    Weather,
    /// News-driven or trending topic
    Trending,
}

impl SeasonalityPattern {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Holiday => "holiday",
            Self::Event => "event",
            Self::Weather => "weather",
            Self::Trending => "trending",
        }
    }

    /// Classify from keyword text and peak months
    ///
    /// # Classification
    /// 1. No peak months: Stable, regardless of other signals
    /// 2. Keyword contains a trending term ("news", "trend"): Trending
    /// 3. Peaks overlap holiday months: Holiday
    /// 4. Peaks overlap back-to-school months: Event
    /// 5. Peaks overlap summer or new-year months: Weather
    /// 6. At least `event_peak_months` peaks: Event
    /// 7. Otherwise: Stable
    #[must_use]
    pub fn classify(keyword: &str, peak_months: &BTreeSet<u32>, tables: &SeasonalityTables) -> Self {
        if peak_months.is_empty() {
            return Self::Stable;
        }

        let keyword = normalize_keyword(keyword);
        if tables
            .trending_terms
            .iter()
            .any(|term| keyword.contains(term.as_str()))
        {
            return Self::Trending;
        }

        let overlaps = |bucket: &[u32]| bucket.iter().any(|m| peak_months.contains(m));

        if overlaps(&tables.holiday_months) {
            Self::Holiday
        } else if overlaps(&tables.back_to_school_months) {
            Self::Event
        } else if overlaps(&tables.summer_months) || overlaps(&tables.new_year_months) {
            Self::Weather
        } else if peak_months.len() >= tables.event_peak_months {
            Self::Event
        } else {
            Self::Stable
        }
    }
}

impl fmt::Display for SeasonalityPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete trend report for one keyword's volume series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub is_seasonal: bool,
    pub peak_months: BTreeSet<u32>,
    pub low_months: BTreeSet<u32>,
    pub growth_rate_percent: f64,
    pub forecast: Vec<MonthlyForecast>,
    pub seasonality_pattern: SeasonalityPattern,
    /// 0-100
    pub confidence: u8,
    /// 0-100
    pub volatility: u8,
    pub anomalies: Vec<Anomaly>,
    /// Normalized points the analysis was computed from
    pub data_points: usize,
}

/// Trend analysis orchestrator
///
/// Holds only borrowed reference tables, so one analyzer can serve any
/// number of keywords concurrently.
#[derive(Debug, Clone, Copy)]
pub struct TrendAnalyzer<'a> {
    tables: &'a ReferenceTables,
    anomalies: AnomalyDetector,
}

impl<'a> TrendAnalyzer<'a> {
    /// Create a new trend analyzer
    ///
    /// # Arguments
    /// * `tables` - Reference tables supplying every threshold and weight
    #[must_use]
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self {
            tables,
            anomalies: AnomalyDetector::from_tables(&tables.anomaly),
        }
    }

    /// Override the anomaly standard deviation multiplier
    #[must_use]
    pub fn with_anomaly_multiplier(mut self, multiplier: f64) -> Self {
        self.anomalies = self.anomalies.with_multiplier(multiplier);
        self
    }

    /// Analyze one keyword's series
    ///
    /// # Arguments
    /// * `keyword` - Keyword text, used for pattern heuristics
    /// * `series` - Normalized monthly volumes
    /// * `forecast_months` - Forecast horizon
    #[must_use]
    pub fn analyze(&self, keyword: &str, series: &VolumeSeries, forecast_months: usize) -> TrendAnalysis {
        let _span = tracing::debug_span!("trend_analysis", keyword, points = series.len()).entered();

        let seasonality = SeasonalityDetector::new(&self.tables.seasonality).detect(series);

        let growth = GrowthAnalyzer::new(self.tables.forecast.growth_window);
        let growth_rate = growth.growth_rate(series);
        let volatility = growth.volatility(series);

        let forecast = ForecastGenerator::new(&self.tables.forecast).forecast(
            series,
            forecast_months,
            growth_rate,
            &seasonality,
        );

        let anomalies = self.anomalies.detect(series);

        let seasonality_pattern =
            SeasonalityPattern::classify(keyword, &seasonality.peak_months, &self.tables.seasonality);

        let confidence = confidence_score(
            &self.tables.confidence,
            series.len(),
            volatility,
            seasonality.is_seasonal,
        );

        tracing::debug!(
            is_seasonal = seasonality.is_seasonal,
            growth_rate,
            volatility,
            confidence,
            pattern = seasonality_pattern.as_str(),
            "Trend analysis complete"
        );

        TrendAnalysis {
            is_seasonal: seasonality.is_seasonal,
            peak_months: seasonality.peak_months,
            low_months: seasonality.low_months,
            growth_rate_percent: growth_rate,
            forecast,
            seasonality_pattern,
            confidence,
            volatility,
            anomalies,
            data_points: series.len(),
        }
    }
}

/// Overall confidence of a trend analysis, 0-100
///
/// Sum of data depth (`min(len / 24, 1) * 40`), stability
/// (`max(0, 30 - volatility / 3)`), seasonality (20 if seasonal else 10)
/// and a fixed recency bonus of 10, using the default weights.
#[must_use]
pub fn confidence_score(
    weights: &ConfidenceWeights,
    data_points: usize,
    volatility: u8,
    is_seasonal: bool,
) -> u8 {
    let full_depth = weights.full_depth_months.max(1) as f64;
    let depth = (data_points as f64 / full_depth).min(1.0) * weights.depth_points;

    let divisor = if weights.volatility_divisor > 0.0 {
        weights.volatility_divisor
    } else {
        1.0
    };
    let stability = (weights.stability_points - f64::from(volatility) / divisor).max(0.0);

    let seasonal = if is_seasonal {
        weights.seasonal_points
    } else {
        weights.non_seasonal_points
    };

    clamp_score((depth + stability + seasonal + weights.recency_points).round()) as u8
}
