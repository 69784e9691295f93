//! Multi-month search volume forecasting
//!
//! Forecasts compound a monthly growth factor onto a recent baseline and,
//! for seasonal series, scale each month by its historical share of the
//! typical month. Confidence decays by a fixed step per month ahead.

use serde::{Deserialize, Serialize};

use super::seasonality::Seasonality;
use super::stats;
use crate::config::MAX_FORECAST_MONTHS;
use crate::models::VolumeSeries;
use crate::reference::ForecastTables;
use crate::utils::next_month;

/// Direction label attached to every forecast month of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    /// Determine trend direction from a growth rate in percent
    ///
    /// # Classification
    /// - `growth > threshold`: Up
    /// - `growth < -threshold`: Down
    /// - otherwise: Stable
    #[must_use]
    pub fn from_growth(growth_rate: f64, threshold: f64) -> Self {
        if growth_rate > threshold {
            Self::Up
        } else if growth_rate < -threshold {
            Self::Down
        } else {
            Self::Stable
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

/// Predicted volume for one future month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyForecast {
    pub year: i32,
    pub month: u32,
    pub predicted_volume: u64,
    /// 50-90, non-increasing with horizon
    pub confidence: u8,
    pub trend: TrendDirection,
}

/// Forecast generator over the forecast reference table
#[derive(Debug, Clone, Copy)]
pub struct ForecastGenerator<'a> {
    tables: &'a ForecastTables,
}

impl<'a> ForecastGenerator<'a> {
    /// Create a generator over the given parameters
    #[must_use]
    pub fn new(tables: &'a ForecastTables) -> Self {
        Self { tables }
    }

    /// Confidence for a 1-based forecast step
    #[must_use]
    pub fn confidence_at(&self, step: usize) -> u8 {
        let decayed = i64::from(self.tables.max_confidence)
            - i64::from(self.tables.confidence_step) * step as i64;
        decayed.max(i64::from(self.tables.min_confidence)) as u8
    }

    /// Baseline volume: mean of the trailing window (or all points)
    #[must_use]
    pub fn baseline(&self, series: &VolumeSeries) -> f64 {
        let volumes = series.volumes();
        let start = volumes.len().saturating_sub(self.tables.baseline_window);
        stats::mean(&volumes[start..])
    }

    /// Project `months` future values after the last point of `series`
    ///
    /// # Arguments
    /// * `series` - Normalized history
    /// * `months` - Forecast horizon, capped at [`MAX_FORECAST_MONTHS`]
    /// * `growth_rate` - Year-over-year growth in percent
    /// * `seasonality` - Seasonality verdict for the same series
    ///
    /// Returns an empty vector for an empty series.
    #[must_use]
    pub fn forecast(
        &self,
        series: &VolumeSeries,
        months: usize,
        growth_rate: f64,
        seasonality: &Seasonality,
    ) -> Vec<MonthlyForecast> {
        let Some(last) = series.last() else {
            return Vec::new();
        };
        let months = months.min(MAX_FORECAST_MONTHS);

        let baseline = self.baseline(series);
        let growth_factor = 1.0 + growth_rate / 100.0 / 12.0;
        let trend = TrendDirection::from_growth(growth_rate, self.tables.trend_threshold);

        let overall = stats::mean(
            &seasonality
                .monthly_averages
                .values()
                .copied()
                .collect::<Vec<_>>(),
        );

        let mut forecasts = Vec::with_capacity(months);
        let (mut year, mut month) = (last.year, last.month);

        for step in 1..=months {
            (year, month) = next_month(year, month);

            let mut predicted = baseline * growth_factor.powi(step as i32);
            if seasonality.is_seasonal {
                predicted *= seasonal_factor(seasonality, month, overall);
            }

            forecasts.push(MonthlyForecast {
                year,
                month,
                predicted_volume: predicted.max(0.0).round() as u64,
                confidence: self.confidence_at(step),
                trend,
            });
        }

        tracing::debug!(
            months,
            baseline,
            growth_rate,
            trend = trend.as_str(),
            "Forecast generated"
        );

        forecasts
    }
}

fn seasonal_factor(seasonality: &Seasonality, month: u32, overall: f64) -> f64 {
    if overall <= 0.0 {
        return 1.0;
    }
    seasonality
        .monthly_averages
        .get(&month)
        .map(|avg| avg / overall)
        .unwrap_or(1.0)
}
