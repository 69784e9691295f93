//! Year-over-year growth and volatility
//!
//! Growth compares the most recent 12-month window with the window before
//! it. Volatility is the coefficient of variation of the whole series,
//! expressed as an integer percentage capped at 100.

use super::stats;
use crate::models::VolumeSeries;
use crate::utils::round_to;

/// Growth and volatility analyzer
#[derive(Debug, Clone, Copy)]
pub struct GrowthAnalyzer {
    window: usize,
}

impl Default for GrowthAnalyzer {
    fn default() -> Self {
        Self { window: 12 }
    }
}

impl GrowthAnalyzer {
    /// Create an analyzer with a custom comparison window
    ///
    /// A zero window falls back to 12 months.
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self {
            window: if window == 0 { 12 } else { window },
        }
    }

    /// Year-over-year growth in percent, rounded to one decimal
    ///
    /// Needs at least `window + 1` points; otherwise 0. The previous window
    /// takes up to `window` points immediately before the recent window. A
    /// zero previous average yields 0.
    #[must_use]
    pub fn growth_rate(&self, series: &VolumeSeries) -> f64 {
        let volumes = series.volumes();
        if volumes.len() <= self.window {
            return 0.0;
        }

        let split = volumes.len() - self.window;
        let recent_avg = stats::mean(&volumes[split..]);
        let previous_avg = stats::mean(&volumes[split.saturating_sub(self.window)..split]);

        if previous_avg == 0.0 {
            return 0.0;
        }

        round_to((recent_avg - previous_avg) / previous_avg * 100.0, 1)
    }

    /// Volatility score in [0, 100]
    ///
    /// `min(round(cv * 100), 100)`; 0 with fewer than 2 points or a zero mean.
    #[must_use]
    pub fn volatility(&self, series: &VolumeSeries) -> u8 {
        let volumes = series.volumes();
        if volumes.len() < 2 || stats::mean(&volumes) == 0.0 {
            return 0;
        }

        let score = (stats::coefficient_of_variation(&volumes) * 100.0).round();
        score.clamp(0.0, 100.0) as u8
    }
}
