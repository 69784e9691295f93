//! Seasonality detection over calendar months
//!
//! Volumes are grouped by calendar month across all years, then each month
//! average is compared with the mean of the month averages. Thresholds are
//! strict: a month sitting exactly on the peak or low boundary is neither.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::stats;
use crate::models::VolumeSeries;
use crate::reference::SeasonalityTables;

/// Seasonality verdict for one series
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Seasonality {
    /// Whether the series shows a recurring calendar pattern
    pub is_seasonal: bool,

    /// Calendar months (1-12) well above the typical month
    pub peak_months: BTreeSet<u32>,

    /// Calendar months (1-12) well below the typical month
    pub low_months: BTreeSet<u32>,

    /// Average volume per calendar month across years
    pub monthly_averages: BTreeMap<u32, f64>,

    /// Coefficient of variation across the month averages
    pub coefficient_of_variation: f64,
}

/// Average volume per calendar month across all years present
pub fn monthly_averages(series: &VolumeSeries) -> BTreeMap<u32, f64> {
    let mut buckets: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for point in series.points() {
        buckets
            .entry(point.month)
            .or_default()
            .push(point.search_volume as f64);
    }

    buckets
        .into_iter()
        .map(|(month, volumes)| (month, stats::mean(&volumes)))
        .collect()
}

/// Calendar-month seasonality detector
#[derive(Debug, Clone, Copy)]
pub struct SeasonalityDetector<'a> {
    tables: &'a SeasonalityTables,
}

impl<'a> SeasonalityDetector<'a> {
    /// Create a detector over the given thresholds
    #[must_use]
    pub fn new(tables: &'a SeasonalityTables) -> Self {
        Self { tables }
    }

    /// Detect peak/low months and the seasonal verdict
    ///
    /// Series shorter than `min_points` (12 by default) are never seasonal
    /// and report no peaks or lows.
    #[must_use]
    pub fn detect(&self, series: &VolumeSeries) -> Seasonality {
        if series.len() < self.tables.min_points {
            tracing::debug!(
                points = series.len(),
                required = self.tables.min_points,
                "Insufficient history for seasonality"
            );
            return Seasonality::default();
        }

        let averages = monthly_averages(series);
        let values: Vec<f64> = averages.values().copied().collect();
        let overall = stats::mean(&values);

        let peak_cutoff = overall * self.tables.peak_ratio;
        let low_cutoff = overall * self.tables.low_ratio;

        let peak_months: BTreeSet<u32> = averages
            .iter()
            .filter(|(_, &avg)| avg > peak_cutoff)
            .map(|(&month, _)| month)
            .collect();
        let low_months: BTreeSet<u32> = averages
            .iter()
            .filter(|(_, &avg)| avg < low_cutoff)
            .map(|(&month, _)| month)
            .collect();

        let cv = stats::coefficient_of_variation(&values);
        let is_seasonal =
            peak_months.len() >= self.tables.min_peak_months || cv > self.tables.cv_threshold;

        tracing::debug!(
            peaks = peak_months.len(),
            lows = low_months.len(),
            cv,
            is_seasonal,
            "Seasonality detected"
        );

        Seasonality {
            is_seasonal,
            peak_months,
            low_months,
            monthly_averages: averages,
            coefficient_of_variation: cv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthlyVolumePoint;

    fn series_from(year: i32, volumes: &[u64]) -> VolumeSeries {
        VolumeSeries::from_points(volumes.iter().enumerate().map(|(i, &v)| {
            let offset = i as i32;
            MonthlyVolumePoint::new(year + offset / 12, (offset % 12 + 1) as u32, v).unwrap()
        }))
    }

    #[test]
    fn test_short_series_not_seasonal() {
        let tables = SeasonalityTables::default();
        let detector = SeasonalityDetector::new(&tables);
        let series = series_from(2024, &[100, 5000, 100, 5000, 100, 5000, 100, 5000, 100, 5000, 100]);

        let result = detector.detect(&series);
        assert!(!result.is_seasonal);
        assert!(result.peak_months.is_empty());
        assert!(result.low_months.is_empty());
    }

    #[test]
    fn test_holiday_peaks_detected() {
        let tables = SeasonalityTables::default();
        let detector = SeasonalityDetector::new(&tables);
        let series = series_from(
            2023,
            &[100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 300, 400],
        );

        let result = detector.detect(&series);
        assert!(result.is_seasonal);
        assert_eq!(result.peak_months, BTreeSet::from([11, 12]));
        assert_eq!(result.low_months.len(), 10);
    }

    #[test]
    fn test_months_averaged_across_years() {
        let series = series_from(2022, &[100, 200, 100, 200, 100, 200, 100, 200, 100, 200, 100, 200,
            300, 200, 300, 200, 300, 200, 300, 200, 300, 200, 300, 200]);

        let averages = monthly_averages(&series);
        assert_eq!(averages.len(), 12);
        assert_eq!(averages[&1], 200.0);
        assert_eq!(averages[&2], 200.0);
    }

    #[test]
    fn test_exact_threshold_excluded() {
        // Month averages: 120, 80 and ten at 100 -> mean exactly 100.
        // 120 is not > 120 and 80 is not < 80.
        let tables = SeasonalityTables::default();
        let detector = SeasonalityDetector::new(&tables);
        let series = series_from(
            2024,
            &[120, 80, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100],
        );

        let result = detector.detect(&series);
        assert!(result.peak_months.is_empty());
        assert!(result.low_months.is_empty());
        assert!(!result.is_seasonal);
    }

    #[test]
    fn test_single_peak_with_low_cv_not_seasonal() {
        let tables = SeasonalityTables::default();
        let detector = SeasonalityDetector::new(&tables);
        let series = series_from(
            2024,
            &[100, 100, 100, 100, 100, 100, 150, 100, 100, 100, 100, 100],
        );

        let result = detector.detect(&series);
        assert_eq!(result.peak_months, BTreeSet::from([7]));
        assert!(result.coefficient_of_variation < 0.25);
        assert!(!result.is_seasonal);
    }

    #[test]
    fn test_high_cv_alone_is_seasonal() {
        // One dominant month: only one peak, but dispersion is large
        let tables = SeasonalityTables::default();
        let detector = SeasonalityDetector::new(&tables);
        let series = series_from(2024, &[100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 1000]);

        let result = detector.detect(&series);
        assert_eq!(result.peak_months.len(), 1);
        assert!(result.coefficient_of_variation > 0.25);
        assert!(result.is_seasonal);
    }

    #[test]
    fn test_cv_exactly_at_threshold_not_seasonal() {
        // mean 400, std dev 100: CV is exactly 0.25 with a single peak
        let tables = SeasonalityTables::default();
        let detector = SeasonalityDetector::new(&tables);
        for scale in [1, 100, 1000] {
            let volumes: Vec<u64> = [300, 300, 300, 400, 400, 400, 400, 400, 400, 400, 400, 700]
                .iter()
                .map(|v| v * scale)
                .collect();

            let result = detector.detect(&series_from(2024, &volumes));
            assert_eq!(result.coefficient_of_variation, 0.25);
            assert_eq!(result.peak_months, BTreeSet::from([12]));
            assert!(!result.is_seasonal);
        }
    }
}
