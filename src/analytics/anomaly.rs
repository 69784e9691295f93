//! Standard-deviation anomaly detection
//!
//! A point is anomalous when its distance from the series mean exceeds
//! `std_dev * multiplier`. Points above the mean are spikes, points below
//! are drops.

use serde::{Deserialize, Serialize};

use super::stats;
use crate::models::VolumeSeries;
use crate::reference::AnomalyTables;

/// Anomaly direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    Spike,
    Drop,
}

impl AnomalyKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spike => "spike",
            Self::Drop => "drop",
        }
    }
}

/// A historical point far from the series mean
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub year: i32,
    pub month: u32,
    pub volume: u64,
    #[serde(rename = "type")]
    pub kind: AnomalyKind,
}

/// Anomaly detector
#[derive(Debug, Clone, Copy)]
pub struct AnomalyDetector {
    min_points: usize,
    multiplier: f64,
}

impl Default for AnomalyDetector {
    fn default() -> Self {
        Self::from_tables(&AnomalyTables::default())
    }
}

impl AnomalyDetector {
    /// Create a detector with the table defaults
    #[must_use]
    pub fn from_tables(tables: &AnomalyTables) -> Self {
        Self {
            min_points: tables.min_points,
            multiplier: tables.default_multiplier,
        }
    }

    /// Override the standard deviation multiplier
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Detect anomalies in chronological order
    ///
    /// Returns an empty vector for series shorter than `min_points` (6 by default).
    #[must_use]
    pub fn detect(&self, series: &VolumeSeries) -> Vec<Anomaly> {
        if series.len() < self.min_points {
            return Vec::new();
        }

        let volumes = series.volumes();
        let mean = stats::mean(&volumes);
        let threshold = stats::std_dev(&volumes) * self.multiplier;

        let anomalies: Vec<Anomaly> = series
            .points()
            .iter()
            .filter_map(|point| {
                let volume = point.search_volume as f64;
                if (volume - mean).abs() <= threshold {
                    return None;
                }
                Some(Anomaly {
                    year: point.year,
                    month: point.month,
                    volume: point.search_volume,
                    kind: if volume > mean {
                        AnomalyKind::Spike
                    } else {
                        AnomalyKind::Drop
                    },
                })
            })
            .collect();

        if !anomalies.is_empty() {
            tracing::debug!(count = anomalies.len(), threshold, "Anomalies detected");
        }

        anomalies
    }
}
