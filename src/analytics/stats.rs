//! Statistics primitives shared by every analyzer
//!
//! All functions are total: empty input yields 0 rather than NaN, and the
//! variance is always the population variance (divide by N).

use statrs::statistics::Statistics;

/// Arithmetic mean, 0 for empty input
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance, 0 for empty input
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().population_variance().max(0.0)
}

/// Population standard deviation, 0 for empty input
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Standard deviation divided by mean
///
/// Returns 0 for empty input or a zero mean.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let mean = mean(values);
    if mean == 0.0 {
        return 0.0;
    }
    std_dev(values) / mean
}
