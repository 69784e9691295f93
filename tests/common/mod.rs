//! Common test utilities

use rankwise::models::{KeywordAttributes, MonthlyVolumePoint, VolumeSeries};

/// Build a series of consecutive months starting at January of `start_year`
#[allow(dead_code)]
pub fn monthly_series(start_year: i32, volumes: &[u64]) -> VolumeSeries {
    VolumeSeries::from_points(volumes.iter().enumerate().map(|(i, &v)| {
        MonthlyVolumePoint::new(start_year + (i / 12) as i32, (i % 12 + 1) as u32, v).unwrap()
    }))
}

/// Two years of flat demand
#[allow(dead_code)]
pub fn flat_series() -> VolumeSeries {
    monthly_series(2023, &[1000; 24])
}

/// Two years with a November/December holiday peak
#[allow(dead_code)]
pub fn holiday_series() -> VolumeSeries {
    let year = [100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 400, 500];
    let volumes: Vec<u64> = year.iter().chain(year.iter()).copied().collect();
    monthly_series(2022, &volumes)
}

/// Attributes with a given keyword and typical values
#[allow(dead_code)]
pub fn attributes(keyword: &str) -> KeywordAttributes {
    KeywordAttributes::new(keyword, 10_000.0, 2.5, 20.0).unwrap()
}
