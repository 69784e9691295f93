//! End-to-end keyword report tests
//!
//! Input JSON → normalization → analysis → report rendering

use rankwise::analytics::SeasonalityPattern;
use rankwise::config::Config;
use rankwise::models::{DuplicatePolicy, KeywordInputs};
use rankwise::report::{KeywordReport, ReportWriter};
use rankwise::scoring::{BuyingStage, SearchIntent};
use std::collections::BTreeSet;
use tempfile::TempDir;

use super::fixtures::{BATCH_INPUT_JSON, HOLIDAY_INPUT_JSON};

fn reports(json: &str, config: &Config) -> Vec<KeywordReport> {
    serde_json::from_str::<KeywordInputs>(json)
        .unwrap()
        .into_vec()
        .iter()
        .map(|input| {
            let series = input.volume_series(config.analysis.duplicate_policy);
            let attrs = input.attributes(&series).unwrap();
            KeywordReport::generate(config, &input.keyword, &series, attrs.as_ref())
        })
        .collect()
}

#[test]
fn test_holiday_keyword_pipeline() {
    let config = Config::default();
    let reports = reports(HOLIDAY_INPUT_JSON, &config);
    assert_eq!(reports.len(), 1);

    let report = &reports[0];
    assert!(report.trend.is_seasonal);
    assert_eq!(report.trend.peak_months, BTreeSet::from([11, 12]));
    assert_eq!(report.trend.seasonality_pattern, SeasonalityPattern::Holiday);
    assert_eq!(report.trend.forecast.len(), 6);
    assert_eq!(
        (report.trend.forecast[0].year, report.trend.forecast[0].month),
        (2024, 1)
    );

    // volume defaults to the latest month
    let value = report.value.as_ref().unwrap();
    assert_eq!(value.estimated_clicks, 158);
}

#[test]
fn test_batch_normalizes_each_keyword() {
    let mut config = Config::default();
    config.analysis.duplicate_policy = DuplicatePolicy::Last;
    let reports = reports(BATCH_INPUT_JSON, &config);
    assert_eq!(reports.len(), 2);

    let buy = &reports[0];
    assert_eq!(buy.trend.data_points, 3);
    assert_eq!(buy.intent.primary, SearchIntent::Transactional);
    assert_eq!(buy.intent.buying_stage, BuyingStage::Decision);
    assert!(buy.value.is_none());

    let guide = &reports[1];
    assert_eq!(guide.trend.data_points, 0);
    assert!(guide.trend.forecast.is_empty());
    assert_eq!(guide.trend.growth_rate_percent, 0.0);
    assert_eq!(guide.intent.primary, SearchIntent::Informational);
}

#[test]
fn test_markdown_report_written() {
    let config = Config::default();
    let report = &reports(HOLIDAY_INPUT_JSON, &config)[0];

    let temp_dir = TempDir::new().unwrap();
    let mut writer = ReportWriter::new(&temp_dir.path().join("reports")).unwrap();
    let path = writer.save(report).unwrap();

    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("christmas lights"));
    assert!(content.contains("holiday"));
    assert!(content.contains("| 2024-01 |"));
}

#[test]
fn test_json_report_round_trip() {
    let config = Config::default();
    let report = reports(HOLIDAY_INPUT_JSON, &config).remove(0);

    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["trend"]["seasonalityPattern"], "holiday");
    assert_eq!(value["trend"]["peakMonths"], serde_json::json!([11, 12]));
    assert_eq!(value["intent"]["primary"], "informational");
    assert_eq!(value["value"]["priority"], "high");
}
