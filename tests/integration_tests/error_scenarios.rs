//! Error scenario integration tests
//!
//! Tests rejected input at the ingestion boundary:
//! 1. Months outside 1-12
//! 2. Negative volumes
//! 3. Out-of-range difficulty
//! 4. Error classification through the unified error type

use rankwise::error::{Error, ErrorCategory, RankwiseErrorTrait};
use rankwise::models::{DuplicatePolicy, KeywordAttributes, KeywordInput, KeywordInputs, ValidationError};
use rankwise::reference::{Device, ReferenceTables};
use rankwise::scoring::estimate_traffic;

use super::fixtures::{BAD_DIFFICULTY_JSON, INVALID_MONTH_JSON, NEGATIVE_VOLUME_JSON};

// ============================================================================
// Ingestion Tests
// ============================================================================

#[test]
fn test_invalid_month_rejected() {
    let err = serde_json::from_str::<KeywordInput>(INVALID_MONTH_JSON).unwrap_err();
    assert!(err.to_string().contains("13"));

    assert!(serde_json::from_str::<KeywordInputs>(INVALID_MONTH_JSON).is_err());
}

#[test]
fn test_negative_volume_rejected() {
    let err = serde_json::from_str::<KeywordInput>(NEGATIVE_VOLUME_JSON).unwrap_err();
    assert!(err.to_string().contains("search_volume"));
}

#[test]
fn test_bad_difficulty_rejected_when_scoring() {
    let input: KeywordInput = serde_json::from_str(BAD_DIFFICULTY_JSON).unwrap();
    let series = input.volume_series(DuplicatePolicy::Average);

    let err = input.attributes(&series).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::OutOfRange {
            field: "keyword_difficulty",
            ..
        }
    ));
}

#[test]
fn test_attribute_validation() {
    assert_eq!(
        KeywordAttributes::new("   ", 10.0, 1.0, 10.0),
        Err(ValidationError::EmptyKeyword)
    );
    assert!(KeywordAttributes::new("tent", -1.0, 1.0, 10.0).is_err());
    assert!(KeywordAttributes::new("tent", 10.0, f64::NAN, 10.0).is_err());
    assert!(KeywordAttributes::new("tent", 10.0, 1.0, 100.5).is_err());
    assert!(KeywordAttributes::new("tent", 0.0, 0.0, 0.0).is_ok());
}

#[test]
fn test_invalid_position_rejected() {
    let tables = ReferenceTables::default();
    let err = estimate_traffic(&tables, 1000.0, 0, Device::Desktop, &[]).unwrap_err();
    assert_eq!(err, ValidationError::InvalidPosition(0));
}

// ============================================================================
// Error Classification Tests
// ============================================================================

#[test]
fn test_validation_error_classification() {
    let err: Error = ValidationError::InvalidMonth(0).into();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(err.is_recoverable());
    assert!(err.to_string().starts_with("Validation error"));
}

#[test]
fn test_parse_error_classification() {
    let json_err = serde_json::from_str::<KeywordInput>("{").unwrap_err();
    let err: Error = json_err.into();
    assert_eq!(err.category(), ErrorCategory::Parsing);
}
