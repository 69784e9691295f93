//! Test fixtures for integration tests
//!
//! Provides sample keyword input documents

/// Single seasonal keyword with attributes
pub const HOLIDAY_INPUT_JSON: &str = r#"{
    "keyword": "christmas lights",
    "cpc": 1.2,
    "difficulty": 35,
    "series": [
        {"year": 2022, "month": 1, "searchVolume": 100},
        {"year": 2022, "month": 2, "searchVolume": 100},
        {"year": 2022, "month": 3, "searchVolume": 100},
        {"year": 2022, "month": 4, "searchVolume": 100},
        {"year": 2022, "month": 5, "searchVolume": 100},
        {"year": 2022, "month": 6, "searchVolume": 100},
        {"year": 2022, "month": 7, "searchVolume": 100},
        {"year": 2022, "month": 8, "searchVolume": 100},
        {"year": 2022, "month": 9, "searchVolume": 100},
        {"year": 2022, "month": 10, "searchVolume": 100},
        {"year": 2022, "month": 11, "searchVolume": 400},
        {"year": 2022, "month": 12, "searchVolume": 500},
        {"year": 2023, "month": 1, "searchVolume": 100},
        {"year": 2023, "month": 2, "searchVolume": 100},
        {"year": 2023, "month": 3, "searchVolume": 100},
        {"year": 2023, "month": 4, "searchVolume": 100},
        {"year": 2023, "month": 5, "searchVolume": 100},
        {"year": 2023, "month": 6, "searchVolume": 100},
        {"year": 2023, "month": 7, "searchVolume": 100},
        {"year": 2023, "month": 8, "searchVolume": 100},
        {"year": 2023, "month": 9, "searchVolume": 100},
        {"year": 2023, "month": 10, "searchVolume": 100},
        {"year": 2023, "month": 11, "searchVolume": 400},
        {"year": 2023, "month": 12, "searchVolume": 500}
    ]
}"#;

/// Batch with unordered and duplicated months
pub const BATCH_INPUT_JSON: &str = r#"[
    {
        "keyword": "buy tent",
        "series": [
            {"year": 2024, "month": 3, "searchVolume": 300},
            {"year": 2024, "month": 1, "searchVolume": 100},
            {"year": 2024, "month": 1, "searchVolume": 301},
            {"year": 2024, "month": 2, "volume": 200}
        ]
    },
    {
        "keyword": "how to pitch a tent",
        "points": []
    }
]"#;

/// Month outside 1-12
pub const INVALID_MONTH_JSON: &str = r#"{
    "keyword": "tent",
    "series": [{"year": 2024, "month": 13, "searchVolume": 10}]
}"#;

/// Negative search volume
pub const NEGATIVE_VOLUME_JSON: &str = r#"{
    "keyword": "tent",
    "series": [{"year": 2024, "month": 1, "searchVolume": -5}]
}"#;

/// Difficulty above 100
pub const BAD_DIFFICULTY_JSON: &str = r#"{
    "keyword": "tent",
    "difficulty": 140,
    "series": [{"year": 2024, "month": 1, "searchVolume": 10}]
}"#;
