// Core input data structures and the ingestion boundary

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;

pub use crate::utils::error::ValidationError;

/// Result type for ingestion-boundary validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// One month of observed search volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawVolumePoint", rename_all = "camelCase")]
pub struct MonthlyVolumePoint {
    pub year: i32,
    pub month: u32, // 1-12
    pub search_volume: u64,
}

/// Unvalidated wire shape of a volume point
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVolumePoint {
    year: i32,
    month: i64,
    #[serde(alias = "search_volume", alias = "volume")]
    search_volume: f64,
}

impl TryFrom<RawVolumePoint> for MonthlyVolumePoint {
    type Error = ValidationError;

    fn try_from(raw: RawVolumePoint) -> Result<Self, Self::Error> {
        let volume = check_non_negative("search_volume", raw.search_volume)?;
        Self::new(raw.year, raw.month, volume.round() as u64)
    }
}

impl MonthlyVolumePoint {
    /// Create a validated point
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidMonth`] when `month` is outside 1-12.
    pub fn new(year: i32, month: impl Into<i64>, search_volume: u64) -> ValidationResult<Self> {
        let month = month.into();
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonth(month));
        }
        Ok(Self {
            year,
            month: month as u32,
            search_volume,
        })
    }

    /// Create a point from a signed volume, rejecting negatives
    pub fn from_signed(year: i32, month: i64, search_volume: i64) -> ValidationResult<Self> {
        if search_volume < 0 {
            return Err(ValidationError::negative("search_volume", search_volume as f64));
        }
        Self::new(year, month, search_volume as u64)
    }

    /// Chronological sort key
    pub fn period(&self) -> (i32, u32) {
        (self.year, self.month)
    }
}

/// How rows sharing the same (year, month) are merged during normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Rounded mean of the duplicate rows
    #[default]
    Average,
    /// Sum of the duplicate rows
    Sum,
    /// Last row in caller order wins
    Last,
}

impl DuplicatePolicy {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Sum => "sum",
            Self::Last => "last",
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "average" | "avg" | "mean" => Ok(Self::Average),
            "sum" => Ok(Self::Sum),
            "last" => Ok(Self::Last),
            other => Err(ValidationError::unknown("duplicate policy", other)),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chronologically ordered monthly search volumes for one keyword
///
/// Construction always normalizes: points are sorted by (year, month) and
/// duplicate months are merged, so every analyzer sees at most one point per
/// calendar month of each year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VolumeSeries {
    points: Vec<MonthlyVolumePoint>,
}

impl VolumeSeries {
    /// Normalize points using the default [`DuplicatePolicy::Average`]
    pub fn from_points(points: impl IntoIterator<Item = MonthlyVolumePoint>) -> Self {
        Self::normalize(points, DuplicatePolicy::default())
    }

    /// Sort points chronologically and merge duplicate months
    pub fn normalize(
        points: impl IntoIterator<Item = MonthlyVolumePoint>,
        policy: DuplicatePolicy,
    ) -> Self {
        let mut grouped: BTreeMap<(i32, u32), Vec<u64>> = BTreeMap::new();
        for point in points {
            grouped.entry(point.period()).or_default().push(point.search_volume);
        }

        let points = grouped
            .into_iter()
            .map(|((year, month), volumes)| MonthlyVolumePoint {
                year,
                month,
                search_volume: merge_volumes(&volumes, policy),
            })
            .collect();

        Self { points }
    }

    /// Normalized points in chronological order
    pub fn points(&self) -> &[MonthlyVolumePoint] {
        &self.points
    }

    /// Volumes as floating point values in chronological order
    pub fn volumes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.search_volume as f64).collect()
    }

    /// Get the number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the series has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent point
    pub fn last(&self) -> Option<&MonthlyVolumePoint> {
        self.points.last()
    }
}

fn merge_volumes(volumes: &[u64], policy: DuplicatePolicy) -> u64 {
    match policy {
        DuplicatePolicy::Average => {
            let total: u128 = volumes.iter().map(|&v| u128::from(v)).sum();
            (total as f64 / volumes.len() as f64).round() as u64
        }
        DuplicatePolicy::Sum => volumes.iter().fold(0u64, |acc, &v| acc.saturating_add(v)),
        DuplicatePolicy::Last => volumes.last().copied().unwrap_or_default(),
    }
}

/// Per-keyword attributes supplied by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawKeywordAttributes", rename_all = "camelCase")]
pub struct KeywordAttributes {
    pub keyword: String,
    pub search_volume: f64,
    pub cpc: f64,
    pub keyword_difficulty: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawKeywordAttributes {
    keyword: String,
    #[serde(alias = "search_volume")]
    search_volume: f64,
    #[serde(default)]
    cpc: f64,
    #[serde(alias = "keyword_difficulty", alias = "difficulty")]
    keyword_difficulty: f64,
}

impl TryFrom<RawKeywordAttributes> for KeywordAttributes {
    type Error = ValidationError;

    fn try_from(raw: RawKeywordAttributes) -> Result<Self, Self::Error> {
        Self::new(raw.keyword, raw.search_volume, raw.cpc, raw.keyword_difficulty)
    }
}

impl KeywordAttributes {
    /// Create validated keyword attributes
    ///
    /// # Errors
    /// Fails on an empty keyword, negative or non-finite volume/CPC, or a
    /// difficulty outside 0-100.
    pub fn new(
        keyword: impl Into<String>,
        search_volume: f64,
        cpc: f64,
        keyword_difficulty: f64,
    ) -> ValidationResult<Self> {
        let keyword = keyword.into();
        if keyword.trim().is_empty() {
            return Err(ValidationError::EmptyKeyword);
        }

        let search_volume = check_non_negative("search_volume", search_volume)?;
        let cpc = check_non_negative("cpc", cpc)?;

        if !keyword_difficulty.is_finite() {
            return Err(ValidationError::NonFinite {
                field: "keyword_difficulty",
            });
        }
        if !(0.0..=100.0).contains(&keyword_difficulty) {
            return Err(ValidationError::out_of_range(
                "keyword_difficulty",
                keyword_difficulty,
                0.0,
                100.0,
            ));
        }

        Ok(Self {
            keyword,
            search_volume,
            cpc,
            keyword_difficulty,
        })
    }
}

/// One keyword's monthly history plus optional attributes, as read from
/// JSON input files
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordInput {
    pub keyword: String,
    #[serde(alias = "points", alias = "history")]
    pub series: Vec<MonthlyVolumePoint>,
    #[serde(default)]
    pub cpc: Option<f64>,
    #[serde(default, alias = "keyword_difficulty", alias = "difficulty")]
    pub keyword_difficulty: Option<f64>,
    /// Current monthly volume; defaults to the latest observed month
    #[serde(default, alias = "search_volume")]
    pub search_volume: Option<f64>,
}

impl KeywordInput {
    /// Normalized history
    #[must_use]
    pub fn volume_series(&self, policy: DuplicatePolicy) -> VolumeSeries {
        VolumeSeries::normalize(self.series.iter().copied(), policy)
    }

    /// Keyword attributes, when a difficulty was supplied
    ///
    /// CPC defaults to 0 and search volume to the latest point of `series`.
    pub fn attributes(&self, series: &VolumeSeries) -> ValidationResult<Option<KeywordAttributes>> {
        let Some(difficulty) = self.keyword_difficulty else {
            return Ok(None);
        };
        let volume = self
            .search_volume
            .or_else(|| series.last().map(|p| p.search_volume as f64))
            .unwrap_or_default();

        KeywordAttributes::new(self.keyword.clone(), volume, self.cpc.unwrap_or_default(), difficulty).map(Some)
    }
}

/// A single keyword input or a batch of them
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum KeywordInputs {
    Many(Vec<KeywordInput>),
    One(KeywordInput),
}

impl KeywordInputs {
    /// Flatten into a list
    #[must_use]
    pub fn into_vec(self) -> Vec<KeywordInput> {
        match self {
            Self::Many(inputs) => inputs,
            Self::One(input) => vec![input],
        }
    }

    /// Parse a keyword input document
    pub fn from_json(content: &str) -> crate::error::Result<Vec<KeywordInput>> {
        let inputs: Self = serde_json::from_str(content)?;
        Ok(inputs.into_vec())
    }

    /// Read and parse a keyword input document from a file
    pub fn from_path(path: &Path) -> crate::error::Result<Vec<KeywordInput>> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_json(&content)
    }
}

fn check_non_negative(field: &'static str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::negative(field, value));
    }
    Ok(value)
}
