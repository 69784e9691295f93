//! Reference tables for the metrics engine
//!
//! Every weight, threshold and lookup curve used by the analyzers lives in
//! [`ReferenceTables`]. The default value carries the built-in tables; a TOML
//! file may override any subset of them (all sections use `serde(default)`).
//!
//! Analyzers borrow the tables they need, so swapping a weighting scheme never
//! touches the algorithms.

pub mod dictionaries;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::ValidationError;

pub use dictionaries::IntentTables;

/// Complete set of reference data injected into each analyzer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceTables {
    /// Click-through-rate curves by result position
    pub ctr: CtrCurves,

    /// CTR deltas applied when SERP features are present
    pub serp_features: SerpFeatureImpacts,

    /// Keyword difficulty sub-score weights
    pub difficulty: DifficultyWeights,

    /// Opportunity score blend and priority thresholds
    pub opportunity: OpportunityTables,

    /// Seasonality thresholds and calendar groupings
    pub seasonality: SeasonalityTables,

    /// Growth, volatility and forecast parameters
    pub forecast: ForecastTables,

    /// Anomaly detection parameters
    pub anomaly: AnomalyTables,

    /// Trend confidence weights
    pub confidence: ConfidenceWeights,

    /// Intent and buying-stage dictionaries
    pub intent: IntentTables,
}

// ============================================================================
// CTR
// ============================================================================

/// Device class for CTR lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Desktop,
    Mobile,
}

impl Device {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

impl FromStr for Device {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(ValidationError::unknown("device", other)),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Organic CTR by position (index 0 = position 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtrCurves {
    pub desktop: Vec<f64>,
    pub mobile: Vec<f64>,
}

impl Default for CtrCurves {
    fn default() -> Self {
        Self {
            desktop: vec![0.316, 0.158, 0.100, 0.070, 0.053, 0.040, 0.032, 0.026, 0.022, 0.019],
            mobile: vec![0.266, 0.148, 0.093, 0.066, 0.050, 0.038, 0.030, 0.024, 0.020, 0.017],
        }
    }
}

impl CtrCurves {
    /// CTR at a 1-based position; positions past the curve get 0
    pub fn at(&self, device: Device, position: u32) -> f64 {
        let curve = match device {
            Device::Desktop => &self.desktop,
            Device::Mobile => &self.mobile,
        };
        position
            .checked_sub(1)
            .and_then(|idx| curve.get(idx as usize))
            .copied()
            .unwrap_or(0.0)
    }

    /// Desktop CTR at position 1
    pub fn top_desktop(&self) -> f64 {
        self.at(Device::Desktop, 1)
    }
}

/// SERP features that shift organic CTR
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SerpFeature {
    FeaturedSnippet,
    PeopleAlsoAsk,
    LocalPack,
    ShoppingResults,
    VideoCarousel,
    KnowledgePanel,
    ImagePack,
    TopAds,
    Sitelinks,
}

impl SerpFeature {
    /// Get all features
    pub fn all() -> Vec<Self> {
        vec![
            Self::FeaturedSnippet,
            Self::PeopleAlsoAsk,
            Self::LocalPack,
            Self::ShoppingResults,
            Self::VideoCarousel,
            Self::KnowledgePanel,
            Self::ImagePack,
            Self::TopAds,
            Self::Sitelinks,
        ]
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FeaturedSnippet => "featured_snippet",
            Self::PeopleAlsoAsk => "people_also_ask",
            Self::LocalPack => "local_pack",
            Self::ShoppingResults => "shopping_results",
            Self::VideoCarousel => "video_carousel",
            Self::KnowledgePanel => "knowledge_panel",
            Self::ImagePack => "image_pack",
            Self::TopAds => "top_ads",
            Self::Sitelinks => "sitelinks",
        }
    }
}

impl FromStr for SerpFeature {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::all()
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| ValidationError::unknown("SERP feature", s))
    }
}

/// Absolute CTR deltas per SERP feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerpFeatureImpacts {
    pub featured_snippet: f64,
    pub people_also_ask: f64,
    pub local_pack: f64,
    pub shopping_results: f64,
    pub video_carousel: f64,
    pub knowledge_panel: f64,
    pub image_pack: f64,
    pub top_ads: f64,
    pub sitelinks: f64,
}

impl Default for SerpFeatureImpacts {
    fn default() -> Self {
        Self {
            featured_snippet: -0.05,
            people_also_ask: -0.02,
            local_pack: -0.04,
            shopping_results: -0.03,
            video_carousel: -0.02,
            knowledge_panel: -0.03,
            image_pack: -0.01,
            top_ads: -0.04,
            sitelinks: 0.05,
        }
    }
}

impl SerpFeatureImpacts {
    /// CTR delta for one feature
    pub fn impact(&self, feature: SerpFeature) -> f64 {
        match feature {
            SerpFeature::FeaturedSnippet => self.featured_snippet,
            SerpFeature::PeopleAlsoAsk => self.people_also_ask,
            SerpFeature::LocalPack => self.local_pack,
            SerpFeature::ShoppingResults => self.shopping_results,
            SerpFeature::VideoCarousel => self.video_carousel,
            SerpFeature::KnowledgePanel => self.knowledge_panel,
            SerpFeature::ImagePack => self.image_pack,
            SerpFeature::TopAds => self.top_ads,
            SerpFeature::Sitelinks => self.sitelinks,
        }
    }
}

// ============================================================================
// Scoring weights
// ============================================================================

/// Weights of the keyword difficulty sub-scores (each sub-score is 0-100)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyWeights {
    pub domain_authority: f64,
    pub backlinks: f64,
    pub content_quality: f64,
    pub serp_competition: f64,
}

impl Default for DifficultyWeights {
    fn default() -> Self {
        Self {
            domain_authority: 0.40,
            backlinks: 0.30,
            content_quality: 0.20,
            serp_competition: 0.10,
        }
    }
}

impl DifficultyWeights {
    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.domain_authority + self.backlinks + self.content_quality + self.serp_competition
    }
}

/// Opportunity score blend
///
/// Each component is scaled to 0-100 before weighting:
/// - difficulty: `100 - keyword_difficulty`
/// - volume: `log10(volume + 1) * volume_scale`, capped at 100
/// - value: `log10(monthly_value + 1) * value_scale`, capped at 100
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpportunityTables {
    pub difficulty_weight: f64,
    pub volume_weight: f64,
    pub value_weight: f64,
    pub volume_scale: f64,
    pub value_scale: f64,
    pub high_threshold: f64,
    pub medium_threshold: f64,
}

impl Default for OpportunityTables {
    fn default() -> Self {
        Self {
            difficulty_weight: 0.6,
            volume_weight: 0.5,
            value_weight: 0.9,
            volume_scale: 25.0,
            value_scale: 25.0,
            high_threshold: 100.0,
            medium_threshold: 50.0,
        }
    }
}

// ============================================================================
// Time-series parameters
// ============================================================================

/// Seasonality thresholds and calendar buckets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalityTables {
    /// Minimum series length for a seasonal verdict
    pub min_points: usize,
    /// Month average above `mean * peak_ratio` is a peak
    pub peak_ratio: f64,
    /// Month average below `mean * low_ratio` is a low
    pub low_ratio: f64,
    /// CV across month averages above this is seasonal
    pub cv_threshold: f64,
    /// This many peaks or more is seasonal
    pub min_peak_months: usize,
    /// This many peaks or more is an event pattern
    pub event_peak_months: usize,
    pub holiday_months: Vec<u32>,
    pub back_to_school_months: Vec<u32>,
    pub summer_months: Vec<u32>,
    pub new_year_months: Vec<u32>,
    /// Keyword substrings that mark a trending topic
    pub trending_terms: Vec<String>,
}

impl Default for SeasonalityTables {
    fn default() -> Self {
        Self {
            min_points: 12,
            peak_ratio: 1.20,
            low_ratio: 0.80,
            cv_threshold: 0.25,
            min_peak_months: 2,
            event_peak_months: 3,
            holiday_months: vec![11, 12],
            back_to_school_months: vec![8, 9],
            summer_months: vec![6, 7, 8],
            new_year_months: vec![1],
            trending_terms: vec!["news".to_string(), "trend".to_string()],
        }
    }
}

/// Growth, volatility and forecast parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastTables {
    /// Months per growth comparison window
    pub growth_window: usize,
    /// Trailing points averaged into the forecast baseline
    pub baseline_window: usize,
    /// Growth percent above which the trend is `up` (below the negative, `down`)
    pub trend_threshold: f64,
    pub max_confidence: u8,
    pub confidence_step: u8,
    pub min_confidence: u8,
}

impl Default for ForecastTables {
    fn default() -> Self {
        Self {
            growth_window: 12,
            baseline_window: 6,
            trend_threshold: 5.0,
            max_confidence: 90,
            confidence_step: 10,
            min_confidence: 50,
        }
    }
}

/// Anomaly detection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyTables {
    pub min_points: usize,
    pub default_multiplier: f64,
}

impl Default for AnomalyTables {
    fn default() -> Self {
        Self {
            min_points: 6,
            default_multiplier: 2.0,
        }
    }
}

/// Weights of the trend analysis confidence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceWeights {
    /// Points for full data depth
    pub depth_points: f64,
    /// Series length that earns full depth points
    pub full_depth_months: usize,
    /// Points for zero volatility
    pub stability_points: f64,
    /// Volatility divisor for the stability penalty
    pub volatility_divisor: f64,
    pub seasonal_points: f64,
    pub non_seasonal_points: f64,
    pub recency_points: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            depth_points: 40.0,
            full_depth_months: 24,
            stability_points: 30.0,
            volatility_divisor: 3.0,
            seasonal_points: 20.0,
            non_seasonal_points: 10.0,
            recency_points: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctr_lookup() {
        let ctr = CtrCurves::default();
        assert_eq!(ctr.top_desktop(), 0.316);
        assert_eq!(ctr.at(Device::Mobile, 1), 0.266);
        assert_eq!(ctr.at(Device::Desktop, 0), 0.0);
        assert_eq!(ctr.at(Device::Desktop, 11), 0.0);
    }

    #[test]
    fn test_ctr_curves_decrease_with_position() {
        let ctr = CtrCurves::default();
        for curve in [&ctr.desktop, &ctr.mobile] {
            assert!(curve.windows(2).all(|w| w[0] > w[1]));
        }
    }

    #[test]
    fn test_serp_feature_parse() {
        assert_eq!("featured-snippet".parse::<SerpFeature>().unwrap(), SerpFeature::FeaturedSnippet);
        assert_eq!("Local Pack".parse::<SerpFeature>().unwrap(), SerpFeature::LocalPack);
        assert!("carousel".parse::<SerpFeature>().is_err());
    }

    #[test]
    fn test_difficulty_weights_sum_to_one() {
        assert!((DifficultyWeights::default().total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_toml_override() {
        let tables: ReferenceTables = toml::from_str(
            r#"
            [opportunity]
            high_threshold = 120.0

            [seasonality]
            holiday_months = [12]
            "#,
        )
        .unwrap();

        assert_eq!(tables.opportunity.high_threshold, 120.0);
        assert_eq!(tables.opportunity.medium_threshold, 50.0);
        assert_eq!(tables.seasonality.holiday_months, vec![12]);
        assert_eq!(tables.seasonality.peak_ratio, 1.20);
        assert_eq!(tables.ctr, CtrCurves::default());
    }

    #[test]
    fn test_tables_roundtrip_through_toml() {
        let tables = ReferenceTables::default();
        let text = toml::to_string(&tables).unwrap();
        let restored: ReferenceTables = toml::from_str(&text).unwrap();
        assert_eq!(tables, restored);
    }
}
