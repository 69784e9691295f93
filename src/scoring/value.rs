//! Keyword value and opportunity scoring
//!
//! Monetary value assumes the keyword ranks first on desktop; the
//! opportunity score blends how easy, how searched and how valuable the
//! keyword is, with weights taken from
//! [`OpportunityTables`](crate::reference::OpportunityTables).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::KeywordAttributes;
use crate::reference::{OpportunityTables, ReferenceTables};
use crate::utils::round_to;

/// Priority tier derived from the opportunity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Tier for a score: high at or above `high_threshold`, medium at or
    /// above `medium_threshold`, otherwise low
    #[must_use]
    pub fn from_score(score: f64, tables: &OpportunityTables) -> Self {
        if score >= tables.high_threshold {
            Self::High
        } else if score >= tables.medium_threshold {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated worth of ranking for a keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordValue {
    /// Clicks times CPC, rounded to cents
    pub monthly_value: f64,
    /// Non-negative blend, 0-200 with the default weights
    pub opportunity_score: f64,
    pub priority: Priority,
    pub estimated_clicks: u64,
}

/// Keyword value and opportunity scorer
#[derive(Debug, Clone, Copy)]
pub struct KeywordScorer<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> KeywordScorer<'a> {
    /// Create a scorer over the given reference tables
    #[must_use]
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Score a keyword
    #[must_use]
    pub fn score(&self, attrs: &KeywordAttributes) -> KeywordValue {
        let ctr = self.tables.ctr.top_desktop();
        let estimated_clicks = (attrs.search_volume * ctr).round().max(0.0) as u64;
        let monthly_value = round_to(estimated_clicks as f64 * attrs.cpc, 2);

        let opportunity_score = self.opportunity_score(
            attrs.keyword_difficulty,
            attrs.search_volume,
            monthly_value,
        );
        let priority = Priority::from_score(opportunity_score, &self.tables.opportunity);

        tracing::debug!(
            keyword = %attrs.keyword,
            estimated_clicks,
            monthly_value,
            opportunity_score,
            priority = priority.as_str(),
            "Keyword scored"
        );

        KeywordValue {
            monthly_value,
            opportunity_score,
            priority,
            estimated_clicks,
        }
    }

    /// Weighted opportunity blend, rounded to one decimal
    ///
    /// Components (each 0-100):
    /// - inverted difficulty: `100 - difficulty`
    /// - volume: `log10(volume + 1) * volume_scale`
    /// - value: `log10(monthly_value + 1) * value_scale`
    #[must_use]
    pub fn opportunity_score(&self, difficulty: f64, search_volume: f64, monthly_value: f64) -> f64 {
        let t = &self.tables.opportunity;

        let ease = (100.0 - difficulty).clamp(0.0, 100.0);
        let volume = log_component(search_volume, t.volume_scale);
        let value = log_component(monthly_value, t.value_scale);

        let score = t.difficulty_weight * ease + t.volume_weight * volume + t.value_weight * value;
        round_to(score.max(0.0), 1)
    }
}

fn log_component(amount: f64, scale: f64) -> f64 {
    ((amount.max(0.0) + 1.0).log10() * scale).clamp(0.0, 100.0)
}
