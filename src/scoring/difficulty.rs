//! Composite keyword difficulty
//!
//! Difficulty is the weighted mean of four 0-100 sub-scores describing how
//! entrenched the current top results are.

use serde::{Deserialize, Serialize};

use crate::reference::DifficultyWeights;
use crate::utils::{clamp_score, round_to};

/// Difficulty inputs, each 0-100 (out-of-range values are clamped)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DifficultySubScores {
    /// Average authority of ranking domains
    pub domain_authority: f64,
    /// Strength of ranking pages' backlink profiles
    pub backlinks: f64,
    /// Depth and quality of ranking content
    pub content_quality: f64,
    /// Crowding from ads and SERP features
    pub serp_competition: f64,
}

/// Weighted difficulty in [0, 100], rounded to one decimal
///
/// Weights are normalized by their sum; all-zero weights give 0.
#[must_use]
pub fn difficulty_score(weights: &DifficultyWeights, sub: &DifficultySubScores) -> f64 {
    let total = weights.total();
    if total <= 0.0 {
        return 0.0;
    }

    let weighted = weights.domain_authority * clamp_score(sub.domain_authority)
        + weights.backlinks * clamp_score(sub.backlinks)
        + weights.content_quality * clamp_score(sub.content_quality)
        + weights.serp_competition * clamp_score(sub.serp_competition);

    round_to(clamp_score(weighted / total), 1)
}
