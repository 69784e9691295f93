//! Position-based traffic estimation
//!
//! Organic CTR comes from the device curve for the ranking position, then
//! each distinct SERP feature on the page shifts it by its table delta. The
//! adjusted CTR is clamped to [0, 1]. Positions past the end of the curve
//! receive no clicks whatever features are present.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{ValidationError, ValidationResult};
use crate::reference::{Device, ReferenceTables, SerpFeature};

/// Expected organic traffic for a keyword at a given ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficEstimate {
    pub position: u32,
    pub device: Device,
    /// CTR from the position curve alone
    pub base_ctr: f64,
    /// CTR after SERP feature adjustments
    pub ctr: f64,
    pub estimated_clicks: u64,
}

/// Estimate monthly clicks for a ranking position
///
/// # Errors
/// Fails for position 0 or a negative/non-finite search volume.
pub fn estimate_traffic(
    tables: &ReferenceTables,
    search_volume: f64,
    position: u32,
    device: Device,
    features: &[SerpFeature],
) -> ValidationResult<TrafficEstimate> {
    if position == 0 {
        return Err(ValidationError::InvalidPosition(position));
    }
    if !search_volume.is_finite() {
        return Err(ValidationError::NonFinite {
            field: "search_volume",
        });
    }
    if search_volume < 0.0 {
        return Err(ValidationError::negative("search_volume", search_volume));
    }

    let base_ctr = tables.ctr.at(device, position);
    let ctr = if base_ctr > 0.0 {
        let distinct: BTreeSet<SerpFeature> = features.iter().copied().collect();
        let delta: f64 = distinct
            .into_iter()
            .map(|f| tables.serp_features.impact(f))
            .sum();
        (base_ctr + delta).clamp(0.0, 1.0)
    } else {
        0.0
    };

    Ok(TrafficEstimate {
        position,
        device,
        base_ctr,
        ctr,
        estimated_clicks: (search_volume * ctr).round() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_position_desktop() {
        let tables = ReferenceTables::default();
        let estimate = estimate_traffic(&tables, 10_000.0, 1, Device::Desktop, &[]).unwrap();
        assert_eq!(estimate.ctr, 0.316);
        assert_eq!(estimate.estimated_clicks, 3160);
    }

    #[test]
    fn test_mobile_curve_lower() {
        let tables = ReferenceTables::default();
        let desktop = estimate_traffic(&tables, 1_000.0, 3, Device::Desktop, &[]).unwrap();
        let mobile = estimate_traffic(&tables, 1_000.0, 3, Device::Mobile, &[]).unwrap();
        assert!(mobile.estimated_clicks < desktop.estimated_clicks);
    }

    #[test]
    fn test_serp_features_adjust_ctr() {
        let tables = ReferenceTables::default();
        let estimate = estimate_traffic(
            &tables,
            10_000.0,
            1,
            Device::Desktop,
            &[SerpFeature::FeaturedSnippet, SerpFeature::FeaturedSnippet, SerpFeature::TopAds],
        )
        .unwrap();

        // duplicates count once: 0.316 - 0.05 - 0.04
        assert!((estimate.ctr - 0.226).abs() < 1e-9);
        assert_eq!(estimate.estimated_clicks, 2260);
    }

    #[test]
    fn test_ctr_never_negative() {
        let tables = ReferenceTables::default();
        let estimate =
            estimate_traffic(&tables, 1_000.0, 10, Device::Mobile, &SerpFeature::all()).unwrap();
        assert!(estimate.ctr >= 0.0);
    }

    #[test]
    fn test_beyond_first_page_gets_nothing() {
        let tables = ReferenceTables::default();
        let estimate =
            estimate_traffic(&tables, 1_000.0, 15, Device::Desktop, &[SerpFeature::Sitelinks]).unwrap();
        assert_eq!(estimate.ctr, 0.0);
        assert_eq!(estimate.estimated_clicks, 0);
    }

    #[test]
    fn test_invalid_inputs() {
        let tables = ReferenceTables::default();
        assert_eq!(
            estimate_traffic(&tables, 100.0, 0, Device::Desktop, &[]),
            Err(ValidationError::InvalidPosition(0))
        );
        assert!(estimate_traffic(&tables, -1.0, 1, Device::Desktop, &[]).is_err());
    }
}
