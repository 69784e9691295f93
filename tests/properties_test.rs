//! Property tests for analysis and scoring invariants

mod common;

use proptest::prelude::*;
use rankwise::analytics::{AnomalyDetector, GrowthAnalyzer, SeasonalityDetector, TrendAnalyzer};
use rankwise::models::KeywordAttributes;
use rankwise::reference::ReferenceTables;
use rankwise::scoring::{IntentClassifier, KeywordScorer, Priority};
use rankwise::utils::next_month;

fn volumes(max_len: usize) -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..1_000_000, 0..max_len)
}

proptest! {
    #[test]
    fn short_series_never_seasonal(v in volumes(12)) {
        let tables = ReferenceTables::default();
        let series = common::monthly_series(2020, &v);
        let result = SeasonalityDetector::new(&tables.seasonality).detect(&series);
        prop_assert!(!result.is_seasonal);
        prop_assert!(result.peak_months.is_empty());
    }

    #[test]
    fn growth_needs_thirteen_points(v in volumes(13)) {
        let series = common::monthly_series(2020, &v);
        prop_assert_eq!(GrowthAnalyzer::default().growth_rate(&series), 0.0);
    }

    #[test]
    fn volatility_in_range(v in volumes(48)) {
        let series = common::monthly_series(2020, &v);
        prop_assert!(GrowthAnalyzer::default().volatility(&series) <= 100);
    }

    #[test]
    fn forecast_confidence_decays_to_floor(v in volumes(36), months in 1usize..24) {
        prop_assume!(!v.is_empty());
        let tables = ReferenceTables::default();
        let series = common::monthly_series(2020, &v);
        let analysis = TrendAnalyzer::new(&tables).analyze("kw", &series, months);

        prop_assert_eq!(analysis.forecast.len(), months);
        for (i, f) in analysis.forecast.iter().enumerate() {
            let expected = 90i64 - 10 * (i as i64 + 1);
            prop_assert_eq!(i64::from(f.confidence), expected.max(50));
        }
        prop_assert!(analysis.confidence <= 100);
    }

    #[test]
    fn forecast_months_are_consecutive(v in volumes(30), months in 1usize..30) {
        prop_assume!(!v.is_empty());
        let tables = ReferenceTables::default();
        let series = common::monthly_series(2020, &v);
        let analysis = TrendAnalyzer::new(&tables).analyze("kw", &series, months);

        let last = series.last().unwrap();
        let mut period = (last.year, last.month);
        for f in &analysis.forecast {
            period = next_month(period.0, period.1);
            prop_assert_eq!((f.year, f.month), period);
        }
    }

    #[test]
    fn constant_series_has_no_anomalies(volume in 0u64..1_000_000, len in 0usize..48) {
        let series = common::monthly_series(2020, &vec![volume; len]);
        prop_assert!(AnomalyDetector::default().detect(&series).is_empty());
    }

    #[test]
    fn analysis_is_idempotent(v in volumes(36)) {
        let tables = ReferenceTables::default();
        let series = common::monthly_series(2020, &v);
        let analyzer = TrendAnalyzer::new(&tables);
        prop_assert_eq!(analyzer.analyze("kw", &series, 6), analyzer.analyze("kw", &series, 6));
    }

    #[test]
    fn priority_monotonic_in_score(a in 0.0f64..200.0, b in 0.0f64..200.0) {
        let tables = ReferenceTables::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            Priority::from_score(low, &tables.opportunity) <= Priority::from_score(high, &tables.opportunity)
        );
    }

    #[test]
    fn opportunity_score_non_negative(
        volume in 0.0f64..10_000_000.0,
        cpc in 0.0f64..500.0,
        difficulty in 0.0f64..=100.0,
    ) {
        let tables = ReferenceTables::default();
        let attrs = KeywordAttributes::new("kw", volume, cpc, difficulty).unwrap();
        let value = KeywordScorer::new(&tables).score(&attrs);
        prop_assert!(value.opportunity_score >= 0.0);
        prop_assert!(value.opportunity_score <= 200.0);
        prop_assert!(value.monthly_value >= 0.0);
    }

    #[test]
    fn intent_scores_bounded(keyword in "[a-z ]{1,40}", cpc in prop::option::of(0.0f64..1000.0)) {
        let tables = ReferenceTables::default();
        let analysis = IntentClassifier::new(&tables.intent).classify(&keyword, cpc);
        prop_assert!(analysis.confidence <= 100);
        prop_assert!(analysis.commercial_score <= 100);
    }
}
