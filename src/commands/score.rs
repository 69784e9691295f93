use anyhow::{Context, Result};
use serde::Serialize;

use rankwise::config::Config;
use rankwise::models::KeywordAttributes;
use rankwise::reference::{Device, SerpFeature};
use rankwise::scoring::{
    difficulty_score, estimate_traffic, DifficultySubScores, IntentClassifier, KeywordScorer,
    KeywordValue, TrafficEstimate,
};

/// Ranking scenario for the optional traffic estimate
#[derive(Debug, Clone)]
pub struct TrafficOptions {
    pub position: u32,
    pub device: String,
    pub serp_features: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueOutput {
    keyword: String,
    #[serde(flatten)]
    value: KeywordValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    traffic: Option<TrafficEstimate>,
}

/// Score the value and opportunity of a single keyword
pub fn value(
    config: &Config,
    keyword: String,
    search_volume: f64,
    cpc: f64,
    keyword_difficulty: f64,
    traffic: Option<TrafficOptions>,
) -> Result<()> {
    let attrs = KeywordAttributes::new(keyword, search_volume, cpc, keyword_difficulty)
        .context("Invalid keyword attributes")?;
    let value = KeywordScorer::new(&config.reference).score(&attrs);

    let traffic = traffic
        .map(|opts| -> Result<TrafficEstimate> {
            let device: Device = opts.device.parse()?;
            let features = opts
                .serp_features
                .iter()
                .map(|f| f.parse::<SerpFeature>())
                .collect::<Result<Vec<_>, _>>()?;
            Ok(estimate_traffic(
                &config.reference,
                attrs.search_volume,
                opts.position,
                device,
                &features,
            )?)
        })
        .transpose()
        .context("Invalid traffic scenario")?;

    tracing::info!(
        keyword = %attrs.keyword,
        priority = value.priority.as_str(),
        opportunity_score = value.opportunity_score,
        "Keyword value scored"
    );

    let output = ValueOutput {
        keyword: attrs.keyword,
        value,
        traffic,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Classify the search intent of a single keyword
pub fn intent(config: &Config, keyword: String, cpc: Option<f64>) -> Result<()> {
    if keyword.trim().is_empty() {
        anyhow::bail!("Keyword must not be empty");
    }

    let analysis = IntentClassifier::new(&config.reference.intent)
        .with_locale(&config.report.locale)
        .classify(&keyword, cpc);
    tracing::info!(
        keyword = %keyword,
        intent = analysis.primary.as_str(),
        confidence = analysis.confidence,
        "Keyword intent classified"
    );

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

/// Compute a composite difficulty from sub-scores
pub fn difficulty(config: &Config, sub_scores: DifficultySubScores) -> Result<()> {
    let score = difficulty_score(&config.reference.difficulty, &sub_scores);
    tracing::info!(score, "Keyword difficulty computed");

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "subScores": sub_scores,
            "difficulty": score,
        }))?
    );
    Ok(())
}
