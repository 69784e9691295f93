use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rankwise::config::Config;
use rankwise::models::KeywordInputs;
use rankwise::report::{KeywordReport, ReportWriter};
use rankwise::utils::{file_stem, UniqueNames};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            other => anyhow::bail!("Unknown output format: {other} (expected json or markdown)"),
        }
    }
}

/// Analyze every keyword in a JSON input file
pub fn analyze(
    config: &Config,
    input: &Path,
    format: OutputFormat,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let inputs = KeywordInputs::from_path(input)
        .with_context(|| format!("Failed to load keyword input: {}", input.display()))?;

    tracing::info!(keywords = inputs.len(), input = %input.display(), "Loaded keyword input");

    let mut reports = Vec::with_capacity(inputs.len());
    for item in &inputs {
        let series = item.volume_series(config.analysis.duplicate_policy);
        let attributes = item
            .attributes(&series)
            .with_context(|| format!("Invalid attributes for keyword '{}'", item.keyword))?;

        let report = KeywordReport::generate(config, &item.keyword, &series, attributes.as_ref());
        tracing::info!(
            keyword = %report.keyword,
            points = report.trend.data_points,
            seasonal = report.trend.is_seasonal,
            confidence = report.trend.confidence,
            "Keyword analyzed"
        );
        reports.push(report);
    }

    match (format, output_dir) {
        (OutputFormat::Json, None) => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        (OutputFormat::Json, Some(dir)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            let mut names = UniqueNames::new();
            for report in &reports {
                let stem = names.claim(&file_stem(&report.keyword));
                let path = dir.join(format!("{stem}.json"));
                std::fs::write(&path, report.to_json()?)
                    .with_context(|| format!("Failed to write report: {}", path.display()))?;
                tracing::info!(path = %path.display(), "Report saved");
            }
        }
        (OutputFormat::Markdown, None) => {
            let writer = ReportWriter::for_rendering()?.with_locale(&config.report.locale);
            for report in &reports {
                println!("{}", writer.render(report)?);
            }
        }
        (OutputFormat::Markdown, Some(dir)) => {
            let mut writer = ReportWriter::new(&dir)?.with_locale(&config.report.locale);
            for report in &reports {
                let path = writer.save(report)?;
                tracing::info!(path = %path.display(), "Report saved");
            }
        }
    }

    Ok(())
}
