//! Markdown report rendering with Handlebars template engine
//!
//! This module handles rendering keyword reports to Markdown format and
//! saving them to the filesystem.

use handlebars::Handlebars;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::KeywordReport;
use crate::i18n::{normalize_locale, t, DEFAULT_LOCALE};
use crate::utils::error::ReportError;
use crate::utils::{file_stem, month_name, UniqueNames};

/// Default report template
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/keyword_report.hbs");

const TEMPLATE_NAME: &str = "keyword_report";

/// Label keys looked up in the writer's locale
const LABEL_KEYS: [&str; 25] = [
    "title",
    "generated",
    "trend",
    "seasonal",
    "peak_months",
    "low_months",
    "growth",
    "volatility",
    "pattern",
    "confidence",
    "forecast",
    "anomalies",
    "value",
    "intent",
    "buying_stage",
    "commercial_score",
    "recommendation",
    "month",
    "volume",
    "kind",
    "estimated_clicks",
    "monthly_value",
    "opportunity_score",
    "priority",
    "primary_intent",
];

/// Template data for rendering
#[derive(Debug, Serialize)]
struct ReportTemplateData {
    keyword: String,
    generated_at: String,
    labels: BTreeMap<&'static str, String>,
    trend: TrendRow,
    forecast: Vec<ForecastRow>,
    anomalies: Vec<AnomalyRow>,
    value: Option<ValueRow>,
    intent: IntentRow,
}

#[derive(Debug, Serialize)]
struct TrendRow {
    seasonal: String,
    peak_months: String,
    low_months: String,
    growth: String,
    volatility: u8,
    pattern: &'static str,
    confidence: String,
}

#[derive(Debug, Serialize)]
struct ForecastRow {
    period: String,
    volume: u64,
    confidence: String,
    trend: &'static str,
}

#[derive(Debug, Serialize)]
struct AnomalyRow {
    period: String,
    volume: u64,
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct ValueRow {
    estimated_clicks: u64,
    monthly_value: String,
    opportunity_score: String,
    priority: &'static str,
}

#[derive(Debug, Serialize)]
struct IntentRow {
    primary: &'static str,
    confidence: String,
    buying_stage: &'static str,
    commercial_score: u8,
    recommendation: String,
}

impl ReportTemplateData {
    fn new(report: &KeywordReport, locale: &str) -> Self {
        let trend = &report.trend;
        let months = |set: &std::collections::BTreeSet<u32>| {
            if set.is_empty() {
                String::from("-")
            } else {
                set.iter().map(|&m| month_name(m)).collect::<Vec<_>>().join(", ")
            }
        };
        let period = |year: i32, month: u32| format!("{year}-{month:02}");

        Self {
            keyword: report.keyword.clone(),
            generated_at: report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            labels: LABEL_KEYS
                .iter()
                .map(|&key| {
                    let path = format!("report.{key}");
                    (key, t!(path.as_str(), locale = locale).to_string())
                })
                .collect(),
            trend: TrendRow {
                seasonal: if trend.is_seasonal {
                    t!("report.yes", locale = locale).to_string()
                } else {
                    t!("report.no", locale = locale).to_string()
                },
                peak_months: months(&trend.peak_months),
                low_months: months(&trend.low_months),
                growth: format!("{:+.1}%", trend.growth_rate_percent),
                volatility: trend.volatility,
                pattern: trend.seasonality_pattern.as_str(),
                confidence: format!("{}%", trend.confidence),
            },
            forecast: trend
                .forecast
                .iter()
                .map(|f| ForecastRow {
                    period: period(f.year, f.month),
                    volume: f.predicted_volume,
                    confidence: format!("{}%", f.confidence),
                    trend: f.trend.as_str(),
                })
                .collect(),
            anomalies: trend
                .anomalies
                .iter()
                .map(|a| AnomalyRow {
                    period: period(a.year, a.month),
                    volume: a.volume,
                    kind: a.kind.as_str(),
                })
                .collect(),
            value: report.value.as_ref().map(|v| ValueRow {
                estimated_clicks: v.estimated_clicks,
                monthly_value: format!("{:.2}", v.monthly_value),
                opportunity_score: format!("{:.1}", v.opportunity_score),
                priority: v.priority.as_str(),
            }),
            intent: IntentRow {
                primary: report.intent.primary.as_str(),
                confidence: format!("{}%", report.intent.confidence),
                buying_stage: report.intent.buying_stage.as_str(),
                commercial_score: report.intent.commercial_score,
                recommendation: report.intent.recommendation.clone(),
            },
        }
    }
}

/// Markdown report writer with Handlebars template engine
pub struct ReportWriter<'a> {
    /// Handlebars template engine
    handlebars: Handlebars<'a>,

    /// Output directory
    output_dir: PathBuf,

    /// Locale for headings and labels
    locale: &'static str,

    /// File stems already written by this writer
    names: UniqueNames,
}

impl<'a> ReportWriter<'a> {
    /// Create a new ReportWriter with the default template
    ///
    /// # Arguments
    /// * `output_dir` - Directory to save markdown files
    ///
    /// # Example
    /// ```no_run
    /// use rankwise::report::ReportWriter;
    /// use std::path::Path;
    ///
    /// let writer = ReportWriter::new(Path::new("./reports")).unwrap();
    /// ```
    pub fn new(output_dir: &Path) -> Result<Self, ReportError> {
        let mut handlebars = Self::engine();
        handlebars.register_template_string(TEMPLATE_NAME, DEFAULT_TEMPLATE)?;
        Self::with_engine(handlebars, output_dir)
    }

    /// Create a writer that only renders; `save` targets the current directory
    pub fn for_rendering() -> Result<Self, ReportError> {
        let mut handlebars = Self::engine();
        handlebars.register_template_string(TEMPLATE_NAME, DEFAULT_TEMPLATE)?;
        Ok(Self::build(handlebars, PathBuf::from(".")))
    }

    /// Create with custom template file
    ///
    /// # Arguments
    /// * `output_dir` - Directory to save markdown files
    /// * `template_path` - Path to custom Handlebars template
    pub fn with_template(output_dir: &Path, template_path: &Path) -> Result<Self, ReportError> {
        let mut handlebars = Self::engine();
        handlebars.register_template_file(TEMPLATE_NAME, template_path)?;
        Self::with_engine(handlebars, output_dir)
    }

    fn engine() -> Handlebars<'a> {
        let mut handlebars = Handlebars::new();
        // Markdown output, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
    }

    fn with_engine(handlebars: Handlebars<'a>, output_dir: &Path) -> Result<Self, ReportError> {
        fs::create_dir_all(output_dir).map_err(|e| ReportError::write(output_dir, e))?;

        Ok(Self::build(handlebars, output_dir.to_path_buf()))
    }

    fn build(handlebars: Handlebars<'a>, output_dir: PathBuf) -> Self {
        Self {
            handlebars,
            output_dir,
            locale: DEFAULT_LOCALE,
            names: UniqueNames::new(),
        }
    }

    /// Render headings and labels in `locale` (en, ko or a regional variant)
    #[must_use]
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = normalize_locale(locale);
        self
    }

    /// Render report to markdown string
    pub fn render(&self, report: &KeywordReport) -> Result<String, ReportError> {
        let data = ReportTemplateData::new(report, self.locale);
        Ok(self.handlebars.render(TEMPLATE_NAME, &data)?)
    }

    /// Save report to markdown file
    ///
    /// Reports whose keywords sanitize to the same name get a numeric
    /// suffix instead of overwriting each other.
    ///
    /// # Returns
    /// Path to saved file
    pub fn save(&mut self, report: &KeywordReport) -> Result<PathBuf, ReportError> {
        let markdown = self.render(report)?;
        let filename = self.filename(report);
        let filepath = self.output_dir.join(filename);

        let mut file = File::create(&filepath).map_err(|e| ReportError::write(&filepath, e))?;
        file.write_all(markdown.as_bytes())
            .map_err(|e| ReportError::write(&filepath, e))?;

        tracing::debug!(path = %filepath.display(), "Saved keyword report");
        Ok(filepath)
    }

    /// Generate filename for report
    ///
    /// Format: {sanitized_keyword}_{YYYYMMDD}.md
    fn filename(&mut self, report: &KeywordReport) -> String {
        let stem = format!(
            "{}_{}",
            file_stem(&report.keyword),
            report.generated_at.format("%Y%m%d")
        );
        format!("{}.md", self.names.claim(&stem))
    }
}
