use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rankwise::config::Config;
use rankwise::error::{Error, ErrorCategory, RankwiseErrorTrait, ReportError, ValidationError};
use rankwise::scoring::DifficultySubScores;

mod commands;

use commands::{OutputFormat, TrafficOptions};

#[derive(Parser)]
#[command(
    name = "rankwise",
    version,
    about = "SEO metrics and forecasting engine for keyword research",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// TOML configuration file (defaults to RANKWISE_* environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze monthly search volume history from a JSON file
    Analyze {
        /// Input JSON file (one keyword object or an array of them)
        input: PathBuf,

        /// Output format (json, markdown)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Directory to write one report file per keyword
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Override forecast horizon in months
        #[arg(long)]
        forecast_months: Option<usize>,
    },

    /// Score the value and opportunity of a keyword
    Value {
        /// Keyword text
        keyword: String,

        /// Monthly search volume
        #[arg(long)]
        volume: f64,

        /// Cost per click
        #[arg(long, default_value = "0")]
        cpc: f64,

        /// Keyword difficulty (0-100)
        #[arg(long)]
        difficulty: f64,

        /// Also estimate traffic at this search result position
        #[arg(long)]
        position: Option<u32>,

        /// Device for the traffic estimate (desktop, mobile)
        #[arg(long, default_value = "desktop")]
        device: String,

        /// SERP features present on the results page
        #[arg(long = "serp-feature")]
        serp_features: Vec<String>,
    },

    /// Classify the search intent of a keyword
    Intent {
        /// Keyword text
        keyword: String,

        /// Cost per click, raises the commercial score
        #[arg(long)]
        cpc: Option<f64>,
    },

    /// Compute composite difficulty from sub-scores (0-100 each)
    Difficulty {
        #[arg(long, default_value = "0")]
        domain_authority: f64,

        #[arg(long, default_value = "0")]
        backlinks: f64,

        #[arg(long, default_value = "0")]
        content_quality: f64,

        #[arg(long, default_value = "0")]
        serp_competition: f64,
    },

    /// Print the active reference tables as TOML
    Tables,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (category, recoverable) = classify_failure(&err);
            eprintln!("{}: {err:#}", category.localized_desc());
            // 2: fixable input, 1: everything else
            ExitCode::from(if recoverable { 2 } else { 1 })
        }
    }
}

/// Category and recoverability of the first crate error in the chain
fn classify_failure(err: &anyhow::Error) -> (ErrorCategory, bool) {
    err.chain().find_map(|cause| {
        let described: &dyn RankwiseErrorTrait = if let Some(e) = cause.downcast_ref::<Error>() {
            e
        } else if let Some(e) = cause.downcast_ref::<ValidationError>() {
            e
        } else if let Some(e) = cause.downcast_ref::<ReportError>() {
            e
        } else {
            return None;
        };
        Some((described.category(), described.is_recoverable()))
    })
    .unwrap_or((ErrorCategory::Other, false))
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).map_err(|e| Error::config(format!("{e:#}")))?,
        None => Config::from_env().map_err(|e| Error::config(format!("{e:#}")))?,
    };
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    if let Commands::Analyze {
        forecast_months: Some(months),
        ..
    } = &cli.command
    {
        config.analysis.forecast_months = *months;
    }
    config
        .validate()
        .map_err(|e| Error::config(format!("{e:#}")))
        .context("Invalid configuration")?;

    rankwise::i18n::set_locale(&config.report.locale);

    // Initialize tracing/logging
    setup_tracing(&config.logging.format, &config.logging.level, cli.verbose)?;

    tracing::debug!(
        forecast_months = config.analysis.forecast_months,
        anomaly_multiplier = config.analysis.anomaly_multiplier,
        duplicate_policy = %config.analysis.duplicate_policy,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Analyze {
            input,
            format,
            output_dir,
            ..
        } => {
            tracing::info!(
                input = %input.display(),
                format = %format,
                output_dir = ?output_dir,
                "Starting analyze command"
            );
            commands::analyze(&config, &input, format.parse::<OutputFormat>()?, output_dir)?;
        }

        Commands::Value {
            keyword,
            volume,
            cpc,
            difficulty,
            position,
            device,
            serp_features,
        } => {
            tracing::info!(keyword = %keyword, volume, cpc, difficulty, "Starting value command");
            let traffic = position.map(|position| TrafficOptions {
                position,
                device,
                serp_features,
            });
            commands::value(&config, keyword, volume, cpc, difficulty, traffic)?;
        }

        Commands::Intent { keyword, cpc } => {
            tracing::info!(keyword = %keyword, cpc = ?cpc, "Starting intent command");
            commands::intent(&config, keyword, cpc)?;
        }

        Commands::Difficulty {
            domain_authority,
            backlinks,
            content_quality,
            serp_competition,
        } => {
            tracing::info!("Starting difficulty command");
            commands::difficulty(
                &config,
                DifficultySubScores {
                    domain_authority,
                    backlinks,
                    content_quality,
                    serp_competition,
                },
            )?;
        }

        Commands::Tables => {
            commands::tables(&config)?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("rankwise=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_new(format!("rankwise={level},warn"))
            .context("Invalid log level")?
    };

    // Logs go to stderr so stdout stays machine-readable
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
