//! Analyze one catalog object and print the JSON risk report.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use neo_risk_analyzer::Analyzer;
use neo_risk_analyzer::config::{AnalyzerConfig, load_config};
use neo_risk_analyzer::report::{AnalysisResult, json::write_json};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Asteroid impact consequence and deflection feasibility report"
)]
struct Cli {
    /// Catalog designation (e.g. "29075" or "2000 SG344")
    designation: String,

    /// Analyzer configuration file (TOML or YAML); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the JSON report (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Default intervention lead time in years
    #[arg(long)]
    lead_years: Option<f64>,

    /// Catalog endpoint URL
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };
    if let Some(years) = cli.lead_years {
        config.mitigation.default_lead_years = years;
    }
    if let Some(endpoint) = cli.endpoint {
        config.catalog.endpoint = endpoint;
    }
    config.validate()?;

    let analyzer = Analyzer::from_config(config)?;
    let result = analyzer.analyze(&cli.designation);
    write_json(&cli.output, &result)
        .with_context(|| format!("failed to write report to {}", cli.output.display()))?;

    if let AnalysisResult::Failure(failure) = &result {
        anyhow::bail!(
            "analysis of '{}' failed at {} stage: {}",
            failure.designation,
            failure.stage,
            failure.message
        );
    }
    Ok(())
}
