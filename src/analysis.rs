//! End-to-end pipeline: fetch, assess, plan, assemble.

use chrono::{DateTime, Utc};
use neo_catalog::{
    CatalogError, CatalogFetcher, CatalogResponse, CatalogTransport, HttpTransport, Sleeper,
    ThreadSleeper,
};
use neo_config::AnalyzerConfig;
use neo_impact::{AssessmentError, ConsequenceAssessment};
use neo_mitigation::MitigationPlan;
use neo_report::{AnalysisResult, FailureKind};
use thiserror::Error;
use tracing::{info, warn};

/// Why an analysis stopped early.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("catalog lookup for '{designation}' failed: {source}")]
    Catalog {
        designation: String,
        source: CatalogError,
    },
    #[error("catalog has no record for '{designation}': {message}")]
    NotFound {
        designation: String,
        message: String,
    },
    #[error("could not assess '{designation}': {source}")]
    Assessment {
        designation: String,
        source: AssessmentError,
    },
}

impl AnalysisError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Catalog { source, .. } if source.is_decode() => FailureKind::Parse,
            Self::Catalog { .. } => FailureKind::Transport,
            Self::NotFound { .. } => FailureKind::NotFound,
            Self::Assessment { .. } => FailureKind::Parse,
        }
    }

    /// Pipeline stage that produced the error.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Catalog { .. } | Self::NotFound { .. } => "fetch",
            Self::Assessment { .. } => "assess",
        }
    }
}

/// Stateless analysis pipeline; one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Analyzer<T = HttpTransport, S = ThreadSleeper> {
    fetcher: CatalogFetcher<T, S>,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Production analyzer talking to the configured catalog endpoint.
    pub fn from_config(config: AnalyzerConfig) -> Result<Self, CatalogError> {
        let fetcher = CatalogFetcher::from_config(&config.catalog)?;
        Ok(Self { fetcher, config })
    }
}

impl<T: CatalogTransport, S: Sleeper> Analyzer<T, S> {
    pub fn new(fetcher: CatalogFetcher<T, S>, config: AnalyzerConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &CatalogFetcher<T, S> {
        &self.fetcher
    }

    /// Run fetch, assessment and planning, stopping at the first failing stage.
    pub fn run(
        &self,
        designation: &str,
        now: DateTime<Utc>,
    ) -> Result<(ConsequenceAssessment, MitigationPlan), AnalysisError> {
        let record = match self.fetcher.fetch(designation) {
            Ok(CatalogResponse::Found(record)) => record,
            Ok(CatalogResponse::NotFound { message }) => {
                return Err(AnalysisError::NotFound {
                    designation: designation.to_string(),
                    message,
                });
            }
            Err(source) => {
                return Err(AnalysisError::Catalog {
                    designation: designation.to_string(),
                    source,
                });
            }
        };

        let assessment = neo_impact::assess(&record, designation, &self.config.physics)
            .map_err(|source| AnalysisError::Assessment {
                designation: designation.to_string(),
                source,
            })?;

        let plan = neo_mitigation::plan(
            &assessment,
            now.naive_utc(),
            self.config.mitigation.default_lead_years,
        );
        Ok((assessment, plan))
    }

    /// Analyze `designation` as of `now`, folding any failure into the result.
    pub fn analyze_at(&self, designation: &str, now: DateTime<Utc>) -> AnalysisResult {
        match self.run(designation, now) {
            Ok((assessment, plan)) => {
                info!(
                    designation,
                    name = %assessment.asteroid_name,
                    conclusion = %plan.outcome,
                    "analysis complete"
                );
                AnalysisResult::Success(neo_report::assemble(
                    designation,
                    &assessment,
                    &plan,
                    now,
                ))
            }
            Err(err) => {
                warn!(designation, stage = err.stage(), error = %err, "analysis failed");
                AnalysisResult::Failure(neo_report::failure(
                    designation,
                    err.kind(),
                    err.stage(),
                    err.to_string(),
                    now,
                ))
            }
        }
    }

    pub fn analyze(&self, designation: &str) -> AnalysisResult {
        self.analyze_at(designation, Utc::now())
    }
}

/// Analyze `designation` against the public catalog with default settings.
pub fn analyze(designation: &str) -> AnalysisResult {
    match Analyzer::from_config(AnalyzerConfig::default()) {
        Ok(analyzer) => analyzer.analyze(designation),
        Err(err) => AnalysisResult::Failure(neo_report::failure(
            designation,
            FailureKind::Transport,
            "fetch",
            err.to_string(),
            Utc::now(),
        )),
    }
}
