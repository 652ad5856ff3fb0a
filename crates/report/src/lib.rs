//! Report shaping: merges the consequence and mitigation estimates into the
//! fixed-precision structure handed to callers, plus JSON export helpers.

use chrono::{DateTime, SecondsFormat, Utc};
use neo_impact::ConsequenceAssessment;
use neo_mitigation::MitigationPlan;
use serde::Serialize;

/// Outcome of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisResult {
    Success(AnalysisReport),
    #[serde(rename = "error")]
    Failure(AnalysisFailure),
}

impl AnalysisResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub timestamp: String,
    /// Designation as requested by the caller.
    pub designation: String,
    /// Full catalog name of the object.
    pub name: String,
    pub risk_summary: String,
    pub size_km: String,
    pub eta: String,
    pub energy_mt: String,
    pub impact_severity: ImpactSeverity,
    pub mitigation: MitigationSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactSeverity {
    pub location: Location,
    pub destruction_radius_km: String,
    pub shaking_radius_km: String,
    pub seismic_magnitude_mw: String,
    pub crater_diameter_km: String,
    pub affected_area_km2: String,
    pub estimated_casualties: u64,
    pub economic_cost_usd: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MitigationSummary {
    pub intervention_time_years: String,
    pub required_delta_v_mms: String,
    pub simulated_deflection_km: String,
    pub conclusion: String,
}

/// Failure classes surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    NotFound,
    Transport,
    Parse,
}

impl FailureKind {
    /// Status code an HTTP front-end should answer with.
    pub fn http_status(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Transport | Self::Parse => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisFailure {
    pub timestamp: String,
    pub designation: String,
    pub kind: FailureKind,
    pub stage: String,
    pub message: String,
}

/// Shape a successful analysis. No physics happens here, only rounding.
pub fn assemble(
    designation: &str,
    assessment: &ConsequenceAssessment,
    plan: &MitigationPlan,
    at: DateTime<Utc>,
) -> AnalysisReport {
    AnalysisReport {
        timestamp: timestamp(at),
        designation: designation.to_string(),
        name: assessment.asteroid_name.clone(),
        risk_summary: risk_summary(assessment.ip_cumulative),
        size_km: format!("{:.3}", assessment.diameter_km),
        eta: assessment.eta.label().to_string(),
        energy_mt: format!("{:.3}", assessment.energy_mt),
        impact_severity: ImpactSeverity {
            location: Location {
                lat: assessment.nominal_location.lat,
                lon: assessment.nominal_location.lon,
            },
            destruction_radius_km: format!("{:.2}", assessment.destruction_radius_km),
            shaking_radius_km: format!("{:.2}", assessment.shaking_radius_km),
            seismic_magnitude_mw: format!("{:.2}", assessment.seismic_magnitude_mw),
            crater_diameter_km: format!("{:.2}", assessment.crater_diameter_km),
            affected_area_km2: format!("{:.0}", assessment.affected_area_km2),
            estimated_casualties: assessment.estimated_casualties,
            economic_cost_usd: format!("{:.0}", assessment.economic_cost_usd),
        },
        mitigation: MitigationSummary {
            intervention_time_years: format!("{:.1}", plan.intervention_time_years),
            required_delta_v_mms: format!("{:.2}", plan.required_delta_v_mms),
            simulated_deflection_km: format!("{:.0}", plan.resulting_deflection_km),
            conclusion: plan.outcome.to_string(),
        },
    }
}

/// Shape a failed analysis.
pub fn failure(
    designation: &str,
    kind: FailureKind,
    stage: &str,
    message: impl Into<String>,
    at: DateTime<Utc>,
) -> AnalysisFailure {
    AnalysisFailure {
        timestamp: timestamp(at),
        designation: designation.to_string(),
        kind,
        stage: stage.to_string(),
        message: message.into(),
    }
}

/// Human-readable cumulative probability, e.g. `... 0.0010 (1 in 1000 chance)`.
pub fn risk_summary(ip_cumulative: f64) -> String {
    if ip_cumulative > 0.0 {
        format!(
            "Cumulative Impact Probability: {:.4} (1 in {:.0} chance)",
            ip_cumulative,
            1.0 / ip_cumulative
        )
    } else {
        format!(
            "Cumulative Impact Probability: {:.4} (no recorded chance)",
            ip_cumulative
        )
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub mod json {
    use serde::Serialize;
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Pretty-print `value` as JSON to `path` (`-` for stdout).
    pub fn write_json<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
        let mut writer = writer_for_path(path)?;
        serde_json::to_writer_pretty(&mut writer, value)?;
        writeln!(writer)?;
        writer.flush()
    }
}
