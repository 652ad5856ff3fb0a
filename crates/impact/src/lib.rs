//! Consequence model: turns a catalog record into airblast, seismic and crater estimates.

pub mod eta;
pub mod scaling;

use neo_catalog::{RawApproach, RawObjectRecord};
use neo_config::{LocationConfig, PhysicsConfig};
use neo_core::units::joules_to_mt;
use thiserror::Error;
use tracing::debug;

pub use eta::{ImpactEta, UNKNOWN_ETA, parse_catalog_date};

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl From<LocationConfig> for GeoPoint {
    fn from(value: LocationConfig) -> Self {
        Self {
            lat: value.lat,
            lon: value.lon,
        }
    }
}

/// Physical consequences of an impact derived from catalog summary statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsequenceAssessment {
    pub asteroid_name: String,
    /// Cumulative impact probability in `[0, 1]`.
    pub ip_cumulative: f64,
    pub eta: ImpactEta,
    pub energy_mt: f64,
    pub diameter_km: f64,
    pub velocity_km_s: f64,
    pub mass_kg: f64,
    pub kinetic_energy_j: f64,
    /// Fixed placeholder; the catalog publishes no ground track.
    pub nominal_location: GeoPoint,
    /// 4 psi (heavy destruction) radius.
    pub destruction_radius_km: f64,
    /// 1 psi (light damage) radius.
    pub shaking_radius_km: f64,
    pub seismic_magnitude_mw: f64,
    pub crater_diameter_km: f64,
    /// Area inside the destruction radius.
    pub affected_area_km2: f64,
    /// Placeholder-population casualty figure for the destruction zone.
    pub estimated_casualties: u64,
    pub economic_cost_usd: f64,
}

impl ConsequenceAssessment {
    /// TNT equivalent of the derived kinetic energy, for comparison with the catalog figure.
    pub fn kinetic_energy_mt(&self) -> f64 {
        joules_to_mt(self.kinetic_energy_j)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AssessmentError {
    #[error("catalog record for '{0}' has no summary")]
    MissingSummary(String),
    #[error("approach date '{0}' is not a recognised catalog date")]
    InvalidApproachDate(String),
}

/// Assess the consequences of `record`, using `designation` when the catalog omits a name.
pub fn assess(
    record: &RawObjectRecord,
    designation: &str,
    physics: &PhysicsConfig,
) -> Result<ConsequenceAssessment, AssessmentError> {
    let summary = record
        .summary
        .as_ref()
        .ok_or_else(|| AssessmentError::MissingSummary(designation.to_string()))?;

    let energy_mt = non_negative(summary.energy_mt);
    let diameter_km = non_negative(summary.diameter_km);
    let velocity_km_s = non_negative(summary.v_inf_km_s);
    let ip_cumulative = non_negative(summary.ip).min(1.0);
    let eta = estimate_eta(&record.approaches)?;

    let mass_kg = scaling::impactor_mass_kg(diameter_km, physics.density_kg_m3);
    let kinetic_energy_j = scaling::kinetic_energy_j(mass_kg, velocity_km_s);
    let seismic_energy_j = kinetic_energy_j * physics.seismic_efficiency;
    let destruction_radius_km =
        scaling::blast_radius_km(physics.destruction_reference_radius_km, energy_mt);
    let affected_area_km2 = scaling::affected_area_km2(destruction_radius_km);

    let assessment = ConsequenceAssessment {
        asteroid_name: summary
            .fullname
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(designation)
            .to_string(),
        ip_cumulative,
        eta,
        energy_mt,
        diameter_km,
        velocity_km_s,
        mass_kg,
        kinetic_energy_j,
        nominal_location: physics.nominal_location.into(),
        destruction_radius_km,
        shaking_radius_km: scaling::blast_radius_km(
            physics.shaking_reference_radius_km,
            energy_mt,
        ),
        seismic_magnitude_mw: scaling::moment_magnitude(seismic_energy_j),
        crater_diameter_km: scaling::crater_diameter_km(energy_mt),
        affected_area_km2,
        estimated_casualties: scaling::casualty_estimate(
            affected_area_km2,
            physics.population_density_per_km2,
            physics.core_mortality,
        ),
        economic_cost_usd: scaling::economic_cost_usd(
            affected_area_km2,
            energy_mt,
            physics.damage_cost_usd_per_km2,
            physics.damage_cost_usd_per_kt,
        ),
    };
    debug!(
        designation,
        energy_mt,
        mw = assessment.seismic_magnitude_mw,
        eta = assessment.eta.label(),
        "consequences assessed"
    );
    Ok(assessment)
}

/// Pick the approach with the highest individual probability; the first maximum wins.
pub fn highest_risk_approach(approaches: &[RawApproach]) -> Option<&RawApproach> {
    let mut best: Option<(&RawApproach, f64)> = None;
    for approach in approaches {
        let ip = non_negative(approach.ip);
        if best.is_none_or(|(_, best_ip)| ip > best_ip) {
            best = Some((approach, ip));
        }
    }
    best.map(|(approach, _)| approach)
}

fn estimate_eta(approaches: &[RawApproach]) -> Result<ImpactEta, AssessmentError> {
    let Some(label) = highest_risk_approach(approaches).and_then(|a| a.date.as_deref()) else {
        return Ok(ImpactEta::Unknown);
    };
    let date = parse_catalog_date(label)
        .ok_or_else(|| AssessmentError::InvalidApproachDate(label.to_string()))?;
    Ok(ImpactEta::Approach {
        label: label.to_string(),
        date,
    })
}

fn non_negative(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}
