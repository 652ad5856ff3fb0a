//! Deflection planning: how hard must we push, and is there still time to do it.
//!
//! The model assumes a constant velocity change applied at the end of the
//! intervention window and sustained until the estimated impact; the target is
//! a displacement of one Earth radius. The "applied" velocity always equals the
//! required one, so a feasible plan reports a deflection of exactly one radius.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use neo_core::constants::{DAYS_PER_YEAR, R_EARTH_KM, SECONDS_PER_DAY};
use neo_core::time::{days_to_years, years_to_seconds};
use neo_core::units::{km_to_m, m_to_km, mms_to_ms, ms_to_mms};
use neo_impact::{ConsequenceAssessment, ImpactEta};
use tracing::debug;

/// Default intervention lead time (years).
pub const DEFAULT_LEAD_YEARS: f64 = 20.0;
/// Shortest intervention window we ever plan for (years).
pub const MIN_LEAD_YEARS: f64 = 1.0;
/// Saturated delta-v reported when no effect window remains (mm/s).
pub const IMPOSSIBLE_DELTA_V_MMS: f64 = 99_999.0;

/// Impact date substituted when the catalog lists no approach.
pub fn far_future_impact() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2150, 1, 1)
        .unwrap_or(NaiveDate::MAX)
        .and_time(NaiveTime::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MitigationOutcome {
    Successful,
    Impossible,
}

impl MitigationOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Successful => "SUCCESSFUL",
            Self::Impossible => "IMPOSSIBLE",
        }
    }
}

impl fmt::Display for MitigationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the deflection feasibility estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct MitigationPlan {
    pub impact_date: NaiveDateTime,
    pub intervention_time_years: f64,
    /// Time between the end of the intervention window and impact (s).
    pub effect_window_s: f64,
    pub required_delta_v_mms: f64,
    pub applied_delta_v_mms: f64,
    pub resulting_deflection_km: f64,
    pub deflection_earth_radii: f64,
    pub outcome: MitigationOutcome,
}

/// Plan a deflection for the assessed object as seen from `now`.
pub fn plan(
    assessment: &ConsequenceAssessment,
    now: NaiveDateTime,
    default_lead_years: f64,
) -> MitigationPlan {
    let impact_date = match &assessment.eta {
        ImpactEta::Approach { date, .. } => *date,
        ImpactEta::Unknown => far_future_impact(),
    };
    plan_for_date(impact_date, now, default_lead_years)
}

/// Plan a deflection against a known impact date.
pub fn plan_for_date(
    impact_date: NaiveDateTime,
    now: NaiveDateTime,
    default_lead_years: f64,
) -> MitigationPlan {
    let time_to_impact_s = total_seconds(impact_date - now);
    let whole_days = (time_to_impact_s / SECONDS_PER_DAY).floor();

    let mut lead_years = default_lead_years.max(MIN_LEAD_YEARS);
    if whole_days < lead_years * DAYS_PER_YEAR {
        // Leave at least a year between the end of the intervention and impact.
        lead_years = (days_to_years(whole_days) - 1.0).max(MIN_LEAD_YEARS);
    }

    let effect_window_s = time_to_impact_s - years_to_seconds(lead_years);
    let required_delta_v_mms = if effect_window_s > 0.0 {
        ms_to_mms(km_to_m(R_EARTH_KM) / effect_window_s)
    } else {
        IMPOSSIBLE_DELTA_V_MMS
    };

    let applied_delta_v_mms = required_delta_v_mms;
    let deflection_m = mms_to_ms(applied_delta_v_mms) * effect_window_s.max(0.0);
    let resulting_deflection_km = m_to_km(deflection_m);

    let outcome = if effect_window_s <= 0.0 {
        MitigationOutcome::Impossible
    } else {
        MitigationOutcome::Successful
    };

    debug!(
        %impact_date,
        lead_years,
        effect_window_s,
        required_delta_v_mms,
        %outcome,
        "mitigation planned"
    );

    MitigationPlan {
        impact_date,
        intervention_time_years: lead_years,
        effect_window_s,
        required_delta_v_mms,
        applied_delta_v_mms,
        resulting_deflection_km,
        deflection_earth_radii: resulting_deflection_km / R_EARTH_KM,
        outcome,
    }
}

fn total_seconds(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1.0e9
}
