//! Single-body scaling laws used by the consequence model.
//!
//! All blast and crater laws are cube-root yield scalings calibrated to a 1 Mt
//! reference explosion; non-positive yields map to zero.

use std::f64::consts::PI;

use neo_core::geometry::sphere_volume;
use neo_core::units::{km_to_m, kms_to_ms};

/// Mass of a homogeneous sphere of the given diameter (km) and density (kg/m³).
pub fn impactor_mass_kg(diameter_km: f64, density_kg_m3: f64) -> f64 {
    let radius_m = km_to_m(diameter_km) / 2.0;
    density_kg_m3 * sphere_volume(radius_m)
}

/// Kinetic energy (J) of `mass_kg` moving at `velocity_km_s`.
pub fn kinetic_energy_j(mass_kg: f64, velocity_km_s: f64) -> f64 {
    let velocity_m_s = kms_to_ms(velocity_km_s);
    0.5 * mass_kg * velocity_m_s.powi(2)
}

/// Overpressure radius (km) for a yield, given the radius of the 1 Mt reference.
pub fn blast_radius_km(reference_radius_km: f64, energy_mt: f64) -> f64 {
    if energy_mt > 0.0 {
        reference_radius_km * energy_mt.cbrt()
    } else {
        0.0
    }
}

/// Moment magnitude of the quake-equivalent; not clamped, so tiny events go negative.
pub fn moment_magnitude(seismic_energy_j: f64) -> f64 {
    if seismic_energy_j > 0.0 {
        0.67 * seismic_energy_j.log10() - 5.87
    } else {
        0.0
    }
}

/// Simple crater diameter (km): the cube root of the yield in megatons.
pub fn crater_diameter_km(energy_mt: f64) -> f64 {
    if energy_mt > 0.0 { energy_mt.cbrt() } else { 0.0 }
}

/// Ground area (km²) inside a damage radius.
pub fn affected_area_km2(radius_km: f64) -> f64 {
    PI * radius_km.powi(2)
}

/// Deaths inside `area_km2`, rounded to whole people.
pub fn casualty_estimate(area_km2: f64, population_density_per_km2: f64, mortality: f64) -> u64 {
    (area_km2 * population_density_per_km2 * mortality).round() as u64
}

/// Rough damage bill: flattened area plus a per-kiloton term for the yield.
pub fn economic_cost_usd(area_km2: f64, energy_mt: f64, usd_per_km2: f64, usd_per_kt: f64) -> f64 {
    (area_km2 * usd_per_km2 + energy_mt.max(0.0) * 1_000.0 * usd_per_kt).round()
}
