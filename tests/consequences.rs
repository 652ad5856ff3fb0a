use std::f64::consts::PI;

use neo_risk_analyzer::catalog::{RawApproach, RawObjectRecord, RawSummary};
use neo_risk_analyzer::config::PhysicsConfig;
use neo_risk_analyzer::impact::{AssessmentError, ImpactEta, assess, highest_risk_approach};

fn record(energy_mt: f64, diameter_km: f64, v_inf_km_s: f64, ip: f64) -> RawObjectRecord {
    RawObjectRecord {
        summary: Some(RawSummary {
            ip: Some(ip),
            energy_mt: Some(energy_mt),
            diameter_km: Some(diameter_km),
            v_inf_km_s: Some(v_inf_km_s),
            fullname: Some("(2023 TEST)".into()),
        }),
        approaches: vec![RawApproach::new("2076-01-01.50", ip)],
    }
}

#[test]
fn zero_energy_has_no_blast_or_crater() {
    let physics = PhysicsConfig::default();
    for (diameter, velocity) in [(0.0, 0.0), (1.0, 20.0), (12.0, 70.0)] {
        let a = assess(&record(0.0, diameter, velocity, 1e-3), "test", &physics).expect("assess");
        assert_eq!(a.destruction_radius_km, 0.0);
        assert_eq!(a.shaking_radius_km, 0.0);
        assert_eq!(a.crater_diameter_km, 0.0);
        assert_eq!(a.affected_area_km2, 0.0);
        assert_eq!(a.estimated_casualties, 0);
        assert_eq!(a.economic_cost_usd, 0.0);
    }
}

#[test]
fn blast_and_crater_follow_cube_root_scaling() {
    let physics = PhysicsConfig::default();
    let small = assess(&record(150.0, 0.4, 15.0, 1e-4), "a", &physics).expect("assess");
    let large = assess(&record(300.0, 0.4, 15.0, 1e-4), "b", &physics).expect("assess");

    let factor = 2f64.cbrt();
    assert!((large.crater_diameter_km / small.crater_diameter_km - factor).abs() < 1e-12);
    assert!((large.destruction_radius_km / small.destruction_radius_km - factor).abs() < 1e-12);
    assert!((large.shaking_radius_km / small.shaking_radius_km - factor).abs() < 1e-12);
    assert!(large.shaking_radius_km > large.destruction_radius_km);
}

#[test]
fn seismic_magnitude_reproduces_formula() {
    let physics = PhysicsConfig::default();
    let a = assess(&record(0.0, 0.1, 20.0, 0.0), "test", &physics).expect("assess");

    let radius_m = 50.0_f64;
    let mass = 2_600.0 * (4.0 / 3.0) * PI * radius_m.powi(3);
    let kinetic = 0.5 * mass * 20_000.0_f64.powi(2);
    let expected = 0.67 * (kinetic * 1e-4).log10() - 5.87;

    assert!((a.seismic_magnitude_mw - expected).abs() < 1e-6);
    assert!((a.seismic_magnitude_mw - 3.131_451).abs() < 1e-5);
    assert!((a.mass_kg - 1.361_356_816_5e9).abs() / a.mass_kg < 1e-9);
}

#[test]
fn tiny_events_keep_negative_magnitude() {
    let physics = PhysicsConfig::default();
    let a = assess(&record(0.0, 0.000_1, 0.01, 0.0), "pebble", &physics).expect("assess");
    assert!(a.seismic_magnitude_mw < 0.0);

    let still = assess(&record(0.0, 0.5, 0.0, 0.0), "still", &physics).expect("assess");
    assert_eq!(still.seismic_magnitude_mw, 0.0);
}

#[test]
fn one_gigaton_impactor() {
    let physics = PhysicsConfig::default();
    let a = assess(&record(1000.0, 1.0, 20.0, 0.001), "test", &physics).expect("assess");

    assert!((a.crater_diameter_km - 10.0).abs() < 1e-12);
    assert!((a.destruction_radius_km - 62.0).abs() < 1e-9);
    assert!((a.shaking_radius_km - 170.0).abs() < 1e-9);
    assert!(a.seismic_magnitude_mw.is_finite() && a.seismic_magnitude_mw > 5.0);
    assert_eq!(a.ip_cumulative, 0.001);
    assert_eq!(a.eta.label(), "2076-01-01.50");
    assert_eq!(a.nominal_location.lat, 15.0);
    assert_eq!(a.nominal_location.lon, -30.0);
    assert!(a.kinetic_energy_mt() > 0.0);
}

#[test]
fn missing_summary_is_a_parse_error() {
    let empty = RawObjectRecord::default();
    let err = assess(&empty, "2000 SG344", &PhysicsConfig::default()).expect_err("no summary");
    assert_eq!(err, AssessmentError::MissingSummary("2000 SG344".into()));
}

#[test]
fn absent_fields_default_to_zero_and_name_falls_back() {
    let record = RawObjectRecord {
        summary: Some(RawSummary::default()),
        approaches: Vec::new(),
    };
    let a = assess(&record, "2000 SG344", &PhysicsConfig::default()).expect("assess");
    assert_eq!(a.asteroid_name, "2000 SG344");
    assert_eq!(a.energy_mt, 0.0);
    assert_eq!(a.diameter_km, 0.0);
    assert_eq!(a.velocity_km_s, 0.0);
    assert_eq!(a.ip_cumulative, 0.0);
    assert_eq!(a.eta, ImpactEta::Unknown);
    assert_eq!(a.eta.label(), "N/A");
}

#[test]
fn out_of_range_inputs_are_sanitized() {
    let mut raw = record(-5.0, f64::NAN, -1.0, 3.0);
    raw.approaches.clear();
    let a = assess(&raw, "odd", &PhysicsConfig::default()).expect("assess");
    assert_eq!(a.energy_mt, 0.0);
    assert_eq!(a.diameter_km, 0.0);
    assert_eq!(a.velocity_km_s, 0.0);
    assert_eq!(a.ip_cumulative, 1.0);
}

#[test]
fn highest_probability_approach_wins_and_ties_keep_catalog_order() {
    let approaches = vec![
        RawApproach::new("2060-03-01.1", 1e-6),
        RawApproach::new("2071-09-16.04", 4e-4),
        RawApproach::new("2080-01-01.0", 4e-4),
        RawApproach {
            date: Some("2090-01-01".into()),
            ip: None,
        },
    ];
    let best = highest_risk_approach(&approaches).expect("non-empty");
    assert_eq!(best.date.as_deref(), Some("2071-09-16.04"));
    assert!(highest_risk_approach(&[]).is_none());

    let mut raw = record(10.0, 0.1, 12.0, 5e-4);
    raw.approaches = approaches;
    let a = assess(&raw, "x", &PhysicsConfig::default()).expect("assess");
    let date = a.eta.date().expect("dated");
    assert_eq!(date.to_string(), "2071-09-16 00:00:00");
}

#[test]
fn unparseable_approach_date_is_rejected() {
    let mut raw = record(10.0, 0.1, 12.0, 5e-4);
    raw.approaches = vec![RawApproach::new("sometime soon", 1e-3)];
    let err = assess(&raw, "x", &PhysicsConfig::default()).expect_err("bad date");
    assert_eq!(
        err,
        AssessmentError::InvalidApproachDate("sometime soon".into())
    );
}

#[test]
fn assessment_is_deterministic() {
    let physics = PhysicsConfig::default();
    let raw = record(1234.5, 0.87, 17.3, 2.2e-5);
    let first = assess(&raw, "repeat", &physics).expect("assess");
    let second = assess(&raw, "repeat", &physics).expect("assess");
    assert_eq!(first, second);
    assert_eq!(
        first.seismic_magnitude_mw.to_bits(),
        second.seismic_magnitude_mw.to_bits()
    );
}

#[test]
fn casualties_scale_with_destruction_area() {
    let mut physics = PhysicsConfig::default();
    let a = assess(&record(1000.0, 1.0, 20.0, 1e-3), "area", &physics).expect("assess");
    let area = PI * a.destruction_radius_km.powi(2);
    assert!((a.affected_area_km2 - area).abs() < 1e-9);
    assert_eq!(a.estimated_casualties, (area * 300.0 * 0.2).round() as u64);

    physics.population_density_per_km2 = 0.0;
    let empty = assess(&record(1000.0, 1.0, 20.0, 1e-3), "area", &physics).expect("assess");
    assert_eq!(empty.estimated_casualties, 0);
    assert!(empty.economic_cost_usd > 0.0);
}
