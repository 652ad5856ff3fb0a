//! Core units, constants, and shared primitives for the NEO risk analyzer workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Mean radius of the Earth (km).
    pub const R_EARTH_KM: f64 = 6_371.0;
    /// Joules released by one megaton of TNT.
    pub const J_PER_MT: f64 = 4.184e15;
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Days per Julian year.
    pub const DAYS_PER_YEAR: f64 = 365.25;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::J_PER_MT;

    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert kilometres per second to metres per second.
    #[inline]
    pub fn kms_to_ms(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres per second to millimetres per second.
    #[inline]
    pub fn ms_to_mms(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert millimetres per second to metres per second.
    #[inline]
    pub fn mms_to_ms(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert joules to megatons of TNT.
    #[inline]
    pub fn joules_to_mt(j: f64) -> f64 {
        j / J_PER_MT
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{DAYS_PER_YEAR, SECONDS_PER_DAY};

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Convert Julian years to seconds.
    #[inline]
    pub fn years_to_seconds(years: f64) -> f64 {
        days_to_seconds(years * DAYS_PER_YEAR)
    }

    /// Convert days to Julian years.
    #[inline]
    pub fn days_to_years(days: f64) -> f64 {
        days / DAYS_PER_YEAR
    }
}

/// Simple solid-body geometry.
pub mod geometry {
    use std::f64::consts::PI;

    /// Volume of a sphere of the given radius (units cubed).
    #[inline]
    pub fn sphere_volume(radius: f64) -> f64 {
        (4.0 / 3.0) * PI * radius.powi(3)
    }
}
