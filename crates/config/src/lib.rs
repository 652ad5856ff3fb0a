//! Configuration models and loaders for the NEO risk analyzer.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Public Sentry endpoint of the JPL/CNEOS impact-monitoring catalog.
pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://ssd-api.jpl.nasa.gov/sentry.api";

/// Top-level analyzer configuration. Every section falls back to its defaults.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub catalog: CatalogConfig,
    pub physics: PhysicsConfig,
    pub mitigation: MitigationConfig,
}

/// Remote catalog access and retry settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub max_attempts: u32,
    pub backoff_base_secs: f64,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CATALOG_ENDPOINT.to_string(),
            max_attempts: 3,
            backoff_base_secs: 1.0,
            timeout_secs: 15,
            user_agent: concat!("neo-risk-analyzer/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Scalar impact-physics parameters.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Bulk density assumed for a stony asteroid (kg/m³).
    pub density_kg_m3: f64,
    /// 4 psi overpressure radius of a 1 Mt reference explosion (km).
    pub destruction_reference_radius_km: f64,
    /// 1 psi overpressure radius of a 1 Mt reference explosion (km).
    pub shaking_reference_radius_km: f64,
    /// Fraction of kinetic energy coupled into seismic waves.
    pub seismic_efficiency: f64,
    pub nominal_location: LocationConfig,
    /// Placeholder population density over the destruction zone (people/km²).
    pub population_density_per_km2: f64,
    /// Fraction of people inside the destruction zone assumed killed.
    pub core_mortality: f64,
    pub damage_cost_usd_per_km2: f64,
    pub damage_cost_usd_per_kt: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            density_kg_m3: 2_600.0,
            destruction_reference_radius_km: 6.2,
            shaking_reference_radius_km: 17.0,
            seismic_efficiency: 1.0e-4,
            nominal_location: LocationConfig::default(),
            population_density_per_km2: 300.0,
            core_mortality: 0.2,
            damage_cost_usd_per_km2: 1.0e5,
            damage_cost_usd_per_kt: 1.0e6,
        }
    }
}

/// Placeholder ground point reported for every impact; the catalog carries no ground track.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct LocationConfig {
    pub lat: f64,
    pub lon: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            lat: 15.0,
            lon: -30.0,
        }
    }
}

/// Deflection mission planning parameters.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MitigationConfig {
    pub default_lead_years: f64,
}

impl Default for MitigationConfig {
    fn default() -> Self {
        Self {
            default_lead_years: 20.0,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl AnalyzerConfig {
    /// Reject values that would make the physics or the retry loop meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "catalog.max_attempts must be at least 1".into(),
            ));
        }
        if !(self.catalog.backoff_base_secs >= 0.0) {
            return Err(ConfigError::Invalid(
                "catalog.backoff_base_secs must be non-negative".into(),
            ));
        }
        if !(self.physics.density_kg_m3 > 0.0) {
            return Err(ConfigError::Invalid(
                "physics.density_kg_m3 must be positive".into(),
            ));
        }
        if !(self.physics.seismic_efficiency >= 0.0) {
            return Err(ConfigError::Invalid(
                "physics.seismic_efficiency must be non-negative".into(),
            ));
        }
        if !(self.physics.population_density_per_km2 >= 0.0) {
            return Err(ConfigError::Invalid(
                "physics.population_density_per_km2 must be non-negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.physics.core_mortality) {
            return Err(ConfigError::Invalid(
                "physics.core_mortality must lie in [0, 1]".into(),
            ));
        }
        if !(self.physics.damage_cost_usd_per_km2 >= 0.0 && self.physics.damage_cost_usd_per_kt >= 0.0)
        {
            return Err(ConfigError::Invalid(
                "physics damage costs must be non-negative".into(),
            ));
        }
        if !(self.mitigation.default_lead_years > 0.0) {
            return Err(ConfigError::Invalid(
                "mitigation.default_lead_years must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Load and validate an analyzer configuration from a TOML (by extension) or YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AnalyzerConfig, ConfigError> {
    let path = path.as_ref();
    let config: AnalyzerConfig = if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    config.validate()?;
    Ok(config)
}
