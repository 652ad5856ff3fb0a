//! Asteroid impact risk analysis.
//!
//! Fetches an object's record from the impact-monitoring catalog, estimates the
//! physical consequences of an impact, checks whether a kinetic deflection could
//! still prevent it, and shapes the result for callers. The member crates are
//! re-exported so front-ends only need this one dependency.

pub mod analysis;

pub use analysis::{AnalysisError, Analyzer, analyze};
pub use neo_catalog as catalog;
pub use neo_config as config;
pub use neo_core as units;
pub use neo_impact as impact;
pub use neo_mitigation as mitigation;
pub use neo_report as report;
