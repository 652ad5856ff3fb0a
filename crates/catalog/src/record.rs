//! Typed view of a catalog lookup payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Catalog response for a single designation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawObjectRecord {
    #[serde(default)]
    pub summary: Option<RawSummary>,
    /// Virtual-impactor entries in catalog order.
    #[serde(default, rename = "data", deserialize_with = "nullable_vec")]
    pub approaches: Vec<RawApproach>,
}

/// Aggregate statistics the catalog reports for an object.
///
/// Every numeric field is optional: the catalog sends numbers as strings and
/// occasionally omits them, and anything that does not parse is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSummary {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ip: Option<f64>,
    #[serde(default, rename = "energy", deserialize_with = "lenient_f64")]
    pub energy_mt: Option<f64>,
    #[serde(default, rename = "diameter", deserialize_with = "lenient_f64")]
    pub diameter_km: Option<f64>,
    #[serde(default, rename = "v_inf", deserialize_with = "lenient_f64")]
    pub v_inf_km_s: Option<f64>,
    #[serde(default)]
    pub fullname: Option<String>,
}

/// One modelled close approach (virtual impact).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawApproach {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ip: Option<f64>,
}

impl RawApproach {
    pub fn new(date: impl Into<String>, ip: f64) -> Self {
        Self {
            date: Some(date.into()),
            ip: Some(ip),
        }
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }))
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
