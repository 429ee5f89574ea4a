//! Raw JSON payload schema for the live and history endpoints
//!
//! The upstream feeds are duck-typed: numeric fields may arrive as JSON
//! numbers, numeric strings, or null. [`FieldValue`] keeps that looseness
//! at the edge so the validator can apply explicit coercion rules instead
//! of letting NaN/undefined leak into arithmetic.

use serde::{Deserialize, Serialize};

/// A loosely-typed numeric field from the station feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(untagged)]
pub enum FieldValue {
    Float(f64),
    Integer(i64),
    Text(String),
    #[default]
    Null,
}

impl FieldValue {
    /// Coerce to a number. Numeric strings parse; anything else is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::Integer(v) => Some(*v as f64),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// One sample as served by the history endpoint (and embedded in the live
/// payload): the fields the window core consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RawSample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_local: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_utc: Option<String>,

    #[serde(default)]
    pub temp_c: FieldValue,

    #[serde(default)]
    pub rain_rate_mmph: FieldValue,
}

/// Full live-endpoint payload. Only the embedded [`RawSample`] feeds the
/// window; the remaining fields are carried through for the presentation
/// boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LiveConditions {
    #[serde(flatten)]
    pub sample: RawSample,

    #[serde(default)]
    pub apparent_c: Option<f64>,

    #[serde(default)]
    pub wind_kmh: Option<f64>,

    #[serde(default)]
    pub wind_dir_deg: Option<f64>,

    #[serde(default)]
    pub gust_kmh: Option<f64>,

    #[serde(default)]
    pub rh_pct: Option<f64>,

    #[serde(default)]
    pub dewpoint_c: Option<f64>,

    #[serde(default)]
    pub pressure_hpa: Option<f64>,

    #[serde(default)]
    pub uv_index: Option<f64>,

    #[serde(default)]
    pub solar_wm2: Option<f64>,

    #[serde(default)]
    pub rain_day_mm: Option<f64>,

    /// Upstream's own freshness flag for its most recent station report.
    #[serde(default)]
    pub stale: bool,

    #[serde(default)]
    pub age_s: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_coercions() {
        assert_eq!(FieldValue::Float(21.5).as_f64(), Some(21.5));
        assert_eq!(FieldValue::Integer(7).as_f64(), Some(7.0));
        assert_eq!(FieldValue::Text("18.3".to_string()).as_f64(), Some(18.3));
        assert_eq!(FieldValue::Text("n/a".to_string()).as_f64(), None);
        assert_eq!(FieldValue::Null.as_f64(), None);
        assert!(FieldValue::Null.is_null());
    }

    #[test]
    fn test_raw_sample_decode() {
        let json = r#"{"ts_utc":"2024-06-01 10:00:00Z","temp_c":18.4,"rain_rate_mmph":"0.2"}"#;
        let sample: RawSample = serde_json::from_str(json).unwrap();

        assert_eq!(sample.ts_local, None);
        assert_eq!(sample.ts_utc.as_deref(), Some("2024-06-01 10:00:00Z"));
        assert_eq!(sample.temp_c.as_f64(), Some(18.4));
        assert_eq!(sample.rain_rate_mmph.as_f64(), Some(0.2));
    }

    #[test]
    fn test_raw_sample_missing_fields_default_to_null() {
        let sample: RawSample = serde_json::from_str(r#"{"ts_local":"2024-06-01 11:00:00"}"#).unwrap();
        assert!(sample.temp_c.is_null());
        assert!(sample.rain_rate_mmph.is_null());
    }

    #[test]
    fn test_live_conditions_decode() {
        let json = r#"{
            "temp_c": 21.3,
            "apparent_c": 22.0,
            "wind_kmh": 12.5,
            "wind_dir_deg": 270,
            "gust_kmh": 20.1,
            "rh_pct": 63,
            "dewpoint_c": 14.1,
            "pressure_hpa": 1017,
            "uv_index": 5.2,
            "solar_wm2": 640,
            "rain_day_mm": 0.4,
            "rain_rate_mmph": 0.0,
            "ts_local": "2024-06-01 15:40:00",
            "stale": false,
            "age_s": 32
        }"#;
        let live: LiveConditions = serde_json::from_str(json).unwrap();

        assert_eq!(live.sample.ts_local.as_deref(), Some("2024-06-01 15:40:00"));
        assert_eq!(live.sample.temp_c.as_f64(), Some(21.3));
        assert_eq!(live.wind_dir_deg, Some(270.0));
        assert_eq!(live.age_s, Some(32.0));
        assert!(!live.stale);
    }

    #[test]
    fn test_live_conditions_null_temp() {
        let json = r#"{"ts_utc":"2024-06-01 10:00:00","temp_c":null,"rain_rate_mmph":null}"#;
        let live: LiveConditions = serde_json::from_str(json).unwrap();
        assert!(live.sample.temp_c.is_null());
        assert!(live.sample.rain_rate_mmph.is_null());
    }
}
