use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// One decoded reading.
///
/// Decimals keep the raw wire integer and its scale so no precision is lost
/// before the host decides how to present them.
///
/// # Examples
/// ```
/// use milesight_codec_core::TelemetryValue;
///
/// let value = TelemetryValue::Decimal { raw: 215, scale: 10 };
/// assert_eq!(value.as_f64(), Some(21.5));
/// assert_eq!(serde_json::to_string(&value).unwrap(), "21.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TelemetryValue {
    Integer(i64),
    Decimal { raw: i64, scale: u32 },
    Label(&'static str),
}

impl TelemetryValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TelemetryValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TelemetryValue::Integer(value) => Some(*value as f64),
            TelemetryValue::Decimal { raw, scale } => Some(*raw as f64 / f64::from(*scale)),
            TelemetryValue::Label(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&'static str> {
        match self {
            TelemetryValue::Label(label) => Some(*label),
            _ => None,
        }
    }
}

impl Serialize for TelemetryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TelemetryValue::Integer(value) => serializer.serialize_i64(*value),
            TelemetryValue::Decimal { .. } => {
                serializer.serialize_f64(self.as_f64().unwrap_or_default())
            }
            TelemetryValue::Label(label) => serializer.serialize_str(label),
        }
    }
}

/// Field name to value mapping produced by one decode call.
///
/// Keys iterate and serialize in sorted order. Inserting a field that is
/// already present replaces it and returns the previous value.
///
/// # Examples
/// ```
/// use milesight_codec_core::{Telemetry, TelemetryValue};
///
/// let mut telemetry = Telemetry::new();
/// telemetry.insert("battery", TelemetryValue::Integer(98));
/// assert_eq!(telemetry.get("battery"), Some(&TelemetryValue::Integer(98)));
/// assert_eq!(serde_json::to_string(&telemetry).unwrap(), r#"{"battery":98}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Telemetry {
    fields: BTreeMap<&'static str, TelemetryValue>,
}

impl Telemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, value: TelemetryValue) -> Option<TelemetryValue> {
        self.fields.insert(field, value)
    }

    pub fn get(&self, field: &str) -> Option<&TelemetryValue> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &TelemetryValue)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }
}
