//! Validation of command values before anything is written.
//!
//! Helpers take the full dotted field path so errors name exactly what the
//! caller has to fix.

use std::ops::RangeInclusive;

use serde_json::{Map, Number, Value};

use super::error::{EncodeError, FieldError};
use crate::domain::EnumDomain;

pub const U8_RANGE: RangeInclusive<i64> = 0..=0xFF;
pub const I8_RANGE: RangeInclusive<i64> = -0x80..=0x7F;
pub const U16_RANGE: RangeInclusive<i64> = 0..=0xFFFF;
pub const I16_RANGE: RangeInclusive<i64> = -0x8000..=0x7FFF;

/// Resolve an enum value given either as its exact label or its exact code.
pub fn enum_code(value: &Value, field: &str, domain: &EnumDomain) -> Result<i64, EncodeError> {
    let code = match value {
        Value::String(label) => domain.code_for_label(label),
        Value::Number(number) => integral(number).filter(|code| domain.contains(*code)),
        _ => None,
    };
    code.ok_or_else(|| {
        EncodeError::field(
            field,
            FieldError::NotInDomain {
                value: value.to_string(),
                allowed: domain.describe(),
            },
        )
    })
}

/// `min..=max` of a device-unit range, expressed in command units.
pub fn describe_range(range: &RangeInclusive<i64>, scale: u32) -> String {
    let (min, max) = unscaled_bounds(range, scale);
    format!("{min}..={max}")
}

pub fn number(
    value: &Value,
    field: &str,
    allowed: impl FnOnce() -> String,
) -> Result<f64, EncodeError> {
    value.as_f64().ok_or_else(|| {
        EncodeError::field(
            field,
            FieldError::NotANumber {
                value: value.to_string(),
                allowed: allowed(),
            },
        )
    })
}

/// Range-check a number, then truncate it toward zero.
pub fn integer(value: &Value, field: &str, range: RangeInclusive<i64>) -> Result<i64, EncodeError> {
    let number = number(value, field, || describe_range(&range, 1))?;
    let (min, max) = unscaled_bounds(&range, 1);
    if number < min || number > max {
        return Err(EncodeError::field(
            field,
            FieldError::OutOfRange {
                value: number,
                min,
                max,
            },
        ));
    }
    Ok(number.trunc() as i64)
}

/// Multiply by `scale` and truncate toward zero to device units, then
/// range-check against `range` (expressed in device units).
pub fn scaled(
    value: &Value,
    field: &str,
    scale: u32,
    range: RangeInclusive<i64>,
) -> Result<i64, EncodeError> {
    let number = number(value, field, || describe_range(&range, scale))?;
    let raw = (number * f64::from(scale)).trunc();
    if raw < *range.start() as f64 || raw > *range.end() as f64 {
        let (min, max) = unscaled_bounds(&range, scale);
        return Err(EncodeError::field(
            field,
            FieldError::OutOfRange {
                value: number,
                min,
                max,
            },
        ));
    }
    Ok(raw as i64)
}

/// Top-level companion key; `allowed` describes what the key accepts.
pub fn required<'a>(
    command: &'a Map<String, Value>,
    field: &str,
    allowed: impl FnOnce() -> String,
) -> Result<&'a Value, EncodeError> {
    command
        .get(field)
        .ok_or_else(|| EncodeError::field(field, FieldError::Missing { allowed: allowed() }))
}

fn unscaled_bounds(range: &RangeInclusive<i64>, scale: u32) -> (f64, f64) {
    let factor = f64::from(scale.max(1));
    (*range.start() as f64 / factor, *range.end() as f64 / factor)
}

fn integral(number: &Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    let value = number.as_f64()?;
    let in_range = value >= i64::MIN as f64 && value <= i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

/// Nested command object (e.g. `dst_config`) with path-aware accessors.
pub struct CommandObject<'a> {
    path: String,
    fields: &'a Map<String, Value>,
}

impl<'a> CommandObject<'a> {
    pub fn new(value: &'a Value, path: impl Into<String>) -> Result<Self, EncodeError> {
        let path = path.into();
        match value.as_object() {
            Some(fields) => Ok(Self { path, fields }),
            None => Err(EncodeError::field(
                path,
                FieldError::NotAnObject {
                    value: value.to_string(),
                },
            )),
        }
    }

    pub fn path(&self, name: &str) -> String {
        format!("{}.{}", self.path, name)
    }

    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn require(
        &self,
        name: &str,
        allowed: impl FnOnce() -> String,
    ) -> Result<&'a Value, EncodeError> {
        self.get(name).ok_or_else(|| {
            EncodeError::field(self.path(name), FieldError::Missing { allowed: allowed() })
        })
    }

    pub fn enum_code(&self, name: &str, domain: &EnumDomain) -> Result<i64, EncodeError> {
        let value = self.require(name, || domain.describe())?;
        enum_code(value, &self.path(name), domain)
    }

    pub fn integer(&self, name: &str, range: RangeInclusive<i64>) -> Result<i64, EncodeError> {
        let value = self.require(name, || describe_range(&range, 1))?;
        integer(value, &self.path(name), range)
    }

    pub fn scaled(
        &self,
        name: &str,
        scale: u32,
        range: RangeInclusive<i64>,
    ) -> Result<i64, EncodeError> {
        let value = self.require(name, || describe_range(&range, scale))?;
        scaled(value, &self.path(name), scale, range)
    }

    /// Companion field of an `enable` flag: validated when enabled, 0 otherwise.
    pub fn integer_if(
        &self,
        enabled: bool,
        name: &str,
        range: RangeInclusive<i64>,
    ) -> Result<i64, EncodeError> {
        if enabled {
            self.integer(name, range)
        } else {
            Ok(0)
        }
    }

    pub fn scaled_if(
        &self,
        enabled: bool,
        name: &str,
        scale: u32,
        range: RangeInclusive<i64>,
    ) -> Result<i64, EncodeError> {
        if enabled {
            self.scaled(name, scale, range)
        } else {
            Ok(0)
        }
    }
}
