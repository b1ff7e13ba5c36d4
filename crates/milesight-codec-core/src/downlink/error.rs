use thiserror::Error;

use crate::buffer::BufferError;

/// Why a single command field was rejected. Every variant carries the
/// offending value and, where one exists, the allowed domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("value is required, expected {allowed}")]
    Missing { allowed: String },
    #[error("expected a number in {allowed}, got {value}")]
    NotANumber { value: String, allowed: String },
    #[error("{value} is outside the allowed range {min}..={max}")]
    OutOfRange { value: f64, min: f64, max: f64 },
    #[error("{value} must be one of {allowed}")]
    NotInDomain { value: String, allowed: String },
    #[error("expected an object, got {value}")]
    NotAnObject { value: String },
    #[error("expected an array, got {value}")]
    NotAnArray { value: String },
}

/// Errors returned by downlink encoding.
///
/// # Examples
/// ```
/// use milesight_codec_core::{EncodeError, FieldError};
///
/// let err = EncodeError::FieldValidation {
///     field: "target_temperature_range.min".to_string(),
///     reason: FieldError::OutOfRange { value: 4.0, min: 5.0, max: 15.0 },
/// };
/// assert_eq!(
///     err.to_string(),
///     "invalid `target_temperature_range.min`: 4 is outside the allowed range 5..=15"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("device model is required to encode payload")]
    EmptyModel,
    #[error("empty command payload")]
    EmptyPayload,
    #[error("no encoder for model {model}")]
    UnsupportedModel { model: String },
    #[error("invalid `{field}`: {reason}")]
    FieldValidation { field: String, reason: FieldError },
    #[error("encoder buffer error: {0}")]
    Buffer(#[from] BufferError),
}

impl EncodeError {
    pub fn field(field: impl Into<String>, reason: FieldError) -> Self {
        EncodeError::FieldValidation {
            field: field.into(),
            reason,
        }
    }

    /// Name of the rejected field, when this is a validation failure.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            EncodeError::FieldValidation { field, .. } => Some(field),
            _ => None,
        }
    }
}
