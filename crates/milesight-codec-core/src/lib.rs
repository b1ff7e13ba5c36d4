//! Payload codec for Milesight LoRaWAN devices.
//!
//! This crate turns device uplinks (raw bytes) into named telemetry and
//! controller commands (JSON objects) into downlink bytes. Each supported
//! model is a pair of static tables: uplink channels (`uplink`) and downlink
//! commands (`downlink`), bound together in `registry`. Both directions are
//! byte-oriented, synchronous and side-effect free.
//!
//! Invariants:
//! - Multi-byte wire fields are little-endian.
//! - Uplink decoding stops at the first unknown record by default and returns
//!   what it decoded so far; `DecodeOptions::strict` turns that into an error.
//! - Downlink encoding validates every field against its declared domain and
//!   either returns the whole frame run or an error naming the bad field.
//!
//! # Examples
//! ```
//! use milesight_codec_core::{TelemetryValue, decode, encode};
//! use serde_json::json;
//!
//! let telemetry = decode("wt101", &[0x01, 0x75, 0x64, 0x03, 0x67, 0xD7, 0x00])?;
//! assert_eq!(telemetry.get("battery"), Some(&TelemetryValue::Integer(100)));
//! assert_eq!(telemetry.get("temperature").and_then(|v| v.as_f64()), Some(21.5));
//!
//! let downlink = encode("wt101", &json!({"report_interval": 60}))?;
//! assert_eq!(downlink, vec![0xFF, 0x8E, 0x00, 0x3C, 0x00]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde_json::Value;

pub mod buffer;
pub mod domain;
pub mod downlink;
pub mod models;
pub mod registry;
pub mod telemetry;
pub mod uplink;

pub use buffer::{BufferError, PayloadReader, PayloadWriter};
pub use domain::EnumDomain;
pub use downlink::{CommandDescriptor, EncodeError, FieldError, encode_command};
pub use registry::{CodecRegistry, DeviceCodec};
pub use telemetry::{Telemetry, TelemetryValue};
pub use uplink::{DecodeError, DecodeOptions, PartialDecodePolicy};

/// Decode an uplink with the default best-effort policy.
pub fn decode(model: &str, payload: &[u8]) -> Result<Telemetry, DecodeError> {
    decode_with(model, payload, &DecodeOptions::default())
}

/// Decode an uplink for `model`.
///
/// Preconditions are checked in order: a blank model, then an empty payload,
/// then an unknown model.
///
/// # Examples
/// ```
/// use milesight_codec_core::{DecodeError, DecodeOptions, decode_with};
///
/// let err = decode_with("wt101", &[0x01, 0x75, 0x64, 0xEE, 0xEE], &DecodeOptions::strict())
///     .unwrap_err();
/// assert!(matches!(err, DecodeError::UnknownChannel { offset: 3, .. }));
/// ```
pub fn decode_with(
    model: &str,
    payload: &[u8],
    options: &DecodeOptions,
) -> Result<Telemetry, DecodeError> {
    if model.trim().is_empty() {
        return Err(DecodeError::EmptyModel);
    }
    if payload.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }
    let codec = CodecRegistry::global()
        .resolve(model)
        .ok_or_else(|| DecodeError::UnsupportedModel {
            model: model.to_string(),
        })?;
    codec.decode(payload, options)
}

/// Encode a command object for `model`.
///
/// # Examples
/// ```
/// use milesight_codec_core::{EncodeError, encode};
/// use serde_json::json;
///
/// let err = encode("wt101", &json!({"target_temperature_range": {"min": 4, "max": 25}}))
///     .unwrap_err();
/// assert_eq!(err.field_name(), Some("target_temperature_range.min"));
/// assert_eq!(encode("wt101", &json!({})), Err(EncodeError::EmptyPayload));
/// ```
pub fn encode(model: &str, command: &Value) -> Result<Vec<u8>, EncodeError> {
    if model.trim().is_empty() {
        return Err(EncodeError::EmptyModel);
    }
    if command.as_object().is_none_or(|object| object.is_empty()) {
        return Err(EncodeError::EmptyPayload);
    }
    let codec = CodecRegistry::global()
        .resolve(model)
        .ok_or_else(|| EncodeError::UnsupportedModel {
            model: model.to_string(),
        })?;
    codec.encode(command)
}
