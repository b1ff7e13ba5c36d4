use thiserror::Error;

use crate::buffer::BufferError;

/// Errors returned by uplink decoding.
///
/// With the default [`PartialDecodePolicy`](super::PartialDecodePolicy) only
/// the precondition variants (`EmptyModel`, `EmptyPayload`,
/// `UnsupportedModel`) can occur; `UnknownChannel` and `Truncated` are raised
/// by the strict policy alone.
///
/// # Examples
/// ```
/// use milesight_codec_core::DecodeError;
///
/// let err = DecodeError::UnsupportedModel { model: "em300".to_string() };
/// assert!(err.to_string().contains("no decoder for model em300"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("device model is required to decode payload")]
    EmptyModel,
    #[error("empty payload")]
    EmptyPayload,
    #[error("no decoder for model {model}")]
    UnsupportedModel { model: String },
    #[error("unknown channel 0x{id:02X} 0x{kind:02X} at offset {offset}")]
    UnknownChannel { offset: usize, id: u8, kind: u8 },
    #[error("truncated `{field}` at offset {offset}: need {needed} bytes, got {actual}")]
    Truncated {
        field: &'static str,
        offset: usize,
        needed: usize,
        actual: usize,
    },
    #[error("payload read error: {0}")]
    Buffer(#[from] BufferError),
}
