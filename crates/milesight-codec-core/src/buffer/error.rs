use thiserror::Error;

/// Errors returned by payload reads and fixed-capacity writes.
///
/// # Examples
/// ```
/// use milesight_codec_core::BufferError;
///
/// let err = BufferError::Overflow { needed: 4, capacity: 3 };
/// assert!(err.to_string().contains("buffer overflow"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("buffer overflow: need {needed} bytes, capacity is {capacity}")]
    Overflow { needed: usize, capacity: usize },
    #[error("buffer underfilled: wrote {written} of {capacity} bytes")]
    Underfilled { written: usize, capacity: usize },
}
