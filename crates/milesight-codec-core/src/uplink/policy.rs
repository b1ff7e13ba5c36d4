/// What the decoder does when it meets a record it cannot parse: an unknown
/// (channel id, channel type) pair, or a known pair whose value runs past the
/// end of the payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PartialDecodePolicy {
    /// Stop and return every field decoded so far. The rest of the payload is
    /// dropped and no error is raised.
    #[default]
    StopAtUnknown,
    /// Fail with `DecodeError::UnknownChannel` or `DecodeError::Truncated`.
    Strict,
}

/// Decoder configuration.
///
/// # Examples
/// ```
/// use milesight_codec_core::{DecodeOptions, PartialDecodePolicy};
///
/// let options = DecodeOptions::default();
/// assert_eq!(options.policy, PartialDecodePolicy::StopAtUnknown);
/// let strict = DecodeOptions::strict();
/// assert_eq!(strict.policy, PartialDecodePolicy::Strict);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub policy: PartialDecodePolicy,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self {
            policy: PartialDecodePolicy::Strict,
        }
    }
}
