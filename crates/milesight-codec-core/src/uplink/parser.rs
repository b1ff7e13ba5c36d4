use tracing::{debug, trace};

use super::channel::{ChannelDescriptor, lookup_channel};
use super::error::DecodeError;
use super::layout;
use super::policy::{DecodeOptions, PartialDecodePolicy};
use crate::buffer::{BufferError, PayloadReader};
use crate::telemetry::Telemetry;

/// Walk `payload` as (channel id, channel type, value) records against a
/// channel table.
///
/// Decoding stops once fewer than two bytes remain. How an unknown pair or a
/// truncated value ends the walk is governed by `options.policy`. A channel
/// that appears twice keeps its last value.
pub fn decode_channels(
    channels: &'static [ChannelDescriptor],
    payload: &[u8],
    options: &DecodeOptions,
) -> Result<Telemetry, DecodeError> {
    let reader = PayloadReader::new(payload);
    let mut telemetry = Telemetry::new();
    let mut offset = 0usize;

    while reader.remaining(offset) >= layout::HEADER_LEN {
        let id = reader.read_u8(offset + layout::CHANNEL_ID_OFFSET)?;
        let kind = reader.read_u8(offset + layout::CHANNEL_TYPE_OFFSET)?;

        let Some(channel) = lookup_channel(channels, id, kind) else {
            if options.policy == PartialDecodePolicy::Strict {
                return Err(DecodeError::UnknownChannel { offset, id, kind });
            }
            debug!(
                offset,
                id,
                kind,
                dropped = reader.remaining(offset),
                "unknown channel; stopping decode"
            );
            break;
        };

        let value_offset = offset + layout::HEADER_LEN;
        let value = match channel.decoder.decode(&reader, value_offset) {
            Ok(value) => value,
            Err(BufferError::TooShort { .. }) => {
                let needed = channel.decoder.width();
                let actual = reader.remaining(value_offset);
                if options.policy == PartialDecodePolicy::Strict {
                    return Err(DecodeError::Truncated {
                        field: channel.field,
                        offset: value_offset,
                        needed,
                        actual,
                    });
                }
                debug!(
                    field = channel.field,
                    needed, actual, "truncated channel value; stopping decode"
                );
                break;
            }
            Err(err) => return Err(err.into()),
        };

        trace!(field = channel.field, ?value, "decoded channel");
        if telemetry.insert(channel.field, value).is_some() {
            debug!(field = channel.field, "channel repeated; keeping last value");
        }
        offset = value_offset + channel.decoder.width();
    }

    Ok(telemetry)
}
