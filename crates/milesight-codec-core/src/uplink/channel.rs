use crate::buffer::{BufferError, PayloadReader};
use crate::domain::EnumDomain;
use crate::telemetry::TelemetryValue;

/// How the value bytes following a channel header are turned into a reading.
#[derive(Debug, Clone, Copy)]
pub enum FieldDecoder {
    /// Unsigned little-endian integer of `width` bytes divided by `scale`.
    Unsigned { width: usize, scale: u32 },
    /// Two's-complement little-endian integer of `width` bytes divided by `scale`.
    Signed { width: usize, scale: u32 },
    /// One byte looked up in an enum domain.
    Enum(&'static EnumDomain),
}

impl FieldDecoder {
    pub fn width(&self) -> usize {
        match self {
            FieldDecoder::Unsigned { width, .. } | FieldDecoder::Signed { width, .. } => *width,
            FieldDecoder::Enum(_) => 1,
        }
    }

    pub fn decode(
        &self,
        reader: &PayloadReader<'_>,
        offset: usize,
    ) -> Result<TelemetryValue, BufferError> {
        match self {
            FieldDecoder::Unsigned { width, scale } => {
                let raw = match width {
                    1 => i64::from(reader.read_u8(offset)?),
                    2 => i64::from(reader.read_u16_le(offset)?),
                    _ => i64::from(reader.read_u32_le(offset)?),
                };
                Ok(scaled(raw, *scale))
            }
            FieldDecoder::Signed { width, scale } => {
                let raw = match width {
                    1 => i64::from(reader.read_i8(offset)?),
                    2 => i64::from(reader.read_i16_le(offset)?),
                    _ => i64::from(reader.read_i32_le(offset)?),
                };
                Ok(scaled(raw, *scale))
            }
            FieldDecoder::Enum(domain) => {
                let code = i64::from(reader.read_u8(offset)?);
                Ok(TelemetryValue::Label(domain.label_or_unknown(code)))
            }
        }
    }
}

fn scaled(raw: i64, scale: u32) -> TelemetryValue {
    if scale <= 1 {
        TelemetryValue::Integer(raw)
    } else {
        TelemetryValue::Decimal { raw, scale }
    }
}

/// One entry of a device's uplink channel table.
#[derive(Debug, Clone, Copy)]
pub struct ChannelDescriptor {
    pub id: u8,
    pub kind: u8,
    pub field: &'static str,
    pub decoder: FieldDecoder,
}

impl ChannelDescriptor {
    pub fn matches(&self, id: u8, kind: u8) -> bool {
        self.id == id && self.kind == kind
    }
}

pub fn lookup_channel(
    channels: &'static [ChannelDescriptor],
    id: u8,
    kind: u8,
) -> Option<&'static ChannelDescriptor> {
    channels.iter().find(|channel| channel.matches(id, kind))
}
