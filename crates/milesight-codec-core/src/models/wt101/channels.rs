use super::domains;
use super::layout;
use crate::uplink::{ChannelDescriptor, FieldDecoder};

const fn channel(pair: (u8, u8), field: &'static str, decoder: FieldDecoder) -> ChannelDescriptor {
    ChannelDescriptor {
        id: pair.0,
        kind: pair.1,
        field,
        decoder,
    }
}

const U8: FieldDecoder = FieldDecoder::Unsigned { width: 1, scale: 1 };
const U16: FieldDecoder = FieldDecoder::Unsigned { width: 2, scale: 1 };
const DECICELSIUS: FieldDecoder = FieldDecoder::Signed {
    width: 2,
    scale: layout::TEMPERATURE_SCALE,
};

pub static CHANNELS: [ChannelDescriptor; 10] = [
    channel(layout::BATTERY, "battery", U8),
    channel(layout::TEMPERATURE, "temperature", DECICELSIUS),
    channel(layout::TARGET_TEMPERATURE, "target_temperature", DECICELSIUS),
    channel(layout::VALVE_OPENING, "valve_opening", U8),
    channel(
        layout::TAMPER_STATUS,
        "tamper_status",
        FieldDecoder::Enum(&domains::TAMPER_STATUS),
    ),
    channel(
        layout::WINDOW_DETECTION,
        "window_detection",
        FieldDecoder::Enum(&domains::WINDOW_DETECTION),
    ),
    channel(
        layout::MOTOR_CALIBRATION_RESULT,
        "motor_calibration_result",
        FieldDecoder::Enum(&domains::MOTOR_CALIBRATION_RESULT),
    ),
    channel(layout::MOTOR_STROKE, "motor_stroke", U16),
    channel(
        layout::FREEZE_PROTECTION,
        "freeze_protection",
        FieldDecoder::Enum(&domains::FREEZE_PROTECTION),
    ),
    channel(layout::MOTOR_POSITION, "motor_position", U16),
];

#[cfg(test)]
mod tests {
    use super::CHANNELS;
    use crate::telemetry::TelemetryValue;
    use crate::uplink::{DecodeOptions, decode_channels};

    fn decode_one(payload: &[u8]) -> (&'static str, TelemetryValue) {
        let telemetry = decode_channels(&CHANNELS, payload, &DecodeOptions::strict()).unwrap();
        assert_eq!(telemetry.len(), 1, "payload {payload:02X?}");
        let (field, value) = telemetry.iter().next().unwrap();
        (field, *value)
    }

    #[test]
    fn every_channel_decodes_alone() {
        let cases: [(&[u8], &str, TelemetryValue); 10] = [
            (&[0x01, 0x75, 0x64], "battery", TelemetryValue::Integer(100)),
            (
                &[0x03, 0x67, 0xE8, 0x03],
                "temperature",
                TelemetryValue::Decimal { raw: 1000, scale: 10 },
            ),
            (
                &[0x04, 0x67, 0xD2, 0x00],
                "target_temperature",
                TelemetryValue::Decimal { raw: 210, scale: 10 },
            ),
            (&[0x05, 0x92, 0x32], "valve_opening", TelemetryValue::Integer(50)),
            (
                &[0x06, 0x00, 0x01],
                "tamper_status",
                TelemetryValue::Label("uninstalled"),
            ),
            (
                &[0x07, 0x00, 0x00],
                "window_detection",
                TelemetryValue::Label("normal"),
            ),
            (
                &[0x08, 0xE5, 0x04],
                "motor_calibration_result",
                TelemetryValue::Label("temperature control disabled"),
            ),
            (&[0x09, 0x90, 0x2C, 0x01], "motor_stroke", TelemetryValue::Integer(300)),
            (
                &[0x0A, 0x00, 0x01],
                "freeze_protection",
                TelemetryValue::Label("triggered"),
            ),
            (&[0x0B, 0x90, 0x96, 0x00], "motor_position", TelemetryValue::Integer(150)),
        ];

        for (payload, field, expected) in cases {
            assert_eq!(decode_one(payload), (field, expected));
        }
    }

    #[test]
    fn negative_temperature() {
        let (_, value) = decode_one(&[0x03, 0x67, 0xC9, 0xFF]);
        assert_eq!(value.as_f64(), Some(-5.5));
    }

    #[test]
    fn table_pairs_are_unique() {
        for (index, channel) in CHANNELS.iter().enumerate() {
            assert!(
                CHANNELS[index + 1..]
                    .iter()
                    .all(|other| !other.matches(channel.id, channel.kind)),
                "duplicate channel {:02X} {:02X}",
                channel.id,
                channel.kind
            );
        }
    }
}
