use serde_json::{Map, Value};

use super::domains;
use super::layout;
use super::schedule;
use crate::buffer::PayloadWriter;
use crate::domain::EnumDomain;
use crate::downlink::value::{self, CommandObject, I8_RANGE, I16_RANGE, U16_RANGE};
use crate::downlink::{CommandDescriptor, EncodeError};

type Command<'a> = &'a Map<String, Value>;

/// WT101 command table. Order is the order frames appear in the downlink.
pub static COMMANDS: [CommandDescriptor; 29] = [
    CommandDescriptor::new("reboot", reboot),
    CommandDescriptor::new("report_status", report_status),
    CommandDescriptor::new("report_heating_date", report_heating_date),
    CommandDescriptor::new("report_heating_schedule", report_heating_schedule),
    CommandDescriptor::new("sync_time", sync_time),
    CommandDescriptor::new("report_interval", report_interval),
    CommandDescriptor::new("time_zone", schedule::time_zone),
    CommandDescriptor::new("time_sync_enable", time_sync_enable),
    CommandDescriptor::new("temperature_calibration_settings", temperature_calibration),
    CommandDescriptor::new("temperature_control", temperature_control),
    CommandDescriptor::with_companions(
        "target_temperature",
        &["temperature_tolerance"],
        target_temperature,
    ),
    CommandDescriptor::new("target_temperature_range", target_temperature_range),
    CommandDescriptor::new("open_window_detection", open_window_detection),
    CommandDescriptor::new("restore_open_window_detection", restore_open_window_detection),
    CommandDescriptor::new("valve_opening", valve_opening),
    CommandDescriptor::new("valve_calibration", valve_calibration),
    CommandDescriptor::new("valve_control_algorithm", valve_control_algorithm),
    CommandDescriptor::new("freeze_protection_config", freeze_protection),
    CommandDescriptor::new("child_lock_config", child_lock),
    CommandDescriptor::new("offline_control_mode", offline_control_mode),
    CommandDescriptor::new("outside_temperature", outside_temperature),
    CommandDescriptor::new("outside_temperature_control", outside_temperature_control),
    CommandDescriptor::new("display_ambient_temperature", display_ambient_temperature),
    CommandDescriptor::new(
        "window_detection_valve_strategy",
        window_detection_valve_strategy,
    ),
    CommandDescriptor::new("dst_config", schedule::dst_config),
    CommandDescriptor::new("effective_stroke", effective_stroke),
    CommandDescriptor::new("heating_date", schedule::heating_date),
    CommandDescriptor::new("heating_schedule", schedule::heating_schedule),
    CommandDescriptor::new("change_report_enable", change_report_enable),
];

/// Yes/no command: "yes" sends `frame`, "no" sends nothing.
fn trigger(value: &Value, field: &str, frame: &[u8]) -> Result<Vec<u8>, EncodeError> {
    if value::enum_code(value, field, &domains::YES_NO)? == 0 {
        return Ok(Vec::new());
    }
    Ok(frame.to_vec())
}

/// Two-byte opcode followed by one enum code byte.
fn enum_setting(
    value: &Value,
    field: &str,
    domain: &EnumDomain,
    opcode: [u8; 2],
) -> Result<Vec<u8>, EncodeError> {
    let code = value::enum_code(value, field, domain)?;
    let mut writer = PayloadWriter::new(layout::ENUM_SETTING_LEN);
    writer.write_bytes(&opcode)?;
    writer.write_u8(code)?;
    Ok(writer.into_bytes()?)
}

fn reboot(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    trigger(value, "reboot", &layout::REBOOT)
}

fn report_status(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    trigger(value, "report_status", &layout::REPORT_STATUS)
}

fn report_heating_date(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    trigger(value, "report_heating_date", &layout::REPORT_HEATING_DATE)
}

fn report_heating_schedule(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    trigger(value, "report_heating_schedule", &layout::REPORT_HEATING_SCHEDULE)
}

fn sync_time(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    trigger(value, "sync_time", &layout::SYNC_TIME)
}

fn restore_open_window_detection(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    trigger(
        value,
        "restore_open_window_detection",
        &layout::RESTORE_OPEN_WINDOW_DETECTION,
    )
}

fn valve_calibration(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    trigger(value, "valve_calibration", &layout::VALVE_CALIBRATION)
}

fn report_interval(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    let minutes = value::integer(value, "report_interval", domains::REPORT_INTERVAL_MINUTES)?;
    let mut writer = PayloadWriter::new(layout::REPORT_INTERVAL_LEN);
    writer.write_bytes(&layout::REPORT_INTERVAL)?;
    writer.write_u16_le(minutes)?;
    Ok(writer.into_bytes()?)
}

fn time_sync_enable(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    enum_setting(
        value,
        "time_sync_enable",
        &domains::TIME_SYNC_ENABLE,
        layout::TIME_SYNC_ENABLE,
    )
}

fn temperature_calibration(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    let fields = CommandObject::new(value, "temperature_calibration_settings")?;
    let enable = fields.enum_code("enable", &domains::ENABLE)?;
    let calibration = fields.scaled_if(
        enable != 0,
        "calibration_value",
        layout::TEMPERATURE_SCALE,
        I16_RANGE,
    )?;

    let mut writer = PayloadWriter::new(layout::TEMPERATURE_CALIBRATION_LEN);
    writer.write_bytes(&layout::TEMPERATURE_CALIBRATION)?;
    writer.write_u8(enable)?;
    writer.write_i16_le(calibration)?;
    Ok(writer.into_bytes()?)
}

/// `enable` and `mode` are independent settings; each present one is sent,
/// enable first.
fn temperature_control(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    let fields = CommandObject::new(value, "temperature_control")?;
    let mut encoded = Vec::new();
    if let Some(enable) = fields.get("enable") {
        encoded.extend(enum_setting(
            enable,
            &fields.path("enable"),
            &domains::ENABLE,
            layout::TEMPERATURE_CONTROL_ENABLE,
        )?);
    }
    if let Some(mode) = fields.get("mode") {
        encoded.extend(enum_setting(
            mode,
            &fields.path("mode"),
            &domains::TEMPERATURE_CONTROL_MODE,
            layout::TEMPERATURE_CONTROL_MODE,
        )?);
    }
    Ok(encoded)
}

fn target_temperature(value: &Value, command: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    let temperature = value::integer(value, "target_temperature", I8_RANGE)?;
    let tolerance = value::scaled(
        value::required(command, "temperature_tolerance", || {
            value::describe_range(&U16_RANGE, layout::TEMPERATURE_SCALE)
        })?,
        "temperature_tolerance",
        layout::TEMPERATURE_SCALE,
        U16_RANGE,
    )?;

    let mut writer = PayloadWriter::new(layout::TARGET_TEMPERATURE_SET_LEN);
    writer.write_bytes(&layout::TARGET_TEMPERATURE_SET)?;
    writer.write_i8(temperature)?;
    writer.write_u16_le(tolerance)?;
    Ok(writer.into_bytes()?)
}

fn target_temperature_range(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    let fields = CommandObject::new(value, "target_temperature_range")?;
    let min = fields.integer("min", domains::TARGET_TEMPERATURE_MIN)?;
    let max = fields.integer("max", domains::TARGET_TEMPERATURE_MAX)?;

    let mut writer = PayloadWriter::new(layout::TARGET_TEMPERATURE_RANGE_LEN);
    writer.write_bytes(&layout::TARGET_TEMPERATURE_RANGE)?;
    writer.write_u8(min)?;
    writer.write_u8(max)?;
    Ok(writer.into_bytes()?)
}

fn open_window_detection(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    let fields = CommandObject::new(value, "open_window_detection")?;
    let enable = fields.enum_code("enable", &domains::ENABLE)?;
    let enabled = enable != 0;
    let threshold = fields.scaled_if(
        enabled,
        "temperature_threshold",
        layout::TEMPERATURE_SCALE,
        I8_RANGE,
    )?;
    let minutes = fields.integer_if(enabled, "time", U16_RANGE)?;

    let mut writer = PayloadWriter::new(layout::OPEN_WINDOW_DETECTION_LEN);
    writer.write_bytes(&layout::OPEN_WINDOW_DETECTION)?;
    writer.write_u8(enable)?;
    writer.write_i8(threshold)?;
    writer.write_u16_le(minutes)?;
    Ok(writer.into_bytes()?)
}

fn valve_opening(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    let percent = value::integer(value, "valve_opening", domains::PERCENT)?;
    let mut writer = PayloadWriter::new(layout::ENUM_SETTING_LEN);
    writer.write_bytes(&layout::VALVE_OPENING_SET)?;
    writer.write_u8(percent)?;
    Ok(writer.into_bytes()?)
}

fn valve_control_algorithm(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    enum_setting(
        value,
        "valve_control_algorithm",
        &domains::VALVE_CONTROL_ALGORITHM,
        layout::VALVE_CONTROL_ALGORITHM,
    )
}

fn freeze_protection(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    let fields = CommandObject::new(value, "freeze_protection_config")?;
    let enable = fields.enum_code("enable", &domains::ENABLE)?;
    let temperature = fields.scaled_if(
        enable != 0,
        "temperature",
        layout::TEMPERATURE_SCALE,
        I16_RANGE,
    )?;

    let mut writer = PayloadWriter::new(layout::FREEZE_PROTECTION_CONFIG_LEN);
    writer.write_bytes(&layout::FREEZE_PROTECTION_CONFIG)?;
    writer.write_u8(enable)?;
    writer.write_i16_le(temperature)?;
    Ok(writer.into_bytes()?)
}

fn child_lock(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    let fields = CommandObject::new(value, "child_lock_config")?;
    enum_setting(
        fields.require("enable", || domains::ENABLE.describe())?,
        &fields.path("enable"),
        &domains::ENABLE,
        layout::CHILD_LOCK,
    )
}

fn offline_control_mode(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    enum_setting(
        value,
        "offline_control_mode",
        &domains::OFFLINE_CONTROL_MODE,
        layout::OFFLINE_CONTROL_MODE,
    )
}

fn outside_temperature(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    let temperature = value::scaled(
        value,
        "outside_temperature",
        layout::TEMPERATURE_SCALE,
        I16_RANGE,
    )?;
    let mut writer = PayloadWriter::new(layout::OUTSIDE_TEMPERATURE_LEN);
    writer.write_bytes(&layout::OUTSIDE_TEMPERATURE)?;
    writer.write_i16_le(temperature)?;
    writer.write_u8(i64::from(layout::OUTSIDE_TEMPERATURE_TRAILER))?;
    Ok(writer.into_bytes()?)
}

fn outside_temperature_control(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    let fields = CommandObject::new(value, "outside_temperature_control")?;
    let enable = fields.enum_code("enable", &domains::ENABLE)?;
    let timeout = fields.integer_if(enable != 0, "timeout", domains::OUTSIDE_TEMPERATURE_TIMEOUT)?;

    let mut writer = PayloadWriter::new(layout::OUTSIDE_TEMPERATURE_CONTROL_LEN);
    writer.write_bytes(&layout::OUTSIDE_TEMPERATURE_CONTROL)?;
    writer.write_u8(enable)?;
    writer.write_u8(timeout)?;
    Ok(writer.into_bytes()?)
}

fn display_ambient_temperature(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    enum_setting(
        value,
        "display_ambient_temperature",
        &domains::ENABLE,
        layout::DISPLAY_AMBIENT_TEMPERATURE,
    )
}

fn window_detection_valve_strategy(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    enum_setting(
        value,
        "window_detection_valve_strategy",
        &domains::WINDOW_DETECTION_VALVE_STRATEGY,
        layout::WINDOW_DETECTION_VALVE_STRATEGY,
    )
}

fn effective_stroke(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    let fields = CommandObject::new(value, "effective_stroke")?;
    let enable = fields.enum_code("enable", &domains::ENABLE)?;
    let rate = fields.integer_if(enable != 0, "rate", domains::PERCENT)?;

    let mut writer = PayloadWriter::new(layout::EFFECTIVE_STROKE_LEN);
    writer.write_bytes(&layout::EFFECTIVE_STROKE)?;
    writer.write_u8(enable)?;
    writer.write_u8(rate)?;
    Ok(writer.into_bytes()?)
}

fn change_report_enable(value: &Value, _: Command<'_>) -> Result<Vec<u8>, EncodeError> {
    enum_setting(
        value,
        "change_report_enable",
        &domains::ENABLE,
        layout::CHANGE_REPORT_ENABLE,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::COMMANDS;
    use crate::downlink::{EncodeError, FieldError, encode_command};

    fn encode(command: Value) -> Result<Vec<u8>, EncodeError> {
        encode_command(&COMMANDS, &command)
    }

    fn field_of(command: Value) -> String {
        encode(command)
            .unwrap_err()
            .field_name()
            .expect("validation error")
            .to_string()
    }

    #[test]
    fn triggers_send_fixed_frames_only_when_yes() {
        assert_eq!(encode(json!({"reboot": 1})).unwrap(), vec![0xFF, 0x10, 0xFF]);
        assert!(encode(json!({"reboot": 0})).unwrap().is_empty());
        assert_eq!(encode(json!({"reboot": "yes"})).unwrap(), vec![0xFF, 0x10, 0xFF]);
        assert_eq!(
            encode(json!({"report_heating_schedule": 1})).unwrap(),
            vec![0xFF, 0x28, 0x02]
        );
        assert_eq!(encode(json!({"sync_time": 1})).unwrap(), vec![0xFF, 0x4A, 0xFF]);
        assert_eq!(
            encode(json!({"valve_calibration": 1, "restore_open_window_detection": 1})).unwrap(),
            vec![0xFF, 0x57, 0xFF, 0xFF, 0xAD, 0xFF]
        );
    }

    /// Keys whose values are plain numbers with no enum part.
    const NUMERIC_ONLY: [&str; 5] = [
        "report_interval",
        "target_temperature",
        "target_temperature_range",
        "valve_opening",
        "outside_temperature",
    ];

    fn out_of_set_cases() -> Vec<(Value, &'static str)> {
        vec![
            (json!({"reboot": 2}), "reboot"),
            (json!({"report_status": "maybe"}), "report_status"),
            (json!({"report_heating_date": 2}), "report_heating_date"),
            (json!({"report_heating_schedule": -1}), "report_heating_schedule"),
            (json!({"sync_time": 1.5}), "sync_time"),
            (json!({"time_zone": 481}), "time_zone"),
            (json!({"time_sync_enable": 1}), "time_sync_enable"),
            (
                json!({"temperature_calibration_settings": {"enable": 2}}),
                "temperature_calibration_settings.enable",
            ),
            (json!({"temperature_control": {"enable": 2}}), "temperature_control.enable"),
            (json!({"temperature_control": {"mode": 2}}), "temperature_control.mode"),
            (json!({"open_window_detection": {"enable": "on"}}), "open_window_detection.enable"),
            (json!({"restore_open_window_detection": 2}), "restore_open_window_detection"),
            (json!({"valve_calibration": true}), "valve_calibration"),
            (json!({"valve_control_algorithm": "fuzzy"}), "valve_control_algorithm"),
            (
                json!({"freeze_protection_config": {"enable": 3}}),
                "freeze_protection_config.enable",
            ),
            (json!({"child_lock_config": {"enable": 2}}), "child_lock_config.enable"),
            (json!({"offline_control_mode": 3}), "offline_control_mode"),
            (
                json!({"outside_temperature_control": {"enable": -1}}),
                "outside_temperature_control.enable",
            ),
            (json!({"display_ambient_temperature": 2}), "display_ambient_temperature"),
            (json!({"window_detection_valve_strategy": -1}), "window_detection_valve_strategy"),
            (json!({"dst_config": {"enable": 2}}), "dst_config.enable"),
            (json!({"effective_stroke": {"enable": "yes"}}), "effective_stroke.enable"),
            (json!({"heating_date": {"enable": 2}}), "heating_date.enable"),
            (
                json!({"heating_schedule": [{"index": 1, "enable": 2}]}),
                "heating_schedule[0].enable",
            ),
            (
                json!({"heating_schedule": [{"index": 1, "enable": 0, "temperature_control_mode": 2}]}),
                "heating_schedule[0].temperature_control_mode",
            ),
            (
                json!({"heating_schedule": [{
                    "index": 1,
                    "enable": 0,
                    "temperature_control_mode": 0,
                    "week_recycle": {"monday": 2}
                }]}),
                "heating_schedule[0].week_recycle.monday",
            ),
            (json!({"change_report_enable": "on"}), "change_report_enable"),
        ]
    }

    #[test]
    fn enum_fields_reject_values_outside_their_set() {
        for (command, field) in out_of_set_cases() {
            let err = encode(command.clone()).unwrap_err();
            assert_eq!(err.field_name(), Some(field), "command {command}");
            assert!(
                matches!(
                    err,
                    EncodeError::FieldValidation {
                        reason: FieldError::NotInDomain { .. },
                        ..
                    }
                ),
                "command {command}: {err}"
            );
        }
    }

    #[test]
    fn every_enum_bearing_command_is_checked() {
        let cases = out_of_set_cases();
        for descriptor in COMMANDS
            .iter()
            .filter(|descriptor| !NUMERIC_ONLY.contains(&descriptor.key))
        {
            assert!(
                cases
                    .iter()
                    .any(|(command, _)| command.get(descriptor.key).is_some()),
                "no out-of-set case for {}",
                descriptor.key
            );
        }
    }

    #[test]
    fn report_interval_is_little_endian_minutes() {
        assert_eq!(
            encode(json!({"report_interval": 60})).unwrap(),
            vec![0xFF, 0x8E, 0x00, 0x3C, 0x00]
        );
        assert_eq!(
            encode(json!({"report_interval": 1440})).unwrap(),
            vec![0xFF, 0x8E, 0x00, 0xA0, 0x05]
        );
        assert_eq!(field_of(json!({"report_interval": 0})), "report_interval");
        assert_eq!(field_of(json!({"report_interval": 1441})), "report_interval");
    }

    #[test]
    fn enum_settings() {
        assert_eq!(
            encode(json!({"time_sync_enable": 2})).unwrap(),
            vec![0xFF, 0x3B, 0x02]
        );
        assert_eq!(
            encode(json!({"valve_control_algorithm": "pid"})).unwrap(),
            vec![0xFF, 0xAC, 0x01]
        );
        assert_eq!(
            encode(json!({"offline_control_mode": 2})).unwrap(),
            vec![0xFF, 0xF8, 0x02]
        );
        assert_eq!(
            encode(json!({"display_ambient_temperature": 1})).unwrap(),
            vec![0xF9, 0x36, 0x01]
        );
        assert_eq!(
            encode(json!({"window_detection_valve_strategy": "close"})).unwrap(),
            vec![0xF9, 0x37, 0x01]
        );
        assert_eq!(
            encode(json!({"change_report_enable": 0})).unwrap(),
            vec![0xF9, 0x3A, 0x00]
        );
    }

    #[test]
    fn temperature_control_sends_enable_then_mode() {
        assert_eq!(
            encode(json!({"temperature_control": {"mode": "manual", "enable": 1}})).unwrap(),
            vec![0xFF, 0xB3, 0x01, 0xFF, 0xAE, 0x01]
        );
        assert!(encode(json!({"temperature_control": {}})).unwrap().is_empty());
        assert_eq!(field_of(json!({"temperature_control": 1})), "temperature_control");
    }

    #[test]
    fn temperature_calibration_scales_signed_value() {
        assert_eq!(
            encode(json!({"temperature_calibration_settings": {"enable": 1, "calibration_value": -1.5}}))
                .unwrap(),
            vec![0xFF, 0xAB, 0x01, 0xF1, 0xFF]
        );
        assert_eq!(
            encode(json!({"temperature_calibration_settings": {"enable": 0}})).unwrap(),
            vec![0xFF, 0xAB, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            field_of(json!({"temperature_calibration_settings": {"enable": 1}})),
            "temperature_calibration_settings.calibration_value"
        );
    }

    #[test]
    fn scaled_values_truncate_toward_zero() {
        assert_eq!(
            encode(json!({"temperature_calibration_settings": {"enable": 1, "calibration_value": 2.35}}))
                .unwrap(),
            vec![0xFF, 0xAB, 0x01, 0x17, 0x00]
        );
        assert_eq!(
            encode(json!({"target_temperature": 21, "temperature_tolerance": 0.55})).unwrap(),
            vec![0xFF, 0xB1, 0x15, 0x05, 0x00]
        );
        assert_eq!(
            encode(json!({"outside_temperature": -1.55})).unwrap(),
            vec![0x03, 0xF1, 0xFF, 0xFF]
        );
    }

    #[test]
    fn target_temperature_requires_tolerance() {
        assert_eq!(
            encode(json!({"target_temperature": 21, "temperature_tolerance": 1})).unwrap(),
            vec![0xFF, 0xB1, 0x15, 0x0A, 0x00]
        );
        assert_eq!(
            encode(json!({"target_temperature": -5, "temperature_tolerance": 0.5})).unwrap(),
            vec![0xFF, 0xB1, 0xFB, 0x05, 0x00]
        );
        let err = encode(json!({"target_temperature": 21})).unwrap_err();
        assert_eq!(
            err,
            EncodeError::field(
                "temperature_tolerance",
                FieldError::Missing {
                    allowed: "0..=6553.5".to_string()
                }
            )
        );
        assert_eq!(
            field_of(json!({"target_temperature": 300, "temperature_tolerance": 1})),
            "target_temperature"
        );
    }

    #[test]
    fn target_temperature_range_bounds() {
        assert_eq!(
            encode(json!({"target_temperature_range": {"min": 10, "max": 25}})).unwrap(),
            vec![0xF9, 0x35, 0x0A, 0x19]
        );
        assert_eq!(
            field_of(json!({"target_temperature_range": {"min": 4, "max": 25}})),
            "target_temperature_range.min"
        );
        assert_eq!(
            field_of(json!({"target_temperature_range": {"min": 5, "max": 36}})),
            "target_temperature_range.max"
        );
    }

    #[test]
    fn open_window_detection_zeroes_companions_when_disabled() {
        assert_eq!(
            encode(json!({"open_window_detection": {"enable": 1, "temperature_threshold": 3, "time": 20}}))
                .unwrap(),
            vec![0xFF, 0xAF, 0x01, 0x1E, 0x14, 0x00]
        );
        assert_eq!(
            encode(json!({"open_window_detection": {"enable": 0, "temperature_threshold": 3, "time": 20}}))
                .unwrap(),
            vec![0xFF, 0xAF, 0x00, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            field_of(json!({"open_window_detection": {"enable": 1, "temperature_threshold": 3}})),
            "open_window_detection.time"
        );
    }

    #[test]
    fn valve_opening_is_a_percentage() {
        assert_eq!(
            encode(json!({"valve_opening": 50})).unwrap(),
            vec![0xFF, 0xB4, 0x32]
        );
        assert_eq!(field_of(json!({"valve_opening": 101})), "valve_opening");
    }

    #[test]
    fn freeze_protection_and_child_lock() {
        assert_eq!(
            encode(json!({"freeze_protection_config": {"enable": 1, "temperature": 5}})).unwrap(),
            vec![0xFF, 0xB0, 0x01, 0x32, 0x00]
        );
        assert_eq!(
            encode(json!({"child_lock_config": {"enable": 1}})).unwrap(),
            vec![0xFF, 0x25, 0x01]
        );
        assert_eq!(
            field_of(json!({"child_lock_config": {}})),
            "child_lock_config.enable"
        );
    }

    #[test]
    fn outside_temperature_frames() {
        assert_eq!(
            encode(json!({"outside_temperature": 12.3})).unwrap(),
            vec![0x03, 0x7B, 0x00, 0xFF]
        );
        assert_eq!(
            encode(json!({"outside_temperature_control": {"enable": 1, "timeout": 10}})).unwrap(),
            vec![0xFF, 0xC4, 0x01, 0x0A]
        );
        assert_eq!(
            field_of(json!({"outside_temperature_control": {"enable": 1, "timeout": 2}})),
            "outside_temperature_control.timeout"
        );
    }

    #[test]
    fn effective_stroke_rate() {
        assert_eq!(
            encode(json!({"effective_stroke": {"enable": 1, "rate": 80}})).unwrap(),
            vec![0xF9, 0x38, 0x01, 0x50]
        );
        assert_eq!(
            field_of(json!({"effective_stroke": {"enable": 1, "rate": 120}})),
            "effective_stroke.rate"
        );
    }

    #[test]
    fn independent_keys_concatenate_in_table_order() {
        assert_eq!(
            encode(json!({"report_status": 1, "reboot": 1})).unwrap(),
            vec![0xFF, 0x10, 0xFF, 0xFF, 0x28, 0x00]
        );
    }

    #[test]
    fn table_keys_are_unique() {
        for (index, descriptor) in COMMANDS.iter().enumerate() {
            assert!(
                COMMANDS[index + 1..]
                    .iter()
                    .all(|other| other.key != descriptor.key),
                "duplicate command {}",
                descriptor.key
            );
        }
    }
}
