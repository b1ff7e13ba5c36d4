//! WT101 wire constants. Channel pairs and opcodes are fixed by the device
//! firmware and must match bit for bit.

// Uplink channels: (channel id, channel type).
pub const BATTERY: (u8, u8) = (0x01, 0x75);
pub const TEMPERATURE: (u8, u8) = (0x03, 0x67);
pub const TARGET_TEMPERATURE: (u8, u8) = (0x04, 0x67);
pub const VALVE_OPENING: (u8, u8) = (0x05, 0x92);
pub const TAMPER_STATUS: (u8, u8) = (0x06, 0x00);
pub const WINDOW_DETECTION: (u8, u8) = (0x07, 0x00);
pub const MOTOR_CALIBRATION_RESULT: (u8, u8) = (0x08, 0xE5);
pub const MOTOR_STROKE: (u8, u8) = (0x09, 0x90);
pub const FREEZE_PROTECTION: (u8, u8) = (0x0A, 0x00);
pub const MOTOR_POSITION: (u8, u8) = (0x0B, 0x90);

/// Decicelsius on the wire.
pub const TEMPERATURE_SCALE: u32 = 10;

// Downlink trigger frames, sent as-is when the command value is "yes".
pub const REBOOT: [u8; 3] = [0xFF, 0x10, 0xFF];
pub const REPORT_STATUS: [u8; 3] = [0xFF, 0x28, 0x00];
pub const REPORT_HEATING_DATE: [u8; 3] = [0xFF, 0x28, 0x01];
pub const REPORT_HEATING_SCHEDULE: [u8; 3] = [0xFF, 0x28, 0x02];
pub const SYNC_TIME: [u8; 3] = [0xFF, 0x4A, 0xFF];
pub const RESTORE_OPEN_WINDOW_DETECTION: [u8; 3] = [0xFF, 0x57, 0xFF];
pub const VALVE_CALIBRATION: [u8; 3] = [0xFF, 0xAD, 0xFF];

// Downlink opcodes followed by a payload.
pub const REPORT_INTERVAL: [u8; 3] = [0xFF, 0x8E, 0x00];
pub const TIME_ZONE: [u8; 2] = [0xFF, 0xBD];
pub const TIME_SYNC_ENABLE: [u8; 2] = [0xFF, 0x3B];
pub const TEMPERATURE_CALIBRATION: [u8; 2] = [0xFF, 0xAB];
pub const TEMPERATURE_CONTROL_ENABLE: [u8; 2] = [0xFF, 0xB3];
pub const TEMPERATURE_CONTROL_MODE: [u8; 2] = [0xFF, 0xAE];
pub const TARGET_TEMPERATURE_SET: [u8; 2] = [0xFF, 0xB1];
pub const TARGET_TEMPERATURE_RANGE: [u8; 2] = [0xF9, 0x35];
pub const OPEN_WINDOW_DETECTION: [u8; 2] = [0xFF, 0xAF];
pub const VALVE_OPENING_SET: [u8; 2] = [0xFF, 0xB4];
pub const VALVE_CONTROL_ALGORITHM: [u8; 2] = [0xFF, 0xAC];
pub const FREEZE_PROTECTION_CONFIG: [u8; 2] = [0xFF, 0xB0];
pub const CHILD_LOCK: [u8; 2] = [0xFF, 0x25];
pub const OFFLINE_CONTROL_MODE: [u8; 2] = [0xFF, 0xF8];
pub const OUTSIDE_TEMPERATURE: [u8; 1] = [0x03];
pub const OUTSIDE_TEMPERATURE_TRAILER: u8 = 0xFF;
pub const OUTSIDE_TEMPERATURE_CONTROL: [u8; 2] = [0xFF, 0xC4];
pub const DISPLAY_AMBIENT_TEMPERATURE: [u8; 2] = [0xF9, 0x36];
pub const WINDOW_DETECTION_VALVE_STRATEGY: [u8; 2] = [0xF9, 0x37];
pub const DST_CONFIG: [u8; 2] = [0xFF, 0xBA];
pub const EFFECTIVE_STROKE: [u8; 2] = [0xF9, 0x38];
pub const HEATING_DATE: [u8; 2] = [0xF9, 0x33];
pub const HEATING_SCHEDULE: [u8; 2] = [0xF9, 0x34];
pub const CHANGE_REPORT_ENABLE: [u8; 2] = [0xF9, 0x3A];

// Frame lengths, opcode included.
pub const ENUM_SETTING_LEN: usize = 3;
pub const REPORT_INTERVAL_LEN: usize = 5;
pub const TIME_ZONE_LEN: usize = 4;
pub const TEMPERATURE_CALIBRATION_LEN: usize = 5;
pub const TARGET_TEMPERATURE_SET_LEN: usize = 5;
pub const TARGET_TEMPERATURE_RANGE_LEN: usize = 4;
pub const OPEN_WINDOW_DETECTION_LEN: usize = 6;
pub const FREEZE_PROTECTION_CONFIG_LEN: usize = 5;
pub const OUTSIDE_TEMPERATURE_LEN: usize = 4;
pub const OUTSIDE_TEMPERATURE_CONTROL_LEN: usize = 4;
pub const DST_CONFIG_LEN: usize = 12;
pub const EFFECTIVE_STROKE_LEN: usize = 4;
pub const HEATING_DATE_LEN: usize = 9;
pub const HEATING_SCHEDULE_LEN: usize = 11;

/// Heating schedule weekday bits: Monday is bit 1 through Sunday at bit 7.
pub const WEEK_RECYCLE_BITS: [(&str, u32); 7] = [
    ("monday", 1),
    ("tuesday", 2),
    ("wednesday", 3),
    ("thursday", 4),
    ("friday", 5),
    ("saturday", 6),
    ("sunday", 7),
];
