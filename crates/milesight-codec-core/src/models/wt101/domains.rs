use std::ops::RangeInclusive;

use crate::domain::EnumDomain;

// Uplink labels.
pub static TAMPER_STATUS: EnumDomain =
    EnumDomain::new("tamper_status", &[(0, "installed"), (1, "uninstalled")]);

pub static WINDOW_DETECTION: EnumDomain =
    EnumDomain::new("window_detection", &[(0, "normal"), (1, "open")]);

pub static MOTOR_CALIBRATION_RESULT: EnumDomain = EnumDomain::new(
    "motor_calibration_result",
    &[
        (0, "success"),
        (1, "fail: out of range"),
        (2, "fail: uninstalled"),
        (3, "calibration cleared"),
        (4, "temperature control disabled"),
    ],
);

pub static FREEZE_PROTECTION: EnumDomain =
    EnumDomain::new("freeze_protection", &[(0, "normal"), (1, "triggered")]);

// Downlink value sets.
pub static YES_NO: EnumDomain = EnumDomain::new("yes_no", &[(0, "no"), (1, "yes")]);

pub static ENABLE: EnumDomain = EnumDomain::new("enable", &[(0, "disable"), (1, "enable")]);

pub static TIME_SYNC_ENABLE: EnumDomain =
    EnumDomain::new("time_sync_enable", &[(0, "disable"), (2, "enable")]);

pub static TEMPERATURE_CONTROL_MODE: EnumDomain =
    EnumDomain::new("temperature_control_mode", &[(0, "auto"), (1, "manual")]);

pub static VALVE_CONTROL_ALGORITHM: EnumDomain =
    EnumDomain::new("valve_control_algorithm", &[(0, "rate"), (1, "pid")]);

pub static OFFLINE_CONTROL_MODE: EnumDomain = EnumDomain::new(
    "offline_control_mode",
    &[(0, "keep"), (1, "embedded temperature control"), (2, "off")],
);

pub static WINDOW_DETECTION_VALVE_STRATEGY: EnumDomain = EnumDomain::new(
    "window_detection_valve_strategy",
    &[(0, "keep"), (1, "close")],
);

/// UTC offsets in minutes.
pub static TIME_ZONE: EnumDomain = EnumDomain::new(
    "time_zone",
    &[
        (-720, "UTC-12"),
        (-660, "UTC-11"),
        (-600, "UTC-10"),
        (-570, "UTC-9:30"),
        (-540, "UTC-9"),
        (-480, "UTC-8"),
        (-420, "UTC-7"),
        (-360, "UTC-6"),
        (-300, "UTC-5"),
        (-240, "UTC-4"),
        (-210, "UTC-3:30"),
        (-180, "UTC-3"),
        (-120, "UTC-2"),
        (-60, "UTC-1"),
        (0, "UTC"),
        (60, "UTC+1"),
        (120, "UTC+2"),
        (180, "UTC+3"),
        (210, "UTC+3:30"),
        (240, "UTC+4"),
        (270, "UTC+4:30"),
        (300, "UTC+5"),
        (330, "UTC+5:30"),
        (345, "UTC+5:45"),
        (360, "UTC+6"),
        (390, "UTC+6:30"),
        (420, "UTC+7"),
        (480, "UTC+8"),
        (540, "UTC+9"),
        (570, "UTC+9:30"),
        (600, "UTC+10"),
        (630, "UTC+10:30"),
        (660, "UTC+11"),
        (720, "UTC+12"),
        (765, "UTC+12:45"),
        (780, "UTC+13"),
        (840, "UTC+14"),
    ],
);

// Numeric domains, inclusive.
pub const REPORT_INTERVAL_MINUTES: RangeInclusive<i64> = 1..=1440;
pub const PERCENT: RangeInclusive<i64> = 0..=100;
pub const TARGET_TEMPERATURE_MIN: RangeInclusive<i64> = 5..=15;
pub const TARGET_TEMPERATURE_MAX: RangeInclusive<i64> = 16..=35;
pub const OUTSIDE_TEMPERATURE_TIMEOUT: RangeInclusive<i64> = 3..=60;
pub const MONTH: RangeInclusive<i64> = 1..=12;
pub const DAY_OF_MONTH: RangeInclusive<i64> = 1..=31;
pub const WEEK_NUM: RangeInclusive<i64> = 1..=5;
pub const WEEK_DAY: RangeInclusive<i64> = 1..=7;
pub const SCHEDULE_INDEX: RangeInclusive<i64> = 1..=16;
