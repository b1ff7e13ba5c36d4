//! Clock and calendar commands: time zone, daylight saving, heating season
//! and the per-slot heating schedule.

use serde_json::{Map, Value};

use super::domains;
use super::layout;
use crate::buffer::PayloadWriter;
use crate::downlink::value::{self, CommandObject, I8_RANGE, U8_RANGE, U16_RANGE};
use crate::downlink::{EncodeError, FieldError};

pub(super) fn time_zone(value: &Value, _: &Map<String, Value>) -> Result<Vec<u8>, EncodeError> {
    let offset = value::enum_code(value, "time_zone", &domains::TIME_ZONE)?;
    let mut writer = PayloadWriter::new(layout::TIME_ZONE_LEN);
    writer.write_bytes(&layout::TIME_ZONE)?;
    writer.write_i16_le(offset)?;
    Ok(writer.into_bytes()?)
}

/// DST rule edge: month, `(week_num << 4) | week_day`, minutes after midnight.
struct DstEdge {
    month: i64,
    week: i64,
    minutes: i64,
}

impl DstEdge {
    fn read(fields: &CommandObject<'_>, enabled: bool, prefix: &str) -> Result<Self, EncodeError> {
        let month = fields.integer_if(enabled, &format!("{prefix}_month"), domains::MONTH)?;
        let week_num = fields.integer_if(enabled, &format!("{prefix}_week_num"), domains::WEEK_NUM)?;
        let week_day = fields.integer_if(enabled, &format!("{prefix}_week_day"), domains::WEEK_DAY)?;
        let minutes = fields.integer_if(enabled, &format!("{prefix}_time"), U16_RANGE)?;
        Ok(Self {
            month,
            week: (week_num << 4) | week_day,
            minutes,
        })
    }

    fn write(&self, writer: &mut PayloadWriter) -> Result<(), EncodeError> {
        writer.write_u8(self.month)?;
        writer.write_u8(self.week)?;
        writer.write_u16_le(self.minutes)?;
        Ok(())
    }
}

pub(super) fn dst_config(value: &Value, _: &Map<String, Value>) -> Result<Vec<u8>, EncodeError> {
    let fields = CommandObject::new(value, "dst_config")?;
    let enable = fields.enum_code("enable", &domains::ENABLE)?;
    let enabled = enable != 0;
    let offset = fields.integer_if(enabled, "offset", I8_RANGE)?;
    let start = DstEdge::read(&fields, enabled, "start")?;
    let end = DstEdge::read(&fields, enabled, "end")?;

    let mut writer = PayloadWriter::new(layout::DST_CONFIG_LEN);
    writer.write_bytes(&layout::DST_CONFIG)?;
    writer.write_u8(enable)?;
    writer.write_i8(offset)?;
    start.write(&mut writer)?;
    end.write(&mut writer)?;
    Ok(writer.into_bytes()?)
}

pub(super) fn heating_date(value: &Value, _: &Map<String, Value>) -> Result<Vec<u8>, EncodeError> {
    let fields = CommandObject::new(value, "heating_date")?;
    let enable = fields.enum_code("enable", &domains::ENABLE)?;
    let enabled = enable != 0;
    let interval = fields.integer_if(enabled, "report_interval", domains::REPORT_INTERVAL_MINUTES)?;
    let start_month = fields.integer_if(enabled, "start_month", domains::MONTH)?;
    let start_day = fields.integer_if(enabled, "start_day", domains::DAY_OF_MONTH)?;
    let end_month = fields.integer_if(enabled, "end_month", domains::MONTH)?;
    let end_day = fields.integer_if(enabled, "end_day", domains::DAY_OF_MONTH)?;

    let mut writer = PayloadWriter::new(layout::HEATING_DATE_LEN);
    writer.write_bytes(&layout::HEATING_DATE)?;
    writer.write_u8(enable)?;
    writer.write_u16_le(interval)?;
    writer.write_u8(start_month)?;
    writer.write_u8(start_day)?;
    writer.write_u8(end_month)?;
    writer.write_u8(end_day)?;
    Ok(writer.into_bytes()?)
}

/// One frame per array entry, in array order.
pub(super) fn heating_schedule(
    value: &Value,
    _: &Map<String, Value>,
) -> Result<Vec<u8>, EncodeError> {
    let entries = value.as_array().ok_or_else(|| {
        EncodeError::field(
            "heating_schedule",
            FieldError::NotAnArray {
                value: value.to_string(),
            },
        )
    })?;

    let mut encoded = Vec::with_capacity(entries.len() * layout::HEATING_SCHEDULE_LEN);
    for (position, entry) in entries.iter().enumerate() {
        let fields = CommandObject::new(entry, format!("heating_schedule[{position}]"))?;
        encoded.extend(schedule_entry(&fields)?);
    }
    Ok(encoded)
}

fn schedule_entry(fields: &CommandObject<'_>) -> Result<Vec<u8>, EncodeError> {
    let index = fields.integer("index", domains::SCHEDULE_INDEX)?;
    let enable = fields.enum_code("enable", &domains::ENABLE)?;
    let enabled = enable != 0;
    let mode = fields.enum_code("temperature_control_mode", &domains::TEMPERATURE_CONTROL_MODE)?;
    let target = fields.integer_if(enabled, "value", U8_RANGE)?;
    let interval = fields.integer_if(enabled, "report_interval", domains::REPORT_INTERVAL_MINUTES)?;
    let execute_time = fields.integer_if(enabled, "execute_time", U16_RANGE)?;
    let days = week_recycle(fields)?;

    let mut writer = PayloadWriter::new(layout::HEATING_SCHEDULE_LEN);
    writer.write_bytes(&layout::HEATING_SCHEDULE)?;
    writer.write_u8(index - 1)?;
    writer.write_u8(enable)?;
    writer.write_u8(mode)?;
    writer.write_u8(target)?;
    writer.write_u16_le(interval)?;
    writer.write_u16_le(execute_time)?;
    writer.write_u8(days)?;
    Ok(writer.into_bytes()?)
}

/// Absent `week_recycle` or absent days mean "not repeated".
fn week_recycle(fields: &CommandObject<'_>) -> Result<i64, EncodeError> {
    let Some(value) = fields.get("week_recycle") else {
        return Ok(0);
    };
    let days = CommandObject::new(value, fields.path("week_recycle"))?;
    let mut bits = 0;
    for (day, bit) in layout::WEEK_RECYCLE_BITS {
        if days.contains(day) {
            bits |= days.enum_code(day, &domains::ENABLE)? << bit;
        }
    }
    Ok(bits)
}
