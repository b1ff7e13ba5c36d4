//! Milesight WT101 smart radiator thermostat.

pub mod channels;
pub mod commands;
pub mod domains;
pub mod layout;
mod schedule;

use crate::registry::DeviceCodec;

pub const MODEL: &str = "wt101";

pub static CODEC: DeviceCodec = DeviceCodec {
    model: MODEL,
    channels: &channels::CHANNELS,
    commands: &commands::COMMANDS,
};
