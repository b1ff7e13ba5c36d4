use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::error::EncodeError;

/// Encodes the value stored under one top-level key. The whole command
/// object is passed along for commands that read a companion key.
pub type CommandEncoder = fn(&Value, &Map<String, Value>) -> Result<Vec<u8>, EncodeError>;

/// One entry of a device's downlink command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandDescriptor {
    pub key: &'static str,
    /// Top-level keys consumed by this command besides `key` itself.
    pub companions: &'static [&'static str],
    pub encode: CommandEncoder,
}

impl CommandDescriptor {
    pub const fn new(key: &'static str, encode: CommandEncoder) -> Self {
        Self {
            key,
            companions: &[],
            encode,
        }
    }

    pub const fn with_companions(
        key: &'static str,
        companions: &'static [&'static str],
        encode: CommandEncoder,
    ) -> Self {
        Self {
            key,
            companions,
            encode,
        }
    }

    fn claims(&self, key: &str) -> bool {
        self.key == key || self.companions.contains(&key)
    }
}

/// Encode a command object against a command table.
///
/// Table entries whose key is present are encoded in table order and their
/// bytes concatenated. Keys no entry claims are ignored. The first
/// validation failure aborts the call, so a partial downlink is never
/// returned.
pub fn encode_command(
    commands: &[CommandDescriptor],
    command: &Value,
) -> Result<Vec<u8>, EncodeError> {
    let object = match command.as_object() {
        Some(object) if !object.is_empty() => object,
        _ => return Err(EncodeError::EmptyPayload),
    };

    for key in object.keys() {
        if !commands.iter().any(|descriptor| descriptor.claims(key)) {
            debug!(key = key.as_str(), "ignoring unrecognized command key");
        }
    }

    let mut encoded = Vec::new();
    for descriptor in commands {
        let Some(value) = object.get(descriptor.key) else {
            continue;
        };
        let bytes = (descriptor.encode)(value, object)?;
        trace!(key = descriptor.key, len = bytes.len(), "encoded command");
        encoded.extend_from_slice(&bytes);
    }
    Ok(encoded)
}
