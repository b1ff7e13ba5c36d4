use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::Value;
use tracing::debug;

use crate::downlink::{CommandDescriptor, EncodeError, encode_command};
use crate::models;
use crate::telemetry::Telemetry;
use crate::uplink::{ChannelDescriptor, DecodeError, DecodeOptions, decode_channels};

/// A device model's uplink channel table and downlink command table.
///
/// Both tables are `'static`, so a codec is freely shared across threads.
#[derive(Debug)]
pub struct DeviceCodec {
    pub model: &'static str,
    pub channels: &'static [ChannelDescriptor],
    pub commands: &'static [CommandDescriptor],
}

impl DeviceCodec {
    pub fn decode(&self, payload: &[u8], options: &DecodeOptions) -> Result<Telemetry, DecodeError> {
        if payload.is_empty() {
            return Err(DecodeError::EmptyPayload);
        }
        decode_channels(self.channels, payload, options)
    }

    pub fn encode(&self, command: &Value) -> Result<Vec<u8>, EncodeError> {
        encode_command(self.commands, command)
    }
}

/// Model key to codec lookup.
///
/// Keys are matched after trimming and lower-casing, so `" WT101 "` resolves
/// like `"wt101"`.
///
/// # Examples
/// ```
/// use milesight_codec_core::CodecRegistry;
///
/// let registry = CodecRegistry::global();
/// assert_eq!(registry.resolve("WT101").map(|codec| codec.model), Some("wt101"));
/// assert!(registry.resolve("em300").is_none());
/// ```
#[derive(Debug, Default)]
pub struct CodecRegistry {
    codecs: HashMap<&'static str, &'static DeviceCodec>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every codec shipped with the crate.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for codec in models::BUILTIN {
            registry.register(codec);
        }
        registry
    }

    /// Process-wide registry, built on first use and read-only afterwards.
    pub fn global() -> &'static CodecRegistry {
        static GLOBAL: OnceLock<CodecRegistry> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let registry = Self::with_builtin();
            debug!(models = registry.codecs.len(), "codec registry initialised");
            registry
        })
    }

    /// Add a codec; returns the one it replaced, if any.
    pub fn register(&mut self, codec: &'static DeviceCodec) -> Option<&'static DeviceCodec> {
        self.codecs.insert(codec.model, codec)
    }

    pub fn resolve(&self, model: &str) -> Option<&'static DeviceCodec> {
        self.codecs.get(normalize_model(model).as_str()).copied()
    }

    /// Supported model keys, sorted.
    pub fn models(&self) -> Vec<&'static str> {
        let mut models: Vec<_> = self.codecs.keys().copied().collect();
        models.sort_unstable();
        models
    }
}

pub(crate) fn normalize_model(model: &str) -> String {
    model.trim().to_ascii_lowercase()
}
