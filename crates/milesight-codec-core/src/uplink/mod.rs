//! Uplink (device to controller) decoding.
//!
//! Uplinks are a flat run of TLV-like records: a channel id byte, a channel
//! type byte, then a fixed-width value whose width and meaning come from the
//! device's channel table. There is no length prefix, so a record the table
//! does not know cannot be skipped; decoding stops there under the default
//! [`PartialDecodePolicy::StopAtUnknown`].
//!
//! Wire positions live in `layout`, value conversion in `channel`, and the
//! record walk in `parser`. Parsing is pure and holds no state between calls.

pub mod channel;
pub mod error;
pub mod layout;
pub mod parser;
pub mod policy;

pub use channel::{ChannelDescriptor, FieldDecoder};
pub use error::DecodeError;
pub use parser::decode_channels;
pub use policy::{DecodeOptions, PartialDecodePolicy};
