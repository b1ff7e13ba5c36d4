//! Downlink (controller to device) encoding.
//!
//! A command object is a JSON object keyed by command name. Each device
//! declares a static command table; `encode_command` walks it in order and
//! lets every present key encode itself into an opcode-prefixed frame.
//! Validation is strict: a value outside its declared domain is an error,
//! never a silent coercion.
//!
//! Downlink frames share nothing with the uplink TLV format; encoding a value
//! does not produce the bytes the device would report for it.

pub mod command;
pub mod error;
pub mod value;

pub use command::{CommandDescriptor, CommandEncoder, encode_command};
pub use error::{EncodeError, FieldError};
