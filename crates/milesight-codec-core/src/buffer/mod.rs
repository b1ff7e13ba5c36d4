//! Byte buffer primitives shared by the uplink decoder and downlink encoder.
//!
//! All multi-byte fields are little-endian. Readers take explicit offsets and
//! never panic on short input; writers are sized up front and refuse to grow.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::BufferError;
pub use reader::PayloadReader;
pub use writer::PayloadWriter;
