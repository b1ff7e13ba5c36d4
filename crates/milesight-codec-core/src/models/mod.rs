//! Per-device tables. Each model exposes one `CODEC` static binding its
//! uplink channels and downlink commands.

pub mod wt101;

use crate::registry::DeviceCodec;

/// Every codec shipped with the crate.
pub(crate) static BUILTIN: [&DeviceCodec; 1] = [&wt101::CODEC];
