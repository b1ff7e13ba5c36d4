/// Channel id + channel type.
pub const HEADER_LEN: usize = 2;

pub const CHANNEL_ID_OFFSET: usize = 0;
pub const CHANNEL_TYPE_OFFSET: usize = 1;
