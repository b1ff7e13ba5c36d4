use super::error::BufferError;

/// Little-endian field reads over an immutable payload with explicit offsets.
pub struct PayloadReader<'a> {
    payload: &'a [u8],
}

impl<'a> PayloadReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    /// Bytes left after `offset` (zero when `offset` is past the end).
    pub fn remaining(&self, offset: usize) -> usize {
        self.payload.len().saturating_sub(offset)
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], BufferError> {
        self.payload.get(range.clone()).ok_or(BufferError::TooShort {
            needed: range.end,
            actual: self.payload.len(),
        })
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, BufferError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(BufferError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_u16_le(&self, offset: usize) -> Result<u16, BufferError> {
        let bytes = self.read_slice(offset..offset + 2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32_le(&self, offset: usize) -> Result<u32, BufferError> {
        let bytes = self.read_slice(offset..offset + 4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_i8(&self, offset: usize) -> Result<i8, BufferError> {
        let value = i64::from(self.read_u8(offset)?);
        Ok(to_signed(value, 0x100) as i8)
    }

    pub fn read_i16_le(&self, offset: usize) -> Result<i16, BufferError> {
        let value = i64::from(self.read_u16_le(offset)?);
        Ok(to_signed(value, 0x1_0000) as i16)
    }

    pub fn read_i32_le(&self, offset: usize) -> Result<i32, BufferError> {
        let value = i64::from(self.read_u32_le(offset)?);
        Ok(to_signed(value, 0x1_0000_0000) as i32)
    }
}

/// Values above the positive half of `modulus` map to `value - modulus`.
fn to_signed(value: i64, modulus: i64) -> i64 {
    if value > modulus / 2 - 1 {
        value - modulus
    } else {
        value
    }
}
