use super::error::BufferError;

/// Fixed-capacity little-endian writer with a monotonically advancing cursor.
///
/// Unsigned writers keep only the low-order bits of `value` for the field
/// width. Signed writers add the field modulus to negative values before
/// delegating, so `-5` lands on the wire as `251` in an 8-bit field.
/// Writing past the declared capacity fails with [`BufferError::Overflow`].
///
/// # Examples
/// ```
/// use milesight_codec_core::PayloadWriter;
///
/// let mut writer = PayloadWriter::new(4);
/// writer.write_bytes(&[0xFF, 0xBD])?;
/// writer.write_i16_le(-210)?;
/// assert_eq!(writer.into_bytes()?, vec![0xFF, 0xBD, 0x2E, 0xFF]);
/// # Ok::<(), milesight_codec_core::BufferError>(())
/// ```
#[derive(Debug)]
pub struct PayloadWriter {
    buf: Vec<u8>,
    capacity: usize,
}

impl PayloadWriter {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn position(&self) -> usize {
        self.buf.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.reserve(bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    pub fn write_u8(&mut self, value: i64) -> Result<(), BufferError> {
        self.write_le(value & 0xFF, 1)
    }

    pub fn write_u16_le(&mut self, value: i64) -> Result<(), BufferError> {
        self.write_le(value & 0xFFFF, 2)
    }

    pub fn write_u32_le(&mut self, value: i64) -> Result<(), BufferError> {
        self.write_le(value & 0xFFFF_FFFF, 4)
    }

    pub fn write_i8(&mut self, value: i64) -> Result<(), BufferError> {
        self.write_u8(wrap_negative(value, 0x100))
    }

    pub fn write_i16_le(&mut self, value: i64) -> Result<(), BufferError> {
        self.write_u16_le(wrap_negative(value, 0x1_0000))
    }

    pub fn write_i32_le(&mut self, value: i64) -> Result<(), BufferError> {
        self.write_u32_le(wrap_negative(value, 0x1_0000_0000))
    }

    /// Consume the writer; the cursor must sit exactly at the capacity.
    pub fn into_bytes(self) -> Result<Vec<u8>, BufferError> {
        if self.buf.len() != self.capacity {
            return Err(BufferError::Underfilled {
                written: self.buf.len(),
                capacity: self.capacity,
            });
        }
        Ok(self.buf)
    }

    fn write_le(&mut self, value: i64, width: usize) -> Result<(), BufferError> {
        self.reserve(width)?;
        for index in 0..width {
            self.buf.push((value >> (index * 8)) as u8);
        }
        Ok(())
    }

    fn reserve(&self, width: usize) -> Result<(), BufferError> {
        let needed = self.buf.len() + width;
        if needed > self.capacity {
            return Err(BufferError::Overflow {
                needed,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

fn wrap_negative(value: i64, modulus: i64) -> i64 {
    if value < 0 {
        value.wrapping_add(modulus)
    } else {
        value
    }
}
