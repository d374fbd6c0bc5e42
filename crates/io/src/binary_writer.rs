use crate::{IoError, IoResult};

/// Appends binary data to a byte buffer.
///
/// # Examples
///
/// ```rust
/// use neo_io::BinaryWriter;
/// let mut buffer = Vec::new();
/// let mut writer = BinaryWriter::new(&mut buffer);
///
/// writer.write_u32(42);
/// writer.write_string("Hello, Neo!");
///
/// assert_eq!(buffer, [42, 0, 0, 0, 11, 72, 101, 108, 108, 111, 44, 32, 78, 101, 111, 33]);
/// ```
pub struct BinaryWriter<'a> {
    inner: &'a mut Vec<u8>,
}

impl<'a> BinaryWriter<'a> {
    pub fn new(inner: &'a mut Vec<u8>) -> Self {
        Self { inner }
    }

    /// Number of bytes in the underlying buffer.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn write_bool(&mut self, value: bool) {
        self.inner.push(value as u8);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.inner.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes raw bytes with no length prefix.
    pub fn write_bytes(&mut self, buffer: &[u8]) {
        self.inner.extend_from_slice(buffer);
    }

    /// Writes a Neo variable-length integer.
    pub fn write_var_int(&mut self, value: u64) {
        if value < 0xfd {
            self.write_u8(value as u8);
        } else if value <= 0xffff {
            self.write_u8(0xfd);
            self.write_u16(value as u16);
        } else if value <= 0xffff_ffff {
            self.write_u8(0xfe);
            self.write_u32(value as u32);
        } else {
            self.write_u8(0xff);
            self.write_u64(value);
        }
    }

    /// Writes a var-int length followed by the bytes.
    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_var_int(bytes.len() as u64);
        self.write_bytes(bytes);
    }

    /// Writes an integer in the .NET `BinaryWriter.Write7BitEncodedInt` format.
    pub fn write_7bit_encoded_int(&mut self, value: u32) {
        let mut value = value;
        while value >= 0x80 {
            self.inner.push((value as u8) | 0x80);
            value >>= 7;
        }
        self.inner.push(value as u8);
    }

    /// Writes a string the way .NET `BinaryWriter.Write(string)` does:
    /// 7-bit encoded byte length, then the UTF-8 bytes.
    pub fn write_string(&mut self, value: &str) {
        // &str is valid UTF-8 and bounded well below i32::MAX in practice.
        self.write_7bit_encoded_int(value.len() as u32);
        self.inner.extend_from_slice(value.as_bytes());
    }

    /// Like [`write_string`](Self::write_string), but takes raw bytes and
    /// rejects anything that is not strict UTF-8. Nothing is written on error.
    pub fn write_strict_utf8(&mut self, value: &[u8]) -> IoResult<()> {
        let text = std::str::from_utf8(value).map_err(|_| IoError::InvalidUtf8)?;
        if text.len() > i32::MAX as usize {
            return Err(IoError::InvalidData {
                context: "string length",
                value: text.len().to_string(),
            });
        }
        self.write_string(text);
        Ok(())
    }
}
