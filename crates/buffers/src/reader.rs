//! Binary buffer reader with cursor tracking.

use std::str;

/// A binary buffer reader that reads data from a byte slice.
///
/// The reader maintains a cursor position and provides methods for reading
/// various integer types and strings. Multi-byte values are read
/// big-endian.
///
/// The plain read methods (`u8`, `u16`, ...) index the slice directly and
/// panic if the read crosses the end; they are meant for layouts the
/// caller has already validated. The `try_*` methods bounds-check first
/// and return `None` on exhaustion without moving the cursor, so a
/// decoder can report the exact failure offset.
///
/// # Example
///
/// ```
/// use dynpack_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8(), 0x01);
/// assert_eq!(reader.try_u16(), Some(0x0203));
/// assert_eq!(reader.try_u8(), None);
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Resets the reader with a new byte slice.
    pub fn reset(&mut self, uint8: &'a [u8]) {
        self.x = 0;
        self.end = uint8.len();
        self.uint8 = uint8;
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> Option<u8> {
        if self.x < self.end {
            Some(self.uint8[self.x])
        } else {
            None
        }
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) {
        self.x += length;
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> &'a [u8] {
        let x = self.x;
        let end = x + size;
        let bin = &self.uint8[x..end];
        self.x = end;
        bin
    }

    /// Checked variant of [`buf`](Self::buf): `None` if fewer than `size`
    /// bytes remain, with the cursor left in place.
    pub fn try_buf(&mut self, size: usize) -> Option<&'a [u8]> {
        if self.size() < size {
            return None;
        }
        Some(self.buf(size))
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> u8 {
        let val = self.uint8[self.x];
        self.x += 1;
        val
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self) -> i8 {
        self.u8() as i8
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self) -> u16 {
        let val = u16::from_be_bytes([self.uint8[self.x], self.uint8[self.x + 1]]);
        self.x += 2;
        val
    }

    /// Reads a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self) -> i16 {
        self.u16() as i16
    }

    /// Reads an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self) -> u32 {
        let x = self.x;
        let val = u32::from_be_bytes([
            self.uint8[x],
            self.uint8[x + 1],
            self.uint8[x + 2],
            self.uint8[x + 3],
        ]);
        self.x = x + 4;
        val
    }

    /// Reads a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self) -> i32 {
        self.u32() as i32
    }

    /// Reads an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self) -> u64 {
        let x = self.x;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.uint8[x..x + 8]);
        self.x = x + 8;
        u64::from_be_bytes(bytes)
    }

    /// Reads a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self) -> i64 {
        self.u64() as i64
    }

    /// Reads a 32-bit floating point number (big-endian).
    #[inline]
    pub fn f32(&mut self) -> f32 {
        f32::from_bits(self.u32())
    }

    /// Reads a 64-bit floating point number (big-endian).
    #[inline]
    pub fn f64(&mut self) -> f64 {
        f64::from_bits(self.u64())
    }

    /// Reads a UTF-8 string of the given byte size.
    pub fn utf8(&mut self, size: usize) -> &'a str {
        let start = self.x;
        self.x += size;
        str::from_utf8(&self.uint8[start..self.x]).unwrap_or("")
    }

    /// Checked read of an unsigned 8-bit integer.
    #[inline]
    pub fn try_u8(&mut self) -> Option<u8> {
        if self.size() < 1 {
            return None;
        }
        Some(self.u8())
    }

    /// Checked read of a signed 8-bit integer.
    #[inline]
    pub fn try_i8(&mut self) -> Option<i8> {
        self.try_u8().map(|v| v as i8)
    }

    /// Checked read of an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn try_u16(&mut self) -> Option<u16> {
        if self.size() < 2 {
            return None;
        }
        Some(self.u16())
    }

    /// Checked read of a signed 16-bit integer (big-endian).
    #[inline]
    pub fn try_i16(&mut self) -> Option<i16> {
        self.try_u16().map(|v| v as i16)
    }

    /// Checked read of an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn try_u32(&mut self) -> Option<u32> {
        if self.size() < 4 {
            return None;
        }
        Some(self.u32())
    }

    /// Checked read of a signed 32-bit integer (big-endian).
    #[inline]
    pub fn try_i32(&mut self) -> Option<i32> {
        self.try_u32().map(|v| v as i32)
    }

    /// Checked read of an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn try_u64(&mut self) -> Option<u64> {
        if self.size() < 8 {
            return None;
        }
        Some(self.u64())
    }

    /// Checked read of a signed 64-bit integer (big-endian).
    #[inline]
    pub fn try_i64(&mut self) -> Option<i64> {
        self.try_u64().map(|v| v as i64)
    }

    /// Checked read of a 32-bit float (big-endian).
    #[inline]
    pub fn try_f32(&mut self) -> Option<f32> {
        self.try_u32().map(f32::from_bits)
    }

    /// Checked read of a 64-bit float (big-endian).
    #[inline]
    pub fn try_f64(&mut self) -> Option<f64> {
        self.try_u64().map(f64::from_bits)
    }
}
