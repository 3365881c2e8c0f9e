//! MessagePack encoder.

use dynpack_buffers::Writer;

use crate::constants::*;
use crate::error::EncodeError;
use crate::{Ext, Value};

/// MessagePack encoder: a recursive visitor over a [`Value`] tree.
///
/// For each node it selects the minimum-width format that represents the
/// value, writes the one-byte marker followed by any big-endian
/// length/size prefix, then the payload. Composite containers recurse on
/// their elements in declaration order. On failure the writer may hold a
/// partial prefix; [`encode`](Self::encode) discards it on the next call.
pub struct MsgPackEncoder {
    pub writer: Writer,
}

impl Default for MsgPackEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    pub fn with_writer(writer: Writer) -> Self {
        Self { writer }
    }

    /// Encode a value and return the MessagePack bytes.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        self.write_any(value)?;
        Ok(self.writer.flush())
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Nil => {
                self.write_null();
                Ok(())
            }
            Value::Bool(b) => {
                self.write_boolean(*b);
                Ok(())
            }
            Value::Int(i) => {
                self.write_integer(*i);
                Ok(())
            }
            Value::UInt(u) => {
                self.write_u_integer(*u);
                Ok(())
            }
            Value::Float(f) => self.write_float(*f),
            Value::Str(s) => self.write_str(s),
            Value::Bin(b) => self.write_bin(b),
            Value::Arr(arr) => self.write_arr(arr),
            Value::Map(pairs) => self.write_map(pairs),
            Value::Ext(ext) => self.write_ext(ext),
        }
    }

    pub fn write_null(&mut self) {
        self.writer.u8(NIL);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.u8(if b { TRUE } else { FALSE });
    }

    /// Write a signed integer in its smallest format class.
    pub fn write_integer(&mut self, int: i64) {
        if int >= 0 {
            return self.write_u_integer(int as u64);
        }
        let w = &mut self.writer;
        if int >= NEG_FIXINT_MIN {
            w.u8(int as i8 as u8);
        } else if int >= i8::MIN as i64 {
            w.u8u8(INT8, int as i8 as u8);
        } else if int >= i16::MIN as i64 {
            w.u8u16(INT16, int as i16 as u16);
        } else if int >= i32::MIN as i64 {
            w.u8u32(INT32, int as i32 as u32);
        } else {
            w.u8u64(INT64, int as u64);
        }
    }

    /// Write an unsigned integer in its smallest format class.
    pub fn write_u_integer(&mut self, uint: u64) {
        let w = &mut self.writer;
        if uint <= POS_FIXINT_MAX as u64 {
            w.u8(uint as u8);
        } else if uint <= 0xff {
            w.u8u8(UINT8, uint as u8);
        } else if uint <= 0xffff {
            w.u8u16(UINT16, uint as u16);
        } else if uint <= 0xffff_ffff {
            w.u8u32(UINT32, uint as u32);
        } else {
            w.u8u64(UINT64, uint);
        }
    }

    /// Write a finite float as float64. Non-finite floats are rejected.
    pub fn write_float(&mut self, float: f64) -> Result<(), EncodeError> {
        if !float.is_finite() {
            return Err(EncodeError::NonFiniteFloat);
        }
        self.writer.u8f64(FLOAT64, float);
        Ok(())
    }

    /// Write a string: header by UTF-8 byte length, then the raw bytes,
    /// no terminator.
    pub fn write_str(&mut self, s: &str) -> Result<(), EncodeError> {
        self.write_str_hdr(s.len())?;
        self.writer.utf8(s);
        Ok(())
    }

    pub fn write_str_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        let w = &mut self.writer;
        if length <= FIXSTR_MAX {
            w.u8(FIXSTR | length as u8);
        } else if length <= 0xff {
            w.u8u8(STR8, length as u8);
        } else if length <= 0xffff {
            w.u8u16(STR16, length as u16);
        } else if length <= 0xffff_ffff {
            w.u8u32(STR32, length as u32);
        } else {
            return Err(EncodeError::TooLong("string"));
        }
        Ok(())
    }

    pub fn write_bin(&mut self, buf: &[u8]) -> Result<(), EncodeError> {
        self.write_bin_hdr(buf.len())?;
        self.writer.buf(buf);
        Ok(())
    }

    pub fn write_bin_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        let w = &mut self.writer;
        if length <= 0xff {
            w.u8u8(BIN8, length as u8);
        } else if length <= 0xffff {
            w.u8u16(BIN16, length as u16);
        } else if length <= 0xffff_ffff {
            w.u8u32(BIN32, length as u32);
        } else {
            return Err(EncodeError::TooLong("binary"));
        }
        Ok(())
    }

    pub fn write_arr(&mut self, arr: &[Value]) -> Result<(), EncodeError> {
        self.write_arr_hdr(arr.len())?;
        for item in arr {
            self.write_any(item)?;
        }
        Ok(())
    }

    pub fn write_arr_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        let w = &mut self.writer;
        if length <= FIXARR_MAX {
            w.u8(FIXARR | length as u8);
        } else if length <= 0xffff {
            w.u8u16(ARR16, length as u16);
        } else if length <= 0xffff_ffff {
            w.u8u32(ARR32, length as u32);
        } else {
            return Err(EncodeError::TooLong("array"));
        }
        Ok(())
    }

    /// Write map pairs in declaration order, key first.
    pub fn write_map(&mut self, pairs: &[(String, Value)]) -> Result<(), EncodeError> {
        self.write_map_hdr(pairs.len())?;
        for (key, value) in pairs {
            self.write_str(key)?;
            self.write_any(value)?;
        }
        Ok(())
    }

    pub fn write_map_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        let w = &mut self.writer;
        if length <= FIXMAP_MAX {
            w.u8(FIXMAP | length as u8);
        } else if length <= 0xffff {
            w.u8u16(MAP16, length as u16);
        } else if length <= 0xffff_ffff {
            w.u8u32(MAP32, length as u32);
        } else {
            return Err(EncodeError::TooLong("map"));
        }
        Ok(())
    }

    /// Write an extension: fixext markers for payloads of exactly
    /// 1/2/4/8/16 bytes, otherwise the smallest length-prefixed form.
    /// The signed type tag byte precedes the raw data.
    pub fn write_ext(&mut self, ext: &Ext) -> Result<(), EncodeError> {
        let length = ext.data.len();
        let w = &mut self.writer;
        match length {
            1 => w.u8(FIXEXT1),
            2 => w.u8(FIXEXT2),
            4 => w.u8(FIXEXT4),
            8 => w.u8(FIXEXT8),
            16 => w.u8(FIXEXT16),
            _ => {
                if length <= 0xff {
                    w.u8u8(EXT8, length as u8);
                } else if length <= 0xffff {
                    w.u8u16(EXT16, length as u16);
                } else if length <= 0xffff_ffff {
                    w.u8u32(EXT32, length as u32);
                } else {
                    return Err(EncodeError::TooLong("extension"));
                }
            }
        }
        self.writer.u8(ext.tag as u8);
        self.writer.buf(&ext.data);
        Ok(())
    }
}

// ---- JSON convenience methods (operate on serde_json::Value) ----

impl MsgPackEncoder {
    /// Encode a `serde_json::Value` to MessagePack bytes.
    pub fn encode_json(&mut self, value: &serde_json::Value) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        self.write_json(value)?;
        Ok(self.writer.flush())
    }

    pub fn write_json(&mut self, value: &serde_json::Value) -> Result<(), EncodeError> {
        match value {
            serde_json::Value::Null => self.write_null(),
            serde_json::Value::Bool(b) => self.write_boolean(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    self.write_integer(i);
                } else if let Some(u) = n.as_u64() {
                    self.write_u_integer(u);
                } else if let Some(f) = n.as_f64() {
                    self.write_float(f)?;
                }
            }
            serde_json::Value::String(s) => self.write_str(s)?,
            serde_json::Value::Array(arr) => {
                self.write_arr_hdr(arr.len())?;
                for item in arr {
                    self.write_json(item)?;
                }
            }
            serde_json::Value::Object(obj) => {
                self.write_map_hdr(obj.len())?;
                for (key, value) in obj {
                    self.write_str(key)?;
                    self.write_json(value)?;
                }
            }
        }
        Ok(())
    }
}

/// MessagePack encoder that emits map pairs in sorted-key order.
///
/// Keys sort shortest-first, ties broken lexicographically, so the same
/// logical map always produces the same byte sequence. The wire format is
/// unchanged; only the pair emission order differs from [`MsgPackEncoder`].
pub struct MsgPackEncoderStable {
    pub encoder: MsgPackEncoder,
}

impl Default for MsgPackEncoderStable {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackEncoderStable {
    pub fn new() -> Self {
        Self {
            encoder: MsgPackEncoder::new(),
        }
    }

    /// Encode a value and return the MessagePack bytes.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        self.encoder.writer.reset();
        self.write_any(value)?;
        Ok(self.encoder.writer.flush())
    }

    fn write_any(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Arr(arr) => {
                self.encoder.write_arr_hdr(arr.len())?;
                for item in arr {
                    self.write_any(item)?;
                }
                Ok(())
            }
            Value::Map(pairs) => {
                self.encoder.write_map_hdr(pairs.len())?;
                let mut order: Vec<&(String, Value)> = pairs.iter().collect();
                order.sort_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(&b.0)));
                for (key, value) in order {
                    self.encoder.write_str(key)?;
                    self.write_any(value)?;
                }
                Ok(())
            }
            other => self.encoder.write_any(other),
        }
    }
}
