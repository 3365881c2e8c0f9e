//! MessagePack decoder.

use std::str;

use dynpack_buffers::Reader;

use crate::constants::*;
use crate::error::DecodeError;
use crate::{Ext, Value};

/// Elements pre-allocated per container; wire-declared counts are not
/// trusted before their payloads have actually been read.
const PREALLOC_MAX: usize = 1024;

/// MessagePack decoder: a positional reader over a byte sequence.
///
/// Reads one format marker, dispatches on it, reads any big-endian
/// length/size prefix, then either returns a scalar or recurses for the
/// declared number of children. Exactly one top-level value is consumed
/// starting at offset 0; trailing bytes are ignored. Every error carries
/// the byte offset of the first byte of the unparseable construct.
pub struct MsgPackDecoder;

impl Default for MsgPackDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode one value from the start of `bytes`.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<Value, DecodeError> {
        let mut reader = Reader::new(bytes);
        self.read_any(&mut reader)
    }

    /// Decode one value and report how many bytes it occupied.
    pub fn decode_with_consumed(&mut self, bytes: &[u8]) -> Result<(Value, usize), DecodeError> {
        let mut reader = Reader::new(bytes);
        let value = self.read_any(&mut reader)?;
        Ok((value, reader.x))
    }

    fn read_any(&mut self, r: &mut Reader) -> Result<Value, DecodeError> {
        let at = r.x;
        let marker = r.try_u8().ok_or(DecodeError::UnexpectedEnd(at))?;
        match marker {
            0x00..=0x7f => Ok(Value::Int(marker as i64)),
            0x80..=0x8f => self.read_map(r, (marker & FIXMAP_MASK) as usize),
            0x90..=0x9f => self.read_arr(r, (marker & FIXARR_MASK) as usize),
            0xa0..=0xbf => self.read_str(r, (marker & FIXSTR_MASK) as usize),
            NIL => Ok(Value::Nil),
            FALSE => Ok(Value::Bool(false)),
            TRUE => Ok(Value::Bool(true)),
            BIN8 => {
                let length = self.len8(r)?;
                self.read_bin(r, length)
            }
            BIN16 => {
                let length = self.len16(r)?;
                self.read_bin(r, length)
            }
            BIN32 => {
                let length = self.len32(r)?;
                self.read_bin(r, length)
            }
            EXT8 => {
                let length = self.len8(r)?;
                self.read_ext(r, length)
            }
            EXT16 => {
                let length = self.len16(r)?;
                self.read_ext(r, length)
            }
            EXT32 => {
                let length = self.len32(r)?;
                self.read_ext(r, length)
            }
            FLOAT32 => {
                let at = r.x;
                let val = r.try_f32().ok_or(DecodeError::UnexpectedEnd(at))?;
                Ok(Value::Float(val as f64))
            }
            FLOAT64 => {
                let at = r.x;
                let val = r.try_f64().ok_or(DecodeError::UnexpectedEnd(at))?;
                Ok(Value::Float(val))
            }
            UINT8 => {
                let at = r.x;
                let val = r.try_u8().ok_or(DecodeError::UnexpectedEnd(at))?;
                Ok(Value::Int(val as i64))
            }
            UINT16 => {
                let at = r.x;
                let val = r.try_u16().ok_or(DecodeError::UnexpectedEnd(at))?;
                Ok(Value::Int(val as i64))
            }
            UINT32 => {
                let at = r.x;
                let val = r.try_u32().ok_or(DecodeError::UnexpectedEnd(at))?;
                Ok(Value::Int(val as i64))
            }
            UINT64 => {
                let at = r.x;
                let val = r.try_u64().ok_or(DecodeError::UnexpectedEnd(at))?;
                if val <= i64::MAX as u64 {
                    Ok(Value::Int(val as i64))
                } else {
                    Ok(Value::UInt(val))
                }
            }
            INT8 => {
                let at = r.x;
                let val = r.try_i8().ok_or(DecodeError::UnexpectedEnd(at))?;
                Ok(Value::Int(val as i64))
            }
            INT16 => {
                let at = r.x;
                let val = r.try_i16().ok_or(DecodeError::UnexpectedEnd(at))?;
                Ok(Value::Int(val as i64))
            }
            INT32 => {
                let at = r.x;
                let val = r.try_i32().ok_or(DecodeError::UnexpectedEnd(at))?;
                Ok(Value::Int(val as i64))
            }
            INT64 => {
                let at = r.x;
                let val = r.try_i64().ok_or(DecodeError::UnexpectedEnd(at))?;
                Ok(Value::Int(val))
            }
            FIXEXT1 => self.read_ext(r, 1),
            FIXEXT2 => self.read_ext(r, 2),
            FIXEXT4 => self.read_ext(r, 4),
            FIXEXT8 => self.read_ext(r, 8),
            FIXEXT16 => self.read_ext(r, 16),
            STR8 => {
                let length = self.len8(r)?;
                self.read_str(r, length)
            }
            STR16 => {
                let length = self.len16(r)?;
                self.read_str(r, length)
            }
            STR32 => {
                let length = self.len32(r)?;
                self.read_str(r, length)
            }
            ARR16 => {
                let count = self.len16(r)?;
                self.read_arr(r, count)
            }
            ARR32 => {
                let count = self.len32(r)?;
                self.read_arr(r, count)
            }
            MAP16 => {
                let count = self.len16(r)?;
                self.read_map(r, count)
            }
            MAP32 => {
                let count = self.len32(r)?;
                self.read_map(r, count)
            }
            0xe0..=0xff => Ok(Value::Int(marker as i8 as i64)),
            _ => Err(DecodeError::InvalidTypeMarker(at)),
        }
    }

    fn len8(&mut self, r: &mut Reader) -> Result<usize, DecodeError> {
        let at = r.x;
        r.try_u8()
            .map(usize::from)
            .ok_or(DecodeError::UnexpectedEnd(at))
    }

    fn len16(&mut self, r: &mut Reader) -> Result<usize, DecodeError> {
        let at = r.x;
        r.try_u16()
            .map(usize::from)
            .ok_or(DecodeError::UnexpectedEnd(at))
    }

    fn len32(&mut self, r: &mut Reader) -> Result<usize, DecodeError> {
        let at = r.x;
        let length = r.try_u32().ok_or(DecodeError::UnexpectedEnd(at))?;
        usize::try_from(length).map_err(|_| DecodeError::InvalidLength(at))
    }

    /// Read `size` bytes and assemble them as a strictly validated UTF-8
    /// string. The error offset is the first invalid byte.
    fn read_str(&mut self, r: &mut Reader, size: usize) -> Result<Value, DecodeError> {
        let at = r.x;
        let bytes = r.try_buf(size).ok_or(DecodeError::UnexpectedEnd(at))?;
        match str::from_utf8(bytes) {
            Ok(s) => Ok(Value::Str(s.to_owned())),
            Err(e) => Err(DecodeError::InvalidUtf8(at + e.valid_up_to())),
        }
    }

    fn read_bin(&mut self, r: &mut Reader, size: usize) -> Result<Value, DecodeError> {
        let at = r.x;
        let bytes = r.try_buf(size).ok_or(DecodeError::UnexpectedEnd(at))?;
        Ok(Value::Bin(bytes.to_vec()))
    }

    fn read_arr(&mut self, r: &mut Reader, count: usize) -> Result<Value, DecodeError> {
        let mut arr = Vec::with_capacity(count.min(PREALLOC_MAX));
        for _ in 0..count {
            arr.push(self.read_any(r)?);
        }
        Ok(Value::Arr(arr))
    }

    /// Read `count` key-value pairs. Keys must be strings; a duplicate
    /// key overwrites the earlier value in place.
    fn read_map(&mut self, r: &mut Reader, count: usize) -> Result<Value, DecodeError> {
        let mut pairs: Vec<(String, Value)> = Vec::with_capacity(count.min(PREALLOC_MAX));
        for _ in 0..count {
            let key_at = r.x;
            let key = match self.read_any(r)? {
                Value::Str(s) => s,
                _ => return Err(DecodeError::MapKeyNotString(key_at)),
            };
            let value = self.read_any(r)?;
            match pairs.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => pairs.push((key, value)),
            }
        }
        Ok(Value::Map(pairs))
    }

    fn read_ext(&mut self, r: &mut Reader, size: usize) -> Result<Value, DecodeError> {
        let at = r.x;
        let tag = r.try_i8().ok_or(DecodeError::UnexpectedEnd(at))?;
        let at = r.x;
        let data = r.try_buf(size).ok_or(DecodeError::UnexpectedEnd(at))?;
        Ok(Value::Ext(Ext::new(tag, data.to_vec())))
    }
}
