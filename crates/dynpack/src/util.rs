//! Convenience MessagePack helpers.

use crate::{
    DecodeError, EncodeError, MsgPackDecoder, MsgPackEncoder, MsgPackEncoderStable, Value,
};

/// Binary MessagePack payload alias.
pub type MsgPack = Vec<u8>;

/// Encode using the MessagePack encoder.
pub fn encode(value: &Value) -> Result<MsgPack, EncodeError> {
    let mut encoder = MsgPackEncoder::new();
    encoder.encode(value)
}

/// Encode using the stable (sorted-key) MessagePack encoder.
pub fn encode_stable(value: &Value) -> Result<MsgPack, EncodeError> {
    let mut encoder = MsgPackEncoderStable::new();
    encoder.encode(value)
}

/// Decode one value from the start of `blob`; trailing bytes are ignored.
pub fn decode(blob: &[u8]) -> Result<Value, DecodeError> {
    let mut decoder = MsgPackDecoder::new();
    decoder.decode(blob)
}

/// Decode one value and report how many bytes it occupied.
pub fn decode_with_consumed(blob: &[u8]) -> Result<(Value, usize), DecodeError> {
    let mut decoder = MsgPackDecoder::new();
    decoder.decode_with_consumed(blob)
}
