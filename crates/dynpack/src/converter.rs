//! MessagePack to JSON text converter.

use crate::{DecodeError, MsgPackDecoder};

/// Converts a MessagePack byte sequence into a JSON string.
///
/// This is the boundary to a dynamic host: binary blobs become arrays of
/// byte numbers and extensions become `{"type": tag, "data": [bytes]}`
/// objects, since JSON has no native representation for either.
pub struct MsgPackToJsonConverter {
    decoder: MsgPackDecoder,
}

impl Default for MsgPackToJsonConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackToJsonConverter {
    pub fn new() -> Self {
        Self {
            decoder: MsgPackDecoder::new(),
        }
    }

    /// Convert one MessagePack value into its JSON text form.
    pub fn convert(&mut self, blob: &[u8]) -> Result<String, DecodeError> {
        let value = self.decoder.decode(blob)?;
        let json: serde_json::Value = value.into();
        Ok(json.to_string())
    }
}
