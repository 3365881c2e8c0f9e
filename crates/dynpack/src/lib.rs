//! MessagePack codec over a dynamic value tree.
//!
//! Two independent pipelines share a format-marker table and an error
//! taxonomy: [`MsgPackEncoder`] serializes a [`Value`] into MessagePack
//! bytes, and [`MsgPackDecoder`] parses a byte sequence back into an
//! equivalent [`Value`]. Both are synchronous pure functions over their
//! inputs; instances hold no state across calls beyond their scratch
//! buffers and may be used concurrently over disjoint inputs.
//!
//! # Example
//!
//! ```
//! use dynpack::{decode, encode, Value};
//!
//! let value = Value::Arr(vec![Value::Int(1), Value::Str("two".into())]);
//! let bytes = encode(&value).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```

pub mod constants;

mod converter;
mod decoder;
mod encoder;
mod error;
mod ext;
mod util;
mod value;

pub use converter::MsgPackToJsonConverter;
pub use decoder::MsgPackDecoder;
pub use encoder::{MsgPackEncoder, MsgPackEncoderStable};
pub use error::{DecodeError, EncodeError};
pub use ext::Ext;
pub use util::{decode, decode_with_consumed, encode, encode_stable, MsgPack};
pub use value::Value;
