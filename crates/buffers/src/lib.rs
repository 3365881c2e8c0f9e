//! Binary buffer utilities for dynpack.
//!
//! This crate provides the byte-level plumbing shared by the codec
//! pipelines:
//!
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking
//!
//! All multi-byte reads and writes are big-endian. The [`Reader`] exposes
//! two families of methods: plain reads, which assume the caller already
//! knows the layout, and checked `try_*` reads, which return `None` when
//! the read would cross the end of the slice. Decoders working on
//! untrusted input use the checked family.
//!
//! # Example
//!
//! ```
//! use dynpack_buffers::{Reader, Writer};
//!
//! // Write some data
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u16(0x0203);
//! writer.utf8("hello");
//! let data = writer.flush();
//!
//! // Read it back
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8(), 0x01);
//! assert_eq!(reader.u16(), 0x0203);
//! assert_eq!(reader.utf8(5), "hello");
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;
