//! # nzp-container
//!
//! The NZP container format: a fixed 38-byte header plus an opaque
//! range-coded payload.
//!
//! ## Example
//!
//! ```rust
//! use nzp_container::{FileHeader, read, write};
//!
//! let header = FileHeader {
//!     model_id: 1,
//!     original_size: 3,
//!     checksum: 0,
//!     model_hash: 0,
//! };
//!
//! let mut buf = Vec::new();
//! write(&mut buf, header, b"abc").unwrap();
//!
//! let mut cursor = std::io::Cursor::new(buf);
//! let (parsed, payload) = read(&mut cursor).unwrap();
//! assert_eq!(parsed, header);
//! assert_eq!(payload, b"abc");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod header;

pub use header::{FORMAT_VERSION, FileHeader, HEADER_SIZE, MAGIC, read, write};
