//! # nzp-core
//!
//! Core components shared across the nzp workspace.
//!
//! - [`crc`]: CRC-32 checksum used for the post-decode integrity check
//! - [`error`]: the closed `NzpError` taxonomy
//! - [`predictor`]: the `Predictor` trait implemented by the statistical model
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ nzp        Public API: load_model / compress_file / ... │
//! ├─────────────────────────────────────────────────────────┤
//! │ nzp-coder  Range coder, quantizer, tiny LSTM, codec loop │
//! │ nzp-container  FileHeader read/write                    │
//! ├─────────────────────────────────────────────────────────┤
//! │ nzp-core (this crate)                                   │
//! │     CRC32, error taxonomy, Predictor trait               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use nzp_core::crc::Crc32;
//!
//! let crc = Crc32::compute(b"Hello, World!");
//! assert_eq!(crc, 0xEC4AC3D0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod crc;
pub mod error;
pub mod predictor;

pub use crc::Crc32;
pub use error::{NzpError, Result};
pub use predictor::Predictor;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::crc::Crc32;
    pub use crate::error::{NzpError, Result};
    pub use crate::predictor::Predictor;
}
