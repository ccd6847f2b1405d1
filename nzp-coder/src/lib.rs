//! # nzp-coder
//!
//! Entropy coding and statistical modeling for nzp.
//!
//! - [`range_coder`]: byte-aligned, carry-less range coder
//! - [`quantizer`]: float-probability-to-integer-frequency-table conversion
//! - [`lstm`]: the tiny single-layer LSTM predictor
//! - [`codec`]: the compress/decompress loop tying the above together
//!
//! ## Usage
//!
//! ```ignore
//! use nzp_coder::{codec, lstm::LstmWeights};
//!
//! let model = LstmWeights::load("model.bin")?;
//! let compressed = codec::compress(data, &model);
//! let restored = codec::decompress(&compressed, &model, data.len() as u64);
//! assert_eq!(restored, data);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod lstm;
pub mod quantizer;
pub mod range_coder;

pub use lstm::{LstmState, LstmWeights};
pub use quantizer::FrequencyTable;
pub use range_coder::{RangeDecoder, RangeEncoder};
