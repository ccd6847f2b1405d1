//! Error types for nzp operations.
//!
//! This module provides the closed error taxonomy shared by every layer of
//! the workspace: the container reader/writer, the codec loop, and the
//! public API. No other error variant is allowed to escape a public call.

use std::io;
use thiserror::Error;

/// The closed error type for nzp operations.
#[derive(Debug, Error)]
pub enum NzpError {
    /// A file read or write failed, or a file was shorter than required.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Container magic did not match `NZP1`.
    #[error("invalid container: expected magic {expected:#010x}, found {found:#010x}")]
    InvalidFormat {
        /// Expected magic value.
        expected: u32,
        /// Magic value actually read.
        found: u32,
    },

    /// Container `formatVersion` is not the one this crate implements.
    #[error("unsupported format version: {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version this crate supports.
        expected: u8,
        /// Version found in the container.
        found: u8,
    },

    /// `modelId` differs from the loaded model, or a non-zero `modelHash`
    /// differs from the loaded model's hash.
    #[error("model mismatch: container expects id {expected_id} hash {expected_hash:#018x}, loaded model is id {actual_id} hash {actual_hash:#018x}")]
    ModelMismatch {
        /// Model id recorded in the container.
        expected_id: u32,
        /// Model hash recorded in the container (0 if unchecked).
        expected_hash: u64,
        /// Model id of the loaded model.
        actual_id: u32,
        /// Model hash of the loaded model.
        actual_hash: u64,
    },

    /// Decoded byte count was short, or the post-decode CRC32 did not match
    /// the header's checksum.
    #[error("corrupt payload: {0}")]
    Corrupt(String),

    /// A precondition was violated at an API boundary (empty path, missing
    /// model, and similar caller errors).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for nzp operations.
pub type Result<T> = std::result::Result<T, NzpError>;

impl NzpError {
    /// Build an [`NzpError::InvalidFormat`].
    pub fn invalid_format(expected: u32, found: u32) -> Self {
        Self::InvalidFormat { expected, found }
    }

    /// Build an [`NzpError::UnsupportedVersion`].
    pub fn unsupported_version(expected: u8, found: u8) -> Self {
        Self::UnsupportedVersion { expected, found }
    }

    /// Build an [`NzpError::ModelMismatch`].
    pub fn model_mismatch(expected_id: u32, expected_hash: u64, actual_id: u32, actual_hash: u64) -> Self {
        Self::ModelMismatch {
            expected_id,
            expected_hash,
            actual_id,
            actual_hash,
        }
    }

    /// Build an [`NzpError::Corrupt`].
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt(message.into())
    }

    /// Build an [`NzpError::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// A stable, human-readable description of this error's kind.
    ///
    /// This is the Rust counterpart of the distilled spec's
    /// `describe_error(code)`: since Rust errors carry their own
    /// `Display` impl, `describe_error` in [`nzp`](../nzp/index.html)
    /// calls through to this.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Io(_) => "I/O error",
            Self::InvalidFormat { .. } => "invalid container format",
            Self::UnsupportedVersion { .. } => "unsupported container version",
            Self::ModelMismatch { .. } => "model mismatch",
            Self::Corrupt(_) => "corrupt payload",
            Self::Internal(_) => "internal error",
        }
    }
}
