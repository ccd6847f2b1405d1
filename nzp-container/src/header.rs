//! The NZP container: a fixed 38-byte header followed by the opaque
//! range-coded payload.
//!
//! ```text
//! Offset  Size  Field           Notes
//!      0     4  magic           0x31505A4E ("NZP1")
//!      4     1  format_version  1
//!      5     4  model_id
//!      9     1  flags           0
//!     10     8  original_size
//!     18     4  checksum        CRC32 of the original bytes
//!     22     8  model_hash      0 = do not verify
//!     30     8  reserved        0 on write, ignored on read
//!     38   var  payload
//! ```

use nzp_core::error::{NzpError, Result};
use std::io::{Read, Write};

/// Magic bytes identifying an NZP container: `"NZP1"` read little-endian.
pub const MAGIC: u32 = 0x3150_5A4E;

/// Format version this crate reads and writes.
pub const FORMAT_VERSION: u8 = 1;

/// Size of the fixed header, in bytes.
pub const HEADER_SIZE: usize = 38;

/// The fixed-size NZP container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Model architecture/weight-layout identifier.
    pub model_id: u32,
    /// Length of the original, uncompressed data in bytes.
    pub original_size: u64,
    /// CRC32 of the original, uncompressed data.
    pub checksum: u32,
    /// Hash of the model weights used to compress. `0` disables the check
    /// on decompression.
    pub model_hash: u64,
}

impl FileHeader {
    /// Serialize the header as 38 packed little-endian bytes, with no
    /// padding between fields.
    pub fn to_bytes(self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(&MAGIC.to_le_bytes());
        buf[4] = FORMAT_VERSION;
        buf[5..9].copy_from_slice(&self.model_id.to_le_bytes());
        buf[9] = 0; // flags
        buf[10..18].copy_from_slice(&self.original_size.to_le_bytes());
        buf[18..22].copy_from_slice(&self.checksum.to_le_bytes());
        buf[22..30].copy_from_slice(&self.model_hash.to_le_bytes());
        buf[30..38].copy_from_slice(&0u64.to_le_bytes()); // reserved
        buf
    }

    /// Parse a header from its 38-byte on-disk form.
    ///
    /// Validates `magic` and `format_version`; `flags` and `reserved` are
    /// read but not otherwise interpreted.
    pub fn from_bytes(buf: &[u8; HEADER_SIZE]) -> Result<Self> {
        let magic = u32::from_le_bytes(buf[0..4].try_into().unwrap());
        if magic != MAGIC {
            return Err(NzpError::invalid_format(MAGIC, magic));
        }

        let format_version = buf[4];
        if format_version != FORMAT_VERSION {
            return Err(NzpError::unsupported_version(FORMAT_VERSION, format_version));
        }

        let model_id = u32::from_le_bytes(buf[5..9].try_into().unwrap());
        let original_size = u64::from_le_bytes(buf[10..18].try_into().unwrap());
        let checksum = u32::from_le_bytes(buf[18..22].try_into().unwrap());
        let model_hash = u64::from_le_bytes(buf[22..30].try_into().unwrap());

        Ok(Self {
            model_id,
            original_size,
            checksum,
            model_hash,
        })
    }
}

/// Write a container: header followed by `payload` verbatim.
pub fn write(writer: &mut impl Write, header: FileHeader, payload: &[u8]) -> Result<()> {
    writer.write_all(&header.to_bytes())?;
    writer.write_all(payload)?;
    Ok(())
}

/// Read a container: validate and parse the fixed header, then return it
/// along with the remaining bytes as the payload.
pub fn read(reader: &mut impl Read) -> Result<(FileHeader, Vec<u8>)> {
    let mut header_buf = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header_buf)?;
    let header = FileHeader::from_bytes(&header_buf)?;

    let mut payload = Vec::new();
    reader.read_to_end(&mut payload)?;

    Ok((header, payload))
}
