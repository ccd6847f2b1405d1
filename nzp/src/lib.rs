//! # nzp
//!
//! Public API for neural-predicted lossless compression: load a tiny LSTM
//! model once, then compress and decompress files through it.
//!
//! ```no_run
//! use nzp::{compress_file, decompress_file, load_model};
//!
//! let model = load_model("model.bin")?;
//! compress_file("input.bin", "input.nzp", &model)?;
//! decompress_file("input.nzp", "restored.bin", &model)?;
//! # Ok::<(), nzp_core::error::NzpError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use nzp_coder::codec;
use nzp_coder::lstm::LstmWeights;
use nzp_container::{FileHeader, HEADER_SIZE};
use nzp_core::crc::Crc32;
use nzp_core::error::{NzpError, Result};
use nzp_core::predictor::Predictor;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// A loaded statistical model, ready to compress or decompress files.
///
/// Wraps [`LstmWeights`] behind an opaque type so callers of this crate
/// never need to depend on `nzp-coder` directly.
pub struct Model(LstmWeights);

/// Load a tiny LSTM model from its binary weight file.
pub fn load_model(path: impl AsRef<Path>) -> Result<Model> {
    Ok(Model(LstmWeights::load(path)?))
}

/// Compress `input_path` into `output_path` as an NZP container.
///
/// Reads the whole input file, computes its CRC32 and length, runs the
/// codec loop against `model`, and writes a container whose header
/// records the model's id and weight hash.
pub fn compress_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    model: &Model,
) -> Result<()> {
    let mut input = Vec::new();
    BufReader::new(File::open(input_path)?).read_to_end(&mut input)?;

    let checksum = Crc32::compute(&input);
    let payload = codec::compress(&input, &model.0);

    let header = FileHeader {
        model_id: model.0.model_id(),
        original_size: input.len() as u64,
        checksum,
        model_hash: model.0.model_hash(),
    };

    let mut output = BufWriter::new(File::create(output_path)?);
    nzp_container::write(&mut output, header, &payload)?;
    output.flush()?;
    Ok(())
}

/// Decompress `input_path` (an NZP container) into `output_path`.
///
/// Rejects the container with [`NzpError::ModelMismatch`] if its
/// `model_id` differs from `model`'s, or if its `model_hash` is non-zero
/// and differs from `model`'s. After running the codec loop for
/// `original_size` bytes, verifies the result's CRC32 against the
/// header's `checksum` and fails with [`NzpError::Corrupt`] on mismatch.
pub fn decompress_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    model: &Model,
) -> Result<()> {
    let mut input = BufReader::new(File::open(input_path)?);
    let (header, payload) = nzp_container::read(&mut input)?;

    if header.model_id != model.0.model_id()
        || (header.model_hash != 0 && header.model_hash != model.0.model_hash())
    {
        return Err(NzpError::model_mismatch(
            header.model_id,
            header.model_hash,
            model.0.model_id(),
            model.0.model_hash(),
        ));
    }

    let restored = codec::decompress(&payload, &model.0, header.original_size);

    if restored.len() as u64 != header.original_size {
        return Err(NzpError::corrupt(format!(
            "decoded {} bytes, expected {}",
            restored.len(),
            header.original_size
        )));
    }

    let checksum = Crc32::compute(&restored);
    if checksum != header.checksum {
        return Err(NzpError::corrupt(format!(
            "checksum mismatch: expected {:#010x}, got {:#010x}",
            header.checksum, checksum
        )));
    }

    let mut output = BufWriter::new(File::create(output_path)?);
    output.write_all(&restored)?;
    output.flush()?;
    Ok(())
}

/// A stable, human-readable description of an error's kind.
///
/// Rust errors already carry their own [`std::fmt::Display`] impl with
/// the offending values inlined; this function exists for callers that
/// want the error *kind* alone, independent of its payload.
pub fn describe_error(err: &NzpError) -> &'static str {
    err.describe()
}
