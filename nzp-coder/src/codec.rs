//! The codec loop: drives a [`Predictor`] and the range coder over a byte
//! buffer, one symbol at a time.

use crate::quantizer::FrequencyTable;
use crate::range_coder::{RangeDecoder, RangeEncoder};
use nzp_core::predictor::Predictor;

/// Compress `data` against `model`, returning the range-coded payload.
///
/// The beginning-of-stream byte fed to the first `predict_next` call is
/// `0`; it is a marker, not a claim that a real `0x00` byte preceded the
/// stream.
pub fn compress<P: Predictor>(data: &[u8], model: &P) -> Vec<u8> {
    let mut encoder = RangeEncoder::new();
    let mut state = model.create_state();
    let mut prev = 0u8;

    for &byte in data {
        let probs = model.predict_next(&mut state, prev);
        let table = FrequencyTable::quantize(&probs);
        let (cum_freq, freq) = table.freq_of(byte);
        encoder.encode_symbol(cum_freq, freq, table.total());
        prev = byte;
    }

    encoder.finish()
}

/// Decompress `payload` against `model`, reconstructing exactly
/// `original_size` bytes.
///
/// There is no in-band terminator: the caller (the container reader) is
/// responsible for supplying the correct `original_size`, which it reads
/// from the container header.
pub fn decompress<P: Predictor>(payload: &[u8], model: &P, original_size: u64) -> Vec<u8> {
    let mut decoder = RangeDecoder::new(payload);
    let mut state = model.create_state();
    let mut prev = 0u8;
    let mut out = Vec::with_capacity(original_size as usize);

    for _ in 0..original_size {
        let probs = model.predict_next(&mut state, prev);
        let table = FrequencyTable::quantize(&probs);
        let total = table.total();
        let value = decoder
            .get_cum(total)
            .expect("total is always nonzero: quantizer falls back to uniform");
        let symbol = table.symbol_at(value);
        let (cum_freq, freq) = table.freq_of(symbol);
        decoder.decode_symbol(cum_freq, freq, total);
        out.push(symbol);
        prev = symbol;
    }

    out
}
