//! Byte-aligned, carry-less range coder.
//!
//! Unlike the bit-level, carry-propagating range coders used by LZMA-family
//! codecs, this coder tracks an explicit `[low, high]` interval on a 32-bit
//! range and renormalizes a byte at a time whenever `low` and `high` share
//! their top byte. Symbols are coded directly against a cumulative
//! frequency table built by [`crate::quantizer`], rather than one bit at a
//! time.

use nzp_core::error::{NzpError, Result};

const TOP_MASK: u32 = 0xFF00_0000;
const FULL_RANGE: u32 = 0xFFFF_FFFF;

/// Range encoder: consumes `(cum_freq, freq, total_freq)` triples and
/// produces a byte stream.
#[derive(Debug)]
pub struct RangeEncoder {
    low: u32,
    high: u32,
    out: Vec<u8>,
}

impl RangeEncoder {
    /// Create a new encoder with an empty output buffer.
    pub fn new() -> Self {
        Self {
            low: 0,
            high: FULL_RANGE,
            out: Vec::new(),
        }
    }

    /// Encode one symbol given its cumulative frequency, frequency, and the
    /// table's total frequency.
    ///
    /// `cum_freq + freq` must not exceed `total_freq`, and `freq` and
    /// `total_freq` must both be non-zero; this is a precondition enforced
    /// by the caller (the probability quantizer always produces a valid
    /// table), not a recoverable runtime error.
    pub fn encode_symbol(&mut self, cum_freq: u32, freq: u32, total_freq: u32) {
        debug_assert!(freq > 0 && total_freq > 0 && cum_freq + freq <= total_freq);

        let range = u64::from(self.high) - u64::from(self.low) + 1;

        let low_new = u64::from(self.low) + (range * u64::from(cum_freq)) / u64::from(total_freq);
        let high_new = u64::from(self.low)
            + (range * u64::from(cum_freq + freq)) / u64::from(total_freq)
            - 1;

        self.low = low_new as u32;
        self.high = high_new as u32;

        while (self.low & TOP_MASK) == (self.high & TOP_MASK) {
            self.out.push((self.high >> 24) as u8);
            self.low <<= 8;
            self.high = (self.high << 8) | 0xFF;
        }
    }

    /// Flush the final interval and return the encoded bytes.
    pub fn finish(mut self) -> Vec<u8> {
        for _ in 0..4 {
            self.out.push((self.low >> 24) as u8);
            self.low <<= 8;
        }
        self.out
    }
}

impl Default for RangeEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Range decoder: reads a byte stream and recovers cumulative-frequency
/// positions for the caller to look up in its model.
#[derive(Debug)]
pub struct RangeDecoder<'a> {
    low: u32,
    high: u32,
    code: u32,
    data: &'a [u8],
    pos: usize,
}

impl<'a> RangeDecoder<'a> {
    /// Create a new decoder over `data`, priming `code` with the first four
    /// bytes (padded with zeros if `data` is shorter than that).
    pub fn new(data: &'a [u8]) -> Self {
        let mut decoder = Self {
            low: 0,
            high: FULL_RANGE,
            code: 0,
            data,
            pos: 0,
        };
        for _ in 0..4 {
            decoder.code = (decoder.code << 8) | u32::from(decoder.read_byte());
        }
        decoder
    }

    fn read_byte(&mut self) -> u8 {
        if self.pos < self.data.len() {
            let byte = self.data[self.pos];
            self.pos += 1;
            byte
        } else {
            0
        }
    }

    /// Map the current code position into `[0, total_freq)`. The caller
    /// looks this value up in its cumulative frequency table to find which
    /// symbol it falls in, then calls [`RangeDecoder::decode_symbol`] with
    /// that symbol's `(cum_freq, freq)`.
    pub fn get_cum(&self, total_freq: u32) -> Result<u32> {
        if total_freq == 0 {
            return Err(NzpError::internal("range decoder: total_freq is zero"));
        }

        let range = u64::from(self.high) - u64::from(self.low) + 1;
        let scaled =
            ((u64::from(self.code) - u64::from(self.low) + 1) * u64::from(total_freq) - 1) / range;

        Ok(if scaled >= u64::from(total_freq) {
            total_freq - 1
        } else {
            scaled as u32
        })
    }

    /// Consume the symbol identified by `(cum_freq, freq)` and advance the
    /// decoder's interval.
    pub fn decode_symbol(&mut self, cum_freq: u32, freq: u32, total_freq: u32) {
        debug_assert!(freq > 0 && total_freq > 0 && cum_freq + freq <= total_freq);

        let range = u64::from(self.high) - u64::from(self.low) + 1;

        let low_new = u64::from(self.low) + (range * u64::from(cum_freq)) / u64::from(total_freq);
        let high_new = u64::from(self.low)
            + (range * u64::from(cum_freq + freq)) / u64::from(total_freq)
            - 1;

        self.low = low_new as u32;
        self.high = high_new as u32;

        while (self.low & TOP_MASK) == (self.high & TOP_MASK) {
            self.low <<= 8;
            self.high = (self.high << 8) | 0xFF;
            self.code = (self.code << 8) | u32::from(self.read_byte());
        }
    }

    /// Number of bytes of `data` still unread.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_uniform_symbols() {
        // 4 equally likely symbols, total_freq = 4.
        let symbols = [0u32, 1, 2, 3, 1, 0, 3, 2, 2, 1];

        let mut encoder = RangeEncoder::new();
        for &s in &symbols {
            encoder.encode_symbol(s, 1, 4);
        }
        let bytes = encoder.finish();

        let mut decoder = RangeDecoder::new(&bytes);
        for &expected in &symbols {
            let cum = decoder.get_cum(4).unwrap();
            assert_eq!(cum, expected);
            decoder.decode_symbol(cum, 1, 4);
        }
    }

    #[test]
    fn test_roundtrip_skewed_symbols() {
        // cum table: symbol 0 -> [0,100), symbol 1 -> [100, 110), symbol 2 -> [110, 128)
        let table = [(0u32, 100u32), (100, 10), (110, 18)];
        let total = 128u32;
        let symbols = [0usize, 0, 0, 1, 2, 0, 1, 0];

        let mut encoder = RangeEncoder::new();
        for &s in &symbols {
            let (cum, freq) = table[s];
            encoder.encode_symbol(cum, freq, total);
        }
        let bytes = encoder.finish();

        let mut decoder = RangeDecoder::new(&bytes);
        for &s in &symbols {
            let target = decoder.get_cum(total).unwrap();
            let decoded = table.iter().position(|&(cum, freq)| {
                target >= cum && target < cum + freq
            }).unwrap();
            assert_eq!(decoded, s);
            let (cum, freq) = table[decoded];
            decoder.decode_symbol(cum, freq, total);
        }
    }

    #[test]
    fn test_empty_symbol_stream() {
        let encoder = RangeEncoder::new();
        let bytes = encoder.finish();
        assert_eq!(bytes.len(), 4);
    }

    #[test]
    fn test_get_cum_zero_total_freq_errors() {
        let encoder = RangeEncoder::new();
        let bytes = encoder.finish();
        let decoder = RangeDecoder::new(&bytes);
        assert!(decoder.get_cum(0).is_err());
    }

    #[test]
    fn test_get_cum_does_not_panic_at_top_of_range() {
        // Initial state has low=0, high=0xFFFFFFFF; a payload whose first
        // four bytes are all 0xFF primes code to the top of the range,
        // where `code - low + 1` overflows u32 unless widened first.
        let bytes = [0xFFu8; 4];
        let decoder = RangeDecoder::new(&bytes);
        assert_eq!(decoder.get_cum(256).unwrap(), 255);
    }
}
