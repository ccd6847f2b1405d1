//! The `Predictor` trait: the seam between the statistical model and the
//! range coder.
//!
//! An `nzp` model walks the byte stream one symbol at a time. Before coding
//! byte `i`, the codec loop asks the predictor for a probability
//! distribution over the 256 possible next bytes, conditioned on everything
//! seen so far (via the opaque per-stream `State`). The range coder then
//! encodes or decodes against that distribution.

/// A probability distribution over the 256 possible byte values.
///
/// Entries need not be exactly normalized; [`crate::predictor::Predictor`]
/// implementations should produce values that sum close to 1.0, and callers
/// (the probability quantizer) are responsible for turning this into an
/// integer cumulative frequency table.
pub type ByteProbabilities = [f32; 256];

/// A statistical model that predicts the next byte of a stream.
///
/// Implemented by the tiny LSTM in `nzp-coder`. Kept as a trait, rather than
/// a concrete struct, so the codec loop in `nzp-coder::codec` and the
/// container/model-id bookkeeping in `nzp` do not need to know anything
/// about the model's internals.
pub trait Predictor {
    /// Per-stream mutable state (hidden/cell vectors, or similar). Created
    /// once per compress/decompress call and threaded through every
    /// `predict_next` call for that stream.
    type State;

    /// Create a fresh state for a new stream, with no prior context.
    fn create_state(&self) -> Self::State;

    /// Predict the distribution of the next byte given the previous byte
    /// and the running state.
    ///
    /// `prev_byte` is `0` for the very first byte of a stream (there is no
    /// real previous byte yet); implementations treat this as a
    /// beginning-of-stream marker rather than a literal zero byte having
    /// been seen. `state` is updated in place to reflect `prev_byte` having
    /// been consumed.
    fn predict_next(&self, state: &mut Self::State, prev_byte: u8) -> ByteProbabilities;

    /// Stable identifier for the model architecture/weight layout. Stored
    /// in the container header and checked against the loaded model before
    /// decoding.
    fn model_id(&self) -> u32;

    /// Hash of the model's weights, used to detect loading the wrong weight
    /// file for a given container. A value of `0` means "unchecked" and
    /// disables this comparison.
    fn model_hash(&self) -> u64;
}
