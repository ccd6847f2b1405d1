//! Tiny single-layer LSTM predictor.
//!
//! Loads a fixed binary weight file and runs a one-hot-input, 256-way
//! softmax-output LSTM forward pass, one byte at a time. This is the only
//! [`Predictor`] implementation in the workspace; the trait exists so the
//! codec loop and the container's model bookkeeping stay decoupled from it.

use nzp_core::error::{NzpError, Result};
use nzp_core::predictor::{ByteProbabilities, Predictor};
use std::io::Read;
use std::path::Path;

const INPUT_SIZE: u32 = 256;
const FNV_OFFSET: u64 = 0xCBF2_9CE4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// A loaded set of LSTM weights.
///
/// Tensor shapes (row-major, `H` = `hidden_size`):
/// - `w_ih`: `[4H, 256]`
/// - `w_hh`: `[4H, H]`
/// - `b_ih`, `b_hh`: `[4H]`
/// - `w_out`: `[256, H]`
/// - `b_out`: `[256]`
#[derive(Debug, Clone)]
pub struct LstmWeights {
    hidden_size: u32,
    w_ih: Vec<f32>,
    w_hh: Vec<f32>,
    b_ih: Vec<f32>,
    b_hh: Vec<f32>,
    w_out: Vec<f32>,
    b_out: Vec<f32>,
    hash: u64,
}

impl LstmWeights {
    /// Load weights from a binary file.
    ///
    /// Layout: four little-endian `u32`s (`inputSize, hiddenSize,
    /// numLayers, reserved`), then the six tensors as tightly packed
    /// little-endian `f32`, in the order `w_ih, w_hh, b_ih, b_hh, w_out,
    /// b_out`. Fails if `inputSize != 256`, `numLayers != 1`, or the file
    /// is shorter than the layout requires.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut file = std::fs::File::open(path)?;
        let mut header = [0u8; 16];
        file.read_exact(&mut header)?;

        let input_size = u32::from_le_bytes(header[0..4].try_into().unwrap());
        let hidden_size = u32::from_le_bytes(header[4..8].try_into().unwrap());
        let num_layers = u32::from_le_bytes(header[8..12].try_into().unwrap());
        // header[12..16] is `reserved`, unused.

        if input_size != INPUT_SIZE {
            return Err(NzpError::corrupt(format!(
                "weight file inputSize {} != 256",
                input_size
            )));
        }
        if num_layers != 1 {
            return Err(NzpError::corrupt(format!(
                "weight file numLayers {} != 1",
                num_layers
            )));
        }

        let h = hidden_size as usize;
        let w_ih = read_f32_vec(&mut file, 4 * h * 256)?;
        let w_hh = read_f32_vec(&mut file, 4 * h * h)?;
        let b_ih = read_f32_vec(&mut file, 4 * h)?;
        let b_hh = read_f32_vec(&mut file, 4 * h)?;
        let w_out = read_f32_vec(&mut file, 256 * h)?;
        let b_out = read_f32_vec(&mut file, 256)?;

        let hash = fnv1a_tensors(&[&w_ih, &w_hh, &b_ih, &b_hh, &w_out, &b_out]);

        Ok(Self {
            hidden_size,
            w_ih,
            w_hh,
            b_ih,
            b_hh,
            w_out,
            b_out,
            hash,
        })
    }
}

fn read_f32_vec(reader: &mut impl Read, count: usize) -> Result<Vec<f32>> {
    let mut bytes = vec![0u8; count * 4];
    reader.read_exact(&mut bytes).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            NzpError::corrupt("weight file truncated")
        } else {
            NzpError::Io(e)
        }
    })?;
    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes(c.try_into().unwrap()))
        .collect())
}

fn fnv1a_tensors(tensors: &[&[f32]]) -> u64 {
    let mut hash = FNV_OFFSET;
    for tensor in tensors {
        for value in tensor.iter() {
            for byte in value.to_le_bytes() {
                hash ^= u64::from(byte);
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        }
    }
    hash
}

/// Per-stream LSTM hidden and cell state.
#[derive(Debug, Clone)]
pub struct LstmState {
    h: Vec<f32>,
    c: Vec<f32>,
}

#[inline]
fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

impl Predictor for LstmWeights {
    type State = LstmState;

    fn create_state(&self) -> LstmState {
        let h = self.hidden_size as usize;
        LstmState {
            h: vec![0.0; h],
            c: vec![0.0; h],
        }
    }

    fn predict_next(&self, state: &mut LstmState, prev_byte: u8) -> ByteProbabilities {
        let h = self.hidden_size as usize;
        let x = prev_byte as usize;

        let mut gates = vec![0.0f32; 4 * h];
        for r in 0..4 * h {
            gates[r] = self.b_ih[r] + self.b_hh[r];
        }

        for r in 0..4 * h {
            gates[r] += self.w_ih[r * 256 + x];
        }

        for r in 0..4 * h {
            let row = &self.w_hh[r * h..r * h + h];
            let mut acc = 0.0f32;
            for j in 0..h {
                acc += row[j] * state.h[j];
            }
            gates[r] += acc;
        }

        let (i_pre, rest) = gates.split_at(h);
        let (f_pre, rest) = rest.split_at(h);
        let (g_pre, o_pre) = rest.split_at(h);

        let mut h_new = vec![0.0f32; h];
        for j in 0..h {
            let i_t = sigmoid(i_pre[j]);
            let f_t = sigmoid(f_pre[j]);
            let g_t = g_pre[j].tanh();
            let o_t = sigmoid(o_pre[j]);

            state.c[j] = f_t * state.c[j] + i_t * g_t;
            h_new[j] = o_t * state.c[j].tanh();
        }
        state.h = h_new;

        let mut logits = [0.0f32; 256];
        for k in 0..256 {
            let row = &self.w_out[k * h..k * h + h];
            let mut acc = self.b_out[k];
            for j in 0..h {
                acc += row[j] * state.h[j];
            }
            logits[k] = acc;
        }

        let max_logit = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let mut probs = [0.0f32; 256];
        let mut sum = 0.0f32;
        for k in 0..256 {
            let e = (logits[k] - max_logit).exp();
            probs[k] = e;
            sum += e;
        }

        if sum <= 0.0 {
            return [1.0 / 256.0; 256];
        }
        let inv_sum = 1.0 / sum;
        for p in probs.iter_mut() {
            *p *= inv_sum;
        }
        probs
    }

    fn model_id(&self) -> u32 {
        1
    }

    fn model_hash(&self) -> u64 {
        self.hash
    }
}
