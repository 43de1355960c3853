//! Lifting kernels for the irreversible CDF 9/7 wavelet transform, the
//! floating-point filter used by block-based image codecs ahead of entropy
//! coding.
//!
//! The crate covers exactly one decomposition pass in one dimension:
//! [`forward`] splits a full-resolution line into its low- and high-pass
//! subbands, [`backward`] recombines them, and [`vertical_step`] /
//! [`vertical_scale`] are the row-combination building blocks a caller
//! chains to run the same recurrence down columns. Tiling, subband-to-
//! codeblock mapping and the number of decomposition levels are the
//! caller's concern.
//!
//! Buffers carry one guard cell on each side (see [`LineBuf`]); the guards
//! exist solely for the symmetric boundary extension the kernels interleave
//! with the lifting steps. All kernels are pure over caller-owned buffers
//! and hold no state, so disjoint lines may be transformed concurrently.
//!
//! With the default `simd` feature the inner loops run 8-wide through
//! `fearless_simd`; remainders and the stride-2 passes use scalar code with
//! the same per-position arithmetic, so results are identical at every
//! execution width.

mod horizontal;
mod lifting;
mod line;
mod log;
mod simd;
mod vertical;

pub use horizontal::{backward, forward};
pub use lifting::{K, K_INV, STEPS};
pub use line::{LineBuf, Parity};
pub use vertical::{vertical_scale, vertical_step};
