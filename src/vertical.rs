//! Vertical lifting kernels, applied across rows with one lane per column.
//!
//! A column transform is a sequence of the same lifting recurrence the
//! horizontal kernels apply within a line, except that the two neighbors of
//! a position live in other rows. The caller walks the rows, seeds each
//! destination row with the centre sample and hands the (possibly mirrored)
//! neighbor rows to [`vertical_step`]; [`vertical_scale`] applies the final
//! gain. Each position is independent of its neighbors, so the kernels are
//! free to chop `repeat` into vector chunks plus a scalar tail without
//! changing the result.

use crate::lifting::{K, K_INV, STEPS};
use crate::simd::{Level, SIMD_WIDTH, Simd, dispatch, f32x8};

/// One vertical lifting step: `dst[i] += STEPS[step] * (src1[i] + src2[i])`
/// for the first `repeat` positions.
///
/// This is a fused accumulate, not an overwrite: `dst` must already hold the
/// centre row of the lifting recurrence (or the partial sum from an earlier
/// call). All three slices must hold at least `repeat` samples.
pub fn vertical_step(step: usize, src1: &[f32], src2: &[f32], dst: &mut [f32], repeat: usize) {
    debug_assert!(step < STEPS.len());
    debug_assert!(src1.len() >= repeat && src2.len() >= repeat && dst.len() >= repeat);

    dispatch!(Level::new(), simd => step_impl(simd, STEPS[step], &src1[..repeat], &src2[..repeat], &mut dst[..repeat]));
}

/// Applies the subband gain: `dst[i] = src[i] * K⁻¹` when
/// `low_analysis_or_high_synthesis` is set, `dst[i] = src[i] * K` otherwise,
/// for the first `repeat` positions.
pub fn vertical_scale(
    src: &[f32],
    dst: &mut [f32],
    low_analysis_or_high_synthesis: bool,
    repeat: usize,
) {
    debug_assert!(src.len() >= repeat && dst.len() >= repeat);

    let factor = if low_analysis_or_high_synthesis {
        K_INV
    } else {
        K
    };

    dispatch!(Level::new(), simd => scale_impl(simd, factor, &src[..repeat], &mut dst[..repeat]));
}

#[inline(always)]
fn step_impl<S: Simd>(simd: S, factor: f32, src1: &[f32], src2: &[f32], dst: &mut [f32]) {
    let f = f32x8::splat(simd, factor);

    let mut s1 = src1.chunks_exact(SIMD_WIDTH);
    let mut s2 = src2.chunks_exact(SIMD_WIDTH);
    let mut d = dst.chunks_exact_mut(SIMD_WIDTH);

    for ((d, s1), s2) in (&mut d).zip(&mut s1).zip(&mut s2) {
        let sum = f32x8::from_slice(simd, s1) + f32x8::from_slice(simd, s2);
        (f32x8::from_slice(simd, d) + f * sum).store(d);
    }

    for ((d, s1), s2) in d
        .into_remainder()
        .iter_mut()
        .zip(s1.remainder())
        .zip(s2.remainder())
    {
        *d += factor * (*s1 + *s2);
    }
}

#[inline(always)]
fn scale_impl<S: Simd>(simd: S, factor: f32, src: &[f32], dst: &mut [f32]) {
    let f = f32x8::splat(simd, factor);

    let mut s = src.chunks_exact(SIMD_WIDTH);
    let mut d = dst.chunks_exact_mut(SIMD_WIDTH);

    for (d, s) in (&mut d).zip(&mut s) {
        (f32x8::from_slice(simd, s) * f).store(d);
    }

    for (d, s) in d.into_remainder().iter_mut().zip(s.remainder()) {
        *d = *s * factor;
    }
}
