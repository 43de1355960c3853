//! Single-line analysis and synthesis kernels for the 9/7 filter.
//!
//! One forward call splits a full-resolution line into its low- and
//! high-pass subbands; one backward call recombines them. Both walk the
//! same fixed sequence of extend/lift pairs, finishing (respectively
//! starting) with the `K`/`K⁻¹` gains. The steps that stay within subband
//! coordinates are vectorized; the two stride-2 passes that read the
//! interleaved line and the final re-interleave are scalar, which keeps
//! the lifting arithmetic itself width-agnostic.

use crate::lifting::{K, K_INV, STEPS};
use crate::line::{LineBuf, Parity};
use crate::log::ltrace;
use crate::simd::{Level, SIMD_WIDTH, Simd, dispatch, f32x8};

/// Forward (analysis) transform of one line.
///
/// Splits the `width` samples of `src` into `parity.low_len(width)` low-pass
/// coefficients in `ldst` and `parity.high_len(width)` high-pass
/// coefficients in `hdst`. All three buffers need their guard cells; `src`
/// is mutable because its guards are rewritten by the extension step.
///
/// `width == 0` is not a defined input.
pub fn forward(
    src: &mut LineBuf,
    ldst: &mut LineBuf,
    hdst: &mut LineBuf,
    width: usize,
    parity: Parity,
) {
    debug_assert!(width >= 1);
    debug_assert!(src.len() >= width);
    debug_assert!(ldst.len() >= parity.low_len(width));
    debug_assert!(hdst.len() >= parity.high_len(width));

    ltrace!("forward 9/7 line: width {}, parity {:?}", width, parity);

    // A single sample is already its own subband.
    if width == 1 {
        match parity {
            Parity::Even => ldst.set(0, src.at(0)),
            Parity::Odd => hdst.set(0, src.at(0)),
        }
        return;
    }

    dispatch!(Level::new(), simd => forward_impl(simd, src, ldst, hdst, width, parity));
}

/// Backward (synthesis) transform of one line.
///
/// Recombines `lsrc` and `hsrc` into the `width` samples of `dst`. The
/// subband buffers are consumed destructively: they hold intermediate
/// lifting values afterwards.
///
/// `width == 0` is not a defined input.
pub fn backward(
    dst: &mut LineBuf,
    lsrc: &mut LineBuf,
    hsrc: &mut LineBuf,
    width: usize,
    parity: Parity,
) {
    debug_assert!(width >= 1);
    debug_assert!(dst.len() >= width);
    debug_assert!(lsrc.len() >= parity.low_len(width));
    debug_assert!(hsrc.len() >= parity.high_len(width));

    ltrace!("backward 9/7 line: width {}, parity {:?}", width, parity);

    if width == 1 {
        let only = match parity {
            Parity::Even => lsrc.at(0),
            Parity::Odd => hsrc.at(0),
        };
        dst.set(0, only);
        return;
    }

    dispatch!(Level::new(), simd => backward_impl(simd, dst, lsrc, hsrc, width, parity));
}

#[inline(always)]
fn forward_impl<S: Simd>(
    simd: S,
    src: &mut LineBuf,
    ldst: &mut LineBuf,
    hdst: &mut LineBuf,
    width: usize,
    parity: Parity,
) {
    let l_len = parity.low_len(width);
    let h_len = parity.high_len(width);
    let (off_l, off_h) = parity.offsets();

    src.extend_mirror(width);
    // Predict: lift the high phase straight out of the interleaved line.
    for j in 0..h_len {
        let p = (2 * j + off_h) as isize;
        hdst.set(
            j as isize,
            src.at(p) + STEPS[0] * (src.at(p - 1) + src.at(p + 1)),
        );
    }

    hdst.extend_edge(h_len);
    // Update: the low phase, centre samples still read from the line.
    for j in 0..l_len {
        let p = (2 * j + off_l) as isize;
        let n = (j + off_l) as isize;
        ldst.set(
            j as isize,
            src.at(p) + STEPS[1] * (hdst.at(n - 1) + hdst.at(n)),
        );
    }

    ldst.extend_edge(l_len);
    lift(simd, STEPS[2], ldst, hdst, off_h, h_len);

    hdst.extend_edge(h_len);
    lift(simd, STEPS[3], hdst, ldst, off_l, l_len);

    scale(simd, K_INV, ldst, l_len);
    scale(simd, K, hdst, h_len);
}

#[inline(always)]
fn backward_impl<S: Simd>(
    simd: S,
    dst: &mut LineBuf,
    lsrc: &mut LineBuf,
    hsrc: &mut LineBuf,
    width: usize,
    parity: Parity,
) {
    let l_len = parity.low_len(width);
    let h_len = parity.high_len(width);
    let (off_l, off_h) = parity.offsets();

    // Gains come off first; the lifting steps then run in reverse order,
    // each undone by the negated multiplier from the table.
    scale(simd, K, lsrc, l_len);
    scale(simd, K_INV, hsrc, h_len);

    hsrc.extend_edge(h_len);
    lift(simd, STEPS[7], hsrc, lsrc, off_l, l_len);

    lsrc.extend_edge(l_len);
    lift(simd, STEPS[6], lsrc, hsrc, off_h, h_len);

    hsrc.extend_edge(h_len);
    lift(simd, STEPS[5], hsrc, lsrc, off_l, l_len);

    lsrc.extend_edge(l_len);
    // The last predict also re-interleaves both phases into the full line.
    for j in 0..l_len {
        dst.set((2 * j + off_l) as isize, lsrc.at(j as isize));
    }
    for j in 0..h_len {
        let n = (j + off_h) as isize;
        dst.set(
            (2 * j + off_h) as isize,
            hsrc.at(j as isize) + STEPS[4] * (lsrc.at(n - 1) + lsrc.at(n)),
        );
    }
}

/// One subband-space lifting pass:
/// `dst[j] += factor * (src[j - 1 + offset] + src[j + offset])` for
/// `j < count`. The boundary iterations read the guard cell the preceding
/// extension wrote.
#[inline(always)]
fn lift<S: Simd>(
    simd: S,
    factor: f32,
    src: &LineBuf,
    dst: &mut LineBuf,
    offset: usize,
    count: usize,
) {
    let s = src.raw();
    let d = dst.raw_mut();
    let f = f32x8::splat(simd, factor);

    let full = count / SIMD_WIDTH * SIMD_WIDTH;
    for base in (0..full).step_by(SIMD_WIDTH) {
        let s1 = f32x8::from_slice(simd, &s[base + offset..][..SIMD_WIDTH]);
        let s2 = f32x8::from_slice(simd, &s[base + offset + 1..][..SIMD_WIDTH]);
        let dv = f32x8::from_slice(simd, &d[base + 1..][..SIMD_WIDTH]);
        (dv + f * (s1 + s2)).store(&mut d[base + 1..][..SIMD_WIDTH]);
    }

    for j in full..count {
        d[j + 1] += factor * (s[j + offset] + s[j + offset + 1]);
    }
}

#[inline(always)]
fn scale<S: Simd>(simd: S, factor: f32, buf: &mut LineBuf, count: usize) {
    let d = buf.raw_mut();
    let f = f32x8::splat(simd, factor);

    let full = count / SIMD_WIDTH * SIMD_WIDTH;
    for base in (0..full).step_by(SIMD_WIDTH) {
        let v = f32x8::from_slice(simd, &d[base + 1..][..SIMD_WIDTH]);
        (v * f).store(&mut d[base + 1..][..SIMD_WIDTH]);
    }

    for j in full..count {
        d[j + 1] *= factor;
    }
}
