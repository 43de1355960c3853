//! Cross-kernel checks: the vertical building blocks, driven the way the
//! surrounding codec drives them, must agree bit for bit with the
//! horizontal kernels applied to extracted columns.

use cdf97::{LineBuf, Parity, backward, forward, vertical_scale, vertical_step};

fn test_rows(height: usize, cols: usize, seed: u32) -> Vec<Vec<f32>> {
    let mut state = seed.wrapping_mul(2_654_435_761).max(1);
    (0..height)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                    (state >> 8) as f32 / (1 << 23) as f32 - 1.0
                })
                .collect()
        })
        .collect()
}

fn offsets(parity: Parity) -> (usize, usize) {
    match parity {
        Parity::Even => (0, 1),
        Parity::Odd => (1, 0),
    }
}

fn clamp(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// Column analysis through the vertical kernels. The caller's job in the
/// codec: seed each destination row with the centre row, pass mirrored
/// neighbor rows at the image border and replicated subband rows at the
/// subband borders.
fn vertical_analyse(
    rows: &[Vec<f32>],
    cols: usize,
    parity: Parity,
) -> (Vec<Vec<f32>>, Vec<Vec<f32>>) {
    let height = rows.len();
    let l_len = parity.low_len(height);
    let h_len = parity.high_len(height);
    let (off_l, off_h) = offsets(parity);

    let mirror = |i: isize| -> usize {
        if i < 0 {
            (-i) as usize
        } else if i as usize >= height {
            2 * (height - 1) - i as usize
        } else {
            i as usize
        }
    };

    // Predict.
    let mut high: Vec<Vec<f32>> = (0..h_len)
        .map(|j| {
            let p = (2 * j + off_h) as isize;
            let mut dst = rows[p as usize].clone();
            vertical_step(0, &rows[mirror(p - 1)], &rows[mirror(p + 1)], &mut dst, cols);
            dst
        })
        .collect();

    // Update.
    let mut low: Vec<Vec<f32>> = (0..l_len)
        .map(|j| {
            let n = (j + off_l) as isize;
            let mut dst = rows[2 * j + off_l].clone();
            vertical_step(
                1,
                &high[clamp(n - 1, h_len)],
                &high[clamp(n, h_len)],
                &mut dst,
                cols,
            );
            dst
        })
        .collect();

    // Second predict.
    for j in 0..h_len {
        let n = (j + off_h) as isize;
        let s1 = low[clamp(n - 1, l_len)].clone();
        let s2 = low[clamp(n, l_len)].clone();
        vertical_step(2, &s1, &s2, &mut high[j], cols);
    }

    // Second update.
    for j in 0..l_len {
        let n = (j + off_l) as isize;
        let s1 = high[clamp(n - 1, h_len)].clone();
        let s2 = high[clamp(n, h_len)].clone();
        vertical_step(3, &s1, &s2, &mut low[j], cols);
    }

    for row in &mut low {
        let src = row.clone();
        vertical_scale(&src, row, true, cols);
    }
    for row in &mut high {
        let src = row.clone();
        vertical_scale(&src, row, false, cols);
    }

    (low, high)
}

/// Column synthesis, mirroring the backward kernel's order: gains first,
/// then the reversed lifting steps 7, 6, 5 and the re-interleaving 4.
fn vertical_synthesise(
    low: &[Vec<f32>],
    high: &[Vec<f32>],
    height: usize,
    cols: usize,
    parity: Parity,
) -> Vec<Vec<f32>> {
    let l_len = parity.low_len(height);
    let h_len = parity.high_len(height);
    let (off_l, off_h) = offsets(parity);

    let mut low: Vec<Vec<f32>> = low.to_vec();
    let mut high: Vec<Vec<f32>> = high.to_vec();

    for row in &mut low {
        let src = row.clone();
        vertical_scale(&src, row, false, cols);
    }
    for row in &mut high {
        let src = row.clone();
        vertical_scale(&src, row, true, cols);
    }

    for j in 0..l_len {
        let n = (j + off_l) as isize;
        let s1 = high[clamp(n - 1, h_len)].clone();
        let s2 = high[clamp(n, h_len)].clone();
        vertical_step(7, &s1, &s2, &mut low[j], cols);
    }
    for j in 0..h_len {
        let n = (j + off_h) as isize;
        let s1 = low[clamp(n - 1, l_len)].clone();
        let s2 = low[clamp(n, l_len)].clone();
        vertical_step(6, &s1, &s2, &mut high[j], cols);
    }
    for j in 0..l_len {
        let n = (j + off_l) as isize;
        let s1 = high[clamp(n - 1, h_len)].clone();
        let s2 = high[clamp(n, h_len)].clone();
        vertical_step(5, &s1, &s2, &mut low[j], cols);
    }

    let mut rows = vec![vec![0.0_f32; cols]; height];
    for j in 0..l_len {
        rows[2 * j + off_l] = low[j].clone();
    }
    for j in 0..h_len {
        let n = (j + off_h) as isize;
        let mut dst = high[j].clone();
        let s1 = low[clamp(n - 1, l_len)].clone();
        let s2 = low[clamp(n, l_len)].clone();
        vertical_step(4, &s1, &s2, &mut dst, cols);
        rows[2 * j + off_h] = dst;
    }

    rows
}

fn column(rows: &[Vec<f32>], c: usize) -> Vec<f32> {
    rows.iter().map(|row| row[c]).collect()
}

#[test]
fn vertical_analysis_matches_horizontal() {
    // Column counts straddling the vector width, heights of both parities.
    for (height, cols) in [(6, 5), (9, 8), (12, 13), (7, 21)] {
        for parity in [Parity::Even, Parity::Odd] {
            let rows = test_rows(height, cols, (height * cols) as u32);
            let (low_rows, high_rows) = vertical_analyse(&rows, cols, parity);

            for c in 0..cols {
                let line = column(&rows, c);
                let mut src = LineBuf::from_samples(&line);
                let mut low = LineBuf::new(parity.low_len(height));
                let mut high = LineBuf::new(parity.high_len(height));
                forward(&mut src, &mut low, &mut high, height, parity);

                for (j, v) in low.samples().iter().enumerate() {
                    assert_eq!(
                        v.to_bits(),
                        low_rows[j][c].to_bits(),
                        "L[{j}] col {c}, height {height}, {parity:?}"
                    );
                }
                for (j, v) in high.samples().iter().enumerate() {
                    assert_eq!(
                        v.to_bits(),
                        high_rows[j][c].to_bits(),
                        "H[{j}] col {c}, height {height}, {parity:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn vertical_synthesis_matches_horizontal() {
    for (height, cols) in [(6, 5), (11, 13)] {
        for parity in [Parity::Even, Parity::Odd] {
            let rows = test_rows(height, cols, 91 + cols as u32);
            let (low_rows, high_rows) = vertical_analyse(&rows, cols, parity);
            let restored = vertical_synthesise(&low_rows, &high_rows, height, cols, parity);

            for c in 0..cols {
                let mut dst = LineBuf::new(height);
                let mut lsrc = LineBuf::from_samples(&column(&low_rows, c));
                let mut hsrc = LineBuf::from_samples(&column(&high_rows, c));
                backward(&mut dst, &mut lsrc, &mut hsrc, height, parity);

                for (i, v) in dst.samples().iter().enumerate() {
                    assert_eq!(
                        v.to_bits(),
                        restored[i][c].to_bits(),
                        "row {i} col {c}, height {height}, {parity:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn two_dimensional_round_trip() {
    // One full decomposition of an 11x6 tile anchored at (3, 4): rows use
    // odd parity, columns even parity. Rows first, then columns, then back.
    let width = 11;
    let height = 6;
    let row_parity = Parity::of(3);
    let col_parity = Parity::of(4);

    let tile = test_rows(height, width, 5);

    // Horizontal analysis of each row, keeping L|H side by side.
    let mut transformed: Vec<Vec<f32>> = tile
        .iter()
        .map(|row| {
            let mut src = LineBuf::from_samples(row);
            let mut low = LineBuf::new(row_parity.low_len(width));
            let mut high = LineBuf::new(row_parity.high_len(width));
            forward(&mut src, &mut low, &mut high, width, row_parity);

            let mut out = low.samples().to_vec();
            out.extend_from_slice(high.samples());
            out
        })
        .collect();

    // Column analysis via the horizontal kernel on extracted columns.
    for c in 0..width {
        let mut src = LineBuf::from_samples(&column(&transformed, c));
        let mut low = LineBuf::new(col_parity.low_len(height));
        let mut high = LineBuf::new(col_parity.high_len(height));
        forward(&mut src, &mut low, &mut high, height, col_parity);

        for (i, v) in low.samples().iter().chain(high.samples()).enumerate() {
            transformed[i][c] = *v;
        }
    }

    // Invert columns, then rows.
    let l_rows = col_parity.low_len(height);
    for c in 0..width {
        let col: Vec<f32> = column(&transformed, c);
        let mut dst = LineBuf::new(height);
        let mut lsrc = LineBuf::from_samples(&col[..l_rows]);
        let mut hsrc = LineBuf::from_samples(&col[l_rows..]);
        backward(&mut dst, &mut lsrc, &mut hsrc, height, col_parity);

        for (i, v) in dst.samples().iter().enumerate() {
            transformed[i][c] = *v;
        }
    }

    let l_cols = row_parity.low_len(width);
    for (restored, original) in transformed.iter().zip(&tile) {
        let mut dst = LineBuf::new(width);
        let mut lsrc = LineBuf::from_samples(&restored[..l_cols]);
        let mut hsrc = LineBuf::from_samples(&restored[l_cols..]);
        backward(&mut dst, &mut lsrc, &mut hsrc, width, row_parity);

        for (a, b) in dst.samples().iter().zip(original) {
            assert!((a - b).abs() <= 1e-4, "{a} vs {b}");
        }
    }
}
