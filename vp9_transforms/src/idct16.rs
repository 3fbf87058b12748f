// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::tables::IDCT16_UNIT_DC;

/// Coefficient positions read by [`idct16x16_sparse`].
pub const IDCT16X16_SPARSE_POSITIONS: [usize; 10] = [0, 1, 2, 3, 16, 17, 18, 32, 33, 48];

/// 1-D 16-point inverse DCT over inputs `0..TAPS`, all later inputs being zero. DC passes
/// through unchanged: `out = (x0 << 14 + 8192) >> 14 = x0`.
#[inline(always)]
fn idct16<const TAPS: usize>(input: [i64; 16]) -> [i64; 16] {
    std::array::from_fn(|n| {
        let acc: i64 = (0..TAPS)
            .map(|k| i64::from(IDCT16_UNIT_DC[k][n]) * input[k])
            .sum();
        (acc + (1 << 13)) >> 14
    })
}

#[inline(always)]
fn idct16x16_impl<const TAPS: usize>(input: &[i16], output: &mut [i16]) {
    assert!(input.len() >= 256 && output.len() >= 256);

    let mut tmp = [0i64; 256];
    // Rows past TAPS are all zero; their transform is zero as well.
    for (row_in, row_out) in input
        .chunks_exact(16)
        .zip(tmp.chunks_exact_mut(16))
        .take(TAPS)
    {
        let row = std::array::from_fn(|i| (i64::from(row_in[i]) + 2) >> 2);
        for (o, v) in row_out.iter_mut().zip(idct16::<TAPS>(row)) {
            *o = (v + 2) >> 2;
        }
    }

    for i in 0..16 {
        let col = std::array::from_fn(|r| tmp[16 * r + i]);
        for (r, v) in idct16::<TAPS>(col).into_iter().enumerate() {
            output[16 * r + i] = ((v + 4) >> 3) as i16;
        }
    }
}

/// Full 16x16 inverse DCT. Input is pre-rounded by `(c + 2) >> 2`, rows are rounded by
/// `(x + 2) >> 2` between passes and the output by `(x + 4) >> 3`.
pub fn idct16x16(input: &[i16], output: &mut [i16]) {
    idct16x16_impl::<16>(input, output);
}

/// 16x16 inverse DCT for blocks whose only non-zero coefficients are in
/// [`IDCT16X16_SPARSE_POSITIONS`]. Only the first four rows and the first four taps of each
/// column are computed. Bit-exact with [`idct16x16`] on such input.
pub fn idct16x16_sparse(input: &[i16], output: &mut [i16]) {
    idct16x16_impl::<4>(input, output);
}
