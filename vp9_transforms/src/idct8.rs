// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! 8x8 integer inverse DCT (row/column decomposition with 11-bit multipliers).

const W1: i64 = 2841; // 2048 * sqrt(2) * cos(1 * pi / 16)
const W2: i64 = 2676; // 2048 * sqrt(2) * cos(2 * pi / 16)
const W3: i64 = 2408; // 2048 * sqrt(2) * cos(3 * pi / 16)
const W5: i64 = 1609; // 2048 * sqrt(2) * cos(5 * pi / 16)
const W6: i64 = 1108; // 2048 * sqrt(2) * cos(6 * pi / 16)
const W7: i64 = 565; // 2048 * sqrt(2) * cos(7 * pi / 16)

/// Coefficient positions read by [`idct8x8_sparse`].
pub const IDCT8X8_SPARSE_POSITIONS: [usize; 10] = [0, 1, 2, 3, 8, 9, 10, 16, 17, 24];

/// Loads the 8 inputs of one 1-D transform in the order the butterflies consume them. When
/// `SPARSE`, inputs 4 to 7 are known to be zero and are not read.
#[inline(always)]
fn load<const SPARSE: bool>(blk: &[i64], step: usize) -> [i64; 8] {
    let at = |i: usize| blk[i * step];
    if SPARSE {
        [at(0), 0, 0, at(2), at(1), 0, 0, at(3)]
    } else {
        [at(0), at(4), at(6), at(2), at(1), at(7), at(5), at(3)]
    }
}

/// Butterfly network shared by the row and column passes. `x0` and `x1` arrive pre-scaled;
/// `round` and `shift` are applied to the odd-part products of the column pass.
#[inline(always)]
fn butterflies(x: [i64; 8], round: i64, shift: u32) -> [i64; 8] {
    let [mut x0, mut x1, mut x2, mut x3, mut x4, mut x5, mut x6, mut x7] = x;

    // first stage
    let mut x8 = W7 * (x4 + x5) + round;
    x4 = (x8 + (W1 - W7) * x4) >> shift;
    x5 = (x8 - (W1 + W7) * x5) >> shift;
    x8 = W3 * (x6 + x7) + round;
    x6 = (x8 - (W3 - W5) * x6) >> shift;
    x7 = (x8 - (W3 + W5) * x7) >> shift;

    // second stage
    x8 = x0 + x1;
    x0 -= x1;
    x1 = W6 * (x3 + x2) + round;
    x2 = (x1 - (W2 + W6) * x2) >> shift;
    x3 = (x1 + (W2 - W6) * x3) >> shift;
    x1 = x4 + x6;
    x4 -= x6;
    x6 = x5 + x7;
    x5 -= x7;

    // third stage
    x7 = x8 + x3;
    x8 -= x3;
    x3 = x0 + x2;
    x0 -= x2;
    x2 = (181 * (x4 + x5) + 128) >> 8;
    x4 = (181 * (x4 - x5) + 128) >> 8;

    [
        x7 + x1,
        x3 + x2,
        x0 + x4,
        x8 + x6,
        x8 - x6,
        x0 - x4,
        x3 - x2,
        x7 - x1,
    ]
}

#[inline(always)]
fn idct_row<const SPARSE: bool>(blk: &mut [i64]) {
    let x = load::<SPARSE>(blk, 1);
    if x[1..].iter().all(|&v| v == 0) {
        let dc = x[0] << 3;
        blk[..8].fill(dc);
        return;
    }
    // 128 rounds the fourth stage.
    let x = [(x[0] << 11) + 128, x[1] << 11, x[2], x[3], x[4], x[5], x[6], x[7]];
    for (o, v) in blk.iter_mut().zip(butterflies(x, 0, 0)) {
        *o = v >> 8;
    }
}

#[inline(always)]
fn idct_col<const SPARSE: bool>(blk: &mut [i64]) {
    let x = load::<SPARSE>(blk, 8);
    if x[1..].iter().all(|&v| v == 0) {
        let dc = (x[0] + 32) >> 6;
        for i in 0..8 {
            blk[8 * i] = dc;
        }
        return;
    }
    let x = [(x[0] << 8) + 8192, x[1] << 8, x[2], x[3], x[4], x[5], x[6], x[7]];
    for (i, v) in butterflies(x, 4, 3).into_iter().enumerate() {
        blk[8 * i] = v >> 14;
    }
}

#[inline(always)]
fn idct8x8_impl<const SPARSE: bool>(input: &[i16], output: &mut [i16]) {
    assert!(input.len() >= 64 && output.len() >= 64);

    let mut x = [0i64; 64];
    for (x, &c) in x.iter_mut().zip(input.iter()) {
        let c = i64::from(c);
        *x = (c + 1 + i64::from(c < 0)) >> 2;
    }

    // In the sparse case rows 4..8 are all zero and stay zero.
    let rows = if SPARSE { 4 } else { 8 };
    for row in x.chunks_exact_mut(8).take(rows) {
        idct_row::<SPARSE>(row);
    }
    for i in 0..8 {
        idct_col::<SPARSE>(&mut x[i..]);
    }

    for (o, &v) in output.iter_mut().zip(x.iter()) {
        *o = (v >> 1) as i16;
    }
}

/// Full 8x8 inverse DCT.
pub fn idct8x8(input: &[i16], output: &mut [i16]) {
    idct8x8_impl::<false>(input, output);
}

/// 8x8 inverse DCT for blocks whose only non-zero coefficients are in
/// [`IDCT8X8_SPARSE_POSITIONS`]. Bit-exact with [`idct8x8`] on such input.
pub fn idct8x8_sparse(input: &[i16], output: &mut [i16]) {
    idct8x8_impl::<true>(input, output);
}
