// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

/// cos(pi/8) * sqrt(2) - 1 in Q16.
const COSPI8_SQRT2_MINUS1: i64 = 20091;
/// sin(pi/8) * sqrt(2) in Q16.
const SINPI8_SQRT2: i64 = 35468;

#[inline(always)]
fn idct4(i0: i64, i1: i64, i2: i64, i3: i64) -> [i64; 4] {
    let a1 = i0 + i2;
    let b1 = i0 - i2;

    let t1 = (i1 * SINPI8_SQRT2) >> 16;
    let t2 = i3 + ((i3 * COSPI8_SQRT2_MINUS1) >> 16);
    let c1 = t1 - t2;

    let t1 = i1 + ((i1 * COSPI8_SQRT2_MINUS1) >> 16);
    let t2 = (i3 * SINPI8_SQRT2) >> 16;
    let d1 = t1 + t2;

    [a1 + d1, b1 + c1, b1 - c1, a1 - d1]
}

/// Default 4x4 inverse transform: columns first, then rows with a final `(x + 4) >> 3`.
pub fn idct4x4(input: &[i16], output: &mut [i16]) {
    // One length check up front avoids bounds checks below.
    assert!(input.len() >= 16 && output.len() >= 16);

    // The intermediate results may overflow 32 bits on out-of-range input, so stretch the type.
    let fetch = |idx: usize| i64::from(input[idx]);

    let mut tmp = [0i64; 16];
    for i in 0..4 {
        let col = idct4(fetch(i), fetch(4 + i), fetch(8 + i), fetch(12 + i));
        for (r, v) in col.into_iter().enumerate() {
            tmp[4 * r + i] = v;
        }
    }

    for (row, out) in tmp.chunks_exact(4).zip(output.chunks_exact_mut(4)) {
        let res = idct4(row[0], row[1], row[2], row[3]);
        for (o, v) in out.iter_mut().zip(res) {
            *o = ((v + 4) >> 3) as i16;
        }
    }
}
