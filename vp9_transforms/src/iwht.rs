// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

/// Lossless coefficients carry this many extra bits of precision.
const UNIT_QUANT_SHIFT: u32 = 2;

/// One lifting pass of the reversible Walsh-Hadamard transform. Inputs are given in storage
/// order `[a, c, d, b]` and the result is returned as `[a, b, c, d]`.
#[inline(always)]
fn iwht4(input: [i32; 4]) -> [i32; 4] {
    let [mut a1, mut c1, mut d1, mut b1] = input;
    a1 += c1;
    d1 -= b1;
    let e1 = (a1 - d1) >> 1;
    b1 = e1 - b1;
    c1 = e1 - c1;
    a1 -= b1;
    d1 += c1;
    [a1, b1, c1, d1]
}

/// Reversible 4x4 inverse Walsh-Hadamard transform used by lossless blocks. Rows first, then
/// columns. Every step is an integer lifting step, so the matching forward transform inverts it
/// exactly.
pub fn iwht4x4(input: &[i16], output: &mut [i16]) {
    assert!(input.len() >= 16 && output.len() >= 16);

    let mut tmp = [0i32; 16];
    for (row, out) in input.chunks_exact(4).zip(tmp.chunks_exact_mut(4)) {
        let row = [row[0], row[1], row[2], row[3]].map(|x| i32::from(x) >> UNIT_QUANT_SHIFT);
        out.copy_from_slice(&iwht4(row));
    }

    for i in 0..4 {
        let col = iwht4([tmp[i], tmp[4 + i], tmp[8 + i], tmp[12 + i]]);
        for (r, v) in col.into_iter().enumerate() {
            output[4 * r + i] = v as i16;
        }
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::*;

    #[test]
    fn dc_only() {
        let mut input = [0i16; 16];
        input[0] = 4 * 12;
        let mut output = [0i16; 16];
        iwht4x4(&input, &mut output);
        assert_eq!(output, [3; 16]);
    }

    #[test]
    fn discards_sub_unit_precision() {
        let mut input = [3i16; 16];
        let mut output = [1i16; 16];
        iwht4x4(&input, &mut output);
        assert_eq!(output, [0; 16]);

        input = [-1; 16];
        iwht4x4(&input, &mut output);
        // -1 >> 2 is still -1, so the block is not cleared.
        let mut expected = [0i16; 16];
        expected[0] = -4;
        assert_eq!(output, expected);
    }
}
