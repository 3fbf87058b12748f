// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Hybrid inverse transforms: every 1-D pass independently picks a DCT or an ADST basis.

use crate::tables::{ADST4, ADST8, ADST16, DCT4, DCT8, DCT16};
use crate::transform_type::TxType;

/// Orthonormal Q14 bases for one transform size.
struct Bases<const N: usize> {
    dct: &'static [[i32; N]; N],
    adst: &'static [[i32; N]; N],
    /// Extra right shift bringing the orthonormal output to the scale of the default transform
    /// of the same size.
    output_shift: u32,
}

const BASES4: Bases<4> = Bases {
    dct: &DCT4,
    adst: &ADST4,
    output_shift: 1,
};

const BASES8: Bases<8> = Bases {
    dct: &DCT8,
    adst: &ADST8,
    output_shift: 3,
};

const BASES16: Bases<16> = Bases {
    dct: &DCT16,
    adst: &ADST16,
    output_shift: 3,
};

#[inline(always)]
fn round_shift(x: i64, shift: u32) -> i64 {
    (x + (1 << (shift - 1))) >> shift
}

fn iht<const N: usize>(bases: &Bases<N>, tx_type: TxType, input: &[i16], output: &mut [i16]) {
    assert!(input.len() >= N * N && output.len() >= N * N);

    let vertical = if tx_type.vertical_is_adst() {
        bases.adst
    } else {
        bases.dct
    };
    let horizontal = if tx_type.horizontal_is_adst() {
        bases.adst
    } else {
        bases.dct
    };

    // Vertical pass, kept at full precision.
    let mut tmp = [[0i64; N]; N];
    for (r, tmp_row) in tmp.iter_mut().enumerate() {
        for (c, t) in tmp_row.iter_mut().enumerate() {
            let acc: i64 = (0..N)
                .map(|k| i64::from(vertical[k][r]) * i64::from(input[k * N + c]))
                .sum();
            *t = round_shift(acc, 14);
        }
    }

    for (tmp_row, out_row) in tmp.iter().zip(output.chunks_exact_mut(N)) {
        for (c, o) in out_row.iter_mut().enumerate() {
            let acc: i64 = (0..N)
                .map(|k| i64::from(horizontal[k][c]) * tmp_row[k])
                .sum();
            *o = round_shift(acc, 14 + bases.output_shift) as i16;
        }
    }
}

/// 4x4 hybrid inverse transform.
pub fn iht4x4(tx_type: TxType, input: &[i16], output: &mut [i16]) {
    iht(&BASES4, tx_type, input, output);
}

/// 8x8 hybrid inverse transform.
pub fn iht8x8(tx_type: TxType, input: &[i16], output: &mut [i16]) {
    iht(&BASES8, tx_type, input, output);
}

/// 16x16 hybrid inverse transform.
pub fn iht16x16(tx_type: TxType, input: &[i16], output: &mut [i16]) {
    iht(&BASES16, tx_type, input, output);
}
