// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::util::tracing_wrappers::*;

/// Quantizer step sizes for one block: `dc` scales position 0, `ac` every other position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DequantFactors {
    pub dc: i16,
    pub ac: i16,
}

impl DequantFactors {
    pub fn new(dc: i16, ac: i16) -> DequantFactors {
        DequantFactors { dc, ac }
    }

    pub fn step(&self, pos: usize) -> i16 {
        if pos == 0 { self.dc } else { self.ac }
    }
}

/// Whether the DC coefficient of a block still needs dequantization.
///
/// Some blocks receive a DC value that upstream decoding already reconstructed, in which case
/// position 0 must be used as is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DcScaling {
    #[default]
    Dequantize,
    Prescaled,
}

/// Scales a single coefficient, with the product computed at 32 bits and then narrowed back to
/// coefficient storage.
#[inline]
pub fn dequantize_coefficient(coeff: i16, step: i16) -> i16 {
    (i32::from(coeff) * i32::from(step)) as i16
}

/// Dequantizes `coeffs` in place, skipping position 0 when the DC is prescaled.
pub(crate) fn dequantize_block(coeffs: &mut [i16], factors: DequantFactors, dc: DcScaling) {
    let first = match dc {
        DcScaling::Dequantize => 0,
        DcScaling::Prescaled => 1,
    };
    for (pos, c) in coeffs.iter_mut().enumerate().skip(first) {
        *c = dequantize_coefficient(*c, factors.step(pos));
    }
}

/// Dequantizes the listed positions of `coeffs` in place.
pub(crate) fn dequantize_positions(
    coeffs: &mut [i16],
    positions: &[usize],
    factors: DequantFactors,
    dc: DcScaling,
) {
    for &pos in positions {
        if pos == 0 && dc == DcScaling::Prescaled {
            continue;
        }
        coeffs[pos] = dequantize_coefficient(coeffs[pos], factors.step(pos));
    }
}

pub fn dequantize_4x4(coeffs: &[i16; 16], factors: DequantFactors, output: &mut [i16; 16]) {
    for (pos, (out, &c)) in output.iter_mut().zip(coeffs.iter()).enumerate() {
        *out = dequantize_coefficient(c, factors.step(pos));
    }
}

/// Dequantization of the second order block that carries the luma DC values of a macroblock
/// coded with 2x2 transforms. The arithmetic is the same as [`dequantize_4x4`].
pub fn dequantize_2x2(coeffs: &[i16; 16], factors: DequantFactors, output: &mut [i16; 16]) {
    dequantize_4x4(coeffs, factors, output);
    trace!(?coeffs, "dequantize 2x2 input");
    trace!(?output, "dequantize 2x2 output");
}
