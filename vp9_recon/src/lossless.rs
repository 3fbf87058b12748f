// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! 4x4 reconstruction with the reversible Walsh-Hadamard transform, for lossless coding.

use vp9_transforms::iwht4x4;

use crate::{
    block::{BlockMut, BlockRef},
    dequant::{DcScaling, DequantFactors},
    idct_add::{Block4x4, full_path},
    util::tracing_wrappers::*,
};

#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(coeffs, pred, dest)))]
pub fn dequant_idct_add_lossless(
    coeffs: &mut [i16],
    factors: DequantFactors,
    pred: BlockRef,
    dest: &mut BlockMut,
) {
    trace!("lossless block");
    full_path::<Block4x4>(coeffs, factors, DcScaling::Dequantize, pred, dest, iwht4x4);
}

/// Lossless counterpart of [`crate::idct_add::dequant_dc_idct_add_4x4`].
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(coeffs, pred, dest)))]
pub fn dequant_dc_idct_add_lossless(
    coeffs: &mut [i16],
    factors: DequantFactors,
    dc: i16,
    pred: BlockRef,
    dest: &mut BlockMut,
) {
    trace!(dc, "lossless block with supplied dc");
    coeffs[0] = dc;
    full_path::<Block4x4>(coeffs, factors, DcScaling::Prescaled, pred, dest, iwht4x4);
}
