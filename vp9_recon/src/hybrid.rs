// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Reconstruction of blocks coded with a hybrid (ADST/DCT) transform. These blocks always take
//! the full path: there is no reduced form of the hybrid transforms.

use vp9_transforms::TxType;

use crate::{
    block::{BlockMut, BlockRef},
    dequant::{DcScaling, DequantFactors},
    idct_add::{Block4x4, Block8x8, Block16x16, BlockSize, full_path},
    util::tracing_wrappers::*,
};

pub(crate) fn ht_dequant_idct_add<S: BlockSize>(
    tx_type: TxType,
    coeffs: &mut [i16],
    factors: DequantFactors,
    pred: BlockRef,
    dest: &mut BlockMut,
) {
    trace!(dim = S::DIM, ?tx_type, "hybrid transform block");
    full_path::<S>(
        coeffs,
        factors,
        DcScaling::Dequantize,
        pred,
        dest,
        |input, output| S::iht(tx_type, input, output),
    );
}

#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(coeffs, pred, dest)))]
pub fn ht_dequant_idct_add_4x4(
    tx_type: TxType,
    coeffs: &mut [i16],
    factors: DequantFactors,
    pred: BlockRef,
    dest: &mut BlockMut,
) {
    ht_dequant_idct_add::<Block4x4>(tx_type, coeffs, factors, pred, dest);
}

#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(coeffs, pred, dest)))]
pub fn ht_dequant_idct_add_8x8(
    tx_type: TxType,
    coeffs: &mut [i16],
    factors: DequantFactors,
    pred: BlockRef,
    dest: &mut BlockMut,
) {
    ht_dequant_idct_add::<Block8x8>(tx_type, coeffs, factors, pred, dest);
}

#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(coeffs, pred, dest)))]
pub fn ht_dequant_idct_add_16x16(
    tx_type: TxType,
    coeffs: &mut [i16],
    factors: DequantFactors,
    pred: BlockRef,
    dest: &mut BlockMut,
) {
    ht_dequant_idct_add::<Block16x16>(tx_type, coeffs, factors, pred, dest);
}
