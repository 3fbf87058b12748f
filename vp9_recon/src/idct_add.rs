// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Dequantization and inverse transform of default transform blocks.
//!
//! 8x8 and 16x16 blocks pick one of four paths from their end of block count: no residual at
//! all, a closed-form DC-only residual, a reduced transform over the low frequency corner, or
//! the full transform. 4x4 blocks always take the full path.
//!
//! Every path except the skip path leaves the coefficients it read set to zero, so that the
//! caller can reuse the buffer for the next block.

use vp9_transforms::{
    IDCT8X8_SPARSE_POSITIONS, IDCT16X16_SPARSE_POSITIONS, MAX_BLOCK_AREA, TxType, idct4x4,
    idct8x8, idct8x8_sparse, idct16x16, idct16x16_sparse, iht4x4, iht8x8, iht16x16,
};

use crate::{
    block::{BlockMut, BlockRef},
    dequant::{
        DcScaling, DequantFactors, dequantize_block, dequantize_coefficient,
        dequantize_positions,
    },
    residual::{add_constant_residual, add_residual, copy_prediction},
    util::tracing_wrappers::*,
};

pub trait BlockSize {
    const DIM: usize;
    const AREA: usize = Self::DIM * Self::DIM;

    /// Default inverse transform.
    fn idct(input: &[i16], output: &mut [i16]);

    /// Hybrid inverse transform of the given type.
    fn iht(tx_type: TxType, input: &[i16], output: &mut [i16]);
}

/// Block sizes whose default transform has reduced-cost paths for mostly empty blocks.
pub trait FastPaths: BlockSize {
    /// Positions read by [`FastPaths::idct_sparse`]. These are the first positions in scan
    /// order, so a block whose end of block is at most [`FastPaths::SPARSE_EOB_LIMIT`] has no
    /// other non-zero coefficient.
    const SPARSE_POSITIONS: [usize; 10];
    const SPARSE_EOB_LIMIT: usize = 10;

    fn idct_sparse(input: &[i16], output: &mut [i16]);

    /// The constant residual the default transform produces for a block whose only non-zero
    /// coefficient is the (not yet dequantized, unless prescaled) DC.
    fn dc_only_residual(dc: i16, factors: DequantFactors, scaling: DcScaling) -> i16;
}

pub struct Block4x4;
pub struct Block8x8;
pub struct Block16x16;

impl BlockSize for Block4x4 {
    const DIM: usize = 4;

    fn idct(input: &[i16], output: &mut [i16]) {
        idct4x4(input, output)
    }

    fn iht(tx_type: TxType, input: &[i16], output: &mut [i16]) {
        iht4x4(tx_type, input, output)
    }
}

impl BlockSize for Block8x8 {
    const DIM: usize = 8;

    fn idct(input: &[i16], output: &mut [i16]) {
        idct8x8(input, output)
    }

    fn iht(tx_type: TxType, input: &[i16], output: &mut [i16]) {
        iht8x8(tx_type, input, output)
    }
}

impl FastPaths for Block8x8 {
    const SPARSE_POSITIONS: [usize; 10] = IDCT8X8_SPARSE_POSITIONS;

    fn idct_sparse(input: &[i16], output: &mut [i16]) {
        idct8x8_sparse(input, output)
    }

    fn dc_only_residual(dc: i16, factors: DequantFactors, scaling: DcScaling) -> i16 {
        // The dequantized DC is stored as a coefficient first, exactly as on the full path.
        let dc = match scaling {
            DcScaling::Dequantize => dequantize_coefficient(dc, factors.dc),
            DcScaling::Prescaled => dc,
        };
        let dc = i32::from(dc);
        let out = (dc + 1 + i32::from(dc < 0)) >> 2;
        let out = out << 3;
        ((out + 32) >> 7) as i16
    }
}

impl BlockSize for Block16x16 {
    const DIM: usize = 16;

    fn idct(input: &[i16], output: &mut [i16]) {
        idct16x16(input, output)
    }

    fn iht(tx_type: TxType, input: &[i16], output: &mut [i16]) {
        iht16x16(tx_type, input, output)
    }
}

impl FastPaths for Block16x16 {
    const SPARSE_POSITIONS: [usize; 10] = IDCT16X16_SPARSE_POSITIONS;

    fn idct_sparse(input: &[i16], output: &mut [i16]) {
        idct16x16_sparse(input, output)
    }

    fn dc_only_residual(dc: i16, factors: DequantFactors, scaling: DcScaling) -> i16 {
        // Unlike 8x8, the product is rounded without being narrowed first.
        let dc = match scaling {
            DcScaling::Dequantize => i32::from(dc) * i32::from(factors.dc),
            DcScaling::Prescaled => i32::from(dc),
        };
        let out = (dc + 2) >> 2;
        let out = (out + 2) >> 2;
        ((out + 4) >> 3) as i16
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReconPath {
    Skip,
    DcOnly,
    Sparse,
    Full,
}

impl ReconPath {
    pub fn select<S: FastPaths>(eob: usize) -> ReconPath {
        match eob {
            0 => ReconPath::Skip,
            1 => ReconPath::DcOnly,
            eob if eob <= S::SPARSE_EOB_LIMIT => ReconPath::Sparse,
            _ => ReconPath::Full,
        }
    }
}

/// Dequantizes the whole block, runs `kernel` and merges its output onto the prediction.
pub(crate) fn full_path<S: BlockSize>(
    coeffs: &mut [i16],
    factors: DequantFactors,
    dc: DcScaling,
    pred: BlockRef,
    dest: &mut BlockMut,
    kernel: impl FnOnce(&[i16], &mut [i16]),
) {
    debug_assert_eq!(dest.size(), (S::DIM, S::DIM));
    let coeffs = &mut coeffs[..S::AREA];
    dequantize_block(coeffs, factors, dc);
    let mut residual = [0i16; MAX_BLOCK_AREA];
    let residual = &mut residual[..S::AREA];
    kernel(coeffs, residual);
    coeffs.fill(0);
    add_residual(residual, pred, dest);
}

pub(crate) fn dequant_idct_add<S: FastPaths>(
    coeffs: &mut [i16],
    factors: DequantFactors,
    dc: DcScaling,
    eob: usize,
    pred: BlockRef,
    dest: &mut BlockMut,
) {
    debug_assert!(eob <= S::AREA);
    debug_assert!(coeffs.len() >= S::AREA);
    debug_assert_eq!(dest.size(), (S::DIM, S::DIM));
    let path = ReconPath::select::<S>(eob);
    trace!(dim = S::DIM, eob, ?path, "selected reconstruction path");
    match path {
        ReconPath::Skip => copy_prediction(pred, dest),
        ReconPath::DcOnly => {
            let diff = S::dc_only_residual(coeffs[0], factors, dc);
            coeffs[0] = 0;
            add_constant_residual(diff, pred, dest);
        }
        ReconPath::Sparse => {
            dequantize_positions(coeffs, &S::SPARSE_POSITIONS, factors, dc);
            let mut residual = [0i16; MAX_BLOCK_AREA];
            let residual = &mut residual[..S::AREA];
            S::idct_sparse(coeffs, residual);
            for &pos in S::SPARSE_POSITIONS.iter() {
                coeffs[pos] = 0;
            }
            add_residual(residual, pred, dest);
        }
        ReconPath::Full => full_path::<S>(coeffs, factors, dc, pred, dest, S::idct),
    }
}

#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(coeffs, pred, dest)))]
pub fn dequant_idct_add_4x4(
    coeffs: &mut [i16],
    factors: DequantFactors,
    pred: BlockRef,
    dest: &mut BlockMut,
) {
    full_path::<Block4x4>(
        coeffs,
        factors,
        DcScaling::Dequantize,
        pred,
        dest,
        Block4x4::idct,
    );
}

/// 4x4 reconstruction where the DC value was reconstructed elsewhere, typically from the second
/// order block holding the DC values of a macroblock. `dc` replaces position 0 as is.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(coeffs, pred, dest)))]
pub fn dequant_dc_idct_add_4x4(
    coeffs: &mut [i16],
    factors: DequantFactors,
    dc: i16,
    pred: BlockRef,
    dest: &mut BlockMut,
) {
    coeffs[0] = dc;
    full_path::<Block4x4>(
        coeffs,
        factors,
        DcScaling::Prescaled,
        pred,
        dest,
        Block4x4::idct,
    );
}

/// When `dc` is [`DcScaling::Prescaled`], position 0 already holds the reconstructed DC and is
/// counted in `eob`.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(coeffs, pred, dest)))]
pub fn dequant_idct_add_8x8(
    coeffs: &mut [i16],
    factors: DequantFactors,
    dc: DcScaling,
    eob: usize,
    pred: BlockRef,
    dest: &mut BlockMut,
) {
    dequant_idct_add::<Block8x8>(coeffs, factors, dc, eob, pred, dest);
}

#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(coeffs, pred, dest)))]
pub fn dequant_idct_add_16x16(
    coeffs: &mut [i16],
    factors: DequantFactors,
    eob: usize,
    pred: BlockRef,
    dest: &mut BlockMut,
) {
    dequant_idct_add::<Block16x16>(coeffs, factors, DcScaling::Dequantize, eob, pred, dest);
}
