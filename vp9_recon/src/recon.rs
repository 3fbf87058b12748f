// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use vp9_transforms::TxType;

use crate::{
    block::{BlockMut, BlockRef},
    dequant::{DcScaling, DequantFactors},
    error::{Error, Result},
    hybrid::{ht_dequant_idct_add_4x4, ht_dequant_idct_add_8x8, ht_dequant_idct_add_16x16},
    idct_add::{
        Block16x16, dequant_dc_idct_add_4x4, dequant_idct_add, dequant_idct_add_4x4,
        dequant_idct_add_8x8,
    },
    util::tracing_wrappers::*,
};

#[repr(u8)]
#[derive(Debug, FromPrimitive, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxSize {
    Tx4x4 = 0,
    Tx8x8 = 1,
    Tx16x16 = 2,
}

impl TxSize {
    pub fn dim(self) -> usize {
        4 << self as usize
    }

    pub fn area(self) -> usize {
        self.dim() * self.dim()
    }
}

impl TryFrom<u32> for TxSize {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::from_u32(value).ok_or(Error::InvalidTransformSize(value))
    }
}

pub fn tx_type_from_raw(raw: u32) -> Result<TxType> {
    TxType::from_u32(raw).ok_or(Error::InvalidTransformType(raw))
}

/// Per-block decode state that selects the reconstruction path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockParams {
    pub tx_size: TxSize,
    pub tx_type: TxType,
    pub factors: DequantFactors,
    /// Number of coefficients, in scan order, that may be non-zero.
    pub eob: usize,
    pub dc: DcScaling,
}

impl BlockParams {
    pub fn new(tx_size: TxSize, factors: DequantFactors, eob: usize) -> BlockParams {
        BlockParams {
            tx_size,
            tx_type: TxType::DctDct,
            factors,
            eob,
            dc: DcScaling::Dequantize,
        }
    }

    pub fn with_tx_type(self, tx_type: TxType) -> BlockParams {
        BlockParams { tx_type, ..self }
    }

    pub fn with_prescaled_dc(self) -> BlockParams {
        BlockParams {
            dc: DcScaling::Prescaled,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconOptions {
    /// Use the Walsh-Hadamard transform for 4x4 blocks. The transform type is ignored.
    pub lossless: bool,
}

fn check_block_size(size: (usize, usize), dim: usize) -> Result<()> {
    if size != (dim, dim) {
        return Err(Error::BlockSizeMismatch(size.0, size.1, dim));
    }
    Ok(())
}

#[cfg(feature = "lossless")]
fn reconstruct_lossless(
    params: &BlockParams,
    coeffs: &mut [i16],
    pred: BlockRef,
    dest: &mut BlockMut,
) -> Result<()> {
    use crate::lossless::{dequant_dc_idct_add_lossless, dequant_idct_add_lossless};
    match params.dc {
        DcScaling::Dequantize => dequant_idct_add_lossless(coeffs, params.factors, pred, dest),
        DcScaling::Prescaled => {
            let dc = coeffs[0];
            dequant_dc_idct_add_lossless(coeffs, params.factors, dc, pred, dest);
        }
    }
    Ok(())
}

#[cfg(not(feature = "lossless"))]
fn reconstruct_lossless(
    _params: &BlockParams,
    _coeffs: &mut [i16],
    _pred: BlockRef,
    _dest: &mut BlockMut,
) -> Result<()> {
    Err(Error::LosslessUnsupported)
}

/// Reconstructs one block: dequantizes `coeffs`, inverse transforms them with the transform
/// selected by `params` and `options`, and writes prediction plus residual to `dest`.
///
/// On success every coefficient the selected path read is zero again. Errors are reported
/// before anything is read or written.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "trace", skip(coeffs, pred, dest), err)
)]
pub fn reconstruct_block(
    params: &BlockParams,
    options: &ReconOptions,
    coeffs: &mut [i16],
    pred: BlockRef,
    dest: &mut BlockMut,
) -> Result<()> {
    let dim = params.tx_size.dim();
    let area = params.tx_size.area();
    if coeffs.len() != area {
        return Err(Error::CoefficientCount(coeffs.len(), area));
    }
    if params.eob > area {
        return Err(Error::EndOfBlockTooLarge(params.eob, area));
    }
    check_block_size(pred.size(), dim)?;
    check_block_size(dest.size(), dim)?;

    if options.lossless {
        if params.tx_size != TxSize::Tx4x4 {
            return Err(Error::LosslessTransformSize(params.tx_size));
        }
        return reconstruct_lossless(params, coeffs, pred, dest);
    }

    if params.tx_type != TxType::DctDct {
        if params.dc == DcScaling::Prescaled {
            return Err(Error::PrescaledHybridDc);
        }
        let (tx_type, factors) = (params.tx_type, params.factors);
        match params.tx_size {
            TxSize::Tx4x4 => ht_dequant_idct_add_4x4(tx_type, coeffs, factors, pred, dest),
            TxSize::Tx8x8 => ht_dequant_idct_add_8x8(tx_type, coeffs, factors, pred, dest),
            TxSize::Tx16x16 => ht_dequant_idct_add_16x16(tx_type, coeffs, factors, pred, dest),
        }
        return Ok(());
    }

    let factors = params.factors;
    match (params.tx_size, params.dc) {
        (TxSize::Tx4x4, DcScaling::Dequantize) => {
            dequant_idct_add_4x4(coeffs, factors, pred, dest)
        }
        (TxSize::Tx4x4, DcScaling::Prescaled) => {
            let dc = coeffs[0];
            dequant_dc_idct_add_4x4(coeffs, factors, dc, pred, dest)
        }
        (TxSize::Tx8x8, dc) => dequant_idct_add_8x8(coeffs, factors, dc, params.eob, pred, dest),
        (TxSize::Tx16x16, dc) => {
            dequant_idct_add::<Block16x16>(coeffs, factors, dc, params.eob, pred, dest)
        }
    }
    trace!(?params.tx_size, "block reconstructed");
    Ok(())
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::*;

    fn run(
        params: &BlockParams,
        options: &ReconOptions,
        coeffs: &mut [i16],
        pred: &[u8],
    ) -> Result<Vec<u8>> {
        let dim = params.tx_size.dim();
        let mut pixels = vec![0u8; dim * dim];
        reconstruct_block(
            params,
            options,
            coeffs,
            BlockRef::square(pred, dim, dim)?,
            &mut BlockMut::square(&mut pixels, dim, dim)?,
        )?;
        Ok(pixels)
    }

    #[test]
    fn raw_values() -> Result<()> {
        assert_eq!(TxSize::try_from(0)?, TxSize::Tx4x4);
        assert_eq!(TxSize::try_from(2)?, TxSize::Tx16x16);
        assert!(matches!(
            TxSize::try_from(3),
            Err(Error::InvalidTransformSize(3))
        ));
        assert_eq!(tx_type_from_raw(3)?, TxType::AdstAdst);
        assert!(matches!(
            tx_type_from_raw(4),
            Err(Error::InvalidTransformType(4))
        ));
        assert_eq!(TxSize::Tx8x8.dim(), 8);
        assert_eq!(TxSize::Tx16x16.area(), 256);
        Ok(())
    }

    #[test]
    fn rejects_bad_shapes() {
        let params = BlockParams::new(TxSize::Tx8x8, DequantFactors::new(1, 1), 3);
        let options = ReconOptions::default();
        let pred = [0u8; 64];
        assert!(matches!(
            run(&params, &options, &mut [0; 16], &pred),
            Err(Error::CoefficientCount(16, 64))
        ));
        let bad_eob = BlockParams { eob: 65, ..params };
        assert!(matches!(
            run(&bad_eob, &options, &mut [0; 64], &pred),
            Err(Error::EndOfBlockTooLarge(65, 64))
        ));

        let mut pixels = [0u8; 64];
        assert!(matches!(
            reconstruct_block(
                &params,
                &options,
                &mut [0; 64],
                BlockRef::new(&pred, 8, (8, 4)).unwrap(),
                &mut BlockMut::square(&mut pixels, 8, 8).unwrap(),
            ),
            Err(Error::BlockSizeMismatch(8, 4, 8))
        ));
    }

    #[test]
    fn rejects_bad_combinations() {
        let pred = [0u8; 256];
        let factors = DequantFactors::new(1, 1);
        let lossless = ReconOptions { lossless: true };

        let params = BlockParams::new(TxSize::Tx8x8, factors, 1);
        assert!(matches!(
            run(&params, &lossless, &mut [0; 64], &pred[..64]),
            Err(Error::LosslessTransformSize(TxSize::Tx8x8))
        ));

        let params = BlockParams::new(TxSize::Tx16x16, factors, 1)
            .with_tx_type(TxType::DctAdst)
            .with_prescaled_dc();
        assert!(matches!(
            run(&params, &ReconOptions::default(), &mut [0; 256], &pred),
            Err(Error::PrescaledHybridDc)
        ));
    }

    #[test]
    fn errors_leave_buffers_untouched() {
        let pred = [77u8; 16];
        let mut coeffs = [5i16; 16];
        let params = BlockParams::new(TxSize::Tx4x4, DequantFactors::new(2, 2), 16)
            .with_tx_type(TxType::AdstDct)
            .with_prescaled_dc();
        let mut pixels = [1u8; 16];
        assert!(
            reconstruct_block(
                &params,
                &ReconOptions::default(),
                &mut coeffs,
                BlockRef::square(&pred, 4, 4).unwrap(),
                &mut BlockMut::square(&mut pixels, 4, 4).unwrap(),
            )
            .is_err()
        );
        assert_eq!(coeffs, [5; 16]);
        assert_eq!(pixels, [1; 16]);
    }

    #[test]
    fn routes_to_hybrid() -> Result<()> {
        let pred = [128u8; 64];
        let factors = DequantFactors::new(4, 4);
        let mut coeffs = [0i16; 64];
        coeffs[1] = 400;
        let default = run(
            &BlockParams::new(TxSize::Tx8x8, factors, 64),
            &ReconOptions::default(),
            &mut coeffs.clone(),
            &pred,
        )?;
        let hybrid = run(
            &BlockParams::new(TxSize::Tx8x8, factors, 64).with_tx_type(TxType::AdstAdst),
            &ReconOptions::default(),
            &mut coeffs,
            &pred,
        )?;
        assert_ne!(default, hybrid);
        assert_eq!(coeffs, [0; 64]);
        Ok(())
    }

    #[test]
    fn prescaled_4x4_uses_position_zero() -> Result<()> {
        let pred = [60u8; 16];
        let factors = DequantFactors::new(10, 3);
        let mut raw = [0i16; 16];
        raw[0] = 8;
        raw[2] = -4;
        let mut prescaled = raw;
        prescaled[0] = 80;
        let params = BlockParams::new(TxSize::Tx4x4, factors, 16);
        let expected = run(&params, &ReconOptions::default(), &mut raw, &pred)?;
        let actual = run(
            &params.with_prescaled_dc(),
            &ReconOptions::default(),
            &mut prescaled,
            &pred,
        )?;
        assert_eq!(actual, expected);
        assert_eq!(prescaled, [0; 16]);
        Ok(())
    }

    #[cfg(feature = "lossless")]
    #[test]
    fn lossless_uses_walsh_hadamard() -> Result<()> {
        let pred = [20u8; 16];
        let mut coeffs = [0i16; 16];
        coeffs[0] = 12;
        let params = BlockParams::new(TxSize::Tx4x4, DequantFactors::new(4, 4), 1)
            .with_tx_type(TxType::AdstAdst);
        let pixels = run(&params, &ReconOptions { lossless: true }, &mut coeffs, &pred)?;
        assert_eq!(pixels, [23; 16]);
        Ok(())
    }

    #[cfg(not(feature = "lossless"))]
    #[test]
    fn lossless_needs_feature() {
        let params = BlockParams::new(TxSize::Tx4x4, DequantFactors::new(4, 4), 1);
        assert!(matches!(
            run(&params, &ReconOptions { lossless: true }, &mut [0; 16], &[0; 16]),
            Err(Error::LosslessUnsupported)
        ));
    }
}
