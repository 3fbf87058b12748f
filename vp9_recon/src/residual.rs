// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Merging of pixel-domain residuals onto a prediction.
//!
//! Prediction, residual and destination each advance by their own row pitch. The residual is
//! always packed, one block width per row.

use crate::block::{BlockMut, BlockRef};

#[inline]
fn clamp_pixel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Writes `pred + residual`, saturated to 8 bits, into `dest`.
pub fn add_residual(residual: &[i16], pred: BlockRef, dest: &mut BlockMut) {
    let (width, height) = dest.size();
    debug_assert_eq!(pred.size(), dest.size());
    debug_assert_eq!(residual.len(), width * height);
    if width == 0 {
        return;
    }
    for (y, diff) in residual.chunks_exact(width).take(height).enumerate() {
        let pred_row = pred.row(y);
        for ((out, &p), &d) in dest.row(y).iter_mut().zip(pred_row).zip(diff) {
            *out = clamp_pixel(i32::from(p) + i32::from(d));
        }
    }
}

/// Like [`add_residual`], with the same residual value at every position.
pub fn add_constant_residual(diff: i16, pred: BlockRef, dest: &mut BlockMut) {
    debug_assert_eq!(pred.size(), dest.size());
    let diff = i32::from(diff);
    for y in 0..dest.size().1 {
        for (out, &p) in dest.row(y).iter_mut().zip(pred.row(y)) {
            *out = clamp_pixel(i32::from(p) + diff);
        }
    }
}

/// Copies the prediction unchanged, for blocks without any residual.
pub fn copy_prediction(pred: BlockRef, dest: &mut BlockMut) {
    debug_assert_eq!(pred.size(), dest.size());
    for y in 0..dest.size().1 {
        dest.row(y).copy_from_slice(pred.row(y));
    }
}

#[cfg(test)]
mod test {
    use arbtest::arbtest;
    use rand::{Rng, SeedableRng};
    use test_log::test;

    use super::*;
    use crate::error::Result;

    #[test]
    fn add_residual_clamps() {
        arbtest(|u| {
            let pred: [u8; 16] = u.arbitrary()?;
            let residual: [i16; 16] = u.arbitrary()?;
            let mut dest = [0u8; 16];
            add_residual(
                &residual,
                BlockRef::square(&pred, 4, 4).unwrap(),
                &mut BlockMut::square(&mut dest, 4, 4).unwrap(),
            );
            for i in 0..16 {
                let expected = (pred[i] as i32 + residual[i] as i32).clamp(0, 255);
                assert_eq!(dest[i] as i32, expected);
            }
            Ok(())
        });
    }

    #[test]
    fn add_constant_residual_clamps() {
        arbtest(|u| {
            let pred: [u8; 64] = u.arbitrary()?;
            let diff: i16 = u.arbitrary()?;
            let mut dest = [0u8; 64];
            add_constant_residual(
                diff,
                BlockRef::square(&pred, 8, 8).unwrap(),
                &mut BlockMut::square(&mut dest, 8, 8).unwrap(),
            );
            for (&d, &p) in dest.iter().zip(pred.iter()) {
                assert_eq!(d as i32, (p as i32 + diff as i32).clamp(0, 255));
            }
            Ok(())
        });
    }

    #[test]
    fn strides_are_independent() -> Result<()> {
        // Prediction pitch 7, destination stride 11, packed residual of width 4.
        let mut rng = rand_xorshift::XorShiftRng::seed_from_u64(1);
        let mut pred = [0u8; 3 * 7 + 4];
        rng.fill(&mut pred[..]);
        let residual: Vec<i16> = (0..16).map(|_| rng.random_range(-300..=300)).collect();
        let mut dest = [0xaau8; 3 * 11 + 4 + 3];

        add_residual(
            &residual,
            BlockRef::square(&pred, 7, 4)?,
            &mut BlockMut::square(&mut dest, 11, 4)?,
        );

        for y in 0..4 {
            for x in 0..4 {
                let expected = (pred[y * 7 + x] as i32 + residual[y * 4 + x] as i32).clamp(0, 255);
                assert_eq!(dest[y * 11 + x] as i32, expected, "at {x}x{y}");
            }
            // Bytes between rows of the destination are left alone.
            if y < 3 {
                assert!(dest[y * 11 + 4..(y + 1) * 11].iter().all(|&b| b == 0xaa));
            }
        }
        assert!(dest[3 * 11 + 4..].iter().all(|&b| b == 0xaa));
        Ok(())
    }

    #[test]
    fn empty_blocks_are_a_no_op() -> Result<()> {
        let mut dest: [u8; 0] = [];
        add_residual(
            &[],
            BlockRef::new(&[], 0, (0, 0))?,
            &mut BlockMut::new(&mut dest, 0, (0, 0))?,
        );
        add_constant_residual(
            5,
            BlockRef::new(&[], 0, (0, 3))?,
            &mut BlockMut::new(&mut dest, 0, (0, 3))?,
        );
        copy_prediction(
            BlockRef::new(&[], 0, (0, 2))?,
            &mut BlockMut::new(&mut dest, 0, (0, 2))?,
        );

        let pred = [7u8; 4];
        let mut dest = [0u8; 4];
        add_residual(
            &[],
            BlockRef::new(&pred, 4, (0, 1))?,
            &mut BlockMut::new(&mut dest, 4, (0, 1))?,
        );
        assert_eq!(dest, [0; 4]);
        Ok(())
    }

    #[test]
    fn copy_is_exact() -> Result<()> {
        let pred: Vec<u8> = (0..=255).collect();
        let mut dest = vec![0u8; 16 * 16];
        copy_prediction(
            BlockRef::square(&pred, 16, 16)?,
            &mut BlockMut::square(&mut dest, 16, 16)?,
        );
        assert_eq!(pred, dest);
        Ok(())
    }
}
