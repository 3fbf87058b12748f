// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt::Debug;

use crate::{
    block::{BlockMut, BlockRef},
    error::{Error, Result},
    util::tracing_wrappers::*,
};

/// An owned plane of 8-bit pixels, stored row after row with no padding.
pub struct Plane {
    size: (usize, usize),
    data: Vec<u8>,
}

impl Debug for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "plane {}x{}", self.size.0, self.size.1)
    }
}

fn plane_size_check(size: (usize, usize)) -> Result<usize> {
    let (xsize, ysize) = size;
    // These limits let us not worry about overflows.
    if xsize as u64 >= i64::MAX as u64 / 4 || ysize as u64 >= i64::MAX as u64 / 4 {
        return Err(Error::PlaneSizeTooLarge(xsize, ysize));
    }
    let total_size = xsize
        .checked_mul(ysize)
        .ok_or(Error::PlaneSizeTooLarge(xsize, ysize))?;
    if xsize == 0 || ysize == 0 {
        return Err(Error::InvalidPlaneSize(xsize, ysize));
    }
    Ok(total_size)
}

fn block_bounds_check(
    origin: (usize, usize),
    size: (usize, usize),
    psize: (usize, usize),
) -> Result<()> {
    if origin
        .0
        .checked_add(size.0)
        .ok_or(Error::ArithmeticOverflow)?
        > psize.0
        || origin
            .1
            .checked_add(size.1)
            .ok_or(Error::ArithmeticOverflow)?
            > psize.1
    {
        Err(Error::BlockOutOfBounds(
            size.0, size.1, origin.0, origin.1, psize.0, psize.1,
        ))
    } else {
        Ok(())
    }
}

impl Plane {
    #[cfg_attr(feature = "tracing", instrument(err))]
    pub fn new(size: (usize, usize)) -> Result<Plane> {
        Self::new_with_value(size, 0)
    }

    pub fn new_with_value(size: (usize, usize), value: u8) -> Result<Plane> {
        let total_size = plane_size_check(size)?;
        debug!("trying to allocate plane");
        let mut data = vec![];
        data.try_reserve_exact(total_size)?;
        data.resize(total_size, value);
        Ok(Plane { size, data })
    }

    /// Wraps existing pixels, which must be exactly `size.0 * size.1` bytes.
    pub fn from_vec(size: (usize, usize), data: Vec<u8>) -> Result<Plane> {
        let total_size = plane_size_check(size)?;
        if data.len() != total_size {
            return Err(Error::PlaneDataSize(data.len(), total_size));
        }
        Ok(Plane { size, data })
    }

    #[cfg(test)]
    pub fn new_random<R: rand::Rng>(size: (usize, usize), rng: &mut R) -> Result<Plane> {
        let mut plane = Self::new(size)?;
        rng.fill(&mut plane.data[..]);
        Ok(plane)
    }

    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    pub fn stride(&self) -> usize {
        self.size.0
    }

    pub fn row(&self, row: usize) -> &[u8] {
        debug_assert!(row < self.size.1);
        let start = row * self.size.0;
        &self.data[start..start + self.size.0]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [u8] {
        debug_assert!(row < self.size.1);
        let start = row * self.size.0;
        &mut self.data[start..start + self.size.0]
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    fn block_offset(&self, origin: (usize, usize), size: (usize, usize)) -> Result<usize> {
        block_bounds_check(origin, size, self.size)?;
        trace!(
            "carving block {}x{}+{}+{} from {self:?}",
            size.0, size.1, origin.0, origin.1
        );
        Ok(origin.1 * self.size.0 + origin.0)
    }

    pub fn block(&self, origin: (usize, usize), size: (usize, usize)) -> Result<BlockRef<'_>> {
        let start = self.block_offset(origin, size)?;
        BlockRef::new(&self.data[start..], self.size.0, size)
    }

    pub fn block_mut(
        &mut self,
        origin: (usize, usize),
        size: (usize, usize),
    ) -> Result<BlockMut<'_>> {
        let start = self.block_offset(origin, size)?;
        BlockMut::new(&mut self.data[start..], self.size.0, size)
    }

    pub fn as_block(&self) -> BlockRef<'_> {
        BlockRef {
            data: &self.data,
            stride: self.size.0,
            size: self.size,
        }
    }
}
