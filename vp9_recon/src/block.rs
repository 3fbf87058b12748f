// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Stride-addressed views of 8-bit pixel blocks.
//!
//! A block of `width`x`height` pixels starts at offset 0 of its backing slice, and row `y`
//! starts at `y * stride`. Only the first `width` bytes of each row belong to the block, so the
//! slice must hold at least `(height - 1) * stride + width` bytes.

use std::fmt::Debug;

use crate::error::{Error, Result};

fn block_size_check(len: usize, stride: usize, size: (usize, usize)) -> Result<()> {
    if stride < size.0 {
        return Err(Error::InvalidStride(stride, size.0));
    }
    if size.1 == 0 {
        return Ok(());
    }
    let needed = (size.1 - 1)
        .checked_mul(stride)
        .and_then(|x| x.checked_add(size.0))
        .ok_or(Error::ArithmeticOverflow)?;
    if needed > len {
        Err(Error::PlaneDataSize(len, needed))
    } else {
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct BlockRef<'a> {
    pub(crate) data: &'a [u8],
    pub(crate) stride: usize,
    pub(crate) size: (usize, usize),
}

pub struct BlockMut<'a> {
    data: &'a mut [u8],
    stride: usize,
    size: (usize, usize),
}

impl Debug for BlockRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} stride {}", self.size.0, self.size.1, self.stride)
    }
}

impl Debug for BlockMut<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mut {}x{} stride {}", self.size.0, self.size.1, self.stride)
    }
}

impl<'a> BlockRef<'a> {
    pub fn new(data: &'a [u8], stride: usize, size: (usize, usize)) -> Result<BlockRef<'a>> {
        block_size_check(data.len(), stride, size)?;
        Ok(BlockRef { data, stride, size })
    }

    /// Square block of side `dim` whose rows are `stride` bytes apart.
    pub fn square(data: &'a [u8], stride: usize, dim: usize) -> Result<BlockRef<'a>> {
        Self::new(data, stride, (dim, dim))
    }

    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row(&self, row: usize) -> &'a [u8] {
        debug_assert!(row < self.size.1);
        let start = row * self.stride;
        &self.data[start..start + self.size.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.size.1).flat_map(|y| self.row(y).iter().copied())
    }
}

impl<'a> BlockMut<'a> {
    pub fn new(data: &'a mut [u8], stride: usize, size: (usize, usize)) -> Result<BlockMut<'a>> {
        block_size_check(data.len(), stride, size)?;
        Ok(BlockMut { data, stride, size })
    }

    pub fn square(data: &'a mut [u8], stride: usize, dim: usize) -> Result<BlockMut<'a>> {
        Self::new(data, stride, (dim, dim))
    }

    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row(&mut self, row: usize) -> &mut [u8] {
        debug_assert!(row < self.size.1);
        let start = row * self.stride;
        &mut self.data[start..start + self.size.0]
    }

    pub fn as_block(&self) -> BlockRef<'_> {
        BlockRef {
            data: &*self.data,
            stride: self.stride,
            size: self.size,
        }
    }
}
