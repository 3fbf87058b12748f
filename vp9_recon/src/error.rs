// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::recon::TxSize;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
    #[error("Plane size too large: {0}x{1}")]
    PlaneSizeTooLarge(usize, usize),
    #[error("Invalid plane size: {0}x{1}")]
    InvalidPlaneSize(usize, usize),
    #[error("Pixel buffer of length {0} cannot hold {1} bytes")]
    PlaneDataSize(usize, usize),
    #[error("Row stride {0} is smaller than block width {1}")]
    InvalidStride(usize, usize),
    #[error("Block out of bounds: {0}x{1}+{2}+{3} block in {4}x{5} plane")]
    BlockOutOfBounds(usize, usize, usize, usize, usize, usize),
    // Generic arithmetic overflow. Prefer using other errors if possible.
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
    #[error("Invalid transform type: {0}")]
    InvalidTransformType(u32),
    #[error("Invalid transform size: {0}")]
    InvalidTransformSize(u32),
    #[error("Got {0} coefficients for a block of {1}")]
    CoefficientCount(usize, usize),
    #[error("Block is {0}x{1}, expected {2}x{2}")]
    BlockSizeMismatch(usize, usize, usize),
    #[error("End of block {0} exceeds block area {1}")]
    EndOfBlockTooLarge(usize, usize),
    #[error("Lossless coding is not defined for {0:?} blocks")]
    LosslessTransformSize(TxSize),
    #[error("Lossless coding was requested but support is not compiled in")]
    LosslessUnsupported,
    #[error("Hybrid transforms always dequantize the DC coefficient")]
    PrescaledHybridDc,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
