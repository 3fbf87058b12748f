// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

#![deny(unsafe_code)]

//! Integer inverse transforms used by block reconstruction.
//!
//! Every kernel reads a row-major coefficient block and writes a row-major residual block of the
//! same size. Residual rows are exactly one block wide.

pub mod transform_type;

mod idct16;
mod idct4;
mod idct8;
mod iht;
mod iwht;
mod tables;

pub use idct4::*;
pub use idct8::*;
pub use idct16::*;
pub use iht::*;
pub use iwht::*;
pub use transform_type::TxType;

/// Largest block area handled by any kernel in this crate (16x16).
pub const MAX_BLOCK_AREA: usize = 256;
