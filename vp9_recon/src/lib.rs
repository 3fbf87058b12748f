// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

#![deny(unsafe_code)]

//! Block reconstruction for a VP9 decoder: dequantization of entropy decoded coefficients,
//! selection of the matching inverse transform, and clamped merging of the resulting residual
//! onto the prediction.

pub mod block;
pub mod dequant;
pub mod error;
pub mod hybrid;
pub mod idct_add;
#[cfg(feature = "lossless")]
pub mod lossless;
pub mod plane;
pub mod recon;
pub mod residual;
mod util;

pub use vp9_transforms::TxType;
