// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use num_derive::FromPrimitive;

/// Pair of 1-D transforms applied by the hybrid kernels. The first half of each name is the
/// vertical (column) transform, the second half the horizontal (row) transform.
#[repr(u8)]
#[derive(Debug, FromPrimitive, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TxType {
    #[default]
    DctDct = 0,
    AdstDct = 1,
    DctAdst = 2,
    AdstAdst = 3,
}

impl TxType {
    pub const NUM_TX_TYPES: u32 = TxType::AdstAdst as u32 + 1;

    pub fn vertical_is_adst(self) -> bool {
        matches!(self, TxType::AdstDct | TxType::AdstAdst)
    }

    pub fn horizontal_is_adst(self) -> bool {
        matches!(self, TxType::DctAdst | TxType::AdstAdst)
    }
}
