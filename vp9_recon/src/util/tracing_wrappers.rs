// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub use tracing::{debug, instrument, trace};

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
mod noop {
    macro_rules! debug {
        ($($_:tt)*) => {};
    }
    macro_rules! trace {
        ($($_:tt)*) => {};
    }

    #[allow(unused_imports)]
    pub(crate) use {debug, trace};
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use noop::*;
