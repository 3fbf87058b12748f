// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

// Generated basis tables. Row `k` holds the samples of basis function `k`.

/// 16-point inverse DCT basis in Q14, row `k` is frequency `k`. Unit gain on DC.
#[rustfmt::skip]
pub(crate) const IDCT16_UNIT_DC: [[i32; 16]; 16] = [
    [16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384],
    [23059, 22173, 20435, 17911, 14699, 10922, 6726, 2271, -2271, -6726, -10922, -14699, -17911, -20435, -22173, -23059],
    [22725, 19266, 12873, 4520, -4520, -12873, -19266, -22725, -22725, -19266, -12873, -4520, 4520, 12873, 19266, 22725],
    [22173, 14699, 2271, -10922, -20435, -23059, -17911, -6726, 6726, 17911, 23059, 20435, 10922, -2271, -14699, -22173],
    [21407, 8867, -8867, -21407, -21407, -8867, 8867, 21407, 21407, 8867, -8867, -21407, -21407, -8867, 8867, 21407],
    [20435, 2271, -17911, -22173, -6726, 14699, 23059, 10922, -10922, -23059, -14699, 6726, 22173, 17911, -2271, -20435],
    [19266, -4520, -22725, -12873, 12873, 22725, 4520, -19266, -19266, 4520, 22725, 12873, -12873, -22725, -4520, 19266],
    [17911, -10922, -22173, 2271, 23059, 6726, -20435, -14699, 14699, 20435, -6726, -23059, -2271, 22173, 10922, -17911],
    [16384, -16384, -16384, 16384, 16384, -16384, -16384, 16384, 16384, -16384, -16384, 16384, 16384, -16384, -16384, 16384],
    [14699, -20435, -6726, 23059, -2271, -22173, 10922, 17911, -17911, -10922, 22173, 2271, -23059, 6726, 20435, -14699],
    [12873, -22725, 4520, 19266, -19266, -4520, 22725, -12873, -12873, 22725, -4520, -19266, 19266, 4520, -22725, 12873],
    [10922, -23059, 14699, 6726, -22173, 17911, 2271, -20435, 20435, -2271, -17911, 22173, -6726, -14699, 23059, -10922],
    [8867, -21407, 21407, -8867, -8867, 21407, -21407, 8867, 8867, -21407, 21407, -8867, -8867, 21407, -21407, 8867],
    [6726, -17911, 23059, -20435, 10922, 2271, -14699, 22173, -22173, 14699, -2271, -10922, 20435, -23059, 17911, -6726],
    [4520, -12873, 19266, -22725, 22725, -19266, 12873, -4520, -4520, 12873, -19266, 22725, -22725, 19266, -12873, 4520],
    [2271, -6726, 10922, -14699, 17911, -20435, 22173, -23059, 23059, -22173, 20435, -17911, 14699, -10922, 6726, -2271],
];

/// Orthonormal 4-point DCT-II basis in Q14.
#[rustfmt::skip]
pub(crate) const DCT4: [[i32; 4]; 4] = [
    [8192, 8192, 8192, 8192],
    [10703, 4433, -4433, -10703],
    [8192, -8192, -8192, 8192],
    [4433, -10703, 10703, -4433],
];

/// Orthonormal 8-point DCT-II basis in Q14.
#[rustfmt::skip]
pub(crate) const DCT8: [[i32; 8]; 8] = [
    [5793, 5793, 5793, 5793, 5793, 5793, 5793, 5793],
    [8035, 6811, 4551, 1598, -1598, -4551, -6811, -8035],
    [7568, 3135, -3135, -7568, -7568, -3135, 3135, 7568],
    [6811, -1598, -8035, -4551, 4551, 8035, 1598, -6811],
    [5793, -5793, -5793, 5793, 5793, -5793, -5793, 5793],
    [4551, -8035, 1598, 6811, -6811, -1598, 8035, -4551],
    [3135, -7568, 7568, -3135, -3135, 7568, -7568, 3135],
    [1598, -4551, 6811, -8035, 8035, -6811, 4551, -1598],
];

/// Orthonormal 16-point DCT-II basis in Q14.
#[rustfmt::skip]
pub(crate) const DCT16: [[i32; 16]; 16] = [
    [4096, 4096, 4096, 4096, 4096, 4096, 4096, 4096, 4096, 4096, 4096, 4096, 4096, 4096, 4096, 4096],
    [5765, 5543, 5109, 4478, 3675, 2731, 1682, 568, -568, -1682, -2731, -3675, -4478, -5109, -5543, -5765],
    [5681, 4816, 3218, 1130, -1130, -3218, -4816, -5681, -5681, -4816, -3218, -1130, 1130, 3218, 4816, 5681],
    [5543, 3675, 568, -2731, -5109, -5765, -4478, -1682, 1682, 4478, 5765, 5109, 2731, -568, -3675, -5543],
    [5352, 2217, -2217, -5352, -5352, -2217, 2217, 5352, 5352, 2217, -2217, -5352, -5352, -2217, 2217, 5352],
    [5109, 568, -4478, -5543, -1682, 3675, 5765, 2731, -2731, -5765, -3675, 1682, 5543, 4478, -568, -5109],
    [4816, -1130, -5681, -3218, 3218, 5681, 1130, -4816, -4816, 1130, 5681, 3218, -3218, -5681, -1130, 4816],
    [4478, -2731, -5543, 568, 5765, 1682, -5109, -3675, 3675, 5109, -1682, -5765, -568, 5543, 2731, -4478],
    [4096, -4096, -4096, 4096, 4096, -4096, -4096, 4096, 4096, -4096, -4096, 4096, 4096, -4096, -4096, 4096],
    [3675, -5109, -1682, 5765, -568, -5543, 2731, 4478, -4478, -2731, 5543, 568, -5765, 1682, 5109, -3675],
    [3218, -5681, 1130, 4816, -4816, -1130, 5681, -3218, -3218, 5681, -1130, -4816, 4816, 1130, -5681, 3218],
    [2731, -5765, 3675, 1682, -5543, 4478, 568, -5109, 5109, -568, -4478, 5543, -1682, -3675, 5765, -2731],
    [2217, -5352, 5352, -2217, -2217, 5352, -5352, 2217, 2217, -5352, 5352, -2217, -2217, 5352, -5352, 2217],
    [1682, -4478, 5765, -5109, 2731, 568, -3675, 5543, -5543, 3675, -568, -2731, 5109, -5765, 4478, -1682],
    [1130, -3218, 4816, -5681, 5681, -4816, 3218, -1130, -1130, 3218, -4816, 5681, -5681, 4816, -3218, 1130],
    [568, -1682, 2731, -3675, 4478, -5109, 5543, -5765, 5765, -5543, 5109, -4478, 3675, -2731, 1682, -568],
];

/// Orthonormal 4-point ADST (DST-VII) basis in Q14.
#[rustfmt::skip]
pub(crate) const ADST4: [[i32; 4]; 4] = [
    [3736, 7021, 9459, 10757],
    [9459, 9459, 0, -9459],
    [10757, -3736, -9459, 7021],
    [7021, -10757, 9459, -3736],
];

/// Orthonormal 8-point ADST (DST-VII) basis in Q14.
#[rustfmt::skip]
pub(crate) const ADST8: [[i32; 8]; 8] = [
    [1460, 2871, 4184, 5354, 6342, 7114, 7644, 7914],
    [4184, 7114, 7914, 6342, 2871, -1460, -5354, -7644],
    [6342, 7644, 2871, -4184, -7914, -5354, 1460, 7114],
    [7644, 4184, -5354, -7114, 1460, 7914, 2871, -6342],
    [7914, -1460, -7644, 2871, 7114, -4184, -6342, 5354],
    [7114, -6342, -1460, 7644, -5354, -2871, 7914, -4184],
    [5354, -7914, 6342, -1460, -4184, 7644, -7114, 2871],
    [2871, -5354, 7114, -7914, 7644, -6342, 4184, -1460],
];

/// Orthonormal 16-point ADST (DST-VII) basis in Q14.
#[rustfmt::skip]
pub(crate) const ADST16: [[i32; 16]; 16] = [
    [542, 1080, 1607, 2120, 2614, 3084, 3526, 3936, 4311, 4646, 4940, 5189, 5390, 5543, 5646, 5698],
    [1607, 3084, 4311, 5189, 5646, 5646, 5189, 4311, 3084, 1607, 0, -1607, -3084, -4311, -5189, -5646],
    [2614, 4646, 5646, 5390, 3936, 1607, -1080, -3526, -5189, -5698, -4940, -3084, -542, 2120, 4311, 5543],
    [3526, 5543, 5189, 2614, -1080, -4311, -5698, -4646, -1607, 2120, 4940, 5646, 3936, 542, -3084, -5390],
    [4311, 5646, 3084, -1607, -5189, -5189, -1607, 3084, 5646, 4311, 0, -4311, -5646, -3084, 1607, 5189],
    [4940, 4940, 0, -4940, -4940, 0, 4940, 4940, 0, -4940, -4940, 0, 4940, 4940, 0, -4940],
    [5390, 3526, -3084, -5543, -542, 5189, 3936, -2614, -5646, -1080, 4940, 4311, -2120, -5698, -1607, 4646],
    [5646, 1607, -5189, -3084, 4311, 4311, -3084, -5189, 1607, 5646, 0, -5646, -1607, 5189, 3084, -4311],
    [5698, -542, -5646, 1080, 5543, -1607, -5390, 2120, 5189, -2614, -4940, 3084, 4646, -3526, -4311, 3936],
    [5543, -2614, -4311, 4646, 2120, -5646, 542, 5390, -3084, -3936, 4940, 1607, -5698, 1080, 5189, -3526],
    [5189, -4311, -1607, 5646, -3084, -3084, 5646, -1607, -4311, 5189, 0, -5189, 4311, 1607, -5646, 3084],
    [4646, -5390, 1607, 3526, -5698, 3084, 2120, -5543, 4311, 542, -4940, 5189, -1080, -3936, 5646, -2614],
    [3936, -5698, 4311, -542, -3526, 5646, -4646, 1080, 3084, -5543, 4940, -1607, -2614, 5390, -5189, 2120],
    [3084, -5189, 5646, -4311, 1607, 1607, -4311, 5646, -5189, 3084, 0, -3084, 5189, -5646, 4311, -1607],
    [2120, -3936, 5189, -5698, 5390, -4311, 2614, -542, -1607, 3526, -4940, 5646, -5543, 4646, -3084, 1080],
    [1080, -2120, 3084, -3936, 4646, -5189, 5543, -5698, 5646, -5390, 4940, -4311, 3526, -2614, 1607, -542],
];
