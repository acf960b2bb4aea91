/*
   Copyright 2018 DarkOtter

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/
//! Core operations on packed bit sequences with a per-word rank table:
//! point lookup, rank, and select by binary search over rank.
//!
//! Everything here works over borrowed slices of `u64` words and does
//! no allocation. Bit `i` is stored in word `i / 64` at bit position
//! `i % 64`, counting from the least significant bit.
#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate rand_xorshift;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

#[cfg(test)]
extern crate proptest;

/// The number of bits in each storage word.
pub const BITS_PER_WORD: u64 = 64;

#[inline(always)]
pub(crate) fn split_idx(idx: u64) -> (usize, usize) {
    ((idx / BITS_PER_WORD) as usize, (idx % BITS_PER_WORD) as usize)
}

pub mod ones_or_zeros;
pub use crate::ones_or_zeros::{OneBits, OnesOrZeros, ZeroBits};

pub mod word;
pub use crate::word::Word;

pub mod index_raw;
