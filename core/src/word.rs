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
//! Tools for working with a single (64bit) word as bits.

/// The 64 bits of a single word, as a sequence from LSB to MSB.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Word(u64);

impl From<u64> for Word {
    fn from(i: u64) -> Self {
        Word(i)
    }
}

impl From<Word> for u64 {
    fn from(i: Word) -> Self {
        i.0
    }
}

impl Word {
    /// The number of bits in one word (always 64).
    #[inline]
    pub fn len(self) -> usize {
        64
    }

    #[inline]
    fn index_check(self, idx: usize) -> Option<()> {
        if idx >= self.len() {
            None
        } else {
            Some(())
        }
    }

    #[inline(always)]
    fn mask(idx: usize) -> u64 {
        1u64 << idx as u64
    }

    /// Get a single bit by index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get(self, idx: usize) -> Option<bool> {
        self.index_check(idx)?;
        Some((self.0 & Self::mask(idx)) != 0)
    }

    /// Set a single bit by creating a new word.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn set_copy(self, idx: usize, to: bool) -> Option<Self> {
        self.index_check(idx)?;
        let mask = Self::mask(idx);
        let res = if to { self.0 | mask } else { self.0 & !mask };
        Some(Word(res))
    }

    /// Set a single bit in place.
    ///
    /// Returns `None` (and makes no change) if the index is out of bounds.
    #[inline]
    pub fn set(&mut self, idx: usize, to: bool) -> Option<()> {
        *self = self.set_copy(idx, to)?;
        Some(())
    }

    /// Invert all the bits in the word.
    #[inline]
    pub fn complement(self) -> Self {
        Word(!self.0)
    }

    /// Count the set bits.
    #[inline(always)]
    pub fn count_ones(self) -> u32 {
        self.0.count_ones()
    }

    /// Count the unset bits.
    #[inline(always)]
    pub fn count_zeros(self) -> u32 {
        self.0.count_zeros()
    }

    /// Count the set bits strictly before a position in the word.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn rank_ones(self, idx: usize) -> Option<u32> {
        self.index_check(idx)?;
        let below = Self::mask(idx).wrapping_sub(1);
        Some((self.0 & below).count_ones())
    }

    /// Count the unset bits strictly before a position in the word.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn rank_zeros(self, idx: usize) -> Option<u32> {
        self.complement().rank_ones(idx)
    }
}
