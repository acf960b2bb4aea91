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
//! Mutable bits to set up before building the index.
use crate::indexed_bits::IndexedBits;
use crate::result::{Error, Result};
use indexed_bitseq_core::index_raw;
use indexed_bitseq_core::{Word, BITS_PER_WORD};
use std::iter::FromIterator;

/// A fixed number of bits, all unset to begin with, which can be
/// set and cleared freely.
///
/// Once the bits are right, [`build`](Builder::build) consumes the
/// builder and hands its storage to an [`IndexedBits`] without copying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Builder {
    len: u64,
    words: Vec<u64>,
}

impl Builder {
    /// Make a builder for `len` bits, all unset.
    pub fn new(len: u64) -> Self {
        Builder {
            len,
            words: vec![0u64; index_raw::words_for_bits(len)],
        }
    }

    /// The number of bits, fixed when the builder was made.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn out_of_range(&self, idx: u64) -> Error {
        Error::IndexOutOfRange {
            index: idx,
            len: self.len,
        }
    }

    /// Get a single bit.
    pub fn get(&self, idx: u64) -> Result<bool> {
        index_raw::get(&self.words, self.len, idx).ok_or_else(|| self.out_of_range(idx))
    }

    /// Set a single bit to the value given.
    pub fn set_to(&mut self, idx: u64, to: bool) -> Result<()> {
        let out_of_range = self.out_of_range(idx);
        if idx >= self.len {
            return Err(out_of_range);
        }
        let word_idx = (idx / BITS_PER_WORD) as usize;
        let bit_idx = (idx % BITS_PER_WORD) as usize;
        let stored = self.words.get_mut(word_idx).ok_or(out_of_range)?;
        let mut word = Word::from(*stored);
        word.set(bit_idx, to).ok_or(out_of_range)?;
        *stored = word.into();
        Ok(())
    }

    /// Set a single bit to one.
    #[inline]
    pub fn set(&mut self, idx: u64) -> Result<()> {
        self.set_to(idx, true)
    }

    /// Set a single bit to zero.
    ///
    /// All bits start as zero, so this is only needed to undo a `set`.
    #[inline]
    pub fn clear(&mut self, idx: u64) -> Result<()> {
        self.set_to(idx, false)
    }

    /// Build the rank index and freeze the bits.
    ///
    /// This looks at every word once.
    pub fn build(self) -> IndexedBits {
        let Builder { len, words } = self;
        IndexedBits::from_words(len, words.into_boxed_slice())
    }
}

impl FromIterator<bool> for Builder {
    /// Collect bits in order; the length is the number of items.
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut words = Vec::new();
        let mut len = 0u64;
        for bit in iter {
            let word_idx = (len / BITS_PER_WORD) as usize;
            if word_idx == words.len() {
                words.push(0u64);
            }
            if bit {
                words[word_idx] |= 1u64 << (len % BITS_PER_WORD);
            }
            len += 1;
        }
        words.resize(index_raw::words_for_bits(len), 0);
        Builder { len, words }
    }
}

#[cfg(feature = "implement_heapsize")]
impl heapsize::HeapSizeOf for Builder {
    fn heap_size_of_children(&self) -> usize {
        use heapsize::HeapSizeOf;
        self.words.heap_size_of_children()
    }
}
