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
//! The raw functions for building and using the rank table.
//!
//! The rank table has one entry per storage word: entry `w` is the
//! number of set bits in words `0..w`. The storage always has one
//! more word than is needed to hold `len` bits, so that `rank(len)`
//! uses the same word arithmetic as every other position.
//!
//! The query functions here do minimal checking of the table against
//! the words (see [`check_index`] for a full check), but they never
//! panic on out of range arguments: they return `None` instead.

use crate::ones_or_zeros::{OneBits, OnesOrZeros, ZeroBits};
use crate::split_idx;
use crate::word::Word;

/// The table given is the wrong size for the words, or does not match them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IndexSizeError;

/// The number of storage words (and rank table entries) used for `n_bits` bits.
#[inline]
pub fn words_for_bits(n_bits: u64) -> usize {
    let (full_words, used_in_last) = split_idx(n_bits);
    full_words + (used_in_last > 0) as usize + 1
}

/// Fill in the rank table for some words, returning the total count of set bits.
///
/// The table must be exactly as long as the words.
pub fn build_rank_table(words: &[u64], table: &mut [u64]) -> Result<u64, IndexSizeError> {
    if words.len() != table.len() {
        return Err(IndexSizeError);
    }

    let mut running_total = 0u64;
    table
        .iter_mut()
        .zip(words.iter())
        .for_each(|(entry, &word)| {
            *entry = running_total;
            running_total += Word::from(word).count_ones() as u64;
        });
    Ok(running_total)
}

/// Check that words and a rank table form a valid index for `len` bits.
///
/// This needs the words to be the right length, no bits to be set at
/// or after `len`, and every table entry to match the words.
pub fn check_index(words: &[u64], table: &[u64], len: u64) -> Result<(), IndexSizeError> {
    if words.len() != words_for_bits(len) || table.len() != words.len() {
        return Err(IndexSizeError);
    }

    let (full_words, used_in_last) = split_idx(len);
    for (word_idx, &word) in words.iter().enumerate().skip(full_words) {
        let unused = if word_idx == full_words {
            word >> used_in_last as u64
        } else {
            word
        };
        if unused != 0 {
            return Err(IndexSizeError);
        }
    }

    let mut running_total = 0u64;
    for (&entry, &word) in table.iter().zip(words.iter()) {
        if entry != running_total {
            return Err(IndexSizeError);
        }
        running_total += Word::from(word).count_ones() as u64;
    }
    Ok(())
}

/// Get a single bit.
///
/// Returns `None` if the index is out of bounds.
#[inline]
pub fn get(words: &[u64], len: u64, idx: u64) -> Option<bool> {
    if idx >= len {
        return None;
    }
    let (word_idx, bit_idx) = split_idx(idx);
    Word::from(*words.get(word_idx)?).get(bit_idx)
}

/// Count all the set bits (*O(1)*).
#[inline]
pub fn count_ones(words: &[u64], table: &[u64]) -> u64 {
    match (table.last(), words.last()) {
        (Some(&before), Some(&word)) => before + Word::from(word).count_ones() as u64,
        _ => 0,
    }
}

/// Count all the unset bits (*O(1)*).
#[inline]
pub fn count_zeros(words: &[u64], table: &[u64], len: u64) -> u64 {
    count::<ZeroBits>(words, table, len)
}

#[inline]
pub fn count<W: OnesOrZeros>(words: &[u64], table: &[u64], len: u64) -> u64 {
    W::convert_count(count_ones(words, table), len)
}

/// Count the set or unset bits strictly before a position (*O(1)*).
///
/// Positions `0..=len` are valid; `rank(len)` is the total count.
/// Returns `None` if the index is out of bounds.
#[inline]
pub fn rank<W: OnesOrZeros>(words: &[u64], table: &[u64], len: u64, idx: u64) -> Option<u64> {
    if idx > len {
        return None;
    }
    let (word_idx, bit_idx) = split_idx(idx);
    let before_word = *table.get(word_idx)?;
    let within_word = Word::from(*words.get(word_idx)?).rank_ones(bit_idx)?;
    Some(W::convert_count(before_word + within_word as u64, idx))
}

/// Count the set bits strictly before a position (*O(1)*).
#[inline]
pub fn rank_ones(words: &[u64], table: &[u64], len: u64, idx: u64) -> Option<u64> {
    rank::<OneBits>(words, table, len, idx)
}

/// Count the unset bits strictly before a position (*O(1)*).
#[inline]
pub fn rank_zeros(words: &[u64], table: &[u64], len: u64, idx: u64) -> Option<u64> {
    rank::<ZeroBits>(words, table, len, idx)
}

/// Find the position of a set or unset bit by its rank (*O(log n)*).
///
/// Returns `None` if there are not more than `target_rank` bits of
/// that kind. Otherwise the result `i` has `rank::<W>(i) == target_rank`
/// and the bit at `i` is of the kind counted.
pub fn select<W: OnesOrZeros>(words: &[u64], table: &[u64], len: u64, target_rank: u64) -> Option<u64> {
    if target_rank >= count::<W>(words, table, len) {
        return None;
    }

    // Invariant: rank(low) <= target_rank < rank(high).
    // rank(0) is 0 and rank(len) is the total, so this holds initially.
    let mut low = 0u64;
    let mut high = len;
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        if rank::<W>(words, table, len, mid)? > target_rank {
            high = mid;
        } else {
            low = mid;
        }
    }
    Some(low)
}

/// Find the position of a set bit by its rank (*O(log n)*).
#[inline]
pub fn select_ones(words: &[u64], table: &[u64], len: u64, target_rank: u64) -> Option<u64> {
    select::<OneBits>(words, table, len, target_rank)
}

/// Find the position of an unset bit by its rank (*O(log n)*).
#[inline]
pub fn select_zeros(words: &[u64], table: &[u64], len: u64, target_rank: u64) -> Option<u64> {
    select::<ZeroBits>(words, table, len, target_rank)
}
