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
//! A frozen bit sequence with an index to allow fast rank and select.
use crate::result::{BitKind, Error, Result};
use indexed_bitseq_core::index_raw;
use indexed_bitseq_core::{OneBits, OnesOrZeros, ZeroBits};
use std::convert::TryFrom;

/// Bits stored with a per-word rank table for fast rank and select.
///
/// Made by [`Builder::build`](crate::Builder::build) and never changed
/// afterwards, so it can be shared freely between threads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedIndexedBits")]
pub struct IndexedBits {
    len: u64,
    words: Box<[u64]>,
    rank_table: Box<[u64]>,
}

#[derive(Deserialize)]
struct UncheckedIndexedBits {
    len: u64,
    words: Box<[u64]>,
    rank_table: Box<[u64]>,
}

impl TryFrom<UncheckedIndexedBits> for IndexedBits {
    type Error = Error;

    fn try_from(unchecked: UncheckedIndexedBits) -> Result<Self> {
        let UncheckedIndexedBits {
            len,
            words,
            rank_table,
        } = unchecked;
        if index_raw::check_index(&words, &rank_table, len).is_err() {
            debug!(
                "Rejected index for {} bits: {} words, {} rank entries, or contents do not match",
                len,
                words.len(),
                rank_table.len()
            );
            return Err(Error::IndexIncorrectSize);
        }
        Ok(IndexedBits {
            len,
            words,
            rank_table,
        })
    }
}

impl IndexedBits {
    pub(crate) fn from_words(len: u64, words: Box<[u64]>) -> Self {
        debug_assert_eq!(index_raw::words_for_bits(len), words.len());
        let mut rank_table = vec![0u64; words.len()].into_boxed_slice();
        let count_ones = index_raw::build_rank_table(&words, &mut rank_table)
            .expect("Specifically made rank table of the right size");
        debug!(
            "Built rank table for {} bits ({} words, {} set)",
            len,
            words.len(),
            count_ones
        );
        IndexedBits {
            len,
            words,
            rank_table,
        }
    }

    /// The number of bits.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed words holding the bits, least significant bit first.
    ///
    /// There is always one word more than strictly needed, and bits at
    /// or after `len()` are always unset.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Get a single bit (*O(1)*).
    #[inline]
    pub fn get(&self, idx: u64) -> Result<bool> {
        index_raw::get(&self.words, self.len, idx).ok_or(Error::IndexOutOfRange {
            index: idx,
            len: self.len,
        })
    }

    /// Iterate over all of the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |idx| index_raw::get(&self.words, self.len, idx) == Some(true))
    }

    /// Count the set or unset bits (fast *O(1)*).
    #[inline]
    pub fn count<W: OnesOrZeros>(&self) -> u64 {
        index_raw::count::<W>(&self.words, &self.rank_table, self.len)
    }

    /// Count the set bits (fast *O(1)*).
    #[inline]
    pub fn count_ones(&self) -> u64 {
        self.count::<OneBits>()
    }

    /// Count the unset bits (fast *O(1)*).
    #[inline]
    pub fn count_zeros(&self) -> u64 {
        self.count::<ZeroBits>()
    }

    /// Count the set or unset bits strictly before a position (*O(1)*).
    ///
    /// Any position up to and including `len()` may be used.
    #[inline]
    pub fn rank<W: OnesOrZeros>(&self, idx: u64) -> Result<u64> {
        index_raw::rank::<W>(&self.words, &self.rank_table, self.len, idx).ok_or(
            Error::IndexOutOfRange {
                index: idx,
                len: self.len,
            },
        )
    }

    /// Count the set bits before a position in the bits (*O(1)*).
    ///
    /// Returns an error if the index is after `len()`.
    #[inline]
    pub fn rank_ones(&self, idx: u64) -> Result<u64> {
        self.rank::<OneBits>(idx)
    }

    /// Count the unset bits before a position in the bits (*O(1)*).
    ///
    /// Returns an error if the index is after `len()`.
    #[inline]
    pub fn rank_zeros(&self, idx: u64) -> Result<u64> {
        self.rank::<ZeroBits>(idx)
    }

    /// Same as [`rank_ones`](IndexedBits::rank_ones).
    #[inline]
    pub fn rank1(&self, idx: u64) -> Result<u64> {
        self.rank_ones(idx)
    }

    /// Same as [`rank_zeros`](IndexedBits::rank_zeros).
    #[inline]
    pub fn rank0(&self, idx: u64) -> Result<u64> {
        self.rank_zeros(idx)
    }

    /// Find the position of a set or unset bit by its rank (*O(log n)*).
    ///
    /// Returns `InvalidRank` if there are not more than `target_rank`
    /// bits of that kind.
    pub fn select<W: OnesOrZeros>(&self, target_rank: u64) -> Result<u64> {
        index_raw::select::<W>(&self.words, &self.rank_table, self.len, target_rank).ok_or_else(
            || Error::InvalidRank {
                kind: BitKind::of::<W>(),
                rank: target_rank,
                available: self.count::<W>(),
            },
        )
    }

    /// Find the position of a set bit by its rank (*O(log n)*).
    ///
    /// It is always the case on success that
    /// `rank_ones(result) == Ok(target_rank)` and `get(result) == Ok(true)`.
    #[inline]
    pub fn select_ones(&self, target_rank: u64) -> Result<u64> {
        self.select::<OneBits>(target_rank)
    }

    /// Find the position of an unset bit by its rank (*O(log n)*).
    ///
    /// It is always the case on success that
    /// `rank_zeros(result) == Ok(target_rank)` and `get(result) == Ok(false)`.
    #[inline]
    pub fn select_zeros(&self, target_rank: u64) -> Result<u64> {
        self.select::<ZeroBits>(target_rank)
    }

    /// Same as [`select_ones`](IndexedBits::select_ones).
    #[inline]
    pub fn select1(&self, target_rank: u64) -> Result<u64> {
        self.select_ones(target_rank)
    }

    /// Same as [`select_zeros`](IndexedBits::select_zeros).
    #[inline]
    pub fn select0(&self, target_rank: u64) -> Result<u64> {
        self.select_zeros(target_rank)
    }
}

#[cfg(feature = "implement_heapsize")]
impl heapsize::HeapSizeOf for IndexedBits {
    fn heap_size_of_children(&self) -> usize {
        use heapsize::HeapSizeOf;
        self.words.heap_size_of_children() + self.rank_table.heap_size_of_children()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use proptest::collection::vec as gen_vec;
    use proptest::prelude::*;

    fn from_str_or_panic(s: &str) -> IndexedBits {
        s.chars()
            .map(|c| match c {
                '0' => false,
                '1' => true,
                _ => panic!("invalid bit string in test"),
            })
            .collect::<Builder>()
            .build()
    }

    fn build_from(bits: &[bool]) -> IndexedBits {
        let mut builder = Builder::new(bits.len() as u64);
        for (idx, &bit) in bits.iter().enumerate() {
            if bit {
                builder.set(idx as u64).unwrap();
            }
        }
        builder.build()
    }

    #[test]
    fn test_small_example() {
        let bits = from_str_or_panic("1011001");
        assert_eq!(7, bits.len());
        assert_eq!(Ok(0), bits.rank1(0));
        assert_eq!(Ok(2), bits.rank1(3));
        assert_eq!(Ok(4), bits.rank1(7));
        assert_eq!(Ok(3), bits.rank0(7));

        assert_eq!(Ok(0), bits.select1(0));
        assert_eq!(Ok(2), bits.select1(1));
        assert_eq!(Ok(3), bits.select1(2));
        assert_eq!(Ok(6), bits.select1(3));
        assert_eq!(Ok(1), bits.select0(0));
        assert_eq!(Ok(4), bits.select0(1));
        assert_eq!(Ok(5), bits.select0(2));
        assert_eq!(Ok(false), bits.get(4));
    }

    #[test]
    fn test_errors() {
        let bits = from_str_or_panic("1011001");
        assert_eq!(
            Err(Error::IndexOutOfRange { index: 7, len: 7 }),
            bits.get(7)
        );
        assert_eq!(
            Err(Error::IndexOutOfRange { index: 8, len: 7 }),
            bits.rank_ones(8)
        );
        assert_eq!(
            Err(Error::IndexOutOfRange { index: 8, len: 7 }),
            bits.rank_zeros(8)
        );
        assert_eq!(
            Err(Error::InvalidRank {
                kind: BitKind::Ones,
                rank: 4,
                available: 4
            }),
            bits.select_ones(4)
        );
        assert_eq!(
            Err(Error::InvalidRank {
                kind: BitKind::Zeros,
                rank: 3,
                available: 3
            }),
            bits.select_zeros(3)
        );
    }

    #[test]
    fn test_iter_matches_get() {
        let bits = from_str_or_panic("1011001110");
        let collected: Vec<bool> = bits.iter().collect();
        assert_eq!(10, collected.len());
        for (idx, &bit) in collected.iter().enumerate() {
            assert_eq!(Ok(bit), bits.get(idx as u64));
        }
    }

    #[test]
    fn test_empty() {
        let bits = Builder::new(0).build();
        assert!(bits.is_empty());
        assert_eq!(Ok(0), bits.rank_ones(0));
        assert_eq!(Ok(0), bits.rank_zeros(0));
        assert!(bits.get(0).is_err());
        assert!(bits.select_ones(0).is_err());
        assert!(bits.select_zeros(0).is_err());
        assert_eq!(0, bits.iter().count());
    }

    #[test]
    fn test_full_words() {
        for &len in [64u64, 128, 192].iter() {
            let bits: IndexedBits = (0..len).map(|_| true).collect::<Builder>().build();
            assert_eq!(len, bits.count_ones());
            assert_eq!(0, bits.count_zeros());
            assert_eq!(Ok(len), bits.rank_ones(len));
            assert_eq!(Ok(len - 1), bits.select_ones(len - 1));
            assert!(bits.select_zeros(0).is_err());
        }
    }

    #[test]
    fn test_shared_between_threads() {
        let bits = std::sync::Arc::new(from_str_or_panic("0110100110010110"));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let bits = bits.clone();
                std::thread::spawn(move || {
                    (0..bits.count_ones())
                        .map(|r| bits.select_ones(r).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(vec![1, 2, 4, 7, 8, 11, 13, 14], handle.join().unwrap());
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let bits = from_str_or_panic("10110010111000011110000011111100000011111110");
        let bytes = bincode::serialize(&bits).unwrap();
        let back: IndexedBits = bincode::deserialize(&bytes).unwrap();
        assert_eq!(bits, back);
    }

    #[derive(Serialize)]
    struct Forged {
        len: u64,
        words: Vec<u64>,
        rank_table: Vec<u64>,
    }

    fn deserialize_forged(forged: &Forged) -> bincode::Result<IndexedBits> {
        bincode::deserialize(&bincode::serialize(forged).unwrap())
    }

    #[test]
    fn test_deserialize_rejects_mismatched_index() {
        let ok = Forged {
            len: 70,
            words: vec![0b101, 1, 0],
            rank_table: vec![0, 2, 3],
        };
        let bits = deserialize_forged(&ok).unwrap();
        assert_eq!(Ok(64), bits.select_ones(2));

        let wrong_rank = Forged {
            rank_table: vec![0, 1, 3],
            ..ok
        };
        assert!(deserialize_forged(&wrong_rank).is_err());

        let stray_bit = Forged {
            len: 70,
            words: vec![0b101, 1 << 6, 0],
            rank_table: vec![0, 2, 3],
        };
        assert!(deserialize_forged(&stray_bit).is_err());

        let stray_bit_in_slack_word = Forged {
            len: 70,
            words: vec![0b101, 1, 1],
            rank_table: vec![0, 2, 3],
        };
        assert!(deserialize_forged(&stray_bit_in_slack_word).is_err());

        let short_storage = Forged {
            len: 70,
            words: vec![0b101, 1],
            rank_table: vec![0, 2],
        };
        assert!(deserialize_forged(&short_storage).is_err());

        let no_slack_word = Forged {
            len: 64,
            words: vec![0b101],
            rank_table: vec![0],
        };
        assert!(deserialize_forged(&no_slack_word).is_err());
    }

    proptest! {
        #[test]
        fn test_get_and_iter(bits in gen_vec(any::<bool>(), 0..=256)) {
            let indexed = build_from(&bits);
            prop_assert_eq!(bits.len() as u64, indexed.len());
            for (idx, &bit) in bits.iter().enumerate() {
                prop_assert_eq!(Ok(bit), indexed.get(idx as u64));
            }
            prop_assert_eq!(&bits, &indexed.iter().collect::<Vec<_>>());
        }

        #[test]
        fn test_rank_counts(bits in gen_vec(any::<bool>(), 0..=256)) {
            let indexed = build_from(&bits);
            let n = bits.len() as u64;
            let mut running_rank_ones = 0u64;
            for idx in 0..=n {
                let rank_ones = indexed.rank_ones(idx).unwrap();
                let rank_zeros = indexed.rank_zeros(idx).unwrap();
                prop_assert_eq!(running_rank_ones, rank_ones);
                prop_assert_eq!(idx, rank_ones + rank_zeros);
                if idx < n && bits[idx as usize] {
                    running_rank_ones += 1;
                }
            }
            let total_ones = bits.iter().filter(|&&b| b).count() as u64;
            prop_assert_eq!(Ok(total_ones), indexed.rank_ones(n));
            prop_assert_eq!(Ok(n - total_ones), indexed.rank_zeros(n));
            prop_assert_eq!(total_ones, indexed.count_ones());
            prop_assert_eq!(n - total_ones, indexed.count_zeros());
        }

        #[test]
        fn test_rank_monotone(bits in gen_vec(any::<bool>(), 0..=256), a in any::<u64>(), b in any::<u64>()) {
            let indexed = build_from(&bits);
            let n = bits.len() as u64;
            let (i, j) = (a % (n + 1), b % (n + 1));
            let (i, j) = if i <= j { (i, j) } else { (j, i) };
            prop_assert!(indexed.rank_ones(i).unwrap() <= indexed.rank_ones(j).unwrap());
            prop_assert!(indexed.rank_zeros(i).unwrap() <= indexed.rank_zeros(j).unwrap());
        }

        #[test]
        fn test_select_inverts_rank(bits in gen_vec(any::<bool>(), 0..=256)) {
            let indexed = build_from(&bits);
            for (idx, &bit) in bits.iter().enumerate() {
                let idx = idx as u64;
                if bit {
                    let rank = indexed.rank_ones(idx).unwrap();
                    prop_assert_eq!(Ok(idx), indexed.select_ones(rank));
                } else {
                    let rank = indexed.rank_zeros(idx).unwrap();
                    prop_assert_eq!(Ok(idx), indexed.select_zeros(rank));
                }
            }
            prop_assert!(indexed.select_ones(indexed.count_ones()).is_err());
            prop_assert!(indexed.select_zeros(indexed.count_zeros()).is_err());
        }
    }
}
