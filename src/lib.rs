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
//! An immutable bit sequence indexed for rank and select.
//!
//! Bits are first set up in a [`Builder`], then frozen with
//! [`Builder::build`] into [`IndexedBits`], which answers:
//!
//! - `get(i)`: the bit at position `i`;
//! - `rank_ones(i)` / `rank_zeros(i)`: how many set/unset bits come
//!   strictly before position `i` (*O(1)*);
//! - `select_ones(r)` / `select_zeros(r)`: the position of the set/unset
//!   bit with rank `r` (*O(log n)*, by binary search over rank).
//!
//! ```
//! use indexed_bitseq::Builder;
//!
//! let mut builder = Builder::new(7);
//! for &i in [0, 2, 3, 6].iter() {
//!     builder.set(i).unwrap();
//! }
//! let bits = builder.build();
//! assert_eq!(Ok(2), bits.rank_ones(3));
//! assert_eq!(Ok(6), bits.select_ones(3));
//! assert_eq!(Ok(5), bits.select_zeros(2));
//! assert!(bits.select_ones(4).is_err());
//! ```

extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

extern crate indexed_bitseq_core;

#[cfg(feature = "implement_heapsize")]
extern crate heapsize;

#[cfg(test)]
extern crate proptest;
#[cfg(test)]
extern crate bincode;

pub use indexed_bitseq_core::ones_or_zeros::{OneBits, OnesOrZeros, ZeroBits};

mod result;
pub use crate::result::{BitKind, Error, Result};

mod builder;
pub use crate::builder::Builder;

mod indexed_bits;
pub use crate::indexed_bits::IndexedBits;
