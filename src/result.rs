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
//! Errors from building and querying bit sequences.
use indexed_bitseq_core::OnesOrZeros;
use std::fmt;
use std::result;
use thiserror::Error;

/// Which kind of bit a select was looking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitKind {
    Ones,
    Zeros,
}

impl fmt::Display for BitKind {
    fn fmt(&self, into: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BitKind::Ones => into.write_str("set"),
            BitKind::Zeros => into.write_str("unset"),
        }
    }
}

impl BitKind {
    pub(crate) fn of<W: OnesOrZeros>() -> Self {
        if W::is_ones() {
            BitKind::Ones
        } else {
            BitKind::Zeros
        }
    }
}

/// Ways a call can violate the preconditions of a bit sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit position outside the sequence was used.
    #[error("index {index} is out of range for {len} bits")]
    IndexOutOfRange { index: u64, len: u64 },

    /// A select asked for an occurrence which does not exist.
    #[error("no {kind} bit with rank {rank} (only {available} present)")]
    InvalidRank {
        kind: BitKind,
        rank: u64,
        available: u64,
    },

    /// The index is the wrong size for (or does not match) the bits it is used with.
    #[error("index is the wrong size for the bits used")]
    IndexIncorrectSize,
}

pub type Result<T> = result::Result<T, Error>;
