/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::hash::Hash;
use std::collections::HashMap;

use common_traits::CastableInto;

use super::{CodeProvider, HuffmanCode};

/// A precomputed mapping from symbols to Huffman codewords.
///
/// Built by [`HuffmanTree::table`](crate::huffman::HuffmanTree::table).
/// For symbol types of at most 16 bits the table is a dense array
/// indexed by symbol; for wider types it falls back to a hash map over
/// the coded alphabet. Symbols outside the alphabet map to the empty
/// codeword, like with the tree itself.
#[derive(Debug, Clone)]
pub enum HuffmanTable<C> {
    Dense(Vec<HuffmanCode>),
    Sparse(HashMap<C, HuffmanCode>),
}

impl<C: CastableInto<u64> + Hash + Eq> CodeProvider<C> for HuffmanTable<C> {
    #[inline(always)]
    fn code(&self, symbol: C) -> HuffmanCode {
        match self {
            HuffmanTable::Dense(codes) => codes[symbol.cast() as usize],
            HuffmanTable::Sparse(codes) => codes.get(&symbol).copied().unwrap_or_default(),
        }
    }
}
