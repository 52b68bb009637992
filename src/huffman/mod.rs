/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Canonical Huffman coding with a self-describing bit-stream format.

A [`HuffmanTree`] is built from a stream of symbols (or a
[`Counter`](crate::utils::Counter) histogram) with deterministic
tie-breaking, so that equal histograms produce bit-identical trees. The
tree [serializes itself](HuffmanTree::encode_to) into the bit stream
(pre-order topology bits followed by the alphabet) and a decoder
[rebuilds it](HuffmanTree::decode_from) from the stream alone.

Symbols are then coded through [`HuffmanWrite::write_huffman`], which
looks codewords up in a [`CodeProvider`] (the tree itself, or a
precomputed [`HuffmanTable`]), and decoded through
[`HuffmanRead::read_huffman`], which walks the tree one bit at a time.

Codewords are stored LSB-first: bit 0 of [`HuffmanCode::word`] is the
first bit on the wire and chooses the child of the root, so the shallow
part of the path sits in the low bits and codewords compose under right
shifts while decoding.

*/

use core::fmt::{Display, Formatter};

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::traits::{BitRead, BitWrite};

mod table;
pub use table::HuffmanTable;

mod tree;
pub use tree::{HuffmanTree, NodeRef, Symbol};

/// A Huffman codeword.
///
/// The codeword occupies the lowest [`length`](HuffmanCode::length) bits
/// of [`word`](HuffmanCode::word) in LSB-first order: bit 0 directs the
/// first navigation step from the root, bit `length − 1` the step onto
/// the leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct HuffmanCode {
    pub word: u64,
    pub length: usize,
}

impl Display for HuffmanCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:0width$b}", self.word, width = self.length)
    }
}

/// A mapping from symbols to their Huffman codewords.
///
/// Both [`HuffmanTree`] (which computes each codeword by walking parent
/// links, in time proportional to the code length) and [`HuffmanTable`]
/// (a precomputed lookup) provide codes. Symbols outside the coded
/// alphabet map to the empty codeword.
pub trait CodeProvider<C> {
    fn code(&self, symbol: C) -> HuffmanCode;
}

/// Top-down navigation over a Huffman tree.
///
/// A navigator is a cheap handle on a node; decoding moves it from the
/// root to a leaf. [`left_child`](TreeNavigator::left_child),
/// [`right_child`](TreeNavigator::right_child) may only be called on
/// inner nodes, and [`symbol`](TreeNavigator::symbol) only on leaves.
pub trait TreeNavigator: Copy {
    type Symbol;

    fn is_leaf(&self) -> bool;
    fn left_child(&self) -> Self;
    fn right_child(&self) -> Self;
    fn symbol(&self) -> Self::Symbol;
}

/// Trait for writing Huffman codes.
pub trait HuffmanWrite: BitWrite {
    /// Write the codeword of `symbol` as given by `provider` and return
    /// the number of bits written.
    ///
    /// The behavior is unspecified if the symbol is not known to the
    /// provider (nothing is written).
    #[inline]
    fn write_huffman<C, P: CodeProvider<C>>(
        &mut self,
        symbol: C,
        provider: &P,
    ) -> Result<usize, Self::Error> {
        let HuffmanCode {
            mut word,
            mut length,
        } = provider.code(symbol);
        let mut written = 0;
        while length > 0 {
            written += self.write_bit(word & 1 != 0)?;
            word >>= 1;
            length -= 1;
        }
        Ok(written)
    }
}

/// Trait for reading Huffman codes.
pub trait HuffmanRead: BitRead {
    /// Read one codeword, navigating the tree from `root`, and return
    /// the symbol of the leaf reached.
    #[inline]
    fn read_huffman<N: TreeNavigator>(&mut self, root: N) -> Result<N::Symbol, Self::Error> {
        let mut node = root;
        while !node.is_leaf() {
            node = if self.read_bit()? {
                node.right_child()
            } else {
                node.left_child()
            };
        }
        Ok(node.symbol())
    }
}

impl<B: BitWrite + ?Sized> HuffmanWrite for B {}
impl<B: BitRead + ?Sized> HuffmanRead for B {}
