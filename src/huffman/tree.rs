/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::cmp::Reverse;
use core::hash::Hash;
use std::collections::{BinaryHeap, HashMap};

use common_traits::{AsBytes, CastableInto, FiniteRangeNumber, UnsignedInt};

use super::{CodeProvider, HuffmanCode, HuffmanTable, TreeNavigator};
use crate::codes::{BinaryRead, BinaryWrite, DeltaRead, DeltaWrite};
use crate::traits::{BitRead, BitWrite};
use crate::utils::{Counter, Range, Universe};

/// Convenience trait gathering the bounds a Huffman symbol type must
/// satisfy; it is blanket-implemented for all unsigned integer types.
pub trait Symbol:
    UnsignedInt + CastableInto<u64> + Hash + Eq + Ord + FiniteRangeNumber + AsBytes
{
}
impl<T: UnsignedInt + CastableInto<u64> + Hash + Eq + Ord + FiniteRangeNumber + AsBytes> Symbol
    for T
{
}

#[derive(Debug, Clone, Copy)]
struct Node<C> {
    symbol: C,
    freq: usize,
    parent: Option<usize>,
    children: Option<(usize, usize)>,
}

/// A Huffman tree over symbols of type `C`.
///
/// The tree owns its nodes as a contiguous arena with index-based child
/// and parent links; a map from symbols to leaves supports bottom-up
/// codeword extraction. Trees are built once (from symbols, from a
/// histogram, or by [decoding a bit stream](HuffmanTree::decode_from))
/// and read-only afterwards.
///
/// A non-empty tree always has at least two leaves: when a single
/// distinct symbol `c` is observed, the bitwise complement of `c` is
/// added with frequency zero, so that `c` gets a code of length one.
/// Trees decoded from a bit stream carry zero frequencies throughout;
/// frequencies are not serialized, as codes depend only on the shape.
#[derive(Debug, Clone)]
pub struct HuffmanTree<C> {
    nodes: Vec<Node<C>>,
    root: Option<usize>,
    leaves: HashMap<C, usize>,
}

/// Priority of a node in the construction queue.
///
/// Nodes are popped in ascending order: lower frequency first, then
/// inner nodes before leaves, then leaves by ascending symbol (and inner
/// nodes by creation order). The first of the two nodes popped by a
/// merge step becomes the right child, so among equal-frequency leaves
/// the smaller symbol ends up on the right. Equal histograms thus yield
/// identical trees, whatever the order symbols were counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Priority {
    freq: usize,
    kind: Kind,
    key: u64,
    node: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Kind {
    Inner,
    Leaf,
}

impl<C: Symbol> HuffmanTree<C> {
    /// Build the Huffman tree for the given symbols.
    ///
    /// An empty input yields the empty tree, which has no root and
    /// serializes as a single bit.
    pub fn from_symbols<I: IntoIterator<Item = C>>(symbols: I) -> Self {
        Self::from_counter(&symbols.into_iter().collect())
    }

    /// Build the Huffman tree for the given histogram.
    pub fn from_counter(histogram: &Counter<C>) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: None,
            leaves: HashMap::new(),
        };
        if histogram.is_empty() {
            return tree;
        }

        let mut entries: Vec<(C, usize)> =
            histogram.iter().map(|(&symbol, &freq)| (symbol, freq)).collect();
        if entries.len() == 1 {
            // a lone symbol still needs a tree of depth one; its bitwise
            // complement is guaranteed to be a fresh symbol
            let only = entries[0].0;
            entries.push((C::MAX - only, 0));
        }
        entries.sort_unstable_by_key(|&(symbol, _)| symbol);

        tree.nodes.reserve(2 * entries.len() - 1);
        tree.leaves.reserve(entries.len());

        let mut queue = BinaryHeap::with_capacity(entries.len());
        for (symbol, freq) in entries {
            let node = tree.push_leaf(symbol, freq);
            tree.leaves.insert(symbol, node);
            queue.push(Reverse(Priority {
                freq,
                kind: Kind::Leaf,
                key: symbol.cast(),
                node,
            }));
        }

        while queue.len() > 1 {
            let Reverse(right) = queue.pop().unwrap();
            let Reverse(left) = queue.pop().unwrap();
            debug_assert!(right.freq <= left.freq);

            let node = tree.push_inner(left.node, right.node);
            queue.push(Reverse(Priority {
                freq: tree.nodes[node].freq,
                kind: Kind::Inner,
                key: node as u64,
                node,
            }));
        }

        tree.root = queue.pop().map(|Reverse(priority)| priority.node);
        tree
    }

    fn push_leaf(&mut self, symbol: C, freq: usize) -> usize {
        self.nodes.push(Node {
            symbol,
            freq,
            parent: None,
            children: None,
        });
        self.nodes.len() - 1
    }

    fn push_inner(&mut self, left: usize, right: usize) -> usize {
        let freq = self.nodes[left].freq + self.nodes[right].freq;
        self.nodes.push(Node {
            symbol: C::ZERO,
            freq,
            parent: None,
            children: Some((left, right)),
        });
        let node = self.nodes.len() - 1;
        self.nodes[left].parent = Some(node);
        self.nodes[right].parent = Some(node);
        node
    }

    /// Return the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return whether the tree is empty, that is, built from an empty
    /// input.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Return a navigator on the root node, or `None` for the empty
    /// tree.
    pub fn root(&self) -> Option<NodeRef<'_, C>> {
        self.root.map(|node| NodeRef { tree: self, node })
    }

    /// Compute the codeword of the node of given index bottom-up.
    fn climb(&self, mut node: usize) -> HuffmanCode {
        let mut code = HuffmanCode::default();
        while let Some(parent) = self.nodes[node].parent {
            let Some((_, right)) = self.nodes[parent].children else {
                unreachable!("parent is not an inner node");
            };
            code.word = (code.word << 1) | (right == node) as u64;
            code.length += 1;
            node = parent;
        }
        code
    }

    /// Precompute a [`HuffmanTable`] mapping every coded symbol to its
    /// codeword with one linear pass over the leaves.
    pub fn table(&self) -> HuffmanTable<C> {
        if C::BITS <= 16 {
            let mut codes = vec![HuffmanCode::default(); 1 << C::BITS];
            for (&symbol, &leaf) in &self.leaves {
                codes[symbol.cast() as usize] = self.climb(leaf);
            }
            HuffmanTable::Dense(codes)
        } else {
            let mut codes = HashMap::with_capacity(self.leaves.len());
            for (&symbol, &leaf) in &self.leaves {
                codes.insert(symbol, self.climb(leaf));
            }
            HuffmanTable::Sparse(codes)
        }
    }

    /// Encode the tree to the given bit sink and return the number of
    /// bits written.
    ///
    /// The topology is emitted as one bit per node in pre-order, `1`
    /// for a leaf and `0` for an inner node, followed by the minimum
    /// symbol (δ code), the maximum symbol (δ code relative to the
    /// minimum), and one fixed-width binary code per leaf, in
    /// left-to-right order, over the universe `[min, max]`.
    ///
    /// The empty tree is encoded as a single `1` bit; the decoder tells
    /// it apart from a leaf by the topology length.
    pub fn encode_to<W: BitWrite + ?Sized>(&self, sink: &mut W) -> Result<usize, W::Error> {
        let Some(root) = self.root else {
            return sink.write_bit(true);
        };

        let mut symbols = Vec::with_capacity(self.leaves.len());
        let mut range = Range::new();
        let mut written = self.encode_node(root, sink, &mut symbols, &mut range)?;

        let universe = Universe::from(range);
        written += sink.write_delta_in(universe.min(), Universe::umax())?;
        written += sink.write_delta_in(universe.max(), Universe::at_least(universe.min()))?;
        for symbol in symbols {
            written += sink.write_binary_in(symbol, universe)?;
        }
        Ok(written)
    }

    fn encode_node<W: BitWrite + ?Sized>(
        &self,
        node: usize,
        sink: &mut W,
        symbols: &mut Vec<u64>,
        range: &mut Range,
    ) -> Result<usize, W::Error> {
        match self.nodes[node].children {
            None => {
                let written = sink.write_bit(true)?;
                let symbol = self.nodes[node].symbol.cast();
                symbols.push(symbol);
                range.contain(symbol);
                Ok(written)
            }
            Some((left, right)) => {
                let mut written = sink.write_bit(false)?;
                written += self.encode_node(left, sink, symbols, range)?;
                written += self.encode_node(right, sink, symbols, range)?;
                Ok(written)
            }
        }
    }

    /// Decode a tree previously written by [`encode_to`](HuffmanTree::encode_to)
    /// from the given bit source.
    ///
    /// The decoded leaves carry frequency zero.
    pub fn decode_from<R: BitRead + ?Sized>(source: &mut R) -> Result<Self, R::Error>
    where
        u64: CastableInto<C>,
    {
        let mut topology = Vec::new();
        let mut alphabet_size = 0;
        Self::read_topology(source, &mut topology, &mut alphabet_size)?;

        let mut tree = Self {
            nodes: Vec::new(),
            root: None,
            leaves: HashMap::new(),
        };
        // a lone 1 bit is the empty tree, and no alphabet follows
        if topology.len() > 1 {
            tree.nodes.reserve(topology.len());
            tree.leaves.reserve(alphabet_size);

            let min = source.read_delta_in(Universe::umax())?;
            let max = source.read_delta_in(Universe::at_least(min))?;
            let universe = Universe::new(min, max);

            let mut pos = 0;
            let root = tree.decode_node(source, &topology, &mut pos, universe)?;
            tree.root = Some(root);
        }
        Ok(tree)
    }

    fn read_topology<R: BitRead + ?Sized>(
        source: &mut R,
        topology: &mut Vec<bool>,
        alphabet_size: &mut usize,
    ) -> Result<(), R::Error> {
        let leaf = source.read_bit()?;
        topology.push(leaf);
        if leaf {
            *alphabet_size += 1;
        } else {
            Self::read_topology(source, topology, alphabet_size)?;
            Self::read_topology(source, topology, alphabet_size)?;
        }
        Ok(())
    }

    fn decode_node<R: BitRead + ?Sized>(
        &mut self,
        source: &mut R,
        topology: &[bool],
        pos: &mut usize,
        universe: Universe,
    ) -> Result<usize, R::Error>
    where
        u64: CastableInto<C>,
    {
        let leaf = topology[*pos];
        *pos += 1;
        if leaf {
            let symbol: C = source.read_binary_in(universe)?.cast();
            let node = self.push_leaf(symbol, 0);
            self.leaves.insert(symbol, node);
            Ok(node)
        } else {
            let left = self.decode_node(source, topology, pos, universe)?;
            let right = self.decode_node(source, topology, pos, universe)?;
            Ok(self.push_inner(left, right))
        }
    }
}

impl<C: Symbol> CodeProvider<C> for HuffmanTree<C> {
    fn code(&self, symbol: C) -> HuffmanCode {
        self.leaves
            .get(&symbol)
            .map(|&leaf| self.climb(leaf))
            .unwrap_or_default()
    }
}

impl<C: Symbol> FromIterator<C> for HuffmanTree<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}

impl<C: Symbol> Default for HuffmanTree<C> {
    fn default() -> Self {
        Self::from_counter(&Counter::new())
    }
}

/// A cheap handle on a node of a [`HuffmanTree`], implementing
/// [`TreeNavigator`].
#[derive(Debug)]
pub struct NodeRef<'a, C> {
    tree: &'a HuffmanTree<C>,
    node: usize,
}

impl<C> Clone for NodeRef<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for NodeRef<'_, C> {}

impl<C: Symbol> NodeRef<'_, C> {
    /// Return the frequency recorded for this node.
    pub fn freq(&self) -> usize {
        self.tree.nodes[self.node].freq
    }

    /// Compute the codeword of this node by walking up to the root, in
    /// time proportional to the code length.
    pub fn code(&self) -> HuffmanCode {
        self.tree.climb(self.node)
    }
}

impl<C: Symbol> TreeNavigator for NodeRef<'_, C> {
    type Symbol = C;

    #[inline(always)]
    fn is_leaf(&self) -> bool {
        self.tree.nodes[self.node].children.is_none()
    }

    #[inline(always)]
    fn left_child(&self) -> Self {
        let Some((left, _)) = self.tree.nodes[self.node].children else {
            panic!("left_child called on a leaf");
        };
        Self {
            tree: self.tree,
            node: left,
        }
    }

    #[inline(always)]
    fn right_child(&self) -> Self {
        let Some((_, right)) = self.tree.nodes[self.node].children else {
            panic!("right_child called on a leaf");
        };
        Self {
            tree: self.tree,
            node: right,
        }
    }

    #[inline(always)]
    fn symbol(&self) -> C {
        debug_assert!(self.is_leaf());
        self.tree.nodes[self.node].symbol
    }
}
