/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Bit-stream contracts over which all codes are implemented.

A [`BitWrite`] accepts bits, a [`BitRead`] produces them, and both agree
on a single wire convention: multi-bit values travel LSB-first, that is,
bit 0 of a value is the first bit on the wire. This convention is a
contract, not an implementation detail: it is what lets Huffman
codewords compose under right shifts and lets the Elias codes drop the
leading one of their binary tails.

Concrete backends live in the [`impls`](crate::impls) module; any other
backend (file-based, mmap-based, and so on) can be plugged in by
implementing the two traits.

*/

mod bits;
pub use bits::*;
