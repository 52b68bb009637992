/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fixed-width binary codes.
//!
//! The binary code of a value is simply its lowest `n` bits, emitted
//! LSB-first. In the universe form, `n` is the universe's worst-case
//! entropy and the coded value is relative to the universe's minimum, so
//! a value of a universe `[min, max]` takes `max(1, ⌈log₂(max − min +
//! 1)⌉)` bits.

use crate::traits::*;
use crate::utils::Universe;

/// Returns the length of the binary code for a value of the given
/// universe.
#[must_use]
#[inline(always)]
pub fn len_binary(universe: Universe) -> usize {
    universe.entropy()
}

/// Trait for reading fixed-width binary codes.
pub trait BinaryRead: BitRead {
    /// Read an `n`-bit binary code.
    #[inline(always)]
    fn read_binary(&mut self, n: usize) -> Result<u64, Self::Error> {
        self.read_bits(n)
    }

    /// Read a binary code of a value of the given universe.
    #[inline(always)]
    fn read_binary_in(&mut self, universe: Universe) -> Result<u64, Self::Error> {
        Ok(universe.abs(self.read_bits(universe.entropy())?))
    }
}

/// Trait for writing fixed-width binary codes.
pub trait BinaryWrite: BitWrite {
    /// Write the lowest `n` bits of `value`.
    #[inline(always)]
    fn write_binary(&mut self, value: u64, n: usize) -> Result<usize, Self::Error> {
        self.write_bits(value, n)
    }

    /// Write a value of the given universe, using the universe's
    /// worst-case entropy as the number of bits.
    #[inline(always)]
    fn write_binary_in(&mut self, value: u64, universe: Universe) -> Result<usize, Self::Error> {
        self.write_bits(universe.rel(value), universe.entropy())
    }
}

impl<B: BitRead + ?Sized> BinaryRead for B {}
impl<B: BitWrite + ?Sized> BinaryWrite for B {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::impls::{MemBitReader, MemBitWriter};

    #[test]
    fn test_roundtrip() -> anyhow::Result<()> {
        let universe = Universe::new(10, 20);
        let mut writer = MemBitWriter::new();
        writer.write_binary(17, 5)?;
        writer.write_binary_in(17, universe)?;
        writer.flush()?;
        assert_eq!(writer.num_bits_written(), 9);

        let mut reader = MemBitReader::new(writer.into_words());
        assert_eq!(reader.read_binary(5)?, 17);
        assert_eq!(reader.read_binary_in(universe)?, 17);
        Ok(())
    }

    #[test]
    fn test_layout() -> anyhow::Result<()> {
        // The universe form codes the value relative to the minimum
        let mut writer = MemBitWriter::new();
        writer.write_binary_in(17, Universe::new(10, 20))?;
        writer.flush()?;
        assert_eq!(writer.into_words(), vec![0b0111]);
        Ok(())
    }
}
