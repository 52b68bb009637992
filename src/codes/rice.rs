/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Rice codes.
//!
//! Rice codes (AKA Golomb–Rice codes) divide the value by `2^log2_b`;
//! the quotient plus one is coded with [γ](crate::codes::gamma) and the
//! remainder with `log2_b` binary bits. The shift by one keeps the γ
//! code defined when the quotient is zero.
//!
//! The supported parameter range is 0 ≤ `log2_b` < 64.

use super::{len_gamma, GammaRead, GammaWrite};
use crate::traits::*;
use crate::utils::Universe;

/// Returns the length of the Rice code for `n` with parameter `log2_b`.
#[must_use]
#[inline(always)]
pub fn len_rice(n: u64, log2_b: usize) -> usize {
    debug_assert!(log2_b < 64);
    len_gamma((n >> log2_b) + 1) + log2_b
}

/// Trait for reading Rice codes.
pub trait RiceRead: GammaRead {
    /// Read a Rice code with parameter `log2_b`.
    #[inline]
    fn read_rice(&mut self, log2_b: usize) -> Result<u64, Self::Error> {
        debug_assert!(log2_b < 64);
        let quotient = self.read_gamma()? - 1;
        Ok((quotient << log2_b) | self.read_bits(log2_b)?)
    }

    /// Read a Rice code of a value of the given universe.
    #[inline(always)]
    fn read_rice_in(&mut self, log2_b: usize, universe: Universe) -> Result<u64, Self::Error> {
        Ok(universe.abs(self.read_rice(log2_b)?))
    }
}

/// Trait for writing Rice codes.
pub trait RiceWrite: GammaWrite {
    /// Write `n` as a Rice code with parameter `log2_b` and return the
    /// number of bits written.
    #[inline]
    fn write_rice(&mut self, n: u64, log2_b: usize) -> Result<usize, Self::Error> {
        debug_assert!(log2_b < 64);
        let mut written = self.write_gamma((n >> log2_b) + 1)?;
        written += self.write_bits(n & ((1_u64 << log2_b) - 1), log2_b)?;
        Ok(written)
    }

    /// Write a value of the given universe as a Rice code.
    #[inline(always)]
    fn write_rice_in(
        &mut self,
        value: u64,
        log2_b: usize,
        universe: Universe,
    ) -> Result<usize, Self::Error> {
        self.write_rice(universe.rel(value), log2_b)
    }
}

impl<B: BitRead + ?Sized> RiceRead for B {}
impl<B: BitWrite + ?Sized> RiceWrite for B {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::impls::{MemBitReader, MemBitWriter};

    fn rice_of(n: u64, log2_b: usize) -> anyhow::Result<(u64, usize)> {
        let mut writer = MemBitWriter::new();
        let len = writer.write_rice(n, log2_b)?;
        writer.flush()?;
        Ok((writer.into_words()[0], len))
    }

    #[test]
    fn test_layout() -> anyhow::Result<()> {
        // gamma(quotient + 1) followed by log2_b remainder bits
        assert_eq!(rice_of(0, 5)?, (0b00000_0, 6));
        assert_eq!(rice_of(31, 5)?, (0b11111_0, 6));
        assert_eq!(rice_of(32, 5)?, (0b00000_0_01, 8));
        assert_eq!(rice_of(63, 5)?, (0b11111_0_01, 8));
        assert_eq!(rice_of(64, 5)?, (0b00000_1_01, 8));
        assert_eq!(rice_of(95, 5)?, (0b11111_1_01, 8));
        assert_eq!(rice_of(96, 5)?, (0b00000_00_011, 10));
        assert_eq!(rice_of(127, 5)?, (0b11111_00_011, 10));
        assert_eq!(rice_of(63, 6)?, (0b111111_0, 7));
        assert_eq!(rice_of(64, 6)?, (0b000000_0_01, 9));
        assert_eq!(rice_of(127, 6)?, (0b111111_0_01, 9));
        for n in 0..1000 {
            for log2_b in 0..8 {
                assert_eq!(rice_of(n, log2_b)?.1, len_rice(n, log2_b));
            }
        }
        Ok(())
    }

    #[test]
    fn test_decode() -> anyhow::Result<()> {
        assert_eq!(MemBitReader::new([0b00000_0_u64]).read_rice(5)?, 0);
        assert_eq!(MemBitReader::new([0b11111_0_u64]).read_rice(5)?, 31);
        assert_eq!(MemBitReader::new([0b00000_0_01_u64]).read_rice(5)?, 32);
        assert_eq!(MemBitReader::new([0b11111_1_01_u64]).read_rice(5)?, 95);
        assert_eq!(MemBitReader::new([0b11111_00_011_u64]).read_rice(5)?, 127);
        assert_eq!(MemBitReader::new([0b000000_0_01_u64]).read_rice(6)?, 64);
        Ok(())
    }

    #[test]
    fn test_roundtrip() -> anyhow::Result<()> {
        let universe = Universe::new(2846, 15361);
        for log2_b in [0, 3, 5, 8] {
            let mut writer = MemBitWriter::new();
            for value in (universe.min()..=universe.max()).step_by(97) {
                writer.write_rice_in(value, log2_b, universe)?;
            }
            writer.flush()?;

            let mut reader = MemBitReader::new(writer.into_words());
            for value in (universe.min()..=universe.max()).step_by(97) {
                assert_eq!(reader.read_rice_in(log2_b, universe)?, value);
            }
        }
        Ok(())
    }
}
