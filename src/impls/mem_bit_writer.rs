/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::convert::Infallible;

use crate::traits::BitWrite;

/// An implementation of [`BitWrite`] that packs bits into a `Vec<u64>`.
///
/// Bits are buffered into a word and committed to the vector when the
/// word fills up; [`flush`](BitWrite::flush) commits a partially filled
/// word, padding it with zeros. Writes cannot fail, so the error type is
/// [`Infallible`].
#[derive(Debug, Clone, Default)]
pub struct MemBitWriter {
    words: Vec<u64>,
    /// Pending bits, in the lowest `bits_in_buffer` positions.
    buffer: u64,
    /// Number of valid bits in the buffer, always less than 64.
    bits_in_buffer: usize,
    bits_written: u64,
}

impl MemBitWriter {
    /// Create a new, empty [`MemBitWriter`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`MemBitWriter`] with space preallocated for the
    /// given number of words.
    pub fn with_capacity(words: usize) -> Self {
        Self {
            words: Vec::with_capacity(words),
            ..Self::default()
        }
    }

    /// Return the words committed so far, not including buffered bits.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Flush and return the backing vector of words.
    pub fn into_words(mut self) -> Vec<u64> {
        if self.bits_in_buffer > 0 {
            self.words.push(self.buffer);
        }
        self.words
    }
}

impl BitWrite for MemBitWriter {
    type Error = Infallible;

    fn write_bits(&mut self, value: u64, n: usize) -> Result<usize, Infallible> {
        debug_assert!(n <= 64);
        debug_assert!(
            n == 64 || value >> n == 0,
            "value {:#x} does not fit in {} bits",
            value,
            n
        );
        if n == 0 {
            return Ok(0);
        }

        let space_left_in_buffer = 64 - self.bits_in_buffer;
        if n <= space_left_in_buffer {
            self.buffer |= value << self.bits_in_buffer;
            self.bits_in_buffer += n;
            if self.bits_in_buffer == 64 {
                self.words.push(self.buffer);
                self.buffer = 0;
                self.bits_in_buffer = 0;
            }
        } else {
            // Fill the buffer with the low bits and dump it; the buffer
            // is nonempty here, so both shifts are in range.
            self.buffer |= value << self.bits_in_buffer;
            self.words.push(self.buffer);
            self.buffer = value >> space_left_in_buffer;
            self.bits_in_buffer = n - space_left_in_buffer;
        }

        self.bits_written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> Result<usize, Infallible> {
        let pending = self.bits_in_buffer;
        if pending > 0 {
            self.words.push(self.buffer);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        Ok(pending)
    }

    fn num_bits_written(&self) -> u64 {
        self.bits_written
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_word_boundaries() {
        let mut writer = MemBitWriter::new();
        for _ in 0..3 {
            writer.write_bits(u64::MAX, 60).unwrap();
        }
        writer.write_bits(0, 60).unwrap();
        assert_eq!(writer.num_bits_written(), 240);
        assert_eq!(writer.flush().unwrap(), 240 % 64);
        assert_eq!(
            writer.into_words(),
            vec![
                u64::MAX,
                u64::MAX,
                (1 << 52) - 1,
                0,
            ]
        );
    }

    #[test]
    fn test_full_words() {
        let mut writer = MemBitWriter::new();
        writer.write_bits(!0, 64).unwrap();
        writer.write_bits(0b1011, 4).unwrap();
        assert_eq!(writer.words(), &[u64::MAX]);
        assert_eq!(writer.into_words(), vec![u64::MAX, 0b1011]);
    }
}
