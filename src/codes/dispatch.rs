/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! A module for selecting the code to use dynamically.
//!
//! [`Codec`] is an enum with all the supported codes and their
//! parameters; it dispatches [`encode`](Codec::encode) and
//! [`decode`](Codec::decode) over a [`Universe`] to the corresponding
//! per-code trait. Parameterized codes carry their parameter in the
//! variant, so a `Codec` value is all a caller needs to pick a code at
//! run time (e.g., from a command-line option, via [`FromStr`]).

use core::fmt::{Display, Formatter};
use core::str::FromStr;

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use super::{CodesRead, CodesWrite};
use crate::utils::Universe;

/// An enum of all the codes supported by this library, with their
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[non_exhaustive]
pub enum Codec {
    Binary,
    Unary,
    Gamma,
    Delta,
    Rice { log2_b: usize },
    Vbyte { block: usize },
}

impl Codec {
    /// Encode a value of the given universe with this code and return
    /// the number of bits written.
    #[inline]
    pub fn encode<W: CodesWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: u64,
        universe: Universe,
    ) -> Result<usize, W::Error> {
        match self {
            Codec::Binary => writer.write_binary_in(value, universe),
            Codec::Unary => writer.write_unary_in(value, universe),
            Codec::Gamma => writer.write_gamma_in(value, universe),
            Codec::Delta => writer.write_delta_in(value, universe),
            Codec::Rice { log2_b } => writer.write_rice_in(value, *log2_b, universe),
            Codec::Vbyte { block } => writer.write_vbyte_in(value, *block, universe),
        }
    }

    /// Decode a value of the given universe with this code.
    #[inline]
    pub fn decode<R: CodesRead + ?Sized>(
        &self,
        reader: &mut R,
        universe: Universe,
    ) -> Result<u64, R::Error> {
        match self {
            Codec::Binary => reader.read_binary_in(universe),
            Codec::Unary => reader.read_unary_in(universe),
            Codec::Gamma => reader.read_gamma_in(universe),
            Codec::Delta => reader.read_delta_in(universe),
            Codec::Rice { log2_b } => reader.read_rice_in(*log2_b, universe),
            Codec::Vbyte { block } => reader.read_vbyte_in(*block, universe),
        }
    }
}

/// Error type for parsing a code from a string.
#[derive(Debug)]
pub enum CodecError {
    ParseError(core::num::ParseIntError),
    UnknownCodec(String),
}

impl std::error::Error for CodecError {}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::ParseError(e) => write!(f, "Parse error: {}", e),
            CodecError::UnknownCodec(s) => write!(f, "Unknown codec: {}", s),
        }
    }
}

impl From<core::num::ParseIntError> for CodecError {
    fn from(e: core::num::ParseIntError) -> Self {
        CodecError::ParseError(e)
    }
}

impl Display for Codec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Codec::Binary => write!(f, "binary"),
            Codec::Unary => write!(f, "unary"),
            Codec::Gamma => write!(f, "gamma"),
            Codec::Delta => write!(f, "delta"),
            Codec::Rice { log2_b } => write!(f, "rice({})", log2_b),
            Codec::Vbyte { block } => write!(f, "vbyte({})", block),
        }
    }
}

impl FromStr for Codec {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "binary" => Codec::Binary,
            "unary" => Codec::Unary,
            "gamma" => Codec::Gamma,
            "delta" => Codec::Delta,
            _ => {
                if let Some(log2_b) = s.strip_prefix("rice(").and_then(|s| s.strip_suffix(')')) {
                    Codec::Rice {
                        log2_b: log2_b.parse()?,
                    }
                } else if let Some(block) =
                    s.strip_prefix("vbyte(").and_then(|s| s.strip_suffix(')'))
                {
                    Codec::Vbyte {
                        block: block.parse()?,
                    }
                } else {
                    return Err(CodecError::UnknownCodec(s.into()));
                }
            }
        })
    }
}
