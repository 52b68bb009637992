/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug, Clone)]
enum RandomCommand {
    Bits(u64, usize),
    Unary(u64),
    Gamma(u64),
    Delta(u64),
    Rice(u64, usize),
    VByte(u64, usize),
    InUniverse(u8, u64, u32, u64),
}

/// Clamp the arbitrary parameters into the preconditions of each code.
fn sanitize(command: &mut RandomCommand) {
    match command {
        RandomCommand::Bits(value, n_bits) => {
            *n_bits = 1 + (*n_bits % 63);
            *value &= (1 << *n_bits) - 1;
        }
        RandomCommand::Unary(value) => {
            *value = (*value).min(300);
        }
        RandomCommand::Gamma(value) | RandomCommand::Delta(value) => {
            *value = (*value).max(1);
        }
        RandomCommand::Rice(value, log2_b) => {
            *log2_b = (*log2_b).min(8);
            *value = (*value).min(u16::MAX as u64);
        }
        RandomCommand::VByte(_, block) => {
            *block = 1 + (*block % 13);
        }
        RandomCommand::InUniverse(codec, min, delta, offset) => {
            *codec %= 6;
            *min = (*min).min(u64::MAX / 2);
            *offset %= *delta as u64 + 1;
            if *codec == 1 {
                // keep unary codes short
                *delta = (*delta).min(300);
                *offset %= *delta as u64 + 1;
            }
        }
    }
}

fn select_codec(selector: u8) -> Codec {
    match selector {
        0 => Codec::Binary,
        1 => Codec::Unary,
        2 => Codec::Gamma,
        3 => Codec::Delta,
        4 => Codec::Rice { log2_b: 4 },
        _ => Codec::Vbyte { block: 5 },
    }
}

pub fn harness(mut data: FuzzCase) {
    for command in &mut data.commands {
        sanitize(command);
    }

    let mut writer = MemBitWriter::new();
    for command in &data.commands {
        match command {
            RandomCommand::Bits(value, n_bits) => {
                writer.write_bits(*value, *n_bits).unwrap();
            }
            RandomCommand::Unary(value) => {
                assert_eq!(writer.write_unary(*value).unwrap(), len_unary(*value));
            }
            RandomCommand::Gamma(value) => {
                assert_eq!(writer.write_gamma(*value).unwrap(), len_gamma(*value));
            }
            RandomCommand::Delta(value) => {
                assert_eq!(writer.write_delta(*value).unwrap(), len_delta(*value));
            }
            RandomCommand::Rice(value, log2_b) => {
                assert_eq!(
                    writer.write_rice(*value, *log2_b).unwrap(),
                    len_rice(*value, *log2_b)
                );
            }
            RandomCommand::VByte(value, block) => {
                assert_eq!(
                    writer.write_vbyte(*value, *block).unwrap(),
                    len_vbyte(*value, *block)
                );
            }
            RandomCommand::InUniverse(selector, min, delta, offset) => {
                let universe = Universe::with_delta(*min, *delta as u64);
                select_codec(*selector)
                    .encode(&mut writer, universe.abs(*offset), universe)
                    .unwrap();
            }
        }
    }
    let expected_bits = writer.num_bits_written();
    writer.flush().unwrap();

    let mut reader = MemBitReader::new(writer.into_words());
    for command in &data.commands {
        match command {
            RandomCommand::Bits(value, n_bits) => {
                assert_eq!(reader.read_bits(*n_bits).unwrap(), *value);
            }
            RandomCommand::Unary(value) => {
                assert_eq!(reader.read_unary().unwrap(), *value);
            }
            RandomCommand::Gamma(value) => {
                assert_eq!(reader.read_gamma().unwrap(), *value);
            }
            RandomCommand::Delta(value) => {
                assert_eq!(reader.read_delta().unwrap(), *value);
            }
            RandomCommand::Rice(value, log2_b) => {
                assert_eq!(reader.read_rice(*log2_b).unwrap(), *value);
            }
            RandomCommand::VByte(value, block) => {
                assert_eq!(reader.read_vbyte(*block).unwrap(), *value);
            }
            RandomCommand::InUniverse(selector, min, delta, offset) => {
                let universe = Universe::with_delta(*min, *delta as u64);
                assert_eq!(
                    select_codec(*selector).decode(&mut reader, universe).unwrap(),
                    universe.abs(*offset)
                );
            }
        }
    }
    assert_eq!(reader.bit_pos(), expected_bits);
}
