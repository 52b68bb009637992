/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use intcodes::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const UNIVERSES: [Universe; 4] = [
    Universe::new(0, 255),
    Universe::new(10, 20),
    Universe::new(2846, 15361),
    Universe::new(53_748, 1_287_536),
];

fn random_codec(r: &mut SmallRng) -> Codec {
    match r.gen_range(0..6) {
        0 => Codec::Binary,
        1 => Codec::Unary,
        2 => Codec::Gamma,
        3 => Codec::Delta,
        4 => Codec::Rice {
            log2_b: r.gen_range(0..9),
        },
        5 => Codec::Vbyte {
            block: r.gen_range(1..14),
        },
        _ => unreachable!(),
    }
}

/// Interleave all the codes with varying universes and check that the
/// stream decodes back to the same sequence.
#[test]
fn test_interleaved() -> anyhow::Result<()> {
    const N: usize = 100_000;
    let mut r = SmallRng::seed_from_u64(0);
    let mut v = SmallRng::seed_from_u64(1);
    let mut writer = MemBitWriter::new();

    for _ in 0..N {
        let codec = random_codec(&mut r);
        let universe = UNIVERSES[r.gen_range(0..UNIVERSES.len())];
        let value = universe.abs(v.gen_range(0..=universe.delta().min(1000)));
        writer.write_codec(codec, value, universe)?;
    }
    writer.flush()?;

    let mut reader = MemBitReader::new(writer.into_words());
    let mut r = SmallRng::seed_from_u64(0);
    let mut v = SmallRng::seed_from_u64(1);

    for _ in 0..N {
        let codec = random_codec(&mut r);
        let universe = UNIVERSES[r.gen_range(0..UNIVERSES.len())];
        let value = universe.abs(v.gen_range(0..=universe.delta().min(1000)));
        assert_eq!(reader.read_codec(codec, universe)?, value);
    }

    Ok(())
}

/// Every codec decodes every value back, over every universe.
#[test]
fn test_universal() -> anyhow::Result<()> {
    let mut v = SmallRng::seed_from_u64(42);
    let inputs: Vec<Vec<u64>> = UNIVERSES
        .iter()
        .map(|u| {
            (0..100)
                .map(|_| u.abs(v.gen_range(0..=u.delta())))
                .collect()
        })
        .collect();

    for codec in [
        Codec::Binary,
        Codec::Gamma,
        Codec::Delta,
        Codec::Rice { log2_b: 5 },
        Codec::Rice { log2_b: 8 },
        Codec::Vbyte { block: 3 },
        Codec::Vbyte { block: 7 },
    ] {
        let mut writer = MemBitWriter::new();
        for (universe, input) in UNIVERSES.iter().zip(&inputs) {
            for &value in input {
                codec.encode(&mut writer, value, *universe)?;
            }
        }
        writer.flush()?;

        let mut reader = MemBitReader::new(writer.into_words());
        for (universe, input) in UNIVERSES.iter().zip(&inputs) {
            for &value in input {
                assert_eq!(codec.decode(&mut reader, *universe)?, value, "{}", codec);
            }
        }
    }
    Ok(())
}

/// The worked example from the crate documentation: one value coded
/// with every code, with and without a universe.
#[test]
fn test_example_stream() -> anyhow::Result<()> {
    let u = Universe::new(10, 20);
    let mut writer = MemBitWriter::new();

    writer.write_binary(17, 5)?;
    writer.write_binary_in(17, u)?;
    writer.write_unary(11)?;
    writer.write_unary_in(11, u)?;
    writer.write_gamma(12)?;
    writer.write_gamma_in(12, u)?;
    writer.write_rice(13, 3)?;
    writer.write_rice_in(13, 3, u)?;
    writer.write_vbyte(18, 8)?;
    writer.write_vbyte_in(18, 8, u)?;
    writer.flush()?;

    let mut reader = MemBitReader::new(writer.into_words());
    assert_eq!(reader.read_binary(5)?, 17);
    assert_eq!(reader.read_binary_in(u)?, 17);
    assert_eq!(reader.read_unary()?, 11);
    assert_eq!(reader.read_unary_in(u)?, 11);
    assert_eq!(reader.read_gamma()?, 12);
    assert_eq!(reader.read_gamma_in(u)?, 12);
    assert_eq!(reader.read_rice(3)?, 13);
    assert_eq!(reader.read_rice_in(3, u)?, 13);
    assert_eq!(reader.read_vbyte(8)?, 18);
    assert_eq!(reader.read_vbyte_in(8, u)?, 18);
    Ok(())
}

/// Universe-relative codes must agree on the number of bits consumed,
/// whatever the universe minimum.
#[test]
fn test_bit_counts() -> anyhow::Result<()> {
    for universe in UNIVERSES {
        let mut writer = MemBitWriter::new();
        let mut expected = 0;
        for value in (universe.min()..=universe.max()).step_by(511) {
            expected += writer.write_binary_in(value, universe)?;
            expected += writer.write_unary_in(universe.min(), universe)?;
            expected += writer.write_gamma_in(value, universe)?;
            expected += writer.write_delta_in(value, universe)?;
            expected += writer.write_rice_in(value, 4, universe)?;
            expected += writer.write_vbyte_in(value, 5, universe)?;
        }
        assert_eq!(writer.num_bits_written(), expected as u64);

        writer.flush()?;
        let mut reader = MemBitReader::new(writer.into_words());
        for value in (universe.min()..=universe.max()).step_by(511) {
            assert_eq!(reader.read_binary_in(universe)?, value);
            assert_eq!(reader.read_unary_in(universe)?, universe.min());
            assert_eq!(reader.read_gamma_in(universe)?, value);
            assert_eq!(reader.read_delta_in(universe)?, value);
            assert_eq!(reader.read_rice_in(4, universe)?, value);
            assert_eq!(reader.read_vbyte_in(5, universe)?, value);
        }
        assert_eq!(reader.bit_pos(), expected as u64);
    }
    Ok(())
}
