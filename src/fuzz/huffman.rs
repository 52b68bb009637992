/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    symbols: Vec<u16>,
}

pub fn harness(data: FuzzCase) {
    let tree = HuffmanTree::from_symbols(data.symbols.iter().copied());
    assert_eq!(tree.is_empty(), data.symbols.is_empty());

    let mut writer = MemBitWriter::new();
    tree.encode_to(&mut writer).unwrap();
    let table = tree.table();
    for &symbol in &data.symbols {
        assert_eq!(
            writer.write_huffman(symbol, &table).unwrap(),
            tree.code(symbol).length
        );
    }
    writer.flush().unwrap();

    let mut reader = MemBitReader::new(writer.into_words());
    let decoded = HuffmanTree::<u16>::decode_from(&mut reader).unwrap();
    assert_eq!(decoded.len(), tree.len());
    for &symbol in &data.symbols {
        assert_eq!(decoded.code(symbol), tree.code(symbol));
    }

    if let Some(root) = decoded.root() {
        for &symbol in &data.symbols {
            assert_eq!(reader.read_huffman(root).unwrap(), symbol);
        }
    }
}
