/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

In-memory implementations of the bit-stream traits.

[`MemBitWriter`] packs bits into a `Vec<u64>` and [`MemBitReader`] reads
them back from anything that dereferences to a `&[u64]`; both use the
LSB-first convention of [`BitWrite`](crate::traits::BitWrite) and
[`BitRead`](crate::traits::BitRead), with bit `k` of the stream stored in
bit `k mod 64` of word `k / 64`.

## Examples

```rust
use intcodes::prelude::*;

let mut writer = MemBitWriter::new();
writer.write_gamma(42).unwrap();
writer.flush().unwrap();

let mut reader = MemBitReader::new(writer.into_words());
assert_eq!(reader.read_gamma().unwrap(), 42);
```

*/

mod mem_bit_reader;
pub use mem_bit_reader::MemBitReader;

mod mem_bit_writer;
pub use mem_bit_writer::MemBitWriter;
