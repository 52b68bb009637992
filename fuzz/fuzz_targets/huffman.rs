/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: intcodes::fuzz::huffman::FuzzCase| {
    intcodes::fuzz::huffman::harness(data)
});
