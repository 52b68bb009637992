/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Structured-fuzzing harnesses, used by the targets in the `fuzz`
//! directory and available to downstream fuzzers through the `fuzz`
//! feature.

pub mod codes;
pub mod huffman;
