// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2023–2025 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers
// SPDX-FileCopyrightText: FNV-1 test vectors are based on a PD work by Landon Curt Noll, authored in 2013.

//! Tests: [`crate::generate::hashes::block_fnv`].

#![cfg(test)]

use crate::params::Params;
use crate::test_utils::test_recommended_default;

use super::BlockHashFnv;

#[test]
fn basic_impls() {
    test_recommended_default!(BlockHashFnv);
}

#[test]
fn initial_state() {
    let hash = BlockHashFnv::new();
    assert_eq!(hash.value(), 0x2802_1967);
    assert_eq!(hash.base64_index(), (0x2802_1967u32 % 64) as u8);
}

#[test]
fn usage() {
    const STR: &[u8] = b"Hello, World!\n";
    const EXPECTED_HASH: u32 = 0x57d5_be9e;

    let mut hash = BlockHashFnv::new();
    for &ch in STR.iter() {
        hash.update_by_byte(ch);
    }
    assert_eq!(hash.value(), EXPECTED_HASH);
    assert_eq!(hash.base64_index(), 0x1e);

    let mut hash = BlockHashFnv::new();
    hash.update_by_iter(STR.iter().cloned());
    assert_eq!(hash.value(), EXPECTED_HASH);

    let mut hash = BlockHashFnv::new();
    hash.update(b"Hello, ").update(b"World!").update_by_byte(b'\n');
    assert_eq!(hash.value(), EXPECTED_HASH);

    let mut hash = BlockHashFnv::new();
    hash += &STR[..7];
    hash += &STR[7..13];
    hash += b'\n';
    assert_eq!(hash.value(), EXPECTED_HASH);
}

#[test]
fn reset_reseeds() {
    let mut hash = BlockHashFnv::new();
    hash.update(b"Hello, World!\n");
    hash.reset();
    assert_eq!(hash, BlockHashFnv::new());
    hash.update_by_byte(b'A');
    assert_eq!(hash.value(), 0x624d_fd64);
}

#[test]
fn fnv1_test_vectors() {
    // With the standard FNV-1 offset basis, this is the plain FNV-1 hash.
    let params = Params { hash_init: 0x811c_9dc5, ..Params::SPAMSUM };
    const VECTORS: &[(&[u8], u32)] = &[
        (b"",                     0x811c_9dc5),
        (b"a",                    0x050c_5d7e),
        (b"foobar",               0x31f0_b262),
        (b"chongo was here!\n",   0xdd00_2f35),
    ];
    for &(input, expected) in VECTORS {
        let mut hash = BlockHashFnv::with_params(&params);
        hash.update(input);
        assert_eq!(hash.value(), expected, "failed on input={:?}", input);
        assert_eq!(hash.base64_index(), (expected % 64) as u8, "failed on input={:?}", input);
    }
}
