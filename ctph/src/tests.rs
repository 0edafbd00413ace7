// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024, 2025 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

//! Tests: [`crate`].

#![cfg(test)]

#[cfg(not(ctph_tests_without_debug_assertions))]
#[test]
fn test_prerequisites() {
    assert!(cfg!(debug_assertions), "\
        The tests in this crate require debug assertions to be enabled (by default).  \
        To test this crate without debug assertions, add rustc flags \"--cfg ctph_tests_without_debug_assertions\".\
    ");
}

#[test]
fn max_len_in_str() {
    use crate::{FuzzyHash, MAX_LEN_IN_STR};
    let full = [0u8; crate::block_hash::FULL_SIZE];
    let hash = FuzzyHash::new_from_internals(u64::MAX, &full, &full).unwrap();
    assert_eq!(hash.len_in_str(), MAX_LEN_IN_STR);
    assert_eq!(hash.to_string().len(), MAX_LEN_IN_STR);
}
