// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2023, 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

//! Tests: [`crate::generate_easy`].

#![cfg(test)]

use super::hash_buf;

use crate::generate::Generator;
use crate::test_utils::{lcg_bytes, repeated_message};

#[test]
fn hash_buf_usage() {
    assert_eq!(hash_buf(b"Hello, World!\n").to_string(), "1:tAJJKJFyKXJBEvn:yqGKMv");
    assert_eq!(hash_buf(b"").to_string(), "1:n:n");
    assert_eq!(
        hash_buf(&repeated_message(9)).to_string(),
        "6:hGcpLGcpLGcpLGcpLGcpLGcpLGcpLGcpLGcD:h55555555D"
    );
}

#[test]
fn hash_buf_matches_generator() {
    for size in [0usize, 1, 7, 192, 1000, 6000, 12288] {
        let data = lcg_bytes(size, 3);
        let mut generator = Generator::new(data.len() as u64);
        generator.update(&data);
        assert_eq!(hash_buf(&data), generator.finalize().unwrap(), "failed on size={}", size);
    }
}
