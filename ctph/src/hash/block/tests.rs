// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2023, 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

#![cfg(test)]

use core::cmp::Ordering;

use crate::hash::block::{block_hash, block_size, BlockSizeRelation};
use crate::params::Params;
use crate::test_utils::assert_fits_in;


#[test]
fn prerequisites() {
    assert_fits_in!(block_hash::ALPHABET_SIZE, u8);
    assert_fits_in!(block_hash::FULL_SIZE, u8);
    assert_eq!(block_hash::HALF_SIZE * 2, block_hash::FULL_SIZE);
    assert_eq!(block_size::MIN, 3);
    assert_eq!(u64::MAX.to_string().len(), block_size::MAX_BLOCK_SIZE_LEN_IN_CHARS);
}

#[test]
fn select_examples() {
    const PARAMS: Params = Params::SPAMSUM;
    // The quotient is zero: floored to 1 and doubled if needed.
    assert_eq!(block_size::select(0, &PARAMS), 1);
    assert_eq!(block_size::select(1, &PARAMS), 1);
    assert_eq!(block_size::select(23, &PARAMS), 1);
    assert_eq!(block_size::select(64, &PARAMS), 1);
    assert_eq!(block_size::select(65, &PARAMS), 2);
    assert_eq!(block_size::select(128, &PARAMS), 2);
    assert_eq!(block_size::select(129, &PARAMS), 4);
    assert_eq!(block_size::select(166, &PARAMS), 4);
    assert_eq!(block_size::select(191, &PARAMS), 4);
    // The logarithm is defined from here.
    assert_eq!(block_size::select(192, &PARAMS), 3);
    assert_eq!(block_size::select(193, &PARAMS), 6);
    assert_eq!(block_size::select(214, &PARAMS), 6);
    assert_eq!(block_size::select(12288, &PARAMS), 192);
    assert_eq!(block_size::select(12289, &PARAMS), 384);
    assert_eq!(block_size::select(20288, &PARAMS), 384);
}

#[test]
fn select_is_total_on_huge_sizes() {
    const PARAMS: Params = Params::SPAMSUM;
    assert_eq!(block_size::select(u64::MAX, &PARAMS), 3u64 << 57);
    assert_eq!(block_size::select(u64::MAX / 2, &PARAMS), 3u64 << 56);
}

#[test]
fn select_with_zero_params() {
    let params = Params { block_min: 0, spamsum_length: 0, ..Params::SPAMSUM };
    assert_eq!(block_size::select(0, &params), 1);
    assert_eq!(block_size::select(1, &params), 1);
    assert_eq!(block_size::select(1000, &params), 1024);
}

#[test]
fn select_properties() {
    let params_list = [
        Params::SPAMSUM,
        Params { block_min: 1, ..Params::SPAMSUM },
        Params { block_min: 7, spamsum_length: 16, ..Params::SPAMSUM },
    ];
    for params in params_list {
        let spamsum_length = u64::from(params.spamsum_length);
        let block_min = u64::from(params.block_min);
        let sizes = (0u64..4096)
            .chain((12..40).map(|n| 1u64 << n))
            .chain((12..40).map(|n| (1u64 << n) - 1))
            .chain((12..40).map(|n| (1u64 << n) + 1));
        for n in sizes {
            let bs = block_size::select(n, &params);
            assert!(block_size::is_valid(bs), "failed on params={:?}, n={}", params, n);
            // The selected block size covers the whole input.
            assert!(bs * spamsum_length >= n, "failed on params={:?}, n={}", params, n);
            // It has either the form block_min * 2^k or 2^k.
            let base = if bs % block_min == 0 && (bs / block_min).is_power_of_two() {
                block_min
            } else {
                1
            };
            assert!((bs / base).is_power_of_two(), "failed on params={:?}, n={}", params, n);
            // Halving it would not cover the input unless it is the candidate itself.
            let quotient = n / (spamsum_length * block_min);
            let candidate = if quotient == 0 { 1 } else { block_min << crate::utils::u64_ilog2(quotient) };
            if bs != candidate {
                assert!((bs / 2) * spamsum_length < n, "failed on params={:?}, n={}", params, n);
            }
        }
    }
}

#[test]
fn block_size_validness() {
    assert!(!block_size::is_valid(0));
    for bs in 1..=1000 {
        assert!(block_size::is_valid(bs), "failed on bs={}", bs);
    }
    assert!(block_size::is_valid(u64::MAX));
}

#[test]
fn block_size_relation_impls() {
    assert!(!BlockSizeRelation::Far.is_near());
    assert!(BlockSizeRelation::NearLt.is_near());
    assert!(BlockSizeRelation::NearEq.is_near());
    assert!(BlockSizeRelation::NearGt.is_near());
    crate::test_utils::test_auto_clone(&BlockSizeRelation::NearEq);
}

#[test]
fn block_size_relation_consistency() {
    let sizes = (1u64..=48).chain([3u64 << 40, 3u64 << 41, u64::MAX / 2, u64::MAX - 1, u64::MAX]);
    for bs1 in sizes.clone() {
        for bs2 in sizes.clone() {
            let rel = block_size::compare_sizes(bs1, bs2);
            let ord = block_size::cmp(bs1, bs2);
            // Test consistency between logical expressions and the BlockSizeRelation value.
            assert_eq!(bs1 == bs2, rel == BlockSizeRelation::NearEq, "failed on bs1={}, bs2={}", bs1, bs2);
            assert_eq!(bs1 as u128 == bs2 as u128 * 2, rel == BlockSizeRelation::NearGt, "failed on bs1={}, bs2={}", bs1, bs2);
            assert_eq!(bs1 as u128 * 2 == bs2 as u128, rel == BlockSizeRelation::NearLt, "failed on bs1={}, bs2={}", bs1, bs2);
            // The relation is mirrored when operands are swapped.
            let mirrored = match rel {
                BlockSizeRelation::Far => BlockSizeRelation::Far,
                BlockSizeRelation::NearLt => BlockSizeRelation::NearGt,
                BlockSizeRelation::NearEq => BlockSizeRelation::NearEq,
                BlockSizeRelation::NearGt => BlockSizeRelation::NearLt,
            };
            assert_eq!(block_size::compare_sizes(bs2, bs1), mirrored, "failed on bs1={}, bs2={}", bs1, bs2);
            // Test consistency between the result of other functions and the BlockSizeRelation value.
            assert_eq!(block_size::is_near(bs1, bs2), rel.is_near(), "failed on bs1={}, bs2={}", bs1, bs2);
            assert_eq!(block_size::is_near_lt(bs1, bs2), rel == BlockSizeRelation::NearLt, "failed on bs1={}, bs2={}", bs1, bs2);
            assert_eq!(block_size::is_near_eq(bs1, bs2), rel == BlockSizeRelation::NearEq, "failed on bs1={}, bs2={}", bs1, bs2);
            assert_eq!(block_size::is_near_gt(bs1, bs2), rel == BlockSizeRelation::NearGt, "failed on bs1={}, bs2={}", bs1, bs2);
            match rel {
                BlockSizeRelation::NearLt => assert_eq!(ord, Ordering::Less,    "failed on bs1={}, bs2={}", bs1, bs2),
                BlockSizeRelation::NearEq => assert_eq!(ord, Ordering::Equal,   "failed on bs1={}, bs2={}", bs1, bs2),
                BlockSizeRelation::NearGt => assert_eq!(ord, Ordering::Greater, "failed on bs1={}, bs2={}", bs1, bs2),
                BlockSizeRelation::Far => {}
            }
        }
    }
}
