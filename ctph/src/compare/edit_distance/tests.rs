// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2023, 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

//! Tests: [`crate::compare::edit_distance`].

#![cfg(test)]

use itertools::Itertools;

use super::levenshtein;

use crate::test_utils::lcg_bytes;

/// Naïve Levenshtein distance using the full matrix.
fn naive_levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
        }
    }
    table[a.len()][b.len()]
}

#[test]
fn known_distances() {
    assert_eq!(levenshtein(b"kitten", b"sitting"), 3);
    assert_eq!(levenshtein(b"sitting", b"kitten"), 3);
    assert_eq!(levenshtein(b"flaw", b"lawn"), 2);
    assert_eq!(levenshtein(b"", b""), 0);
    assert_eq!(levenshtein(b"", b"abc"), 3);
    assert_eq!(levenshtein(b"abc", b""), 3);
    assert_eq!(levenshtein(b"abc", b"abc"), 0);
    assert_eq!(levenshtein(b"abc", b"xyz"), 3);
    // Works on any element type.
    assert_eq!(levenshtein(&[1u32, 2, 3], &[1u32, 3]), 1);
    assert_eq!(levenshtein(&['a', 'b'], &['b', 'a']), 2);
}

#[test]
fn zero_iff_equal() {
    let strings: [&[u8]; 6] = [b"", b"a", b"ab", b"ba", b"abc", b"abcabc"];
    for (a, b) in strings.iter().cartesian_product(strings.iter()) {
        assert_eq!(levenshtein(a, b) == 0, a == b, "failed on a={:?}, b={:?}", a, b);
    }
}

#[test]
fn matches_naive_implementation() {
    // Small alphabets make the sequences share many elements.
    let sequences: Vec<Vec<u8>> = (1..=6u32)
        .flat_map(|seed| [0usize, 1, 5, 17, 32, 64].map(|len| lcg_bytes(len, seed)))
        .map(|v| v.into_iter().map(|x| x % 4).collect())
        .collect();
    for (a, b) in sequences.iter().tuple_combinations() {
        let expected = naive_levenshtein(a, b);
        assert_eq!(levenshtein(a, b), expected, "failed on a={:?}, b={:?}", a, b);
        assert_eq!(levenshtein(b, a), expected, "failed on a={:?}, b={:?}", a, b);
        assert!(expected <= a.len().max(b.len()));
        assert!(expected >= a.len().abs_diff(b.len()));
    }
}
