// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2023, 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

//! Edit distance between block hashes.

/// Computes the Levenshtein distance between two sequences.
///
/// Insertion, deletion and substitution all cost one.
/// It takes `O(len(a) * len(b))` time and keeps a single row of
/// `min(len(a), len(b)) + 1` entries.
///
/// # Example
///
/// ```
/// use ctph::edit_distance::levenshtein;
/// assert_eq!(levenshtein(b"kitten", b"sitting"), 3);
/// assert_eq!(levenshtein(b"same", b"same"), 0);
/// ```
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Make the row span the shorter sequence.
    let (long, short) = if a.len() < b.len() { (b, a) } else { (a, b) };
    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, x) in long.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, y) in short.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diag + usize::from(x != y);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diag = above;
        }
    }
    row[short.len()]
}

#[cfg(test)]
mod tests;
