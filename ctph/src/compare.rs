// SPDX-License-Identifier: GPL-2.0-or-later
// SPDX-FileCopyrightText: Copyright Andrew Tridgell <tridge@samba.org> 2002
// SPDX-FileCopyrightText: Copyright (C) 2017, 2023 Tsukasa OI <floss_ssdeep@irq.a4lg.com>
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

//! Fuzzy hash comparison.

use crate::hash::block::BlockSizeRelation;
use crate::hash::FuzzyHash;

pub mod edit_distance;


/// The result of a fuzzy hash comparison.
///
/// Two fuzzy hashes whose block sizes are not [near](BlockSizeRelation::is_near)
/// cannot be compared at all.  This is distinct from a comparison which
/// resulted in the score zero, although both rank the same
/// (see [`score()`](Self::score())).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Similarity {
    /// The similarity score (`0..=100`, `100` is a perfect match).
    Score(u32),
    /// The block sizes are too far apart to compare.
    Incomparable,
}

impl Similarity {
    /// The maximum similarity score.
    pub const MAX_SCORE: u32 = 100;

    /// Returns the score, ranking [`Incomparable`](Self::Incomparable) as `0`.
    #[inline]
    pub fn score(&self) -> u32 {
        match *self {
            Similarity::Score(score) => score,
            Similarity::Incomparable => 0,
        }
    }

    /// Checks whether the fuzzy hashes were comparable.
    #[inline]
    pub fn is_comparable(&self) -> bool {
        matches!(self, Similarity::Score(_))
    }
}

impl core::fmt::Display for Similarity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Similarity::Score(score) => write!(f, "{}", score),
            Similarity::Incomparable => f.write_str("incomparable"),
        }
    }
}

/// Scores two block hashes by their edit distance.
///
/// The distance is normalized by the total length of both block hashes
/// and scaled to `0..=100`.  An empty block hash carries no information
/// and scores `0` against anything (including another empty one).
pub fn score_strings(lhs: &[u8], rhs: &[u8]) -> u32 {
    if lhs.is_empty() || rhs.is_empty() {
        return 0;
    }
    let total = (lhs.len() + rhs.len()) as u64;
    let distance = edit_distance::levenshtein(lhs, rhs) as u64;
    let scaled = (100 * ((distance * 64) / total)) / 64;
    Similarity::MAX_SCORE.saturating_sub(u32::try_from(scaled).unwrap_or(u32::MAX))
}

impl FuzzyHash {
    /// Compares two fuzzy hashes and returns their [`Similarity`].
    ///
    /// *   Equal block sizes: the better of the two block hash pairs.
    ///     Identical block hash pairs are a perfect match.
    /// *   Block sizes a factor of two apart: block hash 2 of the smaller
    ///     one against block hash 1 of the larger one.
    /// *   Otherwise: [`Similarity::Incomparable`].
    ///
    /// # Example
    ///
    /// ```
    /// use ctph::{hash_buf, Similarity};
    ///
    /// let lhs = hash_buf(b"This is a test message");
    /// let rhs = hash_buf(b"This is another test message");
    /// assert_eq!(lhs.compare(&rhs), Similarity::Score(94));
    /// ```
    pub fn compare(&self, other: impl AsRef<Self>) -> Similarity {
        let other = other.as_ref();
        let relation = FuzzyHash::compare_block_sizes(self, other);
        let similarity = match relation {
            BlockSizeRelation::Far => Similarity::Incomparable,
            BlockSizeRelation::NearEq => {
                if self.block_hash_1() == other.block_hash_1()
                    && self.block_hash_2() == other.block_hash_2()
                {
                    Similarity::Score(Similarity::MAX_SCORE)
                } else {
                    Similarity::Score(u32::max(
                        score_strings(self.block_hash_1(), other.block_hash_1()),
                        score_strings(self.block_hash_2(), other.block_hash_2()),
                    ))
                }
            }
            BlockSizeRelation::NearLt => {
                Similarity::Score(score_strings(self.block_hash_2(), other.block_hash_1()))
            }
            BlockSizeRelation::NearGt => {
                Similarity::Score(score_strings(self.block_hash_1(), other.block_hash_2()))
            }
        };
        tracing::trace!(
            lhs = %self,
            rhs = %other,
            ?relation,
            %similarity,
            "compared fuzzy hashes"
        );
        similarity
    }
}
