// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2023 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

#![cfg(feature = "easy-functions")]

use thiserror::Error;

use crate::compare::Similarity;
use crate::hash::parser_state::{ParseError, ParseErrorInfo, ParseErrorKind, ParseErrorOrigin};
use crate::hash::FuzzyHash;


/// The operand (side) which caused a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorSide {
    /// The left hand side.
    Left,
    /// The right hand side.
    Right,
}

impl ParseErrorSide {
    /// The 1-based position of the operand.
    fn operand_number(self) -> u32 {
        match self {
            ParseErrorSide::Left => 1,
            ParseErrorSide::Right => 2,
        }
    }
}

/// The error type representing a parse error for one of the operands
/// specified to the [`compare()`] function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "error occurred while parsing fuzzy hash {} ({}, at byte offset {}): {}",
    .0.operand_number(), .1.origin(), .1.offset(), .1.kind()
)]
pub struct ParseErrorEither(pub(crate) ParseErrorSide, #[source] pub(crate) ParseError);

impl ParseErrorEither {
    /// Returns which operand caused a parse error.
    pub fn side(&self) -> ParseErrorSide {
        self.0
    }
}

impl ParseErrorInfo for ParseErrorEither {
    fn kind(&self) -> ParseErrorKind {
        self.1.kind()
    }
    fn origin(&self) -> ParseErrorOrigin {
        self.1.origin()
    }
    fn offset(&self) -> usize {
        self.1.offset()
    }
}

/// Compare two fuzzy hashes.
///
/// If a parse error occurs, [`Err`] containing
/// [a parse error](ParseErrorEither) is returned.
/// Otherwise, [`Ok`] containing the [`Similarity`] is returned.
///
/// # Example
///
/// ```
/// assert_eq!(
///     ctph::compare(
///         "1:xNMWFMWFEFRAWRFIAWWECAn:4W2W+UW0AWWECAn",
///         "1:xNMWFMWFELKRNAXFRAWRFIAWWECAn:4W2W++UEW0AWWECAn"
///     ).unwrap(),
///     ctph::Similarity::Score(94)
/// );
/// ```
pub fn compare(lhs: &str, rhs: &str) -> Result<Similarity, ParseErrorEither> {
    let lhs: FuzzyHash = str::parse(lhs).map_err(|err| ParseErrorEither(ParseErrorSide::Left, err))?;
    let rhs: FuzzyHash = str::parse(rhs).map_err(|err| ParseErrorEither(ParseErrorSide::Right, err))?;
    Ok(lhs.compare(rhs))
}
