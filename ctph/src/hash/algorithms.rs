// SPDX-License-Identifier: GPL-2.0-or-later
// SPDX-FileCopyrightText: Copyright Andrew Tridgell <tridge@samba.org> 2002
// SPDX-FileCopyrightText: Copyright (C) 2006 ManTech International Corporation
// SPDX-FileCopyrightText: Copyright (C) 2023, 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

//! Low-level routines to convert block hashes and block sizes
//! from / to their string representation.

use crate::base64::{base64_char, base64_index, BASE64_INVALID};
use crate::hash::block::{block_hash, block_size};
use crate::hash::parser_state::{
    BlockHashParseState, ParseError, ParseErrorKind, ParseErrorOrigin,
};
use crate::macros::{invariant, optionally_unsafe};




/// Push block hash contents at the start of a given [`u8`] slice.
///
/// It converts internal block hash contents (Base64 indices) into the
/// sequence of Base64 alphabets.  `buf` must be at least `hash.len()` bytes.
#[inline]
pub(crate) fn insert_block_hash_into_bytes(buf: &mut [u8], hash: &[u8]) {
    optionally_unsafe! {
        invariant!(hash.len() <= buf.len());
        for (dst, idx) in buf.iter_mut().zip(hash) {
            invariant!((*idx as usize) < block_hash::ALPHABET_SIZE);
            *dst = base64_char(*idx);
        }
    }
}

/// The number of decimal digits to represent a block size.
#[inline]
pub(crate) fn block_size_len_in_chars(block_size: u64) -> usize {
    let mut value = block_size;
    let mut len = 1;
    while value >= 10 {
        value /= 10;
        len += 1;
    }
    len
}

/// Push the decimal representation of a block size at the start of
/// a given [`u8`] slice and returns the number of bytes written.
///
/// `buf` must be at least [`block_size_len_in_chars()`] bytes.
#[inline]
pub(crate) fn insert_block_size_into_bytes(buf: &mut [u8], block_size: u64) -> usize {
    let len = block_size_len_in_chars(block_size);
    let mut value = block_size;
    optionally_unsafe! {
        invariant!(len <= buf.len());
        for dst in buf[..len].iter_mut().rev() {
            *dst = b'0' + (value % 10) as u8;
            value /= 10;
        }
    }
    len
}

/// Parse block size part of the fuzzy hash from given bytes.
///
/// If success, [`Ok`] containing a valid block size is returned.
///
/// `i` (output) is updated to the index right after the first `':'`
/// if succeeds.  If it fails, the value of `i` is preserved.
///
/// A sole `'0'` is rejected as [`ParseErrorKind::BlockSizeIsInvalid`]
/// while a `'0'` followed by another digit is rejected as
/// [`ParseErrorKind::BlockSizeStartsWithZero`].
#[inline]
pub(crate) fn parse_block_size_from_bytes(bytes: &[u8], i: &mut usize)
    -> Result<u64, ParseError>
{
    let mut block_size = 0u64;
    let mut is_block_size_in_range = true;
    let mut j = 0;
    for ch in bytes {
        match *ch {
            b'0'..=b'9' => {
                if j != 0 && block_size == 0 && is_block_size_in_range {
                    return Err(ParseError(
                        ParseErrorKind::BlockSizeStartsWithZero,
                        ParseErrorOrigin::BlockSize, 0
                    ));
                }
                // Update block size (but check arithmetic overflow)
                if is_block_size_in_range {
                    match block_size
                        .checked_mul(10)
                        .and_then(|x| x.checked_add(u64::from(*ch - b'0')))
                    {
                        Some(bs) => { block_size = bs; }
                        None => { is_block_size_in_range = false; }
                    }
                }
            }
            b':' => {
                // End of block size: ':' is expected and block size must not be empty.
                if j == 0 {
                    return Err(ParseError(
                        ParseErrorKind::BlockSizeIsEmpty,
                        ParseErrorOrigin::BlockSize, 0
                    ));
                }
                if !is_block_size_in_range {
                    return Err(ParseError(
                        ParseErrorKind::BlockSizeIsTooLarge,
                        ParseErrorOrigin::BlockSize, 0
                    ));
                }
                if !block_size::is_valid(block_size) {
                    return Err(ParseError(
                        ParseErrorKind::BlockSizeIsInvalid,
                        ParseErrorOrigin::BlockSize, 0
                    ));
                }
                *i = j + 1;
                return Ok(block_size);
            }
            _ => {
                return Err(ParseError(
                    ParseErrorKind::UnexpectedCharacter,
                    ParseErrorOrigin::BlockSize, j
                ));
            }
        }
        j += 1;
    }
    Err(ParseError(
        ParseErrorKind::UnexpectedEndOfString,
        ParseErrorOrigin::BlockSize, j
    ))
}

/// Parse block hash part (1/2) of the fuzzy hash from bytes.
///
/// Parsed Base64 indices are stored into `blockhash` and its length into
/// `blockhash_len`, even if the parser fails.
///
/// `i` (input/output) is the index to start parsing and is updated to
/// the index to continue parsing:
///
/// *   right after the `':'` on [`BlockHashParseState::MetColon`],
/// *   the end of `bytes` on [`BlockHashParseState::MetEndOfString`],
/// *   the offending character otherwise.
pub(crate) fn parse_block_hash_from_bytes<const N: usize>(
    blockhash: &mut [u8; N],
    blockhash_len: &mut u8,
    bytes: &[u8],
    i: &mut usize,
) -> BlockHashParseState {
    let mut j = *i;
    let mut len: usize = 0;
    macro_rules! ret {($expr: expr) => {{
        *blockhash_len = len as u8;
        *i = j;
        return $expr;
    }}}
    optionally_unsafe! {
        invariant!(j <= bytes.len());
        for ch in &bytes[j..] {
            let idx = base64_index(*ch);
            if idx != BASE64_INVALID {
                if len >= N {
                    ret!(BlockHashParseState::OverflowError);
                }
                blockhash[len] = idx;
                len += 1;
            } else if *ch == b':' {
                j += 1;
                ret!(BlockHashParseState::MetColon);
            } else {
                ret!(BlockHashParseState::Base64Error);
            }
            j += 1;
        }
    }
    ret!(BlockHashParseState::MetEndOfString);
}
