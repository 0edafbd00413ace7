// SPDX-License-Identifier: CC0-1.0
// SPDX-FileCopyrightText: Authored by Tsukasa OI <floss_ssdeep@irq.a4lg.com> in 2023 and 2024
// SPDX-FileCopyrightText: Adapted by the ctph developers in 2026

//! The 64-symbol alphabet used in block hashes.


/// Base64 alphabet table in [`u8`].
///
/// This is the same alphabet set defined in the Table 1 of
/// [RFC 4648](https://datatracker.ietf.org/doc/rfc4648/) and the only
/// alphabet a block hash may contain.
pub(crate) const BASE64_TABLE_U8: [u8; 64] =
    *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// The constant representing an "invalid" Base64 character index.
pub(crate) const BASE64_INVALID: u8 = 0x40;

/// Reverse byte to Base64 character index table.
///
/// This table has all 256 entries for branchless lookup.
/// Bytes outside the alphabet map to [`BASE64_INVALID`].
const BASE64_REV_TABLE_U8: [u8; 256] = {
    let mut table = [BASE64_INVALID; 256];
    let mut index = 0;
    while index < BASE64_TABLE_U8.len() {
        table[BASE64_TABLE_U8[index] as usize] = index as u8;
        index += 1;
    }
    table
};

/// Tries to convert a Base64 alphabet into a corresponding index value.
///
/// If `ch` is not a valid Base64 alphabet, [`BASE64_INVALID`] is returned.
#[inline]
pub(crate) fn base64_index(ch: u8) -> u8 {
    BASE64_REV_TABLE_U8[ch as usize]
}

/// Converts a 6-bit index into the corresponding Base64 alphabet.
#[inline]
pub(crate) fn base64_char(index: u8) -> u8 {
    debug_assert!(index < BASE64_INVALID);
    BASE64_TABLE_U8[(index & 0x3f) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tries to convert a Base64 alphabet into a corresponding index value.
    ///
    /// If `ch` is not a valid Base64 alphabet, [`None`] is returned.
    fn base64_index_simple(ch: u8) -> Option<u8> {
        match ch {
            b'A'..=b'Z' => Some(ch - b'A'),
            b'a'..=b'z' => Some(ch - (b'a' - 26u8)),
            b'0'..=b'9' => Some(ch + (52u8 - b'0')),
            b'+' => Some(62u8),
            b'/' => Some(63u8),
            _ => None
        }
    }

    #[test]
    fn values_and_indices() {
        let mut covered_idxes = 0u64;
        for (idx, &ch) in BASE64_TABLE_U8.iter().enumerate() {
            assert_eq!(base64_index_simple(ch), Some(idx as u8), "failed on idx={}", idx);
            assert_eq!(base64_char(idx as u8), ch, "failed on idx={}", idx);
            covered_idxes |= 1 << idx;
        }
        // Make sure that all 64 alphabets are covered.
        assert_eq!(covered_idxes, u64::MAX);
        // Spot checks on the borders of each class.
        assert_eq!(base64_char( 0), b'A');
        assert_eq!(base64_char(25), b'Z');
        assert_eq!(base64_char(26), b'a');
        assert_eq!(base64_char(51), b'z');
        assert_eq!(base64_char(52), b'0');
        assert_eq!(base64_char(61), b'9');
        assert_eq!(base64_char(62), b'+');
        assert_eq!(base64_char(63), b'/');
    }

    #[test]
    fn alphabets() {
        // Each alphabet must be unique (no duplicates in BASE64_TABLE_U8)
        let mut alphabets = std::collections::HashSet::new();
        for ch in BASE64_TABLE_U8 {
            assert!(alphabets.insert(ch));
        }
    }

    #[test]
    fn compare_impls() {
        // The simple implementation and the table-based one are equivalent.
        for ch in u8::MIN..=u8::MAX {
            assert_eq!(
                base64_index(ch),
                base64_index_simple(ch).unwrap_or(BASE64_INVALID),
                "failed on ch={}", ch
            );
        }
        // Invalid character has invalid index.
        assert!(BASE64_TABLE_U8.len() <= BASE64_INVALID as usize);
    }
}
