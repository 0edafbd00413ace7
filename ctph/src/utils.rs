// SPDX-License-Identifier: CC0-1.0
// SPDX-FileCopyrightText: Authored by Tsukasa OI <floss_ssdeep@irq.a4lg.com> in 2023
// SPDX-FileCopyrightText: Adapted by the ctph developers in 2026


/// Computes the base-2 logarithm (floored) of a non-zero [`u64`] value.
///
/// This is the wrapper with a fallback for stable [`u64::ilog2`].
///
/// # Development Notes
///
/// Consider removing it once MSRV of 1.67 is acceptable.
#[inline(always)]
pub(crate) fn u64_ilog2(value: u64) -> u32 {
    cfg_if::cfg_if! {
        if #[cfg(ctph_ilog2 = "fallback")] {
            {
                debug_assert!(value != 0u64);
                u64::BITS - 1 - value.leading_zeros()
            }
        }
        else {
            u64::ilog2(value)
        }
    }
}
