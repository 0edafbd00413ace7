// SPDX-License-Identifier: CC0-1.0
// SPDX-FileCopyrightText: Authored by Tsukasa OI <floss_ssdeep@irq.a4lg.com> in 2023–2025
// SPDX-FileCopyrightText: Adapted by the ctph developers in 2026

//! Internal macros (mainly to share safe/unsafe code).

/// "Optionally" unsafe block.
///
/// When this crate is built with the `unsafe` feature, this macro is
/// expanded to an `unsafe` block.
///
/// Inside this block, you may place statements that may change the behavior
/// depending on the feature `unsafe`.  For instance, you may place
/// [`invariant!()`] inside this block.
///
/// ```ignore
/// # // Internal macro: doctests run outside of this crate.
/// # let index = 3usize;
/// let array = [0, 1, 2, 3];
/// optionally_unsafe! {
///     invariant!(index < array.len());
/// }
/// // Bound checking may be optimized out.
/// let result = array[index];
/// ```
#[doc(alias = "optionally_unsafe")]
macro_rules! optionally_unsafe_impl {
    {$($tokens: tt)*} => {
        cfg_if::cfg_if! {
            if #[cfg(all(feature = "unsafe", not(test)))] {
                #[allow(unused_unsafe)]
                unsafe { $($tokens)* }
            }
            else {
                { $($tokens)* }
            }
        }
    };
}
pub(crate) use optionally_unsafe_impl as optionally_unsafe;

/// Declare an invariant for optimization.
///
/// When the feature `unsafe` is disabled, it only places [`debug_assert!()`].
/// If `unsafe` is enabled, a violated invariant is declared unreachable
/// with [`core::hint::unreachable_unchecked()`].
///
/// Optimization behaviors are disabled on tests.
///
/// Use this macro along with [`optionally_unsafe!{}`].
#[doc(alias = "invariant")]
macro_rules! invariant_impl {
    ($expr: expr) => {
        cfg_if::cfg_if! {
            if #[cfg(all(feature = "unsafe", not(test)))] {
                if !($expr) {
                    core::hint::unreachable_unchecked();
                }
            }
            else {
                debug_assert!($expr);
            }
        }
    };
}
pub(crate) use invariant_impl as invariant;
