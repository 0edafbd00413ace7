// SPDX-License-Identifier: CC0-1.0
// SPDX-FileCopyrightText: Authored by Tsukasa OI <floss_ssdeep@irq.a4lg.com> in 2023 and 2024
// SPDX-FileCopyrightText: Adapted by the ctph developers in 2026

//! Utilities shared by unit tests.

#![cfg(test)]



/// Testing function for [`Eq`] + [`Clone`].
///
/// It also requires [`core::fmt::Debug`] for assertion.
pub(crate) fn test_auto_clone<T: Clone + Eq + core::fmt::Debug>(orig_value: &T) {
    let mut cloned: T = orig_value.clone();
    assert_eq!(*orig_value, cloned);
    cloned.clone_from(orig_value);
    assert_eq!(*orig_value, cloned);
}


/// Testing function for [`Debug`](core::fmt::Debug) (for coverage).
pub(crate) fn cover_auto_debug<T: core::fmt::Debug>(value: &T) {
    let _ = format!("{:?}", value);
}


/// Installs a `tracing` subscriber writing to the test output.
///
/// The filter is taken from `RUST_LOG` (`trace` if unset).
/// Calling this more than once (even from other threads) is harmless.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}


/// Pseudo-random bytes from a 31-bit linear congruential generator.
///
/// Each byte is bits 16..24 of the state after an update.
pub(crate) fn lcg_bytes(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12345) & 0x7fff_ffff;
            (state >> 16) as u8
        })
        .collect()
}


/// `"This is a test message"` repeated `count` times, joined by `", "`.
pub(crate) fn repeated_message(count: usize) -> Vec<u8> {
    vec!["This is a test message"; count].join(", ").into_bytes()
}


/// Test recommended [`Default`] implementation.
#[doc(alias = "test_recommended_default")]
macro_rules! test_recommended_default_impl {
    ($ty: ty) => {{
        let value1 = <$ty>::new();
        let value2 = <$ty>::default();
        assert_eq!(value1, value2);
    }};
}

/// Test whether the expression fits in the specified type.
#[doc(alias = "assert_fits_in")]
macro_rules! assert_fits_in_impl {
    ($expr: expr, $ty: ty) => {
        assert!(<$ty>::try_from($expr).is_ok(), "{} does not fit into {}", stringify!($expr), stringify!($ty))
    };
    ($expr: expr, $ty: ty, $($arg:tt)+) => {
        assert!(<$ty>::try_from($expr).is_ok(), $($arg)+)
    };
}

pub(crate) use test_recommended_default_impl as test_recommended_default;
pub(crate) use assert_fits_in_impl as assert_fits_in;
