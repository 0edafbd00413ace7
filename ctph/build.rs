// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2023, 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

extern crate version_check as rustc;

fn main() {
    // Avoid unnecessary rebuilding.
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(ctph_ilog2, values(\"stable\", \"unstable\", \"fallback\"))");
    println!("cargo:rustc-check-cfg=cfg(ctph_tests_without_debug_assertions)");

    // Method: {Integer}::ilog2
    // ilog2: 1.65-1.66 ("int_log" unstable feature)
    // ilog2: 1.67-     (stable)
    if rustc::is_min_version("1.67.0").unwrap_or(false) {
        println!("cargo:rustc-cfg=ctph_ilog2=\"stable\"");
    } else if rustc::is_feature_flaggable().unwrap_or(false) {
        println!("cargo:rustc-cfg=ctph_ilog2=\"unstable\"");
    } else {
        println!("cargo:rustc-cfg=ctph_ilog2=\"fallback\"");
    }
}
