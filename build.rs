//! Build script for letter-panel.
//!
//! Puts the selected board's memory map on the linker search path as
//! `memory.x` for thumb targets; host builds need nothing.

use std::{env, fs, path::PathBuf};

fn main() {
    let target = env::var("TARGET").unwrap();
    let source = if target.starts_with("thumbv8m") {
        // Pico 2: RP2350 image-definition boot blocks, no second-stage loader.
        "memory-pico2.x"
    } else if target.starts_with("thumbv6m") {
        // Pico 1: RP2040 with the BOOT2 second-stage loader.
        "memory-pico1.x"
    } else {
        return;
    };

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let memory_x = fs::read_to_string(source).unwrap_or_else(|_| panic!("Failed to read {source}"));
    fs::write(out_dir.join("memory.x"), memory_x).expect("Failed to write memory.x");
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed={source}");
}
