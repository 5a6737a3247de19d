#![allow(missing_docs)]
//! Sanity checks on the per-board linker memory maps.
//!
//! The boards boot differently: the RP2040 needs a BOOT2 second-stage loader
//! at the start of flash, while the RP2350 boots from image-definition
//! blocks and must not reserve a BOOT2 region.

use std::fs;
use std::path::Path;

fn read_map(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(name);
    fs::read_to_string(&path).unwrap_or_else(|error| panic!("read {name}: {error}"))
}

#[test]
fn pico1_map_reserves_boot2_at_the_start_of_flash() {
    let map = read_map("memory-pico1.x");
    assert!(map.contains("BOOT2 : ORIGIN = 0x10000000, LENGTH = 0x100"));
    assert!(map.contains("FLASH : ORIGIN = 0x10000100"));
    assert!(map.contains("264K"), "RP2040 has 264K of SRAM");
}

#[test]
fn pico2_map_uses_boot_blocks_not_boot2() {
    let map = read_map("memory-pico2.x");
    assert!(!map.contains("BOOT2"), "RP2350 has no second-stage loader");
    assert!(map.contains(".start_block"), "boot ROM IMAGE_DEF section");
    assert!(map.contains(".end_block"));
    assert!(map.contains("FLASH : ORIGIN = 0x10000000"));
    assert!(map.contains("512K"), "RP2350 main SRAM");
}

#[test]
fn build_script_selects_a_map_per_board() {
    let script = read_map("build.rs");
    assert!(script.contains(r#"starts_with("thumbv8m")"#));
    assert!(script.contains("memory-pico2.x"));
    assert!(script.contains(r#"starts_with("thumbv6m")"#));
    assert!(script.contains("memory-pico1.x"));
}
