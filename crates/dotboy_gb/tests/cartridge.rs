use std::fs;

use dotboy_gb::machine::{Cartridge, CartridgeError};
use tempfile::tempdir;

/// Checksum of a header whose bytes 0x134..=0x14C are all zero.
const ZERO_HEADER_CHECKSUM: u8 = 0xE7;

#[test]
fn loads_rom_from_disk() {
    let dir = tempdir().unwrap();
    let rom_path = dir.path().join("demo.gb");

    let mut rom = vec![0u8; 0x8000];
    rom[0x0100] = 0x00;
    rom[0x0101] = 0xC3;
    rom[0x014D] = ZERO_HEADER_CHECKSUM;
    fs::write(&rom_path, &rom).unwrap();

    let cart = Cartridge::from_file(&rom_path).unwrap();
    assert_eq!(cart.size(), 0x8000);
    assert_eq!(cart.read(0x0101), 0xC3);
    assert_eq!(cart.title(), "");
    assert!(cart.header_checksum_ok());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();

    let err = Cartridge::from_file(dir.path().join("nope.gb")).unwrap_err();
    assert!(matches!(err, CartridgeError::Io(_)));
}

#[test]
fn title_stops_at_padding() {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0134..0x013A].copy_from_slice(b"DOTBOY");

    let cart = Cartridge::load(rom).unwrap();
    assert_eq!(cart.title(), "DOTBOY");
    assert!(!cart.header_checksum_ok());
}

#[test]
fn rom_size_code_scales_from_32k() {
    let mut rom = vec![0u8; 0x10000];
    rom[0x0148] = 0x01;

    let cart = Cartridge::load(rom).unwrap();
    assert_eq!(cart.rom_size_code(), 0x01);
    assert_eq!(cart.rom_size_bytes(), Some(0x10000));

    let mut rom = vec![0u8; 0x8000];
    rom[0x0148] = 0x52;
    assert_eq!(Cartridge::load(rom).unwrap().rom_size_bytes(), None);
}
