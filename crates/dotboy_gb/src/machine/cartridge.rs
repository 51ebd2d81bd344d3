use std::fs;
use std::path::Path;

use thiserror::Error;

/// Offset of the cartridge type byte in the ROM header.
pub const CARTRIDGE_TYPE_OFFSET: usize = 0x147;
/// Offset of the ROM size code in the ROM header.
pub const ROM_SIZE_OFFSET: usize = 0x148;
/// Offset of the external RAM size code in the ROM header.
pub const RAM_SIZE_OFFSET: usize = 0x149;
/// Offset of the header checksum byte.
pub const HEADER_CHECKSUM_OFFSET: usize = 0x14D;

const TITLE_START: usize = 0x134;
const TITLE_END: usize = 0x143;
/// Smallest image that still contains a complete header.
const HEADER_END: usize = 0x150;

/// Cartridge type 0x00: plain ROM, no mapper chip.
const ROM_ONLY: u8 = 0x00;

#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("cartridge type 0x{cartridge_type:02X} uses a mapper; only ROM-only (0x00) cartridges are supported")]
    UnsupportedMapper { cartridge_type: u8 },
    #[error("ROM image is {len} bytes, too small to hold a cartridge header")]
    TooSmall { len: usize },
    #[error("failed to read ROM image")]
    Io(#[from] std::io::Error),
}

/// Immutable ROM image of a mapper-less cartridge.
///
/// Header fields are decoded once when the image is loaded. The processor
/// only ever sees the image through [`Cartridge::read`]; there is no write
/// path because ROM-only cartridges ignore writes to 0x0000–0x7FFF.
#[derive(Debug, Clone)]
pub struct Cartridge {
    rom: Vec<u8>,
    cartridge_type: u8,
    rom_size_code: u8,
    ram_size_code: u8,
}

impl Cartridge {
    /// Build a cartridge from a raw ROM dump.
    pub fn load(rom: Vec<u8>) -> Result<Self, CartridgeError> {
        if rom.len() < HEADER_END {
            return Err(CartridgeError::TooSmall { len: rom.len() });
        }

        let cartridge_type = rom[CARTRIDGE_TYPE_OFFSET];
        if cartridge_type != ROM_ONLY {
            return Err(CartridgeError::UnsupportedMapper { cartridge_type });
        }

        let cart = Self {
            cartridge_type,
            rom_size_code: rom[ROM_SIZE_OFFSET],
            ram_size_code: rom[RAM_SIZE_OFFSET],
            rom,
        };

        log::info!(
            "GB cartridge loaded: title={:?} type=0x{:02X} rom_code=0x{:02X} ram_code=0x{:02X} ({} bytes)",
            cart.title(),
            cart.cartridge_type,
            cart.rom_size_code,
            cart.ram_size_code,
            cart.rom.len(),
        );
        if !cart.header_checksum_ok() {
            log::warn!(
                "GB cartridge header checksum mismatch: stored 0x{:02X}, computed 0x{:02X}",
                cart.rom[HEADER_CHECKSUM_OFFSET],
                cart.header_checksum(),
            );
        }
        if let Some(expected) = cart.rom_size_bytes() {
            if expected != cart.rom.len() {
                log::warn!(
                    "GB cartridge size mismatch: header says {} bytes, image has {}",
                    expected,
                    cart.rom.len()
                );
            }
        }

        Ok(cart)
    }

    /// Read a ROM image from disk and load it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CartridgeError> {
        let rom = fs::read(path)?;
        Self::load(rom)
    }

    /// Byte at `addr` within the ROM-mapped range (0x0000–0x7FFF).
    ///
    /// Addresses past the end of a short image read as open bus (0xFF).
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }

    pub fn cartridge_type(&self) -> u8 {
        self.cartridge_type
    }

    pub fn rom_size_code(&self) -> u8 {
        self.rom_size_code
    }

    pub fn ram_size_code(&self) -> u8 {
        self.ram_size_code
    }

    /// ROM size implied by the header code (32 KiB shifted left by the code).
    ///
    /// Returns `None` for codes outside the documented 0x00–0x08 range.
    pub fn rom_size_bytes(&self) -> Option<usize> {
        match self.rom_size_code {
            code @ 0x00..=0x08 => Some((32 * 1024) << code),
            _ => None,
        }
    }

    /// Game title from the header, with NUL padding stripped.
    pub fn title(&self) -> String {
        self.rom[TITLE_START..=TITLE_END]
            .iter()
            .take_while(|&&b| b != 0)
            .filter(|b| b.is_ascii_graphic() || **b == b' ')
            .map(|&b| b as char)
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    /// Header checksum over 0x134–0x14C as computed by the boot ROM.
    pub fn header_checksum(&self) -> u8 {
        self.rom[TITLE_START..HEADER_CHECKSUM_OFFSET]
            .iter()
            .fold(0u8, |acc, &b| acc.wrapping_sub(b).wrapping_sub(1))
    }

    pub fn header_checksum_ok(&self) -> bool {
        self.header_checksum() == self.rom[HEADER_CHECKSUM_OFFSET]
    }

    /// Image length in bytes. Never below the 0x150-byte header.
    pub fn size(&self) -> usize {
        self.rom.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rom_only_image() -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        rom[TITLE_START..TITLE_START + 6].copy_from_slice(b"TETRIS");
        rom
    }

    #[test]
    fn rejects_mapper_cartridges() {
        let mut rom = rom_only_image();
        rom[CARTRIDGE_TYPE_OFFSET] = 0x01; // MBC1

        match Cartridge::load(rom) {
            Err(CartridgeError::UnsupportedMapper { cartridge_type }) => {
                assert_eq!(cartridge_type, 0x01)
            }
            other => panic!("expected UnsupportedMapper, got {other:?}"),
        }
    }

    #[test]
    fn rejects_images_without_a_header() {
        let err = Cartridge::load(vec![0u8; 0x100]).unwrap_err();
        assert!(matches!(err, CartridgeError::TooSmall { len: 0x100 }));
    }

    #[test]
    fn header_fields_are_decoded() {
        let mut rom = rom_only_image();
        rom[ROM_SIZE_OFFSET] = 0x00;
        rom[RAM_SIZE_OFFSET] = 0x02;

        let cart = Cartridge::load(rom).unwrap();
        assert_eq!(cart.cartridge_type(), 0x00);
        assert_eq!(cart.rom_size_code(), 0x00);
        assert_eq!(cart.ram_size_code(), 0x02);
        assert_eq!(cart.rom_size_bytes(), Some(0x8000));
        assert_eq!(cart.title(), "TETRIS");
    }

    #[test]
    fn header_checksum_matches_boot_rom_algorithm() {
        let mut rom = rom_only_image();
        let mut sum = 0u8;
        for &b in &rom[0x134..=0x14C] {
            sum = sum.wrapping_sub(b).wrapping_sub(1);
        }
        rom[HEADER_CHECKSUM_OFFSET] = sum;

        let cart = Cartridge::load(rom).unwrap();
        assert!(cart.header_checksum_ok());
    }

    #[test]
    fn reads_index_raw_bytes_and_short_images_read_open_bus() {
        let mut rom = vec![0u8; 0x4000];
        rom[0x0100] = 0x00;
        rom[0x0101] = 0xC3;
        let cart = Cartridge::load(rom).unwrap();

        assert_eq!(cart.read(0x0101), 0xC3);
        assert_eq!(cart.read(0x4000), 0xFF);
        assert_eq!(cart.read(0x7FFF), 0xFF);
    }
}
