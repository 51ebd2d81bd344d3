use std::fmt;
use std::ops::RangeInclusive;

/// Fixed partition of the 16-bit address space.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Region {
    /// 0x0000–0x3FFF, cartridge bank 0.
    RomFixed,
    /// 0x4000–0x7FFF, cartridge bank 1 (no switching without a mapper).
    RomSwitchable,
    /// 0x8000–0x9FFF.
    VideoRam,
    /// 0xA000–0xBFFF, cartridge RAM.
    ExternalRam,
    /// 0xC000–0xCFFF.
    WorkRamFixed,
    /// 0xD000–0xDFFF.
    WorkRamSwitchable,
    /// 0xE000–0xFDFF, mirror of 0xC000–0xDDFF.
    EchoRam,
    /// 0xFE00–0xFE9F, object attribute memory.
    Oam,
    /// 0xFEA0–0xFEFF.
    Unusable,
    /// 0xFF00–0xFF7F.
    Io,
    /// 0xFF80–0xFFFE.
    HighRam,
    /// 0xFFFF.
    InterruptEnable,
}

impl Region {
    pub const ALL: [Region; 12] = [
        Region::RomFixed,
        Region::RomSwitchable,
        Region::VideoRam,
        Region::ExternalRam,
        Region::WorkRamFixed,
        Region::WorkRamSwitchable,
        Region::EchoRam,
        Region::Oam,
        Region::Unusable,
        Region::Io,
        Region::HighRam,
        Region::InterruptEnable,
    ];

    /// Classify an address. Total over `u16`.
    pub const fn of(addr: u16) -> Region {
        match addr {
            0x0000..=0x3FFF => Region::RomFixed,
            0x4000..=0x7FFF => Region::RomSwitchable,
            0x8000..=0x9FFF => Region::VideoRam,
            0xA000..=0xBFFF => Region::ExternalRam,
            0xC000..=0xCFFF => Region::WorkRamFixed,
            0xD000..=0xDFFF => Region::WorkRamSwitchable,
            0xE000..=0xFDFF => Region::EchoRam,
            0xFE00..=0xFE9F => Region::Oam,
            0xFEA0..=0xFEFF => Region::Unusable,
            0xFF00..=0xFF7F => Region::Io,
            0xFF80..=0xFFFE => Region::HighRam,
            0xFFFF => Region::InterruptEnable,
        }
    }

    pub const fn range(self) -> RangeInclusive<u16> {
        match self {
            Region::RomFixed => 0x0000..=0x3FFF,
            Region::RomSwitchable => 0x4000..=0x7FFF,
            Region::VideoRam => 0x8000..=0x9FFF,
            Region::ExternalRam => 0xA000..=0xBFFF,
            Region::WorkRamFixed => 0xC000..=0xCFFF,
            Region::WorkRamSwitchable => 0xD000..=0xDFFF,
            Region::EchoRam => 0xE000..=0xFDFF,
            Region::Oam => 0xFE00..=0xFE9F,
            Region::Unusable => 0xFEA0..=0xFEFF,
            Region::Io => 0xFF00..=0xFF7F,
            Region::HighRam => 0xFF80..=0xFFFE,
            Region::InterruptEnable => 0xFFFF..=0xFFFF,
        }
    }

    pub const fn start(self) -> u16 {
        *self.range().start()
    }

    /// Slot in the device table for regions served by external hardware.
    ///
    /// `None` for regions the core backs itself (cartridge ROM, work RAM,
    /// echo RAM, high RAM) and for the unusable gap.
    pub(crate) const fn device_slot(self) -> Option<usize> {
        match self {
            Region::VideoRam => Some(0),
            Region::ExternalRam => Some(1),
            Region::Oam => Some(2),
            Region::Io => Some(3),
            Region::InterruptEnable => Some(4),
            _ => None,
        }
    }
}

pub(crate) const DEVICE_SLOTS: usize = 5;

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.range();
        write!(f, "{:?} (0x{:04X}-0x{:04X})", self, range.start(), range.end())
    }
}
