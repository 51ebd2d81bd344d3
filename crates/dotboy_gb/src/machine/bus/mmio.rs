use super::{MemoryBus, Region, OPEN_BUS};

/// Distance between echo RAM and the work RAM it mirrors.
const ECHO_OFFSET: u16 = 0x2000;
const WRAM_START: u16 = 0xC000;
const HRAM_START: u16 = 0xFF80;

impl MemoryBus {
    pub(super) fn read8_mmio(&mut self, addr: u16) -> u8 {
        match Region::of(addr) {
            Region::RomFixed | Region::RomSwitchable => self.cartridge.read(addr),
            Region::WorkRamFixed | Region::WorkRamSwitchable => {
                self.wram[(addr - WRAM_START) as usize]
            }
            Region::EchoRam => self.wram[(addr - ECHO_OFFSET - WRAM_START) as usize],
            Region::HighRam => self.hram[(addr - HRAM_START) as usize],
            Region::Unusable => OPEN_BUS,
            region => self.read_device(region, addr),
        }
    }

    pub(super) fn write8_mmio(&mut self, addr: u16, value: u8) {
        match Region::of(addr) {
            // ROM-only cartridges have no registers behind the ROM range.
            Region::RomFixed | Region::RomSwitchable => {}
            Region::WorkRamFixed | Region::WorkRamSwitchable => {
                self.wram[(addr - WRAM_START) as usize] = value;
            }
            Region::EchoRam => {
                self.wram[(addr - ECHO_OFFSET - WRAM_START) as usize] = value;
            }
            Region::HighRam => self.hram[(addr - HRAM_START) as usize] = value,
            Region::Unusable => {}
            region => self.write_device(region, addr, value),
        }
    }

    fn read_device(&mut self, region: Region, addr: u16) -> u8 {
        let Some(slot) = region.device_slot() else {
            return OPEN_BUS;
        };
        match self.devices[slot].as_mut() {
            Some(device) => device.read(addr - region.start()),
            None => OPEN_BUS,
        }
    }

    fn write_device(&mut self, region: Region, addr: u16, value: u8) {
        let Some(slot) = region.device_slot() else {
            return;
        };
        if let Some(device) = self.devices[slot].as_mut() {
            device.write(addr - region.start(), value);
        }
    }
}
