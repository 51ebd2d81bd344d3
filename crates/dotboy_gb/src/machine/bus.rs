use std::sync::Arc;

use thiserror::Error;

use super::cartridge::Cartridge;
use super::config::PowerOnRam;

mod init;
mod mmio;
mod region;
mod traits;

pub use region::Region;
use region::DEVICE_SLOTS;

/// Work RAM: 0xC000–0xDFFF (fixed + switchable bank).
pub(crate) const WRAM_SIZE: usize = 0x2000;
/// High RAM: 0xFF80–0xFFFE.
pub(crate) const HRAM_SIZE: usize = 0x7F;

/// Value returned for reads the core has no storage for.
pub const OPEN_BUS: u8 = 0xFF;

/// Hardware living outside the core (PPU, APU, timers, joypad, cartridge
/// RAM, ...) that wants to own one of the memory-mapped regions.
///
/// Offsets are relative to the start of the attached region.
pub trait Device {
    fn read(&mut self, offset: u16) -> u8;
    fn write(&mut self, offset: u16, value: u8);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BusError {
    #[error("region {0} is backed by the core and cannot take a device")]
    NotAttachable(Region),
}

/// Address router between the processor and the backing stores.
///
/// Owns work RAM and high RAM, shares the read-only cartridge image, and
/// forwards every other region to an attached [`Device`] or to a stub
/// (reads 0xFF, writes ignored).
pub struct MemoryBus {
    cartridge: Arc<Cartridge>,
    wram: Box<[u8; WRAM_SIZE]>,
    hram: [u8; HRAM_SIZE],
    devices: [Option<Box<dyn Device>>; DEVICE_SLOTS],
}

impl MemoryBus {
    pub fn new(cartridge: Arc<Cartridge>, power_on_ram: PowerOnRam) -> Self {
        let mut bus = Self {
            cartridge,
            wram: Box::new([0; WRAM_SIZE]),
            hram: [0; HRAM_SIZE],
            devices: Default::default(),
        };
        bus.apply_power_on_ram(power_on_ram);
        bus
    }

    pub fn cartridge(&self) -> &Arc<Cartridge> {
        &self.cartridge
    }

    /// Route `region` to `device` instead of the default stub.
    ///
    /// Returns the previously attached device, if any.
    pub fn attach(
        &mut self,
        region: Region,
        device: Box<dyn Device>,
    ) -> Result<Option<Box<dyn Device>>, BusError> {
        let slot = region
            .device_slot()
            .ok_or(BusError::NotAttachable(region))?;
        log::debug!("GB bus: device attached to {region}");
        Ok(self.devices[slot].replace(device))
    }

    pub fn detach(&mut self, region: Region) -> Option<Box<dyn Device>> {
        let slot = region.device_slot()?;
        self.devices[slot].take()
    }

    pub fn has_device(&self, region: Region) -> bool {
        region
            .device_slot()
            .is_some_and(|slot| self.devices[slot].is_some())
    }
}
