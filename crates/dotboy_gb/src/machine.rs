mod bus;
mod cartridge;
mod config;
mod gameboy;

pub use bus::{BusError, Device, MemoryBus, Region, OPEN_BUS};
pub use cartridge::{Cartridge, CartridgeError};
pub use config::{BootState, MachineConfig, PowerOnRam, DEFAULT_RAM_SEED};
pub use gameboy::{GameBoy, M_CYCLES_PER_FRAME};
