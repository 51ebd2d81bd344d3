use std::sync::Arc;

use crate::cpu::{Cpu, CpuError, RunState, Step};

use super::{Cartridge, CartridgeError, MachineConfig, MemoryBus};

/// M-cycles in one DMG frame (154 lines of 114 M-cycles).
pub const M_CYCLES_PER_FRAME: u64 = 17_556;

/// High-level Game Boy machine.
///
/// Holds one processor and the bus it runs against. Everything that is not
/// CPU or memory (PPU, timers, interrupt sources) plugs into the bus as a
/// [`Device`](super::Device) and is driven by the caller between steps.
pub struct GameBoy {
    pub cpu: Cpu,
    pub bus: MemoryBus,
}

impl GameBoy {
    pub fn new(cartridge: Arc<Cartridge>, config: MachineConfig) -> Self {
        Self {
            cpu: Cpu::with_boot_state(config.boot_state),
            bus: MemoryBus::new(cartridge, config.power_on_ram),
        }
    }

    /// Parse `rom` and build a machine around it.
    pub fn from_rom(rom: Vec<u8>, config: MachineConfig) -> Result<Self, CartridgeError> {
        let cartridge = Cartridge::load(rom)?;
        Ok(Self::new(Arc::new(cartridge), config))
    }

    /// Put the processor back into its configured boot state. Memory and
    /// attached devices are left as they are.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    #[inline]
    pub fn step(&mut self) -> Result<Step, CpuError> {
        self.cpu.step(&mut self.bus)
    }

    /// Step until at least `budget` M-cycles have elapsed.
    ///
    /// Stops early when the CPU goes idle (HALT or STOP); waking it is the
    /// caller's job. Returns the M-cycles actually spent.
    pub fn run_cycles(&mut self, budget: u64) -> Result<u64, CpuError> {
        let mut spent = 0u64;

        while spent < budget {
            if matches!(self.cpu.run_state(), RunState::Halted | RunState::Stopped) {
                log::debug!(
                    "GB machine idle at PC=0x{pc:04X} after {spent} M-cycles",
                    pc = self.cpu.regs.pc,
                );
                break;
            }

            let step = self.step()?;
            spent += u64::from(step.cycles);
        }

        Ok(spent)
    }

    /// Run one frame worth of time.
    pub fn run_frame(&mut self) -> Result<u64, CpuError> {
        self.run_cycles(M_CYCLES_PER_FRAME)
    }
}
