use super::{Cpu, Registers, RunState};
use crate::machine::BootState;

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// CPU in the state the DMG boot ROM hands over to the cartridge.
    pub fn new() -> Self {
        Self::with_boot_state(BootState::PostBoot)
    }

    pub fn with_boot_state(boot_state: BootState) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            ime_pending: false,
            state: RunState::Normal,
            boot_state,
        };
        cpu.apply_boot_state(boot_state);
        cpu
    }

    /// Return to the boot state the CPU was built with. Also clears a
    /// lock-up.
    pub fn reset(&mut self) {
        self.state = RunState::Normal;
        self.apply_boot_state(self.boot_state);
    }

    fn apply_boot_state(&mut self, boot_state: BootState) {
        match boot_state {
            BootState::PostBoot => {
                // DMG values, as documented in Pan Docs.
                self.regs.a = 0x01;
                self.regs.set_f(0xB0); // Z=1 N=0 H=1 C=1
                self.regs.b = 0x00;
                self.regs.c = 0x13;
                self.regs.d = 0x00;
                self.regs.e = 0xD8;
                self.regs.h = 0x01;
                self.regs.l = 0x4D;
                self.regs.sp = 0xFFFE;
                self.regs.pc = 0x0100;
            }
            BootState::Zeroed => {
                self.regs = Registers::default();
            }
        }

        // IME is clear when control reaches the cartridge; software enables
        // interrupts with EI/RETI.
        self.ime = false;
        self.ime_pending = false;
    }
}
