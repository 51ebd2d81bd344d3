use super::super::{Bus, Cpu, RunState};

/// M-cycles spent dispatching an interrupt.
pub const INTERRUPT_ENTRY_CYCLES: u8 = 5;

impl Cpu {
    /// Dispatch to an interrupt handler at `vector`.
    ///
    /// Pushes PC, jumps to the vector, clears IME (and a pending EI) and
    /// leaves HALT/STOP. Requesting and acknowledging interrupt sources is
    /// up to the caller. Returns the M-cycle cost; a locked CPU ignores the
    /// request and reports 0.
    pub fn enter_interrupt<B: Bus>(&mut self, bus: &mut B, vector: u16) -> u8 {
        if self.is_locked() {
            return 0;
        }

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = vector;
        self.ime = false;
        self.ime_pending = false;
        self.state = RunState::Normal;

        log::debug!(
            "GB CPU interrupt: vector=0x{vector:04X} return=0x{pc:04X} sp=0x{sp:04X}",
            sp = self.regs.sp,
        );

        INTERRUPT_ENTRY_CYCLES
    }

    /// Leave HALT or STOP without servicing anything.
    pub fn wake(&mut self) {
        if matches!(self.state, RunState::Halted | RunState::Stopped) {
            self.state = RunState::Normal;
        }
    }
}
