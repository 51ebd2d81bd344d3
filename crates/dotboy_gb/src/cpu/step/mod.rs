use super::table::{self, Decoded};
use super::{Bus, Cpu, CpuError, Instruction, RunState, Step};

impl Cpu {
    /// Execute one instruction at PC.
    ///
    /// Returns the encoded length and M-cycle cost of what ran. While halted
    /// or stopped nothing is fetched and [`Step::IDLE`] is reported. Once an
    /// illegal opcode has been hit every call fails with
    /// [`CpuError::Locked`] until [`Cpu::reset`].
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<Step, CpuError> {
        let bus: &mut dyn Bus = bus;

        match self.state {
            RunState::Locked { opcode, address } => {
                return Err(CpuError::Locked { opcode, address });
            }
            RunState::Halted | RunState::Stopped => return Ok(Step::IDLE),
            RunState::Normal => {}
        }

        // EI only takes effect once the instruction after it has finished.
        let commit_ime = self.ime_pending;

        let pc = self.regs.pc;
        let opcode = bus.read8(pc);
        let instruction = table::primary(opcode);
        let op = Decoded {
            opcode,
            addr: pc,
            fallthrough: pc.wrapping_add(u16::from(instruction.length)),
        };

        log::trace!(
            "GB CPU 0x{pc:04X}: {mnemonic:<12} op=0x{opcode:02X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X} SP=0x{sp:04X}",
            mnemonic = instruction.mnemonic,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
            sp = self.regs.sp,
        );

        let outcome = instruction.execute(self, bus, op);

        if let RunState::Locked { opcode, address } = self.state {
            return Err(CpuError::Locked { opcode, address });
        }

        self.regs.pc = outcome.next_pc;
        if commit_ime {
            self.commit_ime();
        }

        Ok(Step {
            length: instruction.length,
            cycles: outcome.cycles,
        })
    }

    /// Decode the instruction at `pc` without executing it.
    ///
    /// Follows the 0xCB prefix, so the returned entry describes the whole
    /// two-byte instruction in that case.
    pub fn instruction_at<B: Bus>(&self, bus: &mut B, pc: u16) -> &'static Instruction {
        table::lookup(bus, pc)
    }
}
