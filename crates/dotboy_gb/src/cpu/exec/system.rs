use crate::cpu::table::{self, Decoded, Outcome};
use crate::cpu::{Bus, Cpu, RunState};

impl Cpu {
    pub(in crate::cpu) fn exec_nop(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        Outcome::next(op, 1)
    }

    /// STOP is encoded as two bytes; the second one is padding and ignored.
    pub(in crate::cpu) fn exec_stop(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        self.state = RunState::Stopped;
        Outcome::next(op, 1)
    }

    pub(in crate::cpu) fn exec_halt(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        self.state = RunState::Halted;
        Outcome::next(op, 1)
    }

    pub(in crate::cpu) fn exec_di(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        self.ime = false;
        self.ime_pending = false;
        Outcome::next(op, 1)
    }

    /// IME becomes 1 after the *next* instruction completes.
    pub(in crate::cpu) fn exec_ei(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        self.ime_pending = true;
        Outcome::next(op, 1)
    }

    /// Hand the byte after 0xCB to the prefixed table.
    pub(in crate::cpu) fn exec_prefix_cb(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let cb = self.imm8(bus, op);
        let inner = Decoded { opcode: cb, ..op };
        table::prefixed(cb).execute(self, bus, inner)
    }

    /// Opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD) hang the
    /// CPU until power-off. PC stays on the offending opcode.
    pub(in crate::cpu) fn exec_illegal(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        log::error!(
            "GB CPU locked: invalid opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            opcode = op.opcode,
            pc = op.addr,
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        self.state = RunState::Locked {
            opcode: op.opcode,
            address: op.addr,
        };
        Outcome::jump(op.addr, 0)
    }
}
