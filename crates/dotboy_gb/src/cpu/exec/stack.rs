use crate::cpu::table::{Decoded, Outcome};
use crate::cpu::{Bus, Cpu, R16Stack};

impl Cpu {
    pub(in crate::cpu) fn exec_push(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!(matches!(op.opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));

        let value = self.regs.get_stack16(R16Stack::from_bits(op.opcode >> 4));
        self.push_u16(bus, value);
        Outcome::next(op, 4)
    }

    /// POP rr. `POP AF` drops the low nibble of F.
    pub(in crate::cpu) fn exec_pop(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!(matches!(op.opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));

        let value = self.pop_u16(bus);
        self.regs.set_stack16(R16Stack::from_bits(op.opcode >> 4), value);
        Outcome::next(op, 3)
    }

    pub(in crate::cpu) fn exec_call(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let target = self.imm16(bus, op);
        self.push_u16(bus, op.fallthrough);
        Outcome::jump(target, 6)
    }

    pub(in crate::cpu) fn exec_rst(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!(op.opcode & 0xC7 == 0xC7);

        self.push_u16(bus, op.fallthrough);
        Outcome::jump(u16::from(op.opcode & 0x38), 4)
    }

    pub(in crate::cpu) fn exec_ret(&mut self, bus: &mut dyn Bus, _op: Decoded) -> Outcome {
        let target = self.pop_u16(bus);
        Outcome::jump(target, 4)
    }

    /// RETI enables interrupts right away, without the EI delay.
    pub(in crate::cpu) fn exec_reti(&mut self, bus: &mut dyn Bus, _op: Decoded) -> Outcome {
        let target = self.pop_u16(bus);
        self.ime = true;
        self.ime_pending = false;
        Outcome::jump(target, 4)
    }
}
