use crate::cpu::table::{Decoded, Outcome};
use crate::cpu::{Bus, Cond, Cpu};

impl Cpu {
    #[inline]
    fn condition(&self, opcode: u8) -> bool {
        Cond::from_bits(opcode >> 3).holds(self.regs.flags())
    }

    /// Target of a relative jump: the signed displacement is added to the
    /// address after the two-byte instruction.
    #[inline]
    fn relative_target(&self, bus: &mut dyn Bus, op: Decoded) -> u16 {
        let offset = self.imm8(bus, op) as i8;
        op.fallthrough.wrapping_add(offset as i16 as u16)
    }

    pub(in crate::cpu) fn exec_jr(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let target = self.relative_target(bus, op);
        Outcome::jump(target, 3)
    }

    pub(in crate::cpu) fn exec_jr_cc(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!(matches!(op.opcode, 0x20 | 0x28 | 0x30 | 0x38));

        if self.condition(op.opcode) {
            let target = self.relative_target(bus, op);
            Outcome::jump(target, 3)
        } else {
            Outcome::next(op, 2)
        }
    }

    pub(in crate::cpu) fn exec_jp(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let target = self.imm16(bus, op);
        Outcome::jump(target, 4)
    }

    pub(in crate::cpu) fn exec_jp_cc(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!(matches!(op.opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));

        let target = self.imm16(bus, op);
        if self.condition(op.opcode) {
            Outcome::jump(target, 4)
        } else {
            Outcome::next(op, 3)
        }
    }

    pub(in crate::cpu) fn exec_jp_hl(&mut self, _bus: &mut dyn Bus, _op: Decoded) -> Outcome {
        Outcome::jump(self.regs.hl(), 1)
    }

    pub(in crate::cpu) fn exec_call_cc(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!(matches!(op.opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));

        let target = self.imm16(bus, op);
        if self.condition(op.opcode) {
            self.push_u16(bus, op.fallthrough);
            Outcome::jump(target, 6)
        } else {
            Outcome::next(op, 3)
        }
    }

    pub(in crate::cpu) fn exec_ret_cc(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!(matches!(op.opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));

        if self.condition(op.opcode) {
            let target = self.pop_u16(bus);
            Outcome::jump(target, 5)
        } else {
            Outcome::next(op, 2)
        }
    }
}
