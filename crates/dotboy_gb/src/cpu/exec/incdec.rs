use crate::cpu::table::{Decoded, Outcome};
use crate::cpu::{Bus, Cpu, R16, R8};

impl Cpu {
    pub(in crate::cpu) fn exec_inc_r8(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!(
            op.opcode & 0xC7 == 0x04,
            "unexpected INC r opcode {:#04x}",
            op.opcode
        );

        let reg = R8::from_bits(op.opcode >> 3);
        let value = self.read_r8(bus, reg);
        let result = self.alu_inc8(value);
        self.write_r8(bus, reg, result);

        Outcome::next(op, if reg == R8::HlInd { 3 } else { 1 })
    }

    pub(in crate::cpu) fn exec_dec_r8(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!(
            op.opcode & 0xC7 == 0x05,
            "unexpected DEC r opcode {:#04x}",
            op.opcode
        );

        let reg = R8::from_bits(op.opcode >> 3);
        let value = self.read_r8(bus, reg);
        let result = self.alu_dec8(value);
        self.write_r8(bus, reg, result);

        Outcome::next(op, if reg == R8::HlInd { 3 } else { 1 })
    }

    /// INC rr. No flags.
    pub(in crate::cpu) fn exec_inc_r16(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let reg = R16::from_bits(op.opcode >> 4);
        let value = self.regs.get16(reg).wrapping_add(1);
        self.regs.set16(reg, value);
        Outcome::next(op, 2)
    }

    /// DEC rr. No flags.
    pub(in crate::cpu) fn exec_dec_r16(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let reg = R16::from_bits(op.opcode >> 4);
        let value = self.regs.get16(reg).wrapping_sub(1);
        self.regs.set16(reg, value);
        Outcome::next(op, 2)
    }
}
