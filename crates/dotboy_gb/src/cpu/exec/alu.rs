use crate::cpu::table::{Decoded, Outcome};
use crate::cpu::{Bus, Cpu, Flags, R16, R8};

impl Cpu {
    /// Apply ALU operation `operation` (bits 3–5 of the opcode) to A.
    fn alu_dispatch(&mut self, operation: u8, value: u8) {
        match operation & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    pub(in crate::cpu) fn exec_alu_r8(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!((0x80..=0xBF).contains(&op.opcode));

        let src = R8::from_bits(op.opcode);
        let value = self.read_r8(bus, src);
        self.alu_dispatch(op.opcode >> 3, value);

        Outcome::next(op, if src == R8::HlInd { 2 } else { 1 })
    }

    pub(in crate::cpu) fn exec_alu_n8(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!(op.opcode & 0xC7 == 0xC6);

        let value = self.imm8(bus, op);
        self.alu_dispatch(op.opcode >> 3, value);
        Outcome::next(op, 2)
    }

    /// RLCA, RRCA, RLA and RRA. Unlike their CB twins these always clear Z.
    pub(in crate::cpu) fn exec_rotate_a(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let a = self.regs.a;
        let (result, carry) = match op.opcode {
            0x07 => self.alu_rotate_left(a, false),
            0x0F => self.alu_rotate_right(a, false),
            0x17 => self.alu_rotate_left(a, true),
            _ => self.alu_rotate_right(a, true),
        };

        self.regs.a = result;
        self.regs.set_flags(if carry { Flags::C } else { Flags::empty() });
        Outcome::next(op, 1)
    }

    pub(in crate::cpu) fn exec_add_hl_r16(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!(matches!(op.opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let value = self.regs.get16(R16::from_bits(op.opcode >> 4));
        self.alu_add16_hl(value);
        Outcome::next(op, 2)
    }

    pub(in crate::cpu) fn exec_add_sp_e8(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let imm = self.imm8(bus, op);
        self.regs.sp = self.alu_add_sp_signed(imm);
        Outcome::next(op, 4)
    }

    pub(in crate::cpu) fn exec_ld_hl_sp_e8(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let imm = self.imm8(bus, op);
        let result = self.alu_add_sp_signed(imm);
        self.regs.set_hl(result);
        Outcome::next(op, 3)
    }

    pub(in crate::cpu) fn exec_daa(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        self.alu_daa();
        Outcome::next(op, 1)
    }

    pub(in crate::cpu) fn exec_cpl(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        self.regs.a = !self.regs.a;
        self.set_flag(Flags::H, true);
        self.set_flag(Flags::N, true);
        Outcome::next(op, 1)
    }

    pub(in crate::cpu) fn exec_scf(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        self.set_flag(Flags::C, true);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
        Outcome::next(op, 1)
    }

    pub(in crate::cpu) fn exec_ccf(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let carry = self.get_flag(Flags::C);
        self.set_flag(Flags::C, !carry);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
        Outcome::next(op, 1)
    }
}
