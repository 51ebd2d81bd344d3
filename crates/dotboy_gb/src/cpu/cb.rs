use super::table::{Decoded, Outcome};
use super::{Bus, Cpu, Flags, R8};

impl Cpu {
    /// Rotates and shifts: CB 00-3F.
    ///
    /// Every variant sets Z from the result and clears N and H; C receives
    /// the bit shifted out (SWAP clears it).
    pub(super) fn exec_cb_shift(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let reg = R8::from_bits(op.opcode);
        let value = self.read_r8(bus, reg);

        let (result, carry) = match (op.opcode >> 3) & 0x07 {
            // RLC
            0 => self.alu_rotate_left(value, false),
            // RRC
            1 => self.alu_rotate_right(value, false),
            // RL
            2 => self.alu_rotate_left(value, true),
            // RR
            3 => self.alu_rotate_right(value, true),
            // SLA
            4 => (value << 1, value & 0x80 != 0),
            // SRA: bit 7 is kept.
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            // SWAP
            6 => (value.rotate_left(4), false),
            // SRL
            _ => (value >> 1, value & 0x01 != 0),
        };

        self.write_r8(bus, reg, result);

        let mut flags = Flags::empty();
        flags.set(Flags::Z, result == 0);
        flags.set(Flags::C, carry);
        self.regs.set_flags(flags);

        Outcome::next(op, if reg == R8::HlInd { 4 } else { 2 })
    }

    /// BIT b,r: Z is the complement of the tested bit, C untouched.
    pub(super) fn exec_cb_bit(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let reg = R8::from_bits(op.opcode);
        let bit = (op.opcode >> 3) & 0x07;
        let value = self.read_r8(bus, reg);

        self.set_flag(Flags::Z, value & (1 << bit) == 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, true);

        Outcome::next(op, if reg == R8::HlInd { 3 } else { 2 })
    }

    /// RES b,r (CB 80-BF) and SET b,r (CB C0-FF). Flags untouched.
    pub(super) fn exec_cb_res_set(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let reg = R8::from_bits(op.opcode);
        let mask = 1u8 << ((op.opcode >> 3) & 0x07);
        let value = self.read_r8(bus, reg);

        let result = if op.opcode & 0x40 != 0 {
            value | mask
        } else {
            value & !mask
        };
        self.write_r8(bus, reg, result);

        Outcome::next(op, if reg == R8::HlInd { 4 } else { 2 })
    }
}
