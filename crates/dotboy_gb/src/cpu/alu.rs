use super::{Cpu, Flags};

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.get_flag(Flags::C));

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = u16::from(a) + u16::from(value) + u16::from(carry_in);
        let result = full as u8;

        self.regs.a = result;

        let mut flags = Flags::empty();
        flags.set(Flags::Z, result == 0);
        flags.set(Flags::H, half > 0x0F);
        flags.set(Flags::C, full > 0xFF);
        self.regs.set_flags(flags);
    }

    /// Flags of `a - value - carry_in` and the truncated difference.
    fn sub_flags(a: u8, value: u8, carry_in: u8) -> (u8, Flags) {
        let result = a.wrapping_sub(value).wrapping_sub(carry_in);

        let mut flags = Flags::N;
        flags.set(Flags::Z, result == 0);
        flags.set(Flags::H, (a & 0x0F) < (value & 0x0F) + carry_in);
        flags.set(Flags::C, u16::from(a) < u16::from(value) + u16::from(carry_in));
        (result, flags)
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let carry_in = u8::from(use_carry && self.get_flag(Flags::C));
        let (result, flags) = Self::sub_flags(self.regs.a, value, carry_in);
        self.regs.a = result;
        self.regs.set_flags(flags);
    }

    /// Compare A with `value`: flags as for `A - value`, A untouched.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        let (_, flags) = Self::sub_flags(self.regs.a, value, 0);
        self.regs.set_flags(flags);
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        self.regs.a &= value;
        let mut flags = Flags::H;
        flags.set(Flags::Z, self.regs.a == 0);
        self.regs.set_flags(flags);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        self.regs.a |= value;
        let mut flags = Flags::empty();
        flags.set(Flags::Z, self.regs.a == 0);
        self.regs.set_flags(flags);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        self.regs.a ^= value;
        let mut flags = Flags::empty();
        flags.set(Flags::Z, self.regs.a == 0);
        self.regs.set_flags(flags);
    }

    /// Decimal adjust A after a BCD addition or subtraction.
    ///
    /// Updates Z, H (cleared) and C; N is kept so a following DAA still
    /// knows which direction to correct in.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.get_flag(Flags::C) { 0x60 } else { 0x00 };
        if self.get_flag(Flags::H) {
            adjust |= 0x06;
        }

        if !self.get_flag(Flags::N) {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flags::C, adjust >= 0x60);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::Z, a == 0);
        self.regs.a = a;
    }

    /// INC r / INC (HL). C is left alone.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (value & 0x0F) + 1 > 0x0F);
        result
    }

    /// DEC r / DEC (HL). C is left alone.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, (value & 0x0F) == 0);
        result
    }

    /// `ADD HL,rr`: Z untouched, N cleared, H from bit 11, C from bit 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();

        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flags::C, u32::from(hl) + u32::from(value) > 0xFFFF);

        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// SP plus a signed byte, shared by `ADD SP,e8` and `LD HL,SP+e8`.
    ///
    /// Z and N are cleared; H and C come from the unsigned addition of the
    /// offset byte to the low byte of SP.
    #[inline]
    pub(super) fn alu_add_sp_signed(&mut self, imm8: u8) -> u16 {
        let sp = self.regs.sp;
        let offset = imm8 as i8 as i16 as u16;

        let mut flags = Flags::empty();
        flags.set(Flags::H, (sp & 0x000F) + (offset & 0x000F) > 0x000F);
        flags.set(Flags::C, (sp & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        self.regs.set_flags(flags);

        sp.wrapping_add(offset)
    }

    /// RLC/RL family: rotate left, optionally through carry.
    pub(super) fn alu_rotate_left(&self, value: u8, through_carry: bool) -> (u8, bool) {
        let carry_out = value & 0x80 != 0;
        let bit0 = if through_carry {
            u8::from(self.get_flag(Flags::C))
        } else {
            u8::from(carry_out)
        };
        ((value << 1) | bit0, carry_out)
    }

    /// RRC/RR family: rotate right, optionally through carry.
    pub(super) fn alu_rotate_right(&self, value: u8, through_carry: bool) -> (u8, bool) {
        let carry_out = value & 0x01 != 0;
        let bit7 = if through_carry {
            u8::from(self.get_flag(Flags::C)) << 7
        } else {
            u8::from(carry_out) << 7
        };
        ((value >> 1) | bit7, carry_out)
    }
}
