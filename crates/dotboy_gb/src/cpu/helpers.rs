use super::table::Decoded;
use super::{Bus, Cpu, R8};

impl Cpu {
    /// Read an 8-bit operand; `(HL)` goes through the bus.
    #[inline]
    pub(super) fn read_r8(&mut self, bus: &mut dyn Bus, reg: R8) -> u8 {
        match reg {
            R8::B => self.regs.b,
            R8::C => self.regs.c,
            R8::D => self.regs.d,
            R8::E => self.regs.e,
            R8::H => self.regs.h,
            R8::L => self.regs.l,
            R8::HlInd => bus.read8(self.regs.hl()),
            R8::A => self.regs.a,
        }
    }

    #[inline]
    pub(super) fn write_r8(&mut self, bus: &mut dyn Bus, reg: R8, value: u8) {
        match reg {
            R8::B => self.regs.b = value,
            R8::C => self.regs.c = value,
            R8::D => self.regs.d = value,
            R8::E => self.regs.e = value,
            R8::H => self.regs.h = value,
            R8::L => self.regs.l = value,
            R8::HlInd => bus.write8(self.regs.hl(), value),
            R8::A => self.regs.a = value,
        }
    }

    /// Immediate byte following the opcode.
    #[inline]
    pub(super) fn imm8(&self, bus: &mut dyn Bus, op: Decoded) -> u8 {
        bus.read8(op.addr.wrapping_add(1))
    }

    /// Little-endian immediate word following the opcode.
    #[inline]
    pub(super) fn imm16(&self, bus: &mut dyn Bus, op: Decoded) -> u16 {
        bus.read16(op.addr.wrapping_add(1))
    }

    /// Push a word: SP is decremented before each byte, high byte first, so
    /// the low byte ends up at the lower address.
    #[inline]
    pub(super) fn push_u16(&mut self, bus: &mut dyn Bus, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    /// Pop a word: low byte first, SP incremented after each byte.
    #[inline]
    pub(super) fn pop_u16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_le_bytes([lo, hi])
    }
}
