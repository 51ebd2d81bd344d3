use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Bits 0–3 do not exist on hardware and always read as zero.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flags: u8 {
        /// Zero.
        const Z = 0b1000_0000;
        /// Subtract.
        const N = 0b0100_0000;
        /// Half carry (bit 3 for byte ops, bit 11 for word ops).
        const H = 0b0010_0000;
        /// Carry (bit 7 for byte ops, bit 15 for word ops).
        const C = 0b0001_0000;
    }
}

/// Register file of the SM83 core.
///
/// Eight 8-bit registers, viewed in pairs as AF, BC, DE and HL (high byte
/// first). The pairs have no storage of their own. F is private so that
/// every write goes through [`Flags`], which has no low nibble.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn f(&self) -> u8 {
        self.f.bits()
    }

    /// Store `value` in F, dropping bits 0–3.
    #[inline]
    pub fn set_f(&mut self, value: u8) {
        self.f = Flags::from_bits_truncate(value);
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.f
    }

    #[inline]
    pub fn set_flags(&mut self, flags: Flags) {
        self.f = flags;
    }

    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.f.contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.f.set(flag, value);
    }

    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f.bits()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.set_f(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    /// Read a 16-bit operand (BC, DE, HL or SP).
    #[inline]
    pub fn get16(&self, reg: R16) -> u16 {
        match reg {
            R16::Bc => self.bc(),
            R16::De => self.de(),
            R16::Hl => self.hl(),
            R16::Sp => self.sp,
        }
    }

    #[inline]
    pub fn set16(&mut self, reg: R16, value: u16) {
        match reg {
            R16::Bc => self.set_bc(value),
            R16::De => self.set_de(value),
            R16::Hl => self.set_hl(value),
            R16::Sp => self.sp = value,
        }
    }

    /// Read a PUSH/POP operand (BC, DE, HL or AF).
    #[inline]
    pub fn get_stack16(&self, reg: R16Stack) -> u16 {
        match reg {
            R16Stack::Bc => self.bc(),
            R16Stack::De => self.de(),
            R16Stack::Hl => self.hl(),
            R16Stack::Af => self.af(),
        }
    }

    #[inline]
    pub fn set_stack16(&mut self, reg: R16Stack, value: u16) {
        match reg {
            R16Stack::Bc => self.set_bc(value),
            R16Stack::De => self.set_de(value),
            R16Stack::Hl => self.set_hl(value),
            R16Stack::Af => self.set_af(value),
        }
    }
}

/// 8-bit operand encoded in bits 0–2 (source) or 3–5 (destination) of an
/// opcode. `HlInd` is the byte at address HL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R8 {
    B,
    C,
    D,
    E,
    H,
    L,
    HlInd,
    A,
}

impl R8 {
    #[inline]
    pub const fn from_bits(bits: u8) -> R8 {
        match bits & 0x07 {
            0 => R8::B,
            1 => R8::C,
            2 => R8::D,
            3 => R8::E,
            4 => R8::H,
            5 => R8::L,
            6 => R8::HlInd,
            _ => R8::A,
        }
    }
}

/// 16-bit operand encoded in bits 4–5 of an opcode, SP flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R16 {
    Bc,
    De,
    Hl,
    Sp,
}

impl R16 {
    #[inline]
    pub const fn from_bits(bits: u8) -> R16 {
        match bits & 0x03 {
            0 => R16::Bc,
            1 => R16::De,
            2 => R16::Hl,
            _ => R16::Sp,
        }
    }
}

/// 16-bit operand encoded in bits 4–5 of PUSH/POP, AF flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R16Stack {
    Bc,
    De,
    Hl,
    Af,
}

impl R16Stack {
    #[inline]
    pub const fn from_bits(bits: u8) -> R16Stack {
        match bits & 0x03 {
            0 => R16Stack::Bc,
            1 => R16Stack::De,
            2 => R16Stack::Hl,
            _ => R16Stack::Af,
        }
    }
}

/// Branch condition encoded in bits 3–4 of JR/JP/CALL/RET cc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    Nz,
    Z,
    Nc,
    C,
}

impl Cond {
    #[inline]
    pub const fn from_bits(bits: u8) -> Cond {
        match bits & 0x03 {
            0 => Cond::Nz,
            1 => Cond::Z,
            2 => Cond::Nc,
            _ => Cond::C,
        }
    }

    #[inline]
    pub fn holds(self, flags: Flags) -> bool {
        match self {
            Cond::Nz => !flags.contains(Flags::Z),
            Cond::Z => flags.contains(Flags::Z),
            Cond::Nc => !flags.contains(Flags::C),
            Cond::C => flags.contains(Flags::C),
        }
    }
}
