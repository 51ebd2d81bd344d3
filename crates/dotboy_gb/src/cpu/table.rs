use std::fmt;

use lazy_static::lazy_static;

use super::{Bus, Cpu, PREFIX_CB};

/// Opcode being executed, with the addresses its handler needs.
#[derive(Copy, Clone, Debug)]
pub(in crate::cpu) struct Decoded {
    /// Opcode byte (the byte after 0xCB for prefixed instructions).
    pub opcode: u8,
    /// Address of the first instruction byte.
    pub addr: u16,
    /// Address right after the instruction.
    pub fallthrough: u16,
}

/// What a handler hands back to `step`: where execution continues and how
/// long the instruction took.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(in crate::cpu) struct Outcome {
    pub next_pc: u16,
    pub cycles: u8,
}

impl Outcome {
    #[inline]
    pub fn next(op: Decoded, cycles: u8) -> Self {
        Self {
            next_pc: op.fallthrough,
            cycles,
        }
    }

    #[inline]
    pub fn jump(target: u16, cycles: u8) -> Self {
        Self {
            next_pc: target,
            cycles,
        }
    }
}

pub(in crate::cpu) type Handler = fn(&mut Cpu, &mut dyn Bus, Decoded) -> Outcome;

/// One dispatch table entry.
#[derive(Copy, Clone)]
pub struct Instruction {
    pub mnemonic: &'static str,
    /// Encoded length in bytes, including the 0xCB prefix if any.
    pub length: u8,
    handler: Handler,
}

impl Instruction {
    const fn new(mnemonic: &'static str, length: u8, handler: Handler) -> Self {
        Self {
            mnemonic,
            length,
            handler,
        }
    }

    #[inline]
    pub(in crate::cpu) fn execute(&self, cpu: &mut Cpu, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        (self.handler)(cpu, bus, op)
    }

    pub fn is_illegal(&self) -> bool {
        self.mnemonic == ILLEGAL
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .field("length", &self.length)
            .finish()
    }
}

const ILLEGAL: &str = "ILLEGAL";

lazy_static! {
    static ref PRIMARY: [Instruction; 256] = std::array::from_fn(|op| primary_entry(op as u8));
    static ref PREFIXED: [Instruction; 256] = std::array::from_fn(|op| prefixed_entry(op as u8));
}

#[inline]
pub(in crate::cpu) fn primary(opcode: u8) -> &'static Instruction {
    &PRIMARY[opcode as usize]
}

#[inline]
pub(in crate::cpu) fn prefixed(opcode: u8) -> &'static Instruction {
    &PREFIXED[opcode as usize]
}

/// Look up the instruction encoded at `addr`, following the 0xCB prefix.
pub(in crate::cpu) fn lookup(bus: &mut dyn Bus, addr: u16) -> &'static Instruction {
    let opcode = bus.read8(addr);
    if opcode == PREFIX_CB {
        prefixed(bus.read8(addr.wrapping_add(1)))
    } else {
        primary(opcode)
    }
}

fn primary_entry(op: u8) -> Instruction {
    use Instruction as I;

    match op {
        0x00 => I::new("NOP", 1, Cpu::exec_nop),
        0x10 => I::new("STOP", 2, Cpu::exec_stop),
        0x76 => I::new("HALT", 1, Cpu::exec_halt),
        0xF3 => I::new("DI", 1, Cpu::exec_di),
        0xFB => I::new("EI", 1, Cpu::exec_ei),
        PREFIX_CB => I::new("PREFIX CB", 2, Cpu::exec_prefix_cb),

        // 16-bit loads and arithmetic.
        0x01 | 0x11 | 0x21 | 0x31 => I::new("LD r16,n16", 3, Cpu::exec_ld_r16_n16),
        0x03 | 0x13 | 0x23 | 0x33 => I::new("INC r16", 1, Cpu::exec_inc_r16),
        0x0B | 0x1B | 0x2B | 0x3B => I::new("DEC r16", 1, Cpu::exec_dec_r16),
        0x09 | 0x19 | 0x29 | 0x39 => I::new("ADD HL,r16", 1, Cpu::exec_add_hl_r16),
        0x08 => I::new("LD (n16),SP", 3, Cpu::exec_ld_n16_sp),
        0xE8 => I::new("ADD SP,e8", 2, Cpu::exec_add_sp_e8),
        0xF8 => I::new("LD HL,SP+e8", 2, Cpu::exec_ld_hl_sp_e8),
        0xF9 => I::new("LD SP,HL", 1, Cpu::exec_ld_sp_hl),

        // Indirect accumulator loads.
        0x02 | 0x12 | 0x22 | 0x32 => I::new("LD (r16),A", 1, Cpu::exec_ld_ind_a),
        0x0A | 0x1A | 0x2A | 0x3A => I::new("LD A,(r16)", 1, Cpu::exec_ld_a_ind),
        0xE0 => I::new("LDH (n8),A", 2, Cpu::exec_ldh_n8_a),
        0xF0 => I::new("LDH A,(n8)", 2, Cpu::exec_ldh_a_n8),
        0xE2 => I::new("LDH (C),A", 1, Cpu::exec_ldh_c_a),
        0xF2 => I::new("LDH A,(C)", 1, Cpu::exec_ldh_a_c),
        0xEA => I::new("LD (n16),A", 3, Cpu::exec_ld_n16_a),
        0xFA => I::new("LD A,(n16)", 3, Cpu::exec_ld_a_n16),

        // 8-bit INC/DEC/LD with immediate.
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
            I::new("INC r8", 1, Cpu::exec_inc_r8)
        }
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
            I::new("DEC r8", 1, Cpu::exec_dec_r8)
        }
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
            I::new("LD r8,n8", 2, Cpu::exec_ld_r8_n8)
        }

        // Accumulator rotates and flag operations.
        0x07 => I::new("RLCA", 1, Cpu::exec_rotate_a),
        0x0F => I::new("RRCA", 1, Cpu::exec_rotate_a),
        0x17 => I::new("RLA", 1, Cpu::exec_rotate_a),
        0x1F => I::new("RRA", 1, Cpu::exec_rotate_a),
        0x27 => I::new("DAA", 1, Cpu::exec_daa),
        0x2F => I::new("CPL", 1, Cpu::exec_cpl),
        0x37 => I::new("SCF", 1, Cpu::exec_scf),
        0x3F => I::new("CCF", 1, Cpu::exec_ccf),

        // Relative jumps.
        0x18 => I::new("JR e8", 2, Cpu::exec_jr),
        0x20 | 0x28 | 0x30 | 0x38 => I::new("JR cc,e8", 2, Cpu::exec_jr_cc),

        // Register-to-register loads (0x76 is HALT, matched above).
        0x40..=0x7F => I::new("LD r8,r8", 1, Cpu::exec_ld_r8_r8),

        // ALU on A.
        0x80..=0x87 => I::new("ADD A,r8", 1, Cpu::exec_alu_r8),
        0x88..=0x8F => I::new("ADC A,r8", 1, Cpu::exec_alu_r8),
        0x90..=0x97 => I::new("SUB A,r8", 1, Cpu::exec_alu_r8),
        0x98..=0x9F => I::new("SBC A,r8", 1, Cpu::exec_alu_r8),
        0xA0..=0xA7 => I::new("AND A,r8", 1, Cpu::exec_alu_r8),
        0xA8..=0xAF => I::new("XOR A,r8", 1, Cpu::exec_alu_r8),
        0xB0..=0xB7 => I::new("OR A,r8", 1, Cpu::exec_alu_r8),
        0xB8..=0xBF => I::new("CP A,r8", 1, Cpu::exec_alu_r8),
        0xC6 => I::new("ADD A,n8", 2, Cpu::exec_alu_n8),
        0xCE => I::new("ADC A,n8", 2, Cpu::exec_alu_n8),
        0xD6 => I::new("SUB A,n8", 2, Cpu::exec_alu_n8),
        0xDE => I::new("SBC A,n8", 2, Cpu::exec_alu_n8),
        0xE6 => I::new("AND A,n8", 2, Cpu::exec_alu_n8),
        0xEE => I::new("XOR A,n8", 2, Cpu::exec_alu_n8),
        0xF6 => I::new("OR A,n8", 2, Cpu::exec_alu_n8),
        0xFE => I::new("CP A,n8", 2, Cpu::exec_alu_n8),

        // Absolute control flow.
        0xC3 => I::new("JP n16", 3, Cpu::exec_jp),
        0xC2 | 0xCA | 0xD2 | 0xDA => I::new("JP cc,n16", 3, Cpu::exec_jp_cc),
        0xE9 => I::new("JP HL", 1, Cpu::exec_jp_hl),
        0xCD => I::new("CALL n16", 3, Cpu::exec_call),
        0xC4 | 0xCC | 0xD4 | 0xDC => I::new("CALL cc,n16", 3, Cpu::exec_call_cc),
        0xC9 => I::new("RET", 1, Cpu::exec_ret),
        0xC0 | 0xC8 | 0xD0 | 0xD8 => I::new("RET cc", 1, Cpu::exec_ret_cc),
        0xD9 => I::new("RETI", 1, Cpu::exec_reti),
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
            I::new("RST vec", 1, Cpu::exec_rst)
        }

        // Stack.
        0xC5 | 0xD5 | 0xE5 | 0xF5 => I::new("PUSH r16", 1, Cpu::exec_push),
        0xC1 | 0xD1 | 0xE1 | 0xF1 => I::new("POP r16", 1, Cpu::exec_pop),

        // Opcode holes: D3 DB DD E3 E4 EB EC ED F4 FC FD.
        _ => I::new(ILLEGAL, 1, Cpu::exec_illegal),
    }
}

fn prefixed_entry(op: u8) -> Instruction {
    use Instruction as I;

    let mnemonic = match op {
        0x00..=0x07 => "RLC r8",
        0x08..=0x0F => "RRC r8",
        0x10..=0x17 => "RL r8",
        0x18..=0x1F => "RR r8",
        0x20..=0x27 => "SLA r8",
        0x28..=0x2F => "SRA r8",
        0x30..=0x37 => "SWAP r8",
        0x38..=0x3F => "SRL r8",
        0x40..=0x7F => "BIT u3,r8",
        0x80..=0xBF => "RES u3,r8",
        _ => "SET u3,r8",
    };

    let handler: Handler = match op >> 6 {
        0 => Cpu::exec_cb_shift,
        1 => Cpu::exec_cb_bit,
        _ => Cpu::exec_cb_res_set,
    };

    I::new(mnemonic, 2, handler)
}
