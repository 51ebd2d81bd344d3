use crate::cpu::table::{Decoded, Outcome};
use crate::cpu::{Bus, Cpu, R16, R8};

/// HL adjustment applied by the `(HL+)` / `(HL-)` forms.
fn indirect_address(cpu: &mut Cpu, opcode: u8) -> u16 {
    match (opcode >> 4) & 0x03 {
        0 => cpu.regs.bc(),
        1 => cpu.regs.de(),
        2 => {
            let hl = cpu.regs.hl();
            cpu.regs.set_hl(hl.wrapping_add(1));
            hl
        }
        _ => {
            let hl = cpu.regs.hl();
            cpu.regs.set_hl(hl.wrapping_sub(1));
            hl
        }
    }
}

impl Cpu {
    pub(in crate::cpu) fn exec_ld_r16_n16(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!(matches!(op.opcode, 0x01 | 0x11 | 0x21 | 0x31));

        let value = self.imm16(bus, op);
        self.regs.set16(R16::from_bits(op.opcode >> 4), value);
        Outcome::next(op, 3)
    }

    pub(in crate::cpu) fn exec_ld_r8_n8(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let reg = R8::from_bits(op.opcode >> 3);
        let value = self.imm8(bus, op);
        self.write_r8(bus, reg, value);

        Outcome::next(op, if reg == R8::HlInd { 3 } else { 2 })
    }

    pub(in crate::cpu) fn exec_ld_r8_r8(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!((0x40..=0x7F).contains(&op.opcode) && op.opcode != 0x76);

        let dst = R8::from_bits(op.opcode >> 3);
        let src = R8::from_bits(op.opcode);
        let value = self.read_r8(bus, src);
        self.write_r8(bus, dst, value);

        let memory = dst == R8::HlInd || src == R8::HlInd;
        Outcome::next(op, if memory { 2 } else { 1 })
    }

    pub(in crate::cpu) fn exec_ld_ind_a(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!(matches!(op.opcode, 0x02 | 0x12 | 0x22 | 0x32));

        let addr = indirect_address(self, op.opcode);
        bus.write8(addr, self.regs.a);
        Outcome::next(op, 2)
    }

    pub(in crate::cpu) fn exec_ld_a_ind(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        debug_assert!(matches!(op.opcode, 0x0A | 0x1A | 0x2A | 0x3A));

        let addr = indirect_address(self, op.opcode);
        self.regs.a = bus.read8(addr);
        Outcome::next(op, 2)
    }

    pub(in crate::cpu) fn exec_ld_n16_sp(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let addr = self.imm16(bus, op);
        bus.write16(addr, self.regs.sp);
        Outcome::next(op, 5)
    }

    pub(in crate::cpu) fn exec_ldh_n8_a(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let addr = 0xFF00 | u16::from(self.imm8(bus, op));
        bus.write8(addr, self.regs.a);
        Outcome::next(op, 3)
    }

    pub(in crate::cpu) fn exec_ldh_a_n8(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let addr = 0xFF00 | u16::from(self.imm8(bus, op));
        self.regs.a = bus.read8(addr);
        Outcome::next(op, 3)
    }

    pub(in crate::cpu) fn exec_ldh_c_a(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let addr = 0xFF00 | u16::from(self.regs.c);
        bus.write8(addr, self.regs.a);
        Outcome::next(op, 2)
    }

    pub(in crate::cpu) fn exec_ldh_a_c(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let addr = 0xFF00 | u16::from(self.regs.c);
        self.regs.a = bus.read8(addr);
        Outcome::next(op, 2)
    }

    pub(in crate::cpu) fn exec_ld_n16_a(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let addr = self.imm16(bus, op);
        bus.write8(addr, self.regs.a);
        Outcome::next(op, 4)
    }

    pub(in crate::cpu) fn exec_ld_a_n16(&mut self, bus: &mut dyn Bus, op: Decoded) -> Outcome {
        let addr = self.imm16(bus, op);
        self.regs.a = bus.read8(addr);
        Outcome::next(op, 4)
    }

    pub(in crate::cpu) fn exec_ld_sp_hl(&mut self, _bus: &mut dyn Bus, op: Decoded) -> Outcome {
        self.regs.sp = self.regs.hl();
        Outcome::next(op, 2)
    }
}
