use std::sync::Arc;

use dotboy_gb::cpu::{Bus, RunState, INTERRUPT_ENTRY_CYCLES};
use dotboy_gb::machine::{
    BootState, Cartridge, Device, GameBoy, MachineConfig, PowerOnRam, Region,
};

fn rom_with(program: &[u8], handlers: &[(u16, &[u8])]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
    for &(addr, code) in handlers {
        let start = addr as usize;
        rom[start..start + code.len()].copy_from_slice(code);
    }
    rom
}

fn machine(rom: Vec<u8>) -> GameBoy {
    let config = MachineConfig::builder()
        .power_on_ram(PowerOnRam::Zeroed)
        .build();
    let cart = Cartridge::load(rom).unwrap();
    GameBoy::new(Arc::new(cart), config)
}

#[test]
fn counts_down_a_loop() {
    // LD B,0x05
    // loop: DEC B ; JR NZ,loop
    // HALT
    let program = [0x06, 0x05, 0x05, 0x20, 0xFD, 0x76];
    let mut gb = machine(rom_with(&program, &[]));

    let spent = gb.run_cycles(1_000).unwrap();

    assert_eq!(gb.cpu.regs.b, 0);
    assert_eq!(gb.cpu.regs.pc, 0x0106);
    assert!(gb.cpu.is_halted());
    // LD + 5 DEC + 4 taken JR + 1 untaken JR + HALT.
    assert_eq!(spent, 2 + 5 + 4 * 3 + 2 + 1);
}

#[test]
fn driver_delivers_interrupt_to_halted_cpu() {
    // 0x0100: EI ; HALT ; LD A,0x42 ; HALT
    // 0x0040: RETI
    let program = [0xFB, 0x76, 0x3E, 0x42, 0x76];
    let mut gb = machine(rom_with(&program, &[(0x0040, &[0xD9][..])]));

    assert_eq!(gb.run_cycles(100).unwrap(), 2);
    assert_eq!(gb.cpu.run_state(), RunState::Halted);
    assert!(gb.cpu.ime());

    let cycles = gb.cpu.enter_interrupt(&mut gb.bus, 0x0040);
    assert_eq!(cycles, INTERRUPT_ENTRY_CYCLES);
    assert!(!gb.cpu.ime());
    assert_eq!(gb.bus.read16(gb.cpu.regs.sp), 0x0102);

    assert_eq!(gb.run_cycles(100).unwrap(), 4 + 2 + 1);
    assert_eq!(gb.cpu.regs.a, 0x42);
    assert!(gb.cpu.ime());
    assert!(gb.cpu.is_halted());
}

/// Minimal joypad-style register: reads return the last write with the
/// upper bits set.
struct Latch(u8);

impl Device for Latch {
    fn read(&mut self, _offset: u16) -> u8 {
        self.0 | 0xC0
    }

    fn write(&mut self, _offset: u16, value: u8) {
        self.0 = value & 0x3F;
    }
}

#[test]
fn program_talks_to_attached_io_device() {
    // LD A,0x10 ; LDH (0x00),A ; LDH A,(0x00) ; HALT
    let program = [0x3E, 0x10, 0xE0, 0x00, 0xF0, 0x00, 0x76];
    let mut gb = machine(rom_with(&program, &[]));
    gb.bus.attach(Region::Io, Box::new(Latch(0))).unwrap();

    gb.run_cycles(100).unwrap();

    assert_eq!(gb.cpu.regs.a, 0xD0);
}

#[test]
fn zeroed_boot_state_starts_at_address_zero() {
    let config = MachineConfig::builder()
        .power_on_ram(PowerOnRam::Zeroed)
        .boot_state(BootState::Zeroed)
        .build();
    let cart = Cartridge::load(rom_with(&[], &[(0x0000, &[0x76][..])])).unwrap();
    let mut gb = GameBoy::new(Arc::new(cart), config);

    assert_eq!(gb.cpu.regs.pc, 0x0000);
    assert_eq!(gb.cpu.regs.sp, 0x0000);

    let step = gb.step().unwrap();
    assert_eq!(step.length, 1);
    assert!(gb.cpu.is_halted());

    gb.reset();
    assert_eq!(gb.cpu.run_state(), RunState::Normal);
    assert_eq!(gb.cpu.regs.pc, 0x0000);
}

#[test]
fn stack_lives_in_high_ram_after_boot() {
    // CALL 0x0200 ; (0x0200) HALT
    let mut gb = machine(rom_with(&[0xCD, 0x00, 0x02], &[(0x0200, &[0x76][..])]));

    gb.run_cycles(100).unwrap();

    assert_eq!(gb.cpu.regs.sp, 0xFFFC);
    assert_eq!(gb.bus.read16(0xFFFC), 0x0103);
}
