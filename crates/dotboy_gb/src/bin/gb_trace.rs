use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use dotboy_gb::machine::{Cartridge, GameBoy, MachineConfig, PowerOnRam};

const USAGE: &str = "Usage: gb_trace <rom_path> [max_steps]";
const DEFAULT_MAX_STEPS: u64 = 1_000_000;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let max_steps: u64 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid step budget '{raw}'"))?,
        None => DEFAULT_MAX_STEPS,
    };

    let cartridge = Cartridge::from_file(&rom_path)
        .with_context(|| format!("failed to load ROM '{}'", rom_path.display()))?;
    println!(
        "{}: {} bytes type=0x{:02X} rom_code=0x{:02X} checksum_ok={}",
        cartridge.title(),
        cartridge.size(),
        cartridge.cartridge_type(),
        cartridge.rom_size_code(),
        cartridge.header_checksum_ok(),
    );

    let config = MachineConfig::builder()
        .power_on_ram(PowerOnRam::Zeroed)
        .build();
    let mut gb = GameBoy::new(Arc::new(cartridge), config);

    let mut steps = 0u64;
    let mut cycles = 0u64;
    let mut failure = None;
    while steps < max_steps {
        if gb.cpu.is_halted() || gb.cpu.is_stopped() {
            break;
        }
        match gb.step() {
            Ok(step) => {
                steps += 1;
                cycles += u64::from(step.cycles);
            }
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    let regs = &gb.cpu.regs;
    println!("steps={steps} m_cycles={cycles} state={:?}", gb.cpu.run_state());
    println!(
        "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X} IME={}",
        regs.af(),
        regs.bc(),
        regs.de(),
        regs.hl(),
        regs.sp,
        regs.pc,
        u8::from(gb.cpu.ime()),
    );

    if let Some(err) = failure {
        return Err(err).context("execution stopped");
    }
    Ok(())
}
