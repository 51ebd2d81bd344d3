//! Game Boy (DMG) SM83 processor core with its memory bus and ROM-only
//! cartridge support.
//!
//! The crate stops at the CPU/memory boundary: video, audio, timers and
//! input attach to the [`MemoryBus`](machine::MemoryBus) as devices, and the
//! caller decides when to deliver interrupts.

pub mod cpu;
pub mod machine;

pub use cpu::{Cpu, CpuError, Step};
pub use machine::{Cartridge, CartridgeError, GameBoy, MachineConfig, MemoryBus};
