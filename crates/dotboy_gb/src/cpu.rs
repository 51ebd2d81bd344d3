mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;
mod table;

use thiserror::Error;

use crate::machine::BootState;

pub use bus::Bus;
pub use interrupts::INTERRUPT_ENTRY_CYCLES;
pub use regs::{Cond, Flags, Registers, R16, R16Stack, R8};
pub use table::Instruction;

/// First byte of every two-byte (bit operation) opcode.
pub const PREFIX_CB: u8 = 0xCB;

/// Execution state of the processor between instructions.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum RunState {
    #[default]
    Normal,
    /// Entered by HALT. Left when the driver delivers an interrupt.
    Halted,
    /// Entered by STOP.
    Stopped,
    /// An illegal opcode hung the CPU. Only `reset` leaves this state.
    Locked { opcode: u8, address: u16 },
}

/// Result of one call to [`Cpu::step`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Step {
    /// Encoded length of the executed instruction in bytes (0 while idle).
    pub length: u8,
    /// Cost in M-cycles (one M-cycle is four clock ticks).
    pub cycles: u8,
}

impl Step {
    /// Cost of one idle cycle while halted or stopped.
    pub const IDLE: Step = Step {
        length: 0,
        cycles: 1,
    };
}

#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum CpuError {
    #[error("CPU locked up: illegal opcode 0x{opcode:02X} at 0x{address:04X}")]
    Locked { opcode: u8, address: u16 },
}

/// SM83 processor core.
///
/// Owns the register file, the interrupt master enable and the run state.
/// Memory is reached only through the [`Bus`] passed to [`Cpu::step`].
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable.
    ime: bool,
    /// Set by EI; committed to `ime` once the following instruction ends.
    ime_pending: bool,
    state: RunState,
    /// Register state restored by [`Cpu::reset`].
    boot_state: BootState,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.set_flag(flag, value);
    }

    pub fn ime(&self) -> bool {
        self.ime
    }

    pub fn ime_pending(&self) -> bool {
        self.ime_pending
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    pub fn is_stopped(&self) -> bool {
        self.state == RunState::Stopped
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, RunState::Locked { .. })
    }
}
