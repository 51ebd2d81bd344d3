//! Handlers for the unprefixed opcode table.
//!
//! Every handler has the [`Handler`](super::table::Handler) signature: it
//! performs the instruction's register and memory effects and returns the
//! address execution continues at together with the M-cycle cost.

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;
