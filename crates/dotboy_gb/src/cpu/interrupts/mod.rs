mod ime;
mod service;

pub use service::INTERRUPT_ENTRY_CYCLES;
