use typed_builder::TypedBuilder;

/// Seed used when nothing else is requested, so runs are reproducible.
pub const DEFAULT_RAM_SEED: u64 = 0xC0DE_1234;

/// Power-on contents of work RAM and high RAM.
///
/// Hardware powers up with indeterminate values. Software must not depend
/// on them, so the default fills both areas with seeded pseudo-random bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PowerOnRam {
    Seeded(u64),
    Entropy,
    Zeroed,
}

impl Default for PowerOnRam {
    fn default() -> Self {
        PowerOnRam::Seeded(DEFAULT_RAM_SEED)
    }
}

/// Register state the processor starts from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum BootState {
    /// Values the DMG boot ROM leaves behind when it jumps to 0x0100.
    #[default]
    PostBoot,
    /// Every register cleared, PC=0x0000.
    Zeroed,
}

#[derive(Copy, Clone, Debug, TypedBuilder)]
pub struct MachineConfig {
    #[builder(default)]
    pub power_on_ram: PowerOnRam,
    #[builder(default)]
    pub boot_state: BootState,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
