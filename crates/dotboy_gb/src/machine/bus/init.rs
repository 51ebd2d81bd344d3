use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::MemoryBus;
use crate::machine::config::PowerOnRam;

impl MemoryBus {
    /// Fill work RAM and high RAM according to the power-on policy.
    ///
    /// Echo RAM needs no separate seeding: it has no storage of its own and
    /// reads through to work RAM.
    pub(super) fn apply_power_on_ram(&mut self, policy: PowerOnRam) {
        match policy {
            PowerOnRam::Zeroed => {
                self.wram.fill(0);
                self.hram.fill(0);
            }
            PowerOnRam::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.randomize_internal_ram(&mut rng);
            }
            PowerOnRam::Entropy => {
                let mut rng = StdRng::from_entropy();
                self.randomize_internal_ram(&mut rng);
            }
        }
    }

    fn randomize_internal_ram<R: Rng>(&mut self, rng: &mut R) {
        rng.fill(&mut self.wram[..]);
        rng.fill(&mut self.hram[..]);
    }
}
