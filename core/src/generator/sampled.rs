use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Uniform sampling without replacement, one mine at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SampledMineGenerator {
    seed: u64,
}

impl SampledMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for SampledMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let placed = place_sampled(&mut mask, config.mines, &mut rng);
        MineLayout::from_generated(mask, placed)
    }
}
