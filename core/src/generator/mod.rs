use alloc::vec::Vec;
use ndarray::Array2;
use rand::Rng;
use rand::seq::index;

use crate::*;
pub use bernoulli::*;
pub use sampled::*;

mod bernoulli;
mod sampled;

pub trait MineGenerator {
    /// Lays out exactly `config.mines` mines, the config is expected to be
    /// valid already.
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// Places up to `count` more mines uniformly among the free cells of `mask`,
/// returning how many were placed.
pub(crate) fn place_sampled(
    mask: &mut Array2<bool>,
    count: CellCount,
    rng: &mut impl Rng,
) -> CellCount {
    let free: Vec<(usize, usize)> = mask
        .indexed_iter()
        .filter(|&(_, &is_mine)| !is_mine)
        .map(|(position, _)| position)
        .collect();
    let amount = usize::from(count).min(free.len());

    for picked in index::sample(rng, free.len(), amount) {
        mask[free[picked]] = true;
    }

    amount as CellCount
}
