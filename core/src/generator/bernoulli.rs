use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Acceptance probability of the first pass, and the increment after each
/// full pass.
pub const PROBABILITY_STEP: f64 = 0.01;

/// Passes made before the remaining mines are sampled exactly.
pub const MAX_PASSES: u32 = 64;

/// Sweeps the grid in row-major passes, accepting each free cell as a mine
/// with a probability that grows after every pass, until the mine count is
/// reached.
///
/// The sweep is capped at [`MAX_PASSES`] unless set otherwise. Whatever is still missing then is
/// placed through uniform sampling over the free cells, so generation always
/// terminates with the exact count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BernoulliMineGenerator {
    seed: u64,
    max_passes: u32,
}

impl BernoulliMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_max_passes(seed, MAX_PASSES)
    }

    /// Same sweep with a custom pass cap, `0` skips straight to sampling.
    pub fn with_max_passes(seed: u64, max_passes: u32) -> Self {
        Self { seed, max_passes }
    }
}

impl MineGenerator for BernoulliMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let target = config.mines.min(config.total_cells());
        let mut placed: CellCount = 0;
        let mut probability = PROBABILITY_STEP;
        let mut passes = 0;

        'passes: while placed < target && passes < self.max_passes {
            for is_mine in mask.iter_mut() {
                if *is_mine {
                    continue;
                }
                if rng.random_bool(probability) {
                    *is_mine = true;
                    placed += 1;
                    if placed == target {
                        break 'passes;
                    }
                }
            }
            passes += 1;
            probability = (probability + PROBABILITY_STEP).min(1.0);
        }

        if placed < target {
            log::debug!(
                "Mine sweep stopped after {} passes with {} of {} mines, sampling the rest",
                passes,
                placed,
                target
            );
            placed += place_sampled(&mut mask, target - placed, &mut rng);
        }

        log::debug!(
            "Generated {}x{} layout with {} mines (seed {})",
            config.rows(),
            config.columns(),
            placed,
            self.seed
        );
        MineLayout::from_generated(mask, placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(rows: i32, columns: i32, mines: i32, seed: u64) -> MineLayout {
        let config = GameConfig::new(rows, columns, mines).unwrap();
        BernoulliMineGenerator::new(seed).generate(config)
    }

    #[test]
    fn places_exact_count_for_presets() {
        for difficulty in Difficulty::PLAYABLE {
            let config = difficulty.config().unwrap();
            for seed in 0..10 {
                let layout = BernoulliMineGenerator::new(seed).generate(config);
                assert_eq!(layout.mine_count(), config.mines, "{difficulty} seed {seed}");
                assert_eq!(layout.size(), config.size);
            }
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        assert_eq!(generate(12, 9, 20, 42), generate(12, 9, 20, 42));
    }

    #[test]
    fn different_seeds_usually_differ() {
        let first = generate(16, 16, 40, 1);
        let distinct = (2..10).filter(|&seed| generate(16, 16, 40, seed) != first).count();

        assert!(distinct > 0);
    }

    #[test]
    fn near_full_boards_terminate() {
        for seed in 0..10 {
            let layout = generate(2, 2, 3, seed);
            assert_eq!(layout.mine_count(), 3);

            let layout = generate(10, 10, 99, seed);
            assert_eq!(layout.mine_count(), 99);
        }
    }

    #[test]
    fn sparse_boards_place_exact_count() {
        // a single mine on a single row has only a few chances per pass
        for seed in 0..20 {
            let layout = generate(1, 2, 1, seed);
            assert_eq!(layout.mine_count(), 1);
        }
    }

    #[test]
    fn pass_cap_hands_the_rest_to_sampling() {
        let config = GameConfig::new(9, 9, 80).unwrap();
        for seed in 0..10 {
            let layout = BernoulliMineGenerator::with_max_passes(seed, 0).generate(config);
            assert_eq!(layout.mine_count(), 80);
            assert_eq!(
                layout,
                BernoulliMineGenerator::with_max_passes(seed, 0).generate(config)
            );
            // no sweep ran, so the rng is untouched when sampling starts
            assert_eq!(layout, SampledMineGenerator::new(seed).generate(config));

            let layout = BernoulliMineGenerator::with_max_passes(seed, 1).generate(config);
            assert_eq!(layout.mine_count(), 80);
            assert_eq!(
                layout,
                BernoulliMineGenerator::with_max_passes(seed, 1).generate(config)
            );
        }
    }

    #[test]
    fn mines_reach_late_cells() {
        let mut hit_last_row = false;
        for seed in 0..20 {
            let layout = generate(9, 9, 10, seed);
            hit_last_row |= layout.mine_coords().iter().any(|&(x, _)| x == 8);
        }

        assert!(hit_last_row);
    }
}
