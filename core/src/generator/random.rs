use rand::prelude::*;

use super::*;

/// Uniform sampling without replacement over the whole grid.
///
/// The RNG stream carries over from round to round, so consecutive rounds draw independent layouts. Not `Clone`:
/// a copy would deal the same future layouts as the original.
#[derive(Debug)]
pub struct RandomMineSampler {
    rng: SmallRng,
}

impl RandomMineSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MineSampler for RandomMineSampler {
    fn sample(&mut self, mines: CellCount) -> MineLayout {
        if mines > TOTAL_CELLS {
            log::warn!(
                "Requested {} mines but only {} cells fit, filling the grid",
                mines,
                TOTAL_CELLS
            );
        }
        let mines = mines.min(TOTAL_CELLS);

        // partial Fisher-Yates: the first `mines` slots end up a uniform sample
        let mut cells: [CellIndex; TOTAL_CELLS as usize] = core::array::from_fn(|i| i as CellIndex);
        for i in 0..usize::from(mines) {
            let j = self.rng.random_range(i..cells.len());
            cells.swap(i, j);
        }

        let mut layout = MineLayout::empty();
        for &index in &cells[..usize::from(mines)] {
            if let Some(coords) = cell_coords(index) {
                layout.insert(coords);
            }
        }

        if layout.mine_count() != mines {
            log::warn!(
                "Sampled mine count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                mines
            );
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_valid_count_yields_exact_distinct_mines() {
        let mut sampler = RandomMineSampler::new(7);

        for mines in MIN_MINES..=MAX_MINES {
            let layout = sampler.sample(mines);
            let set = layout.to_set();

            assert_eq!(layout.mine_count(), mines);
            assert_eq!(set.len(), usize::from(mines));
            assert!(set.iter().all(|&index| index < TOTAL_CELLS));
        }
    }

    #[test]
    fn consecutive_rounds_draw_fresh_layouts() {
        let mut sampler = RandomMineSampler::new(42);
        let mut repeats = 0;
        let mut previous = sampler.sample(5);

        for _ in 0..200 {
            let next = sampler.sample(5);
            if next == previous {
                repeats += 1;
            }
            previous = next;
        }

        // 1 in 53130 per pair for 5 of 25
        assert!(repeats <= 1, "{repeats} repeated layouts");
    }

    #[test]
    fn cells_are_mined_with_uniform_frequency() {
        const TRIALS: u32 = 20_000;
        const MINES: CellCount = 5;

        let mut sampler = RandomMineSampler::new(0xC0FFEE);
        let mut hits = [0u32; TOTAL_CELLS as usize];
        for _ in 0..TRIALS {
            for index in sampler.sample(MINES).iter_mines() {
                hits[usize::from(index)] += 1;
            }
        }

        // expected 4000 per cell, standard deviation ~57
        let expected = TRIALS * u32::from(MINES) / u32::from(TOTAL_CELLS);
        for (index, &count) in hits.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < 400,
                "cell {index} mined {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn same_seed_replays_the_same_layouts() {
        let mut a = RandomMineSampler::new(99);
        let mut b = RandomMineSampler::new(99);

        for mines in [1, 3, 24] {
            assert_eq!(a.sample(mines), b.sample(mines));
        }
    }

    #[test]
    fn oversized_request_fills_the_grid() {
        let layout = RandomMineSampler::new(1).sample(TOTAL_CELLS + 3);

        assert_eq!(layout.mine_count(), TOTAL_CELLS);
    }
}
