use ndarray::Array2;
use rand::{Rng, RngExt};

use super::*;

/// Generation strategy that decides each cell independently: one uniform
/// `[0, 1)` draw per cell, in row-major order, and the cell is a mine iff the
/// draw falls below the configured probability.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DensityGenerator;

impl LayoutGenerator for DensityGenerator {
    fn generate<R: Rng + ?Sized>(&self, config: &GameConfig, rng: &mut R) -> Result<Minefield> {
        config.validate()?;

        let mut mines: Array2<bool> = Array2::default(config.size.to_index());
        // standard layout, so iter_mut walks cells row by row
        for cell in mines.iter_mut() {
            *cell = rng.random::<f64>() < config.mine_probability;
        }

        let field = Minefield::from_mine_mask(mines);
        if field.safe_cell_count() == 0 {
            log::warn!(
                "generated minefield has no safe cells ({} mines), it can never be cleared",
                field.mine_count()
            );
        }
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use core::convert::Infallible;
    use rand::{SeedableRng, TryRng};

    /// Replays a fixed list of raw draws, cycling when exhausted. `0` maps to
    /// a uniform value of exactly 0.0 and `u64::MAX` to just below 1.0.
    struct SequenceRng {
        values: &'static [u64],
        index: usize,
    }

    impl SequenceRng {
        fn new(values: &'static [u64]) -> Self {
            Self { values, index: 0 }
        }
    }

    impl TryRng for SequenceRng {
        type Error = Infallible;

        fn try_next_u32(&mut self) -> core::result::Result<u32, Infallible> {
            self.try_next_u64().map(|value| value as u32)
        }

        fn try_next_u64(&mut self) -> core::result::Result<u64, Infallible> {
            let value = self.values[self.index % self.values.len()];
            self.index += 1;
            Ok(value)
        }

        fn try_fill_bytes(&mut self, dst: &mut [u8]) -> core::result::Result<(), Infallible> {
            for chunk in dst.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
            Ok(())
        }
    }

    #[test]
    fn draws_are_consumed_in_row_major_order() {
        let mut rng = SequenceRng::new(&[0, u64::MAX, u64::MAX, 0]);
        let config = GameConfig::new((2, 2), 0.5);

        let field = DensityGenerator.generate(&config, &mut rng).unwrap();

        assert!(field.contains_mine((0, 0)));
        assert!(!field.contains_mine((0, 1)));
        assert!(!field.contains_mine((1, 0)));
        assert!(field.contains_mine((1, 1)));
    }

    #[test]
    fn same_seed_reproduces_the_same_field() {
        let config = GameConfig::new((8, 8), 0.3);

        let a = DensityGenerator
            .generate(&config, &mut SmallRng::seed_from_u64(42))
            .unwrap();
        let b = DensityGenerator
            .generate(&config, &mut SmallRng::seed_from_u64(42))
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn zero_probability_places_no_mines() {
        let config = GameConfig::new((5, 5), 0.0);
        let field = DensityGenerator
            .generate(&config, &mut SmallRng::seed_from_u64(7))
            .unwrap();

        assert_eq!(field.mine_count(), 0);
    }

    #[test]
    fn full_probability_fills_the_field() {
        let config = GameConfig::new((4, 6), 1.0);
        let field = DensityGenerator
            .generate(&config, &mut SmallRng::seed_from_u64(7))
            .unwrap();

        assert_eq!(field.mine_count(), field.total_cells());
        assert_eq!(field.safe_cell_count(), 0);
    }

    #[test]
    fn invalid_config_is_rejected_before_drawing() {
        let mut rng = SequenceRng::new(&[0]);

        let result = DensityGenerator.generate(&GameConfig::new((0, 4), 0.2), &mut rng);

        assert_eq!(result, Err(GameError::InvalidConfig));
        assert_eq!(rng.index, 0);
    }
}
