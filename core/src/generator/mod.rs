use rand::Rng;

use crate::*;
pub use density::*;

mod density;

/// Strategy seam for producing a mine layout from a config and an injected
/// random source.
pub trait LayoutGenerator {
    fn generate<R: Rng + ?Sized>(&self, config: &GameConfig, rng: &mut R) -> Result<Minefield>;
}
