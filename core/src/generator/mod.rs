use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Produces a fresh, annotated board for a configuration. Called again on every replay.
pub trait BoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Board;
}
