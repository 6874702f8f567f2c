use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of mine layouts. Swap in a verifiable implementation when provable fairness is required.
pub trait MineSampler {
    /// Returns a layout holding exactly `mines` distinct mines.
    fn sample(&mut self, mines: CellCount) -> MineLayout;
}
