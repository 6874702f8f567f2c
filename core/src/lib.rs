#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use host::*;
pub use ledger::*;
pub use money::*;
pub use payout::*;
pub use table::*;
pub use types::*;
pub use view::*;

mod engine;
mod error;
mod generator;
mod host;
mod ledger;
mod money;
mod payout;
mod table;
mod types;
mod view;

/// Parameters of a single round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub stake: Money,
    pub mines: CellCount,
}

impl RoundConfig {
    pub const fn new_unchecked(stake: Money, mines: CellCount) -> Self {
        Self { stake, mines }
    }

    /// Clamps the mine count into the playable range and negative stakes to zero.
    pub fn new(stake: Money, mines: CellCount) -> Self {
        let stake = stake.max(Money::ZERO);
        let mines = mines.clamp(MIN_MINES, MAX_MINES);
        Self::new_unchecked(stake, mines)
    }

    /// Accepts only a positive stake and a mine count that leaves at least one safe cell.
    pub fn checked(stake: Money, mines: CellCount) -> Result<Self> {
        if !stake.is_positive() {
            return Err(Rejection::InvalidStake(stake));
        }
        if !(MIN_MINES..=MAX_MINES).contains(&mines) {
            return Err(Rejection::InvalidMineCount(mines));
        }
        Ok(Self::new_unchecked(stake, mines))
    }

    pub const fn safe_cells(&self) -> CellCount {
        TOTAL_CELLS.saturating_sub(self.mines)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn empty() -> Self {
        Self {
            mine_mask: Array2::default((GRID_SIZE, GRID_SIZE).to_nd_index()),
            mine_count: 0,
        }
    }

    /// Builds a layout from mine indices; duplicates collapse into one mine.
    pub fn from_cells(cells: &[CellIndex]) -> Result<Self> {
        let mut layout = Self::empty();

        for &index in cells {
            let coords = cell_coords(index).ok_or(Rejection::InvalidCell(index))?;
            layout.insert(coords);
        }

        Ok(layout)
    }

    pub(crate) fn insert(&mut self, coords: Coord2) {
        let slot = &mut self.mine_mask[coords.to_nd_index()];
        if !*slot {
            *slot = true;
            self.mine_count += 1;
        }
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        TOTAL_CELLS - self.mine_count
    }

    /// Off-grid indices never hold a mine.
    pub fn contains_mine(&self, index: CellIndex) -> bool {
        cell_coords(index).is_some_and(|coords| self[coords])
    }

    /// Mine indices in ascending order.
    pub fn iter_mines(&self) -> impl Iterator<Item = CellIndex> + '_ {
        (0..TOTAL_CELLS).filter(|&index| self.contains_mine(index))
    }

    pub fn to_set(&self) -> BTreeSet<CellIndex> {
        self.iter_mines().collect()
    }
}

impl Default for MineLayout {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Safe,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Safe => true,
            HitMine => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_config_rejects_bad_input() {
        let stake = Money::from_units(100);

        assert_eq!(
            RoundConfig::checked(Money::ZERO, 3),
            Err(Rejection::InvalidStake(Money::ZERO))
        );
        assert_eq!(
            RoundConfig::checked(stake, 0),
            Err(Rejection::InvalidMineCount(0))
        );
        assert_eq!(
            RoundConfig::checked(stake, TOTAL_CELLS),
            Err(Rejection::InvalidMineCount(TOTAL_CELLS))
        );
        assert_eq!(
            RoundConfig::checked(stake, MAX_MINES),
            Ok(RoundConfig::new_unchecked(stake, MAX_MINES))
        );
    }

    #[test]
    fn new_config_clamps() {
        let config = RoundConfig::new(Money::from_cents(-5), 40);

        assert_eq!(config.stake, Money::ZERO);
        assert_eq!(config.mines, MAX_MINES);
        assert_eq!(RoundConfig::new(Money::ZERO, 0).mines, MIN_MINES);
    }

    #[test]
    fn layout_from_cells_dedups_and_validates() {
        let layout = MineLayout::from_cells(&[3, 3, 24]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.safe_cell_count(), 23);
        assert!(layout.contains_mine(24));
        assert!(!layout.contains_mine(TOTAL_CELLS));
        assert_eq!(layout.iter_mines().collect::<alloc::vec::Vec<_>>(), [3, 24]);

        assert_eq!(
            MineLayout::from_cells(&[25]),
            Err(Rejection::InvalidCell(25))
        );
    }
}
