use alloc::collections::BTreeSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer should draw in one grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Safe,
    Mine,
    TriggeredMine,
}

impl CellView {
    pub const fn is_revealed(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Snapshot handed to the presentation layer after every command.
///
/// `mine_layout` is only disclosed once the round is lost. Multiplier and potential win are recomputed from the
/// round when the snapshot is taken.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundView {
    pub status: RoundStatus,
    pub opened_cells: BTreeSet<CellIndex>,
    pub mine_layout: Option<BTreeSet<CellIndex>>,
    pub triggered_mine: Option<CellIndex>,
    pub mine_count: CellCount,
    pub stake: Money,
    pub safe_opened: CellCount,
    pub multiplier: Multiplier,
    pub potential_win: Money,
    pub balance: Money,
}

impl RoundView {
    /// Snapshot of `round`; with no round dealt, `preview` supplies the stake and mine count shown.
    pub fn new(round: &Round, balance: Money, preview: RoundConfig) -> Self {
        let config = round.config().unwrap_or(preview);
        let safe_opened = round.safe_opened();
        let multiplier = multiplier(safe_opened, config.mines);
        let mine_layout = match round.status() {
            RoundStatus::Lost => Some(round.mine_layout().to_set()),
            _ => None,
        };

        Self {
            status: round.status(),
            opened_cells: round.opened_cells().clone(),
            mine_layout,
            triggered_mine: round.triggered_mine(),
            mine_count: config.mines,
            stake: config.stake,
            safe_opened,
            multiplier,
            potential_win: potential_win(config.stake, multiplier),
            balance,
        }
    }

    pub fn cell_at(&self, index: CellIndex) -> CellView {
        if self.triggered_mine == Some(index) {
            CellView::TriggeredMine
        } else if self.opened_cells.contains(&index) {
            CellView::Safe
        } else if self
            .mine_layout
            .as_ref()
            .is_some_and(|mines| mines.contains(&index))
        {
            CellView::Mine
        } else {
            CellView::Hidden
        }
    }

    pub fn is_revealed(&self, index: CellIndex) -> bool {
        self.cell_at(index).is_revealed()
    }

    /// The whole board laid out as `GRID_SIZE` rows.
    pub fn cells(&self) -> Array2<CellView> {
        let mut cells = Array2::default((GRID_SIZE, GRID_SIZE).to_nd_index());
        for index in 0..TOTAL_CELLS {
            if let Some(coords) = cell_coords(index) {
                cells[coords.to_nd_index()] = self.cell_at(index);
            }
        }
        cells
    }

    /// Whether a cell click would be accepted right now.
    pub fn can_reveal(&self, index: CellIndex) -> bool {
        self.status.is_playing() && index < TOTAL_CELLS && !self.is_revealed(index)
    }

    pub fn can_cash_out(&self) -> bool {
        self.status.is_playing() && self.safe_opened > 0
    }
}
