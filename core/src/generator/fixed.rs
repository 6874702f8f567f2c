use alloc::collections::VecDeque;

use super::*;

/// Replays pre-arranged layouts in order, then falls back to the last one.
///
/// The engine refuses to start a round when the replayed layout does not hold the requested mine count.
///
/// Useful for replaying a verifiable draw made elsewhere, and for scripted rounds.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineSampler {
    queue: VecDeque<MineLayout>,
    last: MineLayout,
}

impl FixedMineSampler {
    pub fn new(layout: MineLayout) -> Self {
        Self {
            queue: VecDeque::new(),
            last: layout,
        }
    }

    pub fn from_cells(cells: &[CellIndex]) -> Result<Self> {
        MineLayout::from_cells(cells).map(Self::new)
    }

    /// Queues `layout` to be handed out before the current fallback.
    pub fn push(&mut self, layout: MineLayout) {
        self.queue.push_back(layout);
    }
}

impl MineSampler for FixedMineSampler {
    fn sample(&mut self, mines: CellCount) -> MineLayout {
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }

        if self.last.mine_count() != mines {
            log::warn!(
                "Fixed layout holds {} mines but {} were requested",
                self.last.mine_count(),
                mines
            );
        }
        self.last.clone()
    }
}
