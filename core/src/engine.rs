use alloc::collections::BTreeSet;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    Idle,
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for RoundStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// Everything that belongs to the live round. Replaced wholesale on start and reset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Round {
    config: Option<RoundConfig>,
    mine_layout: MineLayout,
    opened: BTreeSet<CellIndex>,
    status: RoundStatus,
    triggered_mine: Option<CellIndex>,
}

impl Round {
    fn new(config: RoundConfig, mine_layout: MineLayout) -> Self {
        Self {
            config: Some(config),
            mine_layout,
            opened: BTreeSet::new(),
            status: RoundStatus::Playing,
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> Option<RoundConfig> {
        self.config
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn opened_cells(&self) -> &BTreeSet<CellIndex> {
        &self.opened
    }

    pub fn triggered_mine(&self) -> Option<CellIndex> {
        self.triggered_mine
    }

    pub fn safe_opened(&self) -> CellCount {
        // bounded by TOTAL_CELLS
        self.opened.len() as CellCount
    }

    pub fn stake(&self) -> Money {
        self.config.map_or(Money::ZERO, |config| config.stake)
    }

    pub fn multiplier(&self) -> Multiplier {
        match self.config {
            Some(config) => multiplier(self.safe_opened(), config.mines),
            None => Multiplier::ONE,
        }
    }

    pub fn potential_win(&self) -> Money {
        potential_win(self.stake(), self.multiplier())
    }
}

/// The round state machine. Owns the current round and the mine sampler; the balance lives in a [`Ledger`] the
/// caller passes to the commands that move money.
///
/// Every command either applies completely or returns a [`Rejection`] and leaves the engine untouched.
#[derive(Clone, Debug)]
pub struct RoundEngine<S = RandomMineSampler> {
    sampler: S,
    round: Round,
}

impl RoundEngine<RandomMineSampler> {
    pub fn with_seed(seed: u64) -> Self {
        Self::new(RandomMineSampler::new(seed))
    }
}

impl<S: MineSampler> RoundEngine<S> {
    pub fn new(sampler: S) -> Self {
        Self {
            sampler,
            round: Round::default(),
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn status(&self) -> RoundStatus {
        self.round.status
    }

    pub fn is_opened(&self, index: CellIndex) -> bool {
        self.round.opened.contains(&index)
    }

    pub fn multiplier(&self) -> Multiplier {
        self.round.multiplier()
    }

    pub fn potential_win(&self) -> Money {
        self.round.potential_win()
    }

    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    /// Debits `stake` and deals a fresh layout of `mines` mines.
    pub fn start(&mut self, ledger: &mut Ledger, stake: Money, mines: CellCount) -> Result<()> {
        if self.round.status.is_playing() {
            return self.reject(Rejection::RoundInProgress);
        }
        let config = match RoundConfig::checked(stake, mines) {
            Ok(config) => config,
            Err(rejection) => return self.reject(rejection),
        };
        if !ledger.can_afford(stake) {
            return self.reject(Rejection::InsufficientBalance {
                stake,
                balance: ledger.balance(),
            });
        }

        let layout = self.sampler.sample(config.mines);
        if layout.mine_count() != config.mines {
            return self.reject(Rejection::LayoutMismatch {
                expected: config.mines,
                actual: layout.mine_count(),
            });
        }
        let balance = ledger.debit(stake);
        self.round = Round::new(config, layout);

        log::debug!("Round started: stake {stake}, {mines} mines, balance {balance}");
        Ok(())
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        if cell_coords(index).is_none() {
            return self.reject(Rejection::InvalidCell(index));
        }
        self.check_playing()?;

        if self.round.opened.contains(&index) {
            return Ok(RevealOutcome::NoChange);
        }

        if self.round.mine_layout.contains_mine(index) {
            self.round.status = RoundStatus::Lost;
            self.round.triggered_mine = Some(index);
            log::debug!("Mine hit at cell {index}, stake {} lost", self.round.stake());
            return Ok(RevealOutcome::HitMine);
        }

        self.round.opened.insert(index);
        log::debug!(
            "Safe cell {index}, {} opened, {}",
            self.round.safe_opened(),
            self.round.multiplier()
        );
        Ok(RevealOutcome::Safe)
    }

    /// Credits the current potential win and ends the round. Returns the amount paid.
    pub fn cashout(&mut self, ledger: &mut Ledger) -> Result<Money> {
        self.check_playing()?;
        if self.round.opened.is_empty() {
            return self.reject(Rejection::NothingToCashOut);
        }

        let win = self.round.potential_win();
        let balance = ledger.credit(win);
        self.round.status = RoundStatus::Won;

        log::debug!("Cashed out {win} at {}, balance {balance}", self.round.multiplier());
        Ok(win)
    }

    /// Drops the current round, whatever its state. A stake already debited stays debited.
    pub fn reset(&mut self) {
        if self.round.status.is_playing() {
            log::debug!("Round abandoned, stake {} forfeited", self.round.stake());
        }
        self.round = Round::default();
    }

    fn check_playing(&self) -> Result<()> {
        if self.round.status.is_playing() {
            Ok(())
        } else {
            self.reject(Rejection::NotPlaying)
        }
    }

    fn reject<T>(&self, rejection: Rejection) -> Result<T> {
        log::debug!("Rejected in {:?}: {rejection}", self.round.status);
        Err(rejection)
    }
}
