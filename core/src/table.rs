use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_STAKE: Money = Money::from_units(100);
pub const DEFAULT_MINES: CellCount = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub starting_balance: Money,
    pub default_stake: Money,
    pub default_mines: CellCount,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_BALANCE,
            default_stake: DEFAULT_STAKE,
            default_mines: DEFAULT_MINES,
        }
    }
}

/// Stake and mine count for the next round. Locked while a round is in play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetSlip {
    config: RoundConfig,
}

impl BetSlip {
    pub fn new(stake: Money, mines: CellCount) -> Self {
        Self {
            config: RoundConfig::new(stake, mines),
        }
    }

    pub fn stake(&self) -> Money {
        self.config.stake
    }

    pub fn mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn config(&self) -> RoundConfig {
        self.config
    }
}

/// One player's seat: the round engine, their balance, and the host they are playing in.
///
/// Commands return the engine's outcome; read [`MinesTable::view`] afterwards for the new state.
#[derive(Debug)]
pub struct MinesTable<S = RandomMineSampler, H = NoHost> {
    engine: RoundEngine<S>,
    ledger: Ledger,
    slip: BetSlip,
    host: H,
}

impl MinesTable<RandomMineSampler, NoHost> {
    /// Standalone table. `seed` must come from a fresh entropy source for every session.
    pub fn from_config(config: TableConfig, seed: u64) -> Self {
        Self::new(config, RandomMineSampler::new(seed), NoHost)
    }
}

impl<S: MineSampler, H: HostPlatform> MinesTable<S, H> {
    /// Builds the table and performs the host launch handshake.
    pub fn new(config: TableConfig, sampler: S, mut host: H) -> Self {
        host.ready();
        host.expand();
        log::debug!(
            "Table opened for {} with balance {}",
            resolve_display_name(&host),
            config.starting_balance
        );

        Self {
            engine: RoundEngine::new(sampler),
            ledger: Ledger::new(config.starting_balance),
            slip: BetSlip::new(config.default_stake, config.default_mines),
            host,
        }
    }

    pub fn engine(&self) -> &RoundEngine<S> {
        &self.engine
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn slip(&self) -> BetSlip {
        self.slip
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn player_name(&self) -> String {
        resolve_display_name(&self.host)
    }

    pub fn view(&self) -> RoundView {
        RoundView::new(self.engine.round(), self.ledger.balance(), self.slip.config())
    }

    /// Ignored while a round is in play. Negative amounts become zero.
    pub fn set_stake(&mut self, stake: Money) {
        if self.engine.status().is_playing() {
            log::debug!("Stake locked while playing");
            return;
        }
        self.slip = BetSlip::new(stake, self.slip.mines());
    }

    /// Ignored while a round is in play. Clamped to the playable range.
    pub fn set_mine_count(&mut self, mines: CellCount) {
        if self.engine.status().is_playing() {
            log::debug!("Mine count locked while playing");
            return;
        }
        self.slip = BetSlip::new(self.slip.stake(), mines);
    }

    pub fn can_place_bet(&self) -> bool {
        let stake = self.slip.stake();
        !self.engine.status().is_playing() && stake.is_positive() && self.ledger.can_afford(stake)
    }

    /// Starts a round with the current slip.
    pub fn place_bet(&mut self) -> Result<()> {
        let RoundConfig { stake, mines } = self.slip.config();
        self.start(stake, mines)
    }

    pub fn start(&mut self, stake: Money, mines: CellCount) -> Result<()> {
        self.engine.start(&mut self.ledger, stake, mines)
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        self.engine.reveal(index)
    }

    pub fn cashout(&mut self) -> Result<Money> {
        self.engine.cashout(&mut self.ledger)
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }
}
