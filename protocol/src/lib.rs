//! Messages exchanged between a renderer and a [`MinesTable`].
//!
//! A renderer sends one [`Intent`] per user action and redraws from the [`RoundView`] carried by the [`Reply`].

use cashrocket_core::*;
use thiserror::Error;

pub use intent::*;
pub use reply::*;

mod intent;
mod reply;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, ProtocolError>;

/// Applies `intent` and snapshots the table afterwards.
pub fn dispatch<S: MineSampler, H: HostPlatform>(table: &mut MinesTable<S, H>, intent: Intent) -> Reply {
    log::trace!("Dispatching {intent:?}");

    let outcome = match intent {
        Intent::SetStake { stake } => {
            table.set_stake(stake);
            Outcome::Applied
        }
        Intent::SetMineCount { mines } => {
            table.set_mine_count(mines);
            Outcome::Applied
        }
        Intent::PlaceBet => table.place_bet().into(),
        Intent::Start { stake, mines } => table.start(stake, mines).into(),
        Intent::Reveal { cell } => table.reveal(cell).into(),
        Intent::Cashout => table.cashout().into(),
        Intent::Reset => {
            table.reset();
            Outcome::Applied
        }
    };

    Reply {
        outcome,
        view: table.view(),
    }
}

pub fn decode_intent(json: &str) -> Result<Intent> {
    Ok(serde_json::from_str(json)?)
}

/// Table settings from JSON; missing fields take their defaults.
pub fn decode_config(json: &str) -> Result<TableConfig> {
    Ok(serde_json::from_str(json)?)
}

pub fn encode_reply(reply: &Reply) -> Result<String> {
    Ok(serde_json::to_string(reply)?)
}

/// JSON in, JSON out. Malformed input leaves the table untouched.
pub fn handle_json<S: MineSampler, H: HostPlatform>(
    table: &mut MinesTable<S, H>,
    json: &str,
) -> Result<String> {
    let intent = decode_intent(json)?;
    encode_reply(&dispatch(table, intent))
}
