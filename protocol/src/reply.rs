use cashrocket_core::{Money, Rejection, RevealOutcome, RoundView};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    Unchanged,
    Safe,
    HitMine,
    CashedOut { amount: Money },
    Rejected { reason: String },
}

impl Outcome {
    pub const fn has_update(&self) -> bool {
        !matches!(self, Self::Unchanged | Self::Rejected { .. })
    }
}

impl From<Rejection> for Outcome {
    fn from(rejection: Rejection) -> Self {
        Self::Rejected {
            reason: rejection.to_string(),
        }
    }
}

impl From<RevealOutcome> for Outcome {
    fn from(outcome: RevealOutcome) -> Self {
        match outcome {
            RevealOutcome::NoChange => Self::Unchanged,
            RevealOutcome::Safe => Self::Safe,
            RevealOutcome::HitMine => Self::HitMine,
        }
    }
}

impl From<cashrocket_core::Result<()>> for Outcome {
    fn from(result: cashrocket_core::Result<()>) -> Self {
        result.map_or_else(Self::from, |()| Self::Applied)
    }
}

impl From<cashrocket_core::Result<RevealOutcome>> for Outcome {
    fn from(result: cashrocket_core::Result<RevealOutcome>) -> Self {
        result.map_or_else(Self::from, Self::from)
    }
}

impl From<cashrocket_core::Result<Money>> for Outcome {
    fn from(result: cashrocket_core::Result<Money>) -> Self {
        result.map_or_else(Self::from, |amount| Self::CashedOut { amount })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub outcome: Outcome,
    pub view: RoundView,
}
