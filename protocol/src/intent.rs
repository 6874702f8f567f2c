use cashrocket_core::{CellCount, CellIndex, Money};
use serde::{Deserialize, Serialize};

/// A user action. Amounts are in cents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    SetStake { stake: Money },
    SetMineCount { mines: CellCount },
    PlaceBet,
    Start { stake: Money, mines: CellCount },
    Reveal { cell: CellIndex },
    Cashout,
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_tagged_messages() {
        let cases = [
            (r#"{"type":"place_bet"}"#, Intent::PlaceBet),
            (r#"{"type":"cashout"}"#, Intent::Cashout),
            (r#"{"type":"reset"}"#, Intent::Reset),
            (r#"{"type":"reveal","cell":24}"#, Intent::Reveal { cell: 24 }),
            (
                r#"{"type":"set_stake","stake":1050}"#,
                Intent::SetStake {
                    stake: Money::from_cents(1050),
                },
            ),
            (
                r#"{"type":"start","stake":10000,"mines":3}"#,
                Intent::Start {
                    stake: Money::from_units(100),
                    mines: 3,
                },
            ),
        ];

        for (json, expected) in cases {
            assert_eq!(crate::decode_intent(json).unwrap(), expected, "{json}");
        }
    }

    #[test]
    fn rejects_out_of_range_cell_type() {
        assert!(crate::decode_intent(r#"{"type":"reveal","cell":300}"#).is_err());
        assert!(crate::decode_intent(r#"{"type":"reveal"}"#).is_err());
    }
}
