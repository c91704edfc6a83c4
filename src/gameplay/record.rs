use super::Position;
use super::action::Action;
use crate::Chips;
use crate::cards::street::Street;
use serde::Deserialize;
use serde::Serialize;

/// one accepted action, as it actually happened.
///
/// action is what the seat submitted. chips is the effective amount
/// moved after any cap, zero for folds and checks, so a capped
/// Raise(80) that only moved 50 reads back as exactly that.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub street: Street,
    pub seat: Position,
    pub action: Action,
    pub chips: Chips,
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<7} {} {} ({})",
            self.street, self.seat, self.action, self.chips
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let history = vec![
            Record {
                street: Street::Pref,
                seat: 1,
                action: Action::Call,
                chips: 1,
            },
            Record {
                street: Street::Pref,
                seat: 0,
                action: Action::Check,
                chips: 0,
            },
            Record {
                street: Street::Flop,
                seat: 0,
                action: Action::Raise(8),
                chips: 8,
            },
            Record {
                street: Street::Flop,
                seat: 1,
                action: Action::Fold,
                chips: 0,
            },
        ];
        let json = serde_json::to_string(&history).unwrap();
        let back = serde_json::from_str::<Vec<Record>>(&json).unwrap();
        assert_eq!(history, back);
    }
}
