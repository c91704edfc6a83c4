use crate::Chips;
use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;

/// what a seat may submit on its turn.
///
/// Raise carries the requested wager, the chips to push across the line
/// on top of the seat's current stake. the machine may cap it down to
/// what the opponent could ever match.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise(Chips),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "{}", "FOLD".red()),
            Action::Check => write!(f, "{}", "CHECK".cyan()),
            Action::Call => write!(f, "{}", "CALL".yellow()),
            Action::Raise(chips) => write!(f, "{}", format!("RAISE {}", chips).green()),
        }
    }
}
