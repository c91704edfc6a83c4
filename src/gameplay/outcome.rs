use super::Position;
use serde::Deserialize;
use serde::Serialize;

/// how the hand ended, if it has
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    Tie,
    Winner(Position),
}

impl Outcome {
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "undecided"),
            Self::Tie => write!(f, "split pot"),
            Self::Winner(seat) => write!(f, "seat {} wins", seat),
        }
    }
}
