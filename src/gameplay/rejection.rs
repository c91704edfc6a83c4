use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// why an action was refused.
///
/// rejections are ordinary values surfaced on the Game, never panics and
/// never Err: an illegal action leaves the hand exactly as it stood, with
/// the reason here and the specifics in the Game's context message.
#[derive(Error, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("invalid wager")]
    InvalidWager,
    #[error("invalid call")]
    InvalidCall,
    #[error("invalid check")]
    InvalidCheck,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_messages() {
        assert_eq!(Rejection::InvalidWager.to_string(), "invalid wager");
        assert_eq!(Rejection::InvalidCall.to_string(), "invalid call");
        assert_eq!(Rejection::InvalidCheck.to_string(), "invalid check");
    }
}
