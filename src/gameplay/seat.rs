use crate::Chips;
use crate::cards::hole::Hole;

/// one player's cards and chips for a single hand.
///
/// stake is the live wager for the current betting round. it moves
/// into the pot when the round closes, so stack + stake is everything
/// the seat has left to play for.
#[derive(Debug, Clone, Copy)]
pub struct Seat {
    hole: Hole,
    stack: Chips,
    stake: Chips,
    big_blind: bool,
}

impl Seat {
    pub fn new(hole: Hole, stack: Chips, big_blind: bool) -> Self {
        Self {
            hole,
            stack,
            stake: 0,
            big_blind,
        }
    }

    pub fn cards(&self) -> Hole {
        self.hole
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn stake(&self) -> Chips {
        self.stake
    }
    pub fn is_big_blind(&self) -> bool {
        self.big_blind
    }

    /// move chips from stack to live stake
    pub fn bet(&mut self, chips: Chips) {
        assert!(chips <= self.stack);
        self.stack -= chips;
        self.stake += chips;
    }
    /// clear the live stake and yield it, for pot collection
    pub fn sweep(&mut self) -> Chips {
        let stake = self.stake;
        self.stake = 0;
        stake
    }
    pub fn win(&mut self, chips: Chips) {
        self.stack += chips;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {:>4} ({:>3})", self.hole, self.stack, self.stake)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;

    fn seat() -> Seat {
        let hole = Hole::from(Hand::try_from("As Kh").unwrap());
        Seat::new(hole, 100, false)
    }

    #[test]
    fn bet_moves_stack_to_stake() {
        let mut seat = seat();
        seat.bet(30);
        assert!(seat.stack() == 70);
        assert!(seat.stake() == 30);
    }

    #[test]
    fn sweep_collects_stake() {
        let mut seat = seat();
        seat.bet(30);
        assert!(seat.sweep() == 30);
        assert!(seat.stake() == 0);
        assert!(seat.stack() == 70);
    }

    #[test]
    #[should_panic]
    fn bet_cannot_overdraw() {
        let mut seat = seat();
        seat.bet(101);
    }
}
