use super::Position;
use super::outcome::Outcome;
use crate::Chips;
use crate::N;
use crate::cards::strength::Strength;
use std::cmp::Ordering;

/// settles the pot between two revealed hands at the river.
///
/// a tie splits the pot evenly. the odd chip, when the pot is odd,
/// goes to the dealer.
#[derive(Debug)]
pub struct Showdown {
    strengths: [Strength; N],
    pot: Chips,
    dealer: Position,
}

impl From<([Strength; N], Chips, Position)> for Showdown {
    fn from((strengths, pot, dealer): ([Strength; N], Chips, Position)) -> Self {
        Self {
            strengths,
            pot,
            dealer,
        }
    }
}

impl Showdown {
    pub fn outcome(&self) -> Outcome {
        match self.strengths[0].cmp(&self.strengths[1]) {
            Ordering::Greater => Outcome::Winner(0),
            Ordering::Less => Outcome::Winner(1),
            Ordering::Equal => Outcome::Tie,
        }
    }

    pub fn payouts(&self) -> [Chips; N] {
        let mut payouts = [0; N];
        match self.outcome() {
            Outcome::Winner(seat) => payouts[seat] = self.pot,
            Outcome::Tie => {
                let share = self.pot / 2;
                let spare = self.pot % 2;
                payouts = [share; N];
                payouts[self.dealer] += spare;
            }
            Outcome::Pending => unreachable!(),
        }
        payouts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;

    fn strength(cards: &str) -> Strength {
        Strength::from(Hand::try_from(cards).unwrap())
    }

    #[test]
    fn winner_takes_pot() {
        let aces = strength("As Ah Kd 8c 4s");
        let kings = strength("Ks Kh Qd 8h 4d");
        let showdown = Showdown::from(([aces, kings], 40, 1));
        assert_eq!(showdown.outcome(), Outcome::Winner(0));
        assert_eq!(showdown.payouts(), [40, 0]);
    }

    #[test]
    fn tie_splits_evenly() {
        let spades = strength("As Ks Qd Jc 9h");
        let hearts = strength("Ah Kh Qc Jd 9s");
        let showdown = Showdown::from(([spades, hearts], 12, 1));
        assert_eq!(showdown.outcome(), Outcome::Tie);
        assert_eq!(showdown.payouts(), [6, 6]);
    }

    #[test]
    fn odd_chip_to_dealer() {
        let spades = strength("As Ks Qd Jc 9h");
        let hearts = strength("Ah Kh Qc Jd 9s");
        let showdown = Showdown::from(([spades, hearts], 13, 1));
        assert_eq!(showdown.payouts(), [6, 7]);
        let showdown = Showdown::from(([spades, hearts], 13, 0));
        assert_eq!(showdown.payouts(), [7, 6]);
    }

    #[test]
    fn kickers_decide_at_showdown() {
        let king_kicker = strength("As Ah Kd 8c 4s");
        let jack_kicker = strength("Ad Ac Jd 8h 4d");
        let showdown = Showdown::from(([jack_kicker, king_kicker], 20, 0));
        assert_eq!(showdown.outcome(), Outcome::Winner(1));
        assert_eq!(showdown.payouts(), [0, 20]);
    }
}
