use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;
use std::cmp::Ordering;

/// A hand's strength, plus the partition of cards that produced it.
///
/// This will always be constructed from a Hand, which is an unordered
/// set of Cards. used() holds the cards that realize the Ranking, spare()
/// everything else; together they are exactly the evaluated Hand.
/// Ordering ignores the partition: only (ranking, kicks) decide, so two
/// boards that make the same ranks out of different suits compare Equal.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Strength {
    ranking: Ranking,
    kicks: Kickers,
    used: Hand,
    spare: Hand,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kicks(&self) -> Kickers {
        self.kicks
    }
    pub fn used(&self) -> Hand {
        self.used
    }
    pub fn spare(&self) -> Hand {
        self.spare
    }
    /// attach tiebreak ranks. detectors leave these empty
    pub fn kick(self, kicks: Kickers) -> Self {
        Self { kicks, ..self }
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        assert!(hand.size() >= 5, "showdown requires at least five cards");
        Evaluator::from(hand).strength()
    }
}

impl From<(Ranking, Hand, Hand)> for Strength {
    fn from((ranking, used, spare): (Ranking, Hand, Hand)) -> Self {
        Self {
            ranking,
            kicks: Kickers::from(0u16),
            used,
            spare,
        }
    }
}

impl PartialEq for Strength {
    fn eq(&self, other: &Self) -> bool {
        self.ranking == other.ranking && self.kicks == other.kicks
    }
}
impl PartialOrd for Strength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Strength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ranking
            .cmp(&other.ranking)
            .then_with(|| self.kicks.cmp(&other.kicks))
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.ranking, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kickers_break_ties() {
        let king_kicker = Strength::from(Hand::try_from("As Ah Kd 8c 4s").unwrap());
        let jack_kicker = Strength::from(Hand::try_from("Ad Ac Jd 8h 4d").unwrap());
        assert!(king_kicker > jack_kicker);
    }

    #[test]
    fn suits_do_not_order() {
        let spades = Strength::from(Hand::try_from("As Ks Qd Jc 9h").unwrap());
        let hearts = Strength::from(Hand::try_from("Ah Kh Qc Jd 9s").unwrap());
        assert!(spades == hearts);
        assert!(spades.cmp(&hearts) == Ordering::Equal);
    }

    #[test]
    fn partition_is_exact() {
        let hand = Hand::try_from("As Ah Kd Kc Qs Jh 9d").unwrap();
        let strength = Strength::from(hand);
        assert_eq!(Hand::add(strength.used(), strength.spare()), hand);
    }
}
