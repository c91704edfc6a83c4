use super::card::Card;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// a full deck shuffled once up front, then consumed from the back via ::draw().
/// the permutation is fixed at construction so the deal order is reproducible
/// under a seeded shuffle.
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub fn new() -> Self {
        Self::shuffled(&mut rand::rng())
    }
    pub fn seeded(seed: u64) -> Self {
        Self::shuffled(&mut SmallRng::seed_from_u64(seed))
    }
    fn shuffled(rng: &mut impl Rng) -> Self {
        let mut cards = (0..52u8).map(Card::from).collect::<Vec<Card>>();
        cards.shuffle(rng);
        Self(cards)
    }

    /// remove the next card from the deck
    pub fn draw(&mut self) -> Card {
        self.0.pop().expect("deck has cards remaining")
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() > 0 {
            Some(self.draw())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;

    #[test]
    fn fifty_two_unique() {
        let deck = Deck::new();
        let hand = Hand::from(deck.collect::<Vec<Card>>());
        assert_eq!(hand.size(), 52);
    }

    #[test]
    fn seeded_shuffles_agree() {
        let a = Deck::seeded(0xDEAD).collect::<Vec<Card>>();
        let b = Deck::seeded(0xDEAD).collect::<Vec<Card>>();
        assert_eq!(a, b);
    }

    #[test]
    fn draw_consumes() {
        let mut deck = Deck::new();
        let _ = deck.draw();
        let _ = deck.draw();
        assert_eq!(deck.size(), 50);
    }
}
