use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// the public cards, dealt in street-sized batches.
/// Street is always derived from the number of cards shown,
/// so board and street can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Board {
        Board(Vec::with_capacity(5))
    }

    pub fn add(&mut self, card: Card) {
        assert!(self.0.len() < 5);
        self.0.push(card);
    }

    pub fn street(&self) -> Street {
        Street::from(self.0.len())
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        Self::from(board.0.clone())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
