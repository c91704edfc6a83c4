use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Hand represents an unordered set of Cards. stored as a u64, one bit per unique card,
/// using only the LSB bitstring of 52 bits. set operations are bitwise and allocation-free,
/// and a full 7-card hand costs the same single word as an empty one.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(u64::from(lhs) & u64::from(rhs) == 0);
        Self(lhs.0 | rhs.0)
    }
    pub fn sub(lhs: Self, rhs: Self) -> Self {
        assert!(u64::from(rhs) & !u64::from(lhs) == 0);
        Self(lhs.0 & !rhs.0)
    }

    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn of(&self, suit: &Suit) -> Hand {
        let cards = u64::from(*self) & u64::from(*suit);
        Self::from(cards)
    }
    pub fn of_rank(&self, rank: &Rank) -> Hand {
        let cards = u64::from(*self) & u64::from(*rank);
        Self::from(cards)
    }

    pub fn take_min(&self) -> Option<Card> {
        if self.size() == 0 {
            None
        } else {
            Some(Card::from(self.0.trailing_zeros() as u8))
        }
    }
    pub fn take_max(&self) -> Option<Card> {
        if self.size() == 0 {
            None
        } else {
            Some(Card::from(64 - 1 - self.0.leading_zeros() as u8))
        }
    }
    pub fn remove(&mut self, card: Card) {
        let card = u8::from(card);
        let mask = !(1 << card);
        self.0 &= mask;
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = self.0.trailing_zeros() as u8;
            let card = Card::from(card);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000010011000000000000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000010011000000000000000000000000000000000000001
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(
            cards
                .into_iter()
                .map(|c| u64::from(c))
                .fold(0u64, |a, b| a | b),
        )
    }
}

/// one-way conversion to u16 Rank masks
/// zero-allocation, zero iteration. just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = u64::default();
        y |= (x >> 00) & 0x0001;
        y |= (x >> 03) & 0x0002;
        y |= (x >> 06) & 0x0004;
        y |= (x >> 09) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

/// str isomorphism
/// this follows from Vec<Card> isomorphism
impl TryFrom<&str> for Hand {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, Self::Error>>()
            .map(Self::from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in Vec::<Card>::from(*self) {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u64() {
        let hand = Hand::try_from("2c Ts Jc Js").unwrap();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Some(Card::try_from("2c").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Ts").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Jc").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Js").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(u16::from(hand.of(&Suit::Club)), 0b_1000100010001); // 2c 6c Tc Ac
        assert_eq!(u16::from(hand.of(&Suit::Diamond)), 0b_0001000100010); // 3d 7d Jd
        assert_eq!(u16::from(hand.of(&Suit::Heart)), 0b_0010001000100); // 4h 8h Qh
        assert_eq!(u16::from(hand.of(&Suit::Spade)), 0b_0100010001000); // 5s 9s Ks
    }

    #[test]
    fn cards_of_rank() {
        let hand = Hand::try_from("As Ah Kd Kc Qs").unwrap();
        let aces = hand.of_rank(&Rank::Ace);
        assert_eq!(aces.size(), 2);
        assert_eq!(aces, Hand::try_from("As Ah").unwrap());
    }

    #[test]
    fn set_difference() {
        let hand = Hand::try_from("As Ah Kd Kc Qs").unwrap();
        let pair = Hand::try_from("As Ah").unwrap();
        let rest = Hand::sub(hand, pair);
        assert_eq!(rest, Hand::try_from("Kd Kc Qs").unwrap());
        assert_eq!(Hand::add(pair, rest), hand);
    }
}
