use super::rank::Rank;

/// A hand's kicker cards, as a 13-bit Rank mask.
///
/// Two kicker sets of the same size compare exactly like the
/// highest-rank-first lexicographic order on their sorted Ranks,
/// so integer Ord is the tiebreak.
/// WARNING: Implementation of Ord will not correctly compare Suits.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
/// importantly, we ignore (not erase) the Suit bits
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism
///
/// [J, T, 2]
/// xxx 0001100000001
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        let mut value = k.0;
        let mut index = 0u8;
        let mut ranks = Vec::new();
        while value > 0 {
            if value & 1 == 1 {
                ranks.push(Rank::from(index));
            }
            value = value >> 1;
            index = index + 1;
        }
        ranks
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic_tiebreak() {
        let kq2 = Kickers::from(vec![Rank::King, Rank::Queen, Rank::Two]);
        let kj9 = Kickers::from(vec![Rank::King, Rank::Jack, Rank::Nine]);
        assert!(kq2 > kj9);
    }

    #[test]
    fn bijective_ranks() {
        let ranks = vec![Rank::Two, Rank::Ten, Rank::Jack];
        let kicks = Kickers::from(ranks.clone());
        assert_eq!(Vec::<Rank>::from(kicks), ranks);
    }
}
