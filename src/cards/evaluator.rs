use super::card::Card;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;
const LOWEST_STRAIGHT_RANK: Rank = Rank::Five;

/// A lazy evaluator for a hand's strength.
///
/// Using a compact representation of the Hand, we search for
/// the highest Ranking hand using bitwise operations. one detector
/// per Ranking, tried from strongest to weakest, first hit wins.
/// each detector claims the cards that realize its Ranking, so the
/// result carries a full partition of the Hand alongside the Ranking.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn strength(&self) -> Strength {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .map(|partial| self.complete(partial))
            .expect("at least one card in Hand")
    }

    /// top up a detector hit with kickers drawn from its spare cards.
    /// the flush detector fills its own kicks, so its n_kickers is zero here
    fn complete(&self, partial: Strength) -> Strength {
        match partial.ranking().n_kickers() {
            0 => partial,
            n => {
                let mut ranks = u16::from(partial.spare());
                while n < ranks.count_ones() as usize {
                    let last = ranks.trailing_zeros();
                    let flip = 1 << last;
                    let skip = !flip;
                    ranks &= skip;
                }
                partial.kick(Kickers::from(ranks))
            }
        }
    }

    ///

    fn find_1_oak(&self) -> Option<Strength> {
        self.find_n_oak(1)
            .map(|(rank, used)| self.partial(Ranking::HighCard(rank), used))
    }
    fn find_2_oak(&self) -> Option<Strength> {
        self.find_n_oak(2)
            .map(|(rank, used)| self.partial(Ranking::OnePair(rank), used))
    }
    fn find_3_oak(&self) -> Option<Strength> {
        self.find_n_oak(3)
            .map(|(rank, used)| self.partial(Ranking::ThreeOAK(rank), used))
    }
    fn find_4_oak(&self) -> Option<Strength> {
        self.find_n_oak(4)
            .map(|(rank, used)| self.partial(Ranking::FourOAK(rank), used))
    }
    fn find_2_oak_2_oak(&self) -> Option<Strength> {
        self.find_n_oak(2).and_then(|(hi, first)| {
            Self::from(Hand::sub(self.0, first))
                .find_n_oak(2)
                .map(|(lo, second)| self.partial(Ranking::TwoPair(hi, lo), Hand::add(first, second)))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Strength> {
        self.find_n_oak(3).and_then(|(triple, first)| {
            Self::from(Hand::sub(self.0, first))
                .find_n_oak(2)
                .map(|(paired, second)| {
                    self.partial(Ranking::FullHouse(triple, paired), Hand::add(first, second))
                })
        })
    }
    fn find_straight(&self) -> Option<Strength> {
        self.find_rank_of_straight(self.0)
            .map(|high| self.partial(Ranking::Straight(high), self.straightened(self.0, high)))
    }
    fn find_flush(&self) -> Option<Strength> {
        self.find_suit_of_flush().map(|suit| {
            let mut suited = self.0.of(&suit);
            while suited.size() > 5 {
                let low = suited.take_min().expect("at least six suited cards");
                suited.remove(low);
            }
            let ranks = u16::from(suited);
            let high = Rank::from(ranks);
            let kicks = Kickers::from(ranks & !u16::from(high));
            self.partial(Ranking::Flush(high), suited).kick(kicks)
        })
    }
    fn find_straight_flush(&self) -> Option<Strength> {
        self.find_suit_of_flush().and_then(|suit| {
            let suited = self.0.of(&suit);
            self.find_rank_of_straight(suited)
                .map(|high| self.partial(Ranking::StraightFlush(high), self.straightened(suited, high)))
        })
    }

    ///

    /// split the evaluated Hand into a detector's claim and its leftovers
    fn partial(&self, ranking: Ranking, used: Hand) -> Strength {
        Strength::from((ranking, used, Hand::sub(self.0, used)))
    }

    /// one card for each rank of the 5-rank run topped by high.
    /// ties within a rank break toward the lowest suit
    fn straightened(&self, hand: Hand, high: Rank) -> Hand {
        match high {
            Rank::Five => vec![Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace],
            high => (0..5)
                .map(|i| Rank::from(u8::from(high) - i))
                .collect::<Vec<Rank>>(),
        }
        .into_iter()
        .map(|rank| hand.of_rank(&rank).take_min().expect("rank in the run"))
        .map(|card| Hand::from(u64::from(card)))
        .fold(Hand::empty(), |run, card| Hand::add(run, card))
    }

    fn find_rank_of_straight(&self, hand: Hand) -> Option<Rank> {
        let wheel = WHEEL;
        let ranks = u16::from(hand);
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if wheel == (wheel & ranks) {
            Some(LOWEST_STRAIGHT_RANK)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .map(|s| u64::from(s))
            .map(|u| u64::from(self.0) & u)
            .map(|n| n.count_ones() as u8)
            .iter()
            .position(|&n| n >= 5)
            .map(|i| Suit::from(i as u8))
    }
    /// highest rank held at least n times, and the lowest n cards of it
    fn find_n_oak(&self, n: usize) -> Option<(Rank, Hand)> {
        let mut high = u64::from(Rank::Ace) << 4;
        while high > 0 {
            high >>= 4;
            let mine = u64::from(self.0);
            let mine = high & mine;
            if mine.count_ones() >= n as u32 {
                let rank = Rank::lo(high);
                let used = self.0.of_rank(&rank).take(n).collect::<Vec<Card>>();
                return Some((rank, Hand::from(used)));
            }
        }
        None
    }
}
