use super::card::Card;
use super::suit::Suit;

/// Hand represents an unordered set of Cards. stored as a u64, but only needs
/// LSB bitstring of 52 bits. Each bit represents a unique card in the
/// (unordered) set, so the empty set doubles as the "no card" sentinel.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }

    /// Plain union, tolerant of overlap. Engine-supplied card lists go
    /// through here since nothing guarantees they are duplicate free.
    pub fn union(lhs: Self, rhs: Self) -> Self {
        Self(lhs.0 | rhs.0)
    }

    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn of(&self, suit: &Suit) -> Hand {
        Self::from(self.0 & u64::from(*suit))
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000000011000100000000000000000000000000000000001
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

impl From<Card> for Hand {
    fn from(c: Card) -> Self {
        Self(u64::from(c))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
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
/// whitespace separated cards, e.g. "Jc Ts 2c Js"
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()
            .map(Self::from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn bijective_u64() {
        let bits = rand::rng().random::<u64>() & Hand::mask();
        let hand = Hand::from(bits);
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
        assert_eq!(u16::from(hand.of(&Suit::C)), 0b_1000100010001); // C (2c, 6c, Tc, Ac)
        assert_eq!(u16::from(hand.of(&Suit::D)), 0b_0001000100010); // D (3d, 7d, Jd)
        assert_eq!(u16::from(hand.of(&Suit::H)), 0b_0010001000100); // H (4h, 8h, Qh)
        assert_eq!(u16::from(hand.of(&Suit::S)), 0b_0100010001000); // S (5s, 9s, Ks)
    }

    #[test]
    fn union_tolerates_overlap() {
        let ah = Hand::try_from("Ah").unwrap();
        let both = Hand::union(ah, ah);
        assert_eq!(both.size(), 1);
        assert!(both.contains(&Card::try_from("Ah").unwrap()));
    }

    #[test]
    fn empty_is_sentinel() {
        assert!(Hand::empty().is_empty());
        assert_eq!(Hand::empty().size(), 0);
        assert_eq!(Hand::default(), Hand::empty());
    }
}
