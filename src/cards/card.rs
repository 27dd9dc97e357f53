use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Representations
///
/// - `u8`: Compact index `0..52`
/// - `u64`: Single-bit representation for set membership in [`Hand`]
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
///
/// exactly two characters, rank then suit
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => {
                let rank = Rank::try_from(r)?;
                let suit = Suit::try_from(s)?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("card ``{}'' is not 2 characters", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        for n in 0..52u8 {
            let card = Card::from(n);
            assert!(card == Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn bijective_str() {
        for n in 0..52u8 {
            let card = Card::from(n);
            assert_eq!(Card::try_from(card.to_string().as_str()), Ok(card));
        }
    }

    #[test]
    fn ten_of_spades() {
        let card = Card::try_from("Ts").unwrap();
        assert_eq!(u8::from(card), 35);
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::S);
    }

    #[test]
    fn wrong_length() {
        assert!(Card::try_from("A").is_err());
        assert!(Card::try_from("Ahh").is_err());
    }
}
