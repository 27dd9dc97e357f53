use super::ranking::Ranking;

/// Hand category ordinal, 0 = high card through 8 = straight flush.
///
/// This is what the top bits of an [`Eval`](super::strength::Eval) carry.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
}

impl From<Ranking> for Category {
    fn from(r: Ranking) -> Self {
        match r {
            Ranking::HighCard(_) => Self::HighCard,
            Ranking::OnePair(_) => Self::OnePair,
            Ranking::TwoPair(..) => Self::TwoPair,
            Ranking::ThreeOAK(_) => Self::ThreeOAK,
            Ranking::Straight(_) => Self::Straight,
            Ranking::Flush(_) => Self::Flush,
            Ranking::FullHouse(..) => Self::FullHouse,
            Ranking::FourOAK(_) => Self::FourOAK,
            Ranking::StraightFlush(_) => Self::StraightFlush,
        }
    }
}

/// u8 isomorphism
impl From<Category> for u8 {
    fn from(c: Category) -> u8 {
        c as u8
    }
}
impl TryFrom<u8> for Category {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::HighCard),
            1 => Ok(Self::OnePair),
            2 => Ok(Self::TwoPair),
            3 => Ok(Self::ThreeOAK),
            4 => Ok(Self::Straight),
            5 => Ok(Self::Flush),
            6 => Ok(Self::FullHouse),
            7 => Ok(Self::FourOAK),
            8 => Ok(Self::StraightFlush),
            _ => Err(format!("no hand category {}", n)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::HighCard => "highcard",
                Self::OnePair => "one pair",
                Self::TwoPair => "two pair",
                Self::ThreeOAK => "three of a kind",
                Self::Straight => "straight",
                Self::Flush => "flush",
                Self::FullHouse => "full house",
                Self::FourOAK => "four of a kind",
                Self::StraightFlush => "straight flush",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..9u8 {
            assert_eq!(u8::from(Category::try_from(n).unwrap()), n);
        }
        assert!(Category::try_from(9).is_err());
    }
}
