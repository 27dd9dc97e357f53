use super::rank::Rank;

/// A hand's kicker cards, as a 13-bit rank mask.
///
/// Masks with equal popcount compare like their ranks read high to low,
/// which is exactly how kickers break ties.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n & Rank::mask())
    }
}

/// Vec<Rank> isomorphism
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.into_iter().map(u16::from).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_vec() {
        let ranks = vec![Rank::King, Rank::Nine, Rank::Two];
        assert_eq!(Vec::<Rank>::from(Kickers::from(ranks.clone())), ranks);
    }

    #[test]
    fn higher_kicker_wins() {
        let kq = Kickers::from(vec![Rank::King, Rank::Queen]);
        let kj = Kickers::from(vec![Rank::King, Rank::Jack]);
        let qj = Kickers::from(vec![Rank::Queen, Rank::Jack]);
        assert!(kq > kj);
        assert!(kj > qj);
    }
}
