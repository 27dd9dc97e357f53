use super::category::Category;
use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// Bit offset of the category ordinal inside an [`Eval`].
pub const EVAL_SHIFT: u32 = 24;

/// A fully-evaluated hand strength for comparison.
///
/// Combines a [`Ranking`] (hand category like flush or two pair) with
/// [`Kickers`] (tie-breaking cards). Ordering is lexicographic: ranking
/// first, then kickers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
    pub fn category(&self) -> Category {
        Category::from(self.value)
    }
}

impl TryFrom<Hand> for Strength {
    type Error = String;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        let eval = Evaluator::from(hand);
        let value = eval
            .find_ranking()
            .ok_or_else(|| String::from("cannot evaluate an empty hand"))?;
        let kicks = eval.find_kickers(value);
        Ok(Self::from((value, kicks)))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{:>5}", self.value, self.kicks)
    }
}

/// A Strength packed into one ordered integer.
///
/// ```text
/// 31..28  27..24    23..20  19..16  15..13  12..0
/// 0000    category  primary second  000     kicker rank mask
/// ```
///
/// Integer order agrees with Strength order, and `eval >> EVAL_SHIFT`
/// is the category ordinal.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Eval(u32);

impl Eval {
    pub fn category(&self) -> Category {
        Category::try_from((self.0 >> EVAL_SHIFT) as u8).unwrap_or(Category::HighCard)
    }
}

impl From<Strength> for Eval {
    fn from(s: Strength) -> Self {
        let (hi, lo) = s.ranking().ranks();
        let category = u8::from(s.category()) as u32;
        let hi = u8::from(hi) as u32;
        let lo = lo.map(u8::from).unwrap_or_default() as u32;
        let kicks = u16::from(s.kickers()) as u32;
        Self(category << EVAL_SHIFT | hi << 20 | lo << 16 | kicks)
    }
}

/// u32 isomorphism
impl From<Eval> for u32 {
    fn from(e: Eval) -> u32 {
        e.0
    }
}
impl From<u32> for Eval {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

impl std::fmt::Display for Eval {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({:#010x})", self.category(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> Eval {
        Eval::from(Strength::try_from(Hand::try_from(s).unwrap()).unwrap())
    }

    #[test]
    fn category_in_top_bits() {
        assert_eq!(u32::from(eval("As Kh Qd Jc 9s")) >> EVAL_SHIFT, 0);
        assert_eq!(u32::from(eval("As Ah Kd Qc Js")) >> EVAL_SHIFT, 1);
        assert_eq!(u32::from(eval("As Ks Qs Js 9s")) >> EVAL_SHIFT, 5);
        assert_eq!(u32::from(eval("2s 2h 2d 3c 3s")) >> EVAL_SHIFT, 6);
        assert_eq!(u32::from(eval("Ts Js Qs Ks As")) >> EVAL_SHIFT, 8);
    }

    #[test]
    fn integer_order_matches_strength() {
        let hands = [
            "As Kh Qd Jc 9s 7h 2c",
            "As Ah Kd Qc Js 3h 2c",
            "As Ah Kd Kc Qs 3h 2c",
            "As Ah Ad Kc Qs 3h 2c",
            "Ts Jh Qd Kc As 3h 2c",
            "As Ks Qs Js 9s 3h 2c",
            "2s 2h 2d 3c 3s Ah Kc",
            "As Ah Ad Ac Ks 3h 2c",
            "Ts Js Qs Ks As 3h 2c",
        ];
        for pair in hands.windows(2) {
            let lo = Strength::try_from(Hand::try_from(pair[0]).unwrap()).unwrap();
            let hi = Strength::try_from(Hand::try_from(pair[1]).unwrap()).unwrap();
            assert!(lo < hi);
            assert!(Eval::from(lo) < Eval::from(hi));
        }
    }

    #[test]
    fn kickers_break_ties() {
        assert!(eval("As Ah Kd Qc Js") > eval("Ad Ac Kh Qs Ts"));
        assert!(eval("As Ks Qs Js 9s") > eval("Ah Kh Qh Jh 8h"));
    }

    #[test]
    fn empty_hand_rejected() {
        assert!(Strength::try_from(Hand::empty()).is_err());
    }
}
