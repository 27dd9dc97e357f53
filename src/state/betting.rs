use super::act::Act;
use crate::Chips;

/// Pot and amount-to-call bookkeeping.
///
/// `current` is what is still owed to stay in the hand, not the size of the
/// last bet. It is zeroed at every round, set by a raise, zeroed by a check
/// or call, and folded through blind posts as `posted - current`, so after
/// small then big blind it reads `big - small`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Betting {
    pot: Chips,
    current: Chips,
    sidepots: Vec<Chips>,
}

impl Betting {
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn current(&self) -> Chips {
        self.current
    }
    /// As reported by the engine. Nothing is derived from these.
    pub fn sidepots(&self) -> &[Chips] {
        &self.sidepots
    }

    pub fn set_pot(&mut self, pot: Chips) {
        self.pot = pot;
    }
    pub fn set_sidepots(&mut self, sidepots: Vec<Chips>) {
        self.sidepots = sidepots;
    }
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Moves the amount to call for one player action.
    ///
    /// Assumes small blind posts before big blind and that nothing else is
    /// forced; an ante or a reversed post order breaks the derivation.
    pub fn apply(&mut self, act: Act, amount: Chips) {
        match act {
            Act::Check | Act::Call => self.current = 0,
            Act::Raise => self.current = amount,
            Act::Post => self.current = amount.saturating_sub(self.current),
            Act::Fold | Act::Wins | Act::Other => {}
        }
    }
}
