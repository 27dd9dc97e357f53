use crate::Chips;

/// Per-hand match metadata.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchInfo {
    pub round: u32,
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl std::fmt::Display for MatchInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "round {} ({}/{})", self.round, self.small_blind, self.big_blind)
    }
}
