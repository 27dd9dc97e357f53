use super::act::Act;
use super::bridge::handstrength;
use crate::Chips;
use crate::cards::Board;
use crate::cards::Eval;
use crate::cards::Hand;

/// Longest action name kept verbatim.
pub const ACTION_NAME_LIMIT: usize = 9;

/// One side of the heads-up match, as last reported by the engine.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Player {
    name: Option<String>,
    seat: usize,
    button: bool,
    stack: Chips,
    action: String,
    amount: Chips,
    hole: Hand,
    strength: Option<Eval>,
}

impl Player {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn seat(&self) -> usize {
        self.seat
    }
    pub fn on_button(&self) -> bool {
        self.button
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    /// Most recent action name, truncated to [`ACTION_NAME_LIMIT`].
    pub fn action(&self) -> &str {
        &self.action
    }
    pub fn act(&self) -> Act {
        Act::from(self.action.as_str())
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
    pub fn hole(&self) -> Hand {
        self.hole
    }
    /// Last successful snapshot, if any.
    pub fn strength(&self) -> Option<Eval> {
        self.strength
    }

    /// Binds the name on first sight. A different name later is refused.
    pub fn bind(&mut self, name: &str) -> Result<(), String> {
        match self.name.as_deref() {
            None => {
                self.name = Some(name.to_string());
                Ok(())
            }
            Some(bound) if bound == name => Ok(()),
            Some(bound) => Err(format!("``{}'' does not match bound name ``{}''", name, bound)),
        }
    }

    pub fn set_seat(&mut self, seat: usize) {
        self.seat = seat;
    }
    pub fn set_button(&mut self, button: bool) {
        self.button = button;
    }
    pub fn set_stack(&mut self, stack: Chips) {
        self.stack = stack;
    }
    pub fn set_hole(&mut self, hole: Hand) {
        self.hole = hole;
    }
    pub fn record(&mut self, action: &str, amount: Chips) {
        self.action = action.chars().take(ACTION_NAME_LIMIT).collect();
        self.amount = amount;
    }

    /// Re-evaluates hole cards against the board.
    ///
    /// No-op while either the board or the hole cards are empty, so the
    /// previous value survives. An unsupported card count clears it.
    pub fn snapshot(&mut self, board: &Board) {
        if board.is_empty() || self.hole.is_empty() {
            return;
        }
        match handstrength(self.hole, *board) {
            Ok(eval) => {
                log::debug!("{} {} on {} is {}", self, self.hole, board, eval);
                self.strength = Some(eval);
            }
            Err(e) => {
                log::warn!("{}", e);
                self.strength = None;
            }
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or("<unbound>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }

    #[test]
    fn binds_once() {
        let mut player = Player::default();
        assert!(player.bind("Villain").is_ok());
        assert!(player.bind("Villain").is_ok());
        assert!(player.bind("Stranger").is_err());
        assert_eq!(player.name(), Some("Villain"));
    }

    #[test]
    fn action_name_truncated() {
        let mut player = Player::default();
        player.record("extraordinarilylong", 5);
        assert_eq!(player.action(), "extraordi");
        assert_eq!(player.amount(), 5);
        assert_eq!(player.act(), Act::Other);
    }

    #[test]
    fn snapshot_needs_board() {
        let mut player = Player::default();
        player.set_hole(hand("Ah As"));
        player.snapshot(&Board::empty());
        assert_eq!(player.strength(), None);
        player.snapshot(&Board::from(hand("2h 3h 4h")));
        assert!(player.strength().is_some());
    }

    #[test]
    fn snapshot_needs_hole_cards() {
        let mut player = Player::default();
        player.snapshot(&Board::from(hand("2h 3h 4h")));
        assert_eq!(player.strength(), None);
    }

    #[test]
    fn failed_precondition_keeps_previous() {
        let mut player = Player::default();
        player.set_hole(hand("Ah As"));
        player.snapshot(&Board::from(hand("2h 3h 4h")));
        let before = player.strength();
        player.snapshot(&Board::empty());
        assert_eq!(player.strength(), before);
    }

    #[test]
    fn bad_card_count_clears() {
        let mut player = Player::default();
        player.set_hole(hand("Ah As"));
        player.snapshot(&Board::from(hand("2h 3h 4h")));
        player.snapshot(&Board::from(hand("2h")));
        assert_eq!(player.strength(), None);
    }
}
