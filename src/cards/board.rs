use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// The community cards visible to both players.
///
/// A board contains 0, 3, 4, or 5 cards corresponding to preflop, flop, turn,
/// and river respectively. The engine resends the full board on every change,
/// so a Board is replaced wholesale rather than grown card by card.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board(Hand);

impl Board {
    /// Creates an empty board (preflop state).
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    /// Resets the board to empty for a new hand.
    pub fn clear(&mut self) {
        self.0 = Hand::empty();
    }
    /// Board cardinality.
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Infers the current street from board size.
    pub fn street(&self) -> Option<Street> {
        Street::try_from(self.size()).ok()
    }
}

impl From<Hand> for Board {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            Vec::<Card>::from(self.0)
                .into_iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flop_street() {
        let board = Board::from(Hand::try_from("2h 3h 4h").unwrap());
        assert_eq!(board.size(), 3);
        assert_eq!(board.street(), Some(Street::Flop));
    }

    #[test]
    fn clear_returns_to_preflop() {
        let mut board = Board::from(Hand::try_from("2h 3h 4h 5h 6h").unwrap());
        board.clear();
        assert!(board.is_empty());
        assert_eq!(board.street(), Some(Street::Pref));
    }

    #[test]
    fn display() {
        let board = Board::from(Hand::try_from("Kd 2h").unwrap());
        assert_eq!(board.to_string(), "[2h Kd]");
    }
}
