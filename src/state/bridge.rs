use crate::cards::Board;
use crate::cards::Eval;
use crate::cards::Hand;
use crate::cards::Strength;

/// Evaluates hole cards together with the board.
///
/// Only 5, 6 and 7 card combinations are meaningful; anything else means
/// the caller combined the wrong cards.
pub fn handstrength(hole: Hand, board: Board) -> Result<Eval, String> {
    let cards = Hand::union(hole, Hand::from(board));
    match cards.size() {
        5..=7 => Strength::try_from(cards).map(Eval::from),
        n => Err(format!("unable to eval {} cards", n)),
    }
}
