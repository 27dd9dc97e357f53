use super::bot::Bot;
use super::decision::Move;
use crate::state::MatchState;

/// Raises when the made hand is strong enough for the street, calls otherwise.
///
/// On the flop a pair is enough, on the turn two pair, on the river trips.
/// The raise is pot plus the amount owed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Robot;

impl Bot for Robot {
    fn go(&mut self, state: &MatchState) -> Move {
        let board = state.board().size();
        if board >= 3 {
            if let Some(eval) = state.hero().strength() {
                let category = eval.category();
                log::info!("I have {}", category);
                if u8::from(category) as usize >= board - 2 {
                    let betting = state.betting();
                    return Move::Raise(betting.pot().saturating_add(betting.current()));
                }
            }
        }
        Move::Call(0)
    }
}
