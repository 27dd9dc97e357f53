use super::decision::Move;
use super::decision::Ready;
use crate::state::MatchState;
use std::fmt::Debug;

/// The decision side of the client.
///
/// The client calls `setup` when the engine asks whether we are ready and
/// `go` when it is our turn, writes the answer as exactly one line, and
/// flushes before reading on. Both see the state as of the request,
/// including its deadline.
pub trait Bot: Debug {
    fn setup(&mut self, _: &MatchState) -> Ready {
        Ready
    }
    fn go(&mut self, state: &MatchState) -> Move;
}
