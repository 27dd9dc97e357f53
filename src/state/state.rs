use super::act::Act;
use super::betting::Betting;
use super::info::MatchInfo;
use super::player::Player;
use super::settings::Settings;
use crate::cards::Board;
use crate::protocol::Info;
use crate::protocol::Report;
use crate::protocol::Timeout;
use crate::protocol::Update;

/// Which player record a line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Hero,
    Villain,
}

/// What the engine is waiting on after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Go,
    Setup,
}

/// Everything known about the match at this point of the stream.
///
/// Lines are folded in strictly in arrival order. Nothing here fails: a
/// line that cannot be applied is reported and leaves the state as it was.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchState {
    settings: Settings,
    info: MatchInfo,
    hero: Player,
    villain: Player,
    board: Board,
    betting: Betting,
    deadline: Option<Timeout>,
}

impl MatchState {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn info(&self) -> &MatchInfo {
        &self.info
    }
    pub fn hero(&self) -> &Player {
        &self.hero
    }
    pub fn villain(&self) -> &Player {
        &self.villain
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn betting(&self) -> &Betting {
        &self.betting
    }
    /// Deadline of the pending `go` or `setup`. Cleared once answered.
    pub fn deadline(&self) -> Option<Timeout> {
        self.deadline
    }
    /// Drops the deadline of a request that has been answered.
    pub fn expire(&mut self) -> Option<Timeout> {
        self.deadline.take()
    }
    /// Whether we know our own name yet.
    pub fn named(&self) -> bool {
        self.settings.name().is_some()
    }

    /// Routes a player name: ours is the hero, any other is the villain.
    pub fn side(&self, name: &str) -> Side {
        match self.settings.name() {
            Some(mine) if mine == name => Side::Hero,
            _ => Side::Villain,
        }
    }
    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Hero => &self.hero,
            Side::Villain => &self.villain,
        }
    }

    pub fn ingest(&mut self, update: Update) -> Option<Request> {
        match update {
            Update::Settings(setting) => self.settings.apply(setting),
            Update::Match(info) => self.update_match(info),
            Update::Player(name, report) => self.update_player(name, report),
            Update::Go(timeout) => {
                self.hero.snapshot(&self.board);
                self.deadline = Some(timeout);
                return Some(Request::Go);
            }
            Update::Setup(timeout) => {
                self.deadline = Some(timeout);
                return Some(Request::Setup);
            }
            Update::Unknown(fields) => log::warn!(
                "unable to understand {} part command{}: ``{}''",
                fields.len(),
                if self.named() { "" } else { " (don't know my name yet)" },
                fields.join(" ")
            ),
        }
        None
    }

    fn update_match(&mut self, info: Info) {
        match info {
            Info::Round(round) => {
                log::info!("round {}", round);
                self.info.round = round;
                self.betting.reset();
                self.board.clear();
            }
            Info::SmallBlind(chips) => self.info.small_blind = chips,
            Info::BigBlind(chips) => self.info.big_blind = chips,
            Info::Pot(chips) => self.betting.set_pot(chips),
            Info::SidePots(pots) => self.betting.set_sidepots(pots),
            Info::Table(board) => {
                match board.street() {
                    Some(street) => log::debug!("{} {}", street, board),
                    None => log::warn!("no street shows {} board cards {}", board.size(), board),
                }
                self.board = board;
            }
            Info::OnButton(name) => match self.settings.name() {
                None => log::warn!("got ``onButton'', but don't know my name yet"),
                Some(mine) => {
                    let mine = mine == name;
                    self.hero.set_button(mine);
                    self.villain.set_button(!mine);
                }
            },
            Info::Unknown(key, value) => log::warn!("unknown match info {}={}", key, value),
        }
    }

    fn update_player(&mut self, name: &str, report: Report) {
        let player = match self.side(name) {
            Side::Hero => &mut self.hero,
            Side::Villain => &mut self.villain,
        };
        if let Err(e) = player.bind(name) {
            log::warn!("{}", e);
            return;
        }
        match report {
            Report::Seat(seat) => player.set_seat(seat),
            Report::Stack(stack) => player.set_stack(stack),
            Report::Hand(hole) => {
                player.set_hole(hole);
                player.snapshot(&self.board);
            }
            Report::Action(action, amount) => {
                log::debug!("{} {} {}", name, action, amount);
                player.record(action, amount);
                self.betting.apply(Act::from(action), amount);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;
    use crate::protocol::{MAX_FIELDS, split};

    fn feed(state: &mut MatchState, lines: &[&str]) -> Vec<Request> {
        lines
            .iter()
            .filter_map(|line| {
                let fields = split(line, MAX_FIELDS);
                state.ingest(Update::decode(&fields, state.named()))
            })
            .collect()
    }

    fn named() -> MatchState {
        let mut state = MatchState::default();
        feed(&mut state, &["Settings yourBot Hero"]);
        state
    }

    #[test]
    fn blinds_leave_amount_owed() {
        let mut state = named();
        feed(
            &mut state,
            &[
                "Match round 1",
                "Hero post 10",
                "Villain post 20",
                "Match smallBlind 10",
                "Match bigBlind 20",
            ],
        );
        assert_eq!(state.betting().current(), 10);
        assert_eq!(state.info().round, 1);
        assert_eq!(state.info().small_blind, 10);
        assert_eq!(state.info().big_blind, 20);
        assert_eq!(state.hero().act(), Act::Post);
        assert_eq!(state.villain().amount(), 20);
    }

    #[test]
    fn raise_then_call() {
        let mut state = named();
        feed(&mut state, &["Hero raise 50"]);
        assert_eq!(state.betting().current(), 50);
        feed(&mut state, &["Hero call 0"]);
        assert_eq!(state.betting().current(), 0);
    }

    #[test]
    fn round_resets_amount_owed_and_board() {
        let mut state = named();
        feed(&mut state, &["Villain raise 80", "Match table [2h,3h,4h]"]);
        assert_eq!(state.board().size(), 3);
        feed(&mut state, &["Match round 2"]);
        assert_eq!(state.betting().current(), 0);
        assert!(state.board().is_empty());
    }

    #[test]
    fn third_name_changes_nothing() {
        let mut state = named();
        feed(&mut state, &["Hero stack 1000", "Villain stack 900"]);
        let before = state.clone();
        feed(&mut state, &["Stranger stack 5", "Stranger raise 500"]);
        assert_eq!(state, before);
    }

    #[test]
    fn player_lines_before_name_are_ignored() {
        let mut state = MatchState::default();
        feed(&mut state, &["Villain stack 900"]);
        assert_eq!(state, MatchState::default());
    }

    #[test]
    fn on_button() {
        let mut state = named();
        feed(&mut state, &["Match onButton Villain"]);
        assert!(!state.hero().on_button());
        assert!(state.villain().on_button());
        feed(&mut state, &["Match onButton Hero"]);
        assert!(state.hero().on_button());
        assert!(!state.villain().on_button());
    }

    #[test]
    fn on_button_before_name_is_noop() {
        let mut state = MatchState::default();
        feed(&mut state, &["Match onButton Hero"]);
        assert_eq!(state, MatchState::default());
    }

    #[test]
    fn player_attributes() {
        let mut state = named();
        feed(
            &mut state,
            &["Hero seat 1", "Hero stack 2000", "Villain seat 0", "Match pot 30"],
        );
        assert_eq!(state.hero().seat(), 1);
        assert_eq!(state.hero().stack(), 2000);
        assert_eq!(state.villain().seat(), 0);
        assert_eq!(state.villain().name(), Some("Villain"));
        assert_eq!(state.betting().pot(), 30);
    }

    #[test]
    fn snapshot_waits_for_board() {
        let mut state = named();
        feed(&mut state, &["Hero hand [Ah,As]"]);
        assert_eq!(state.hero().strength(), None);
        feed(&mut state, &["Match table [2h,3h,4h]", "go 500"]);
        let strength = state.hero().strength().unwrap();
        assert_eq!(strength.category(), Category::OnePair);
    }

    #[test]
    fn hand_after_board_snapshots_immediately() {
        let mut state = named();
        feed(&mut state, &["Match table [2h3h4h]", "Villain hand [5h6h]"]);
        let strength = state.villain().strength().unwrap();
        assert_eq!(strength.category(), Category::StraightFlush);
    }

    #[test]
    fn commands_set_deadline() {
        let mut state = named();
        assert_eq!(feed(&mut state, &["setup 2000"]), vec![Request::Setup]);
        assert_eq!(state.deadline(), Some(2000));
        assert_eq!(feed(&mut state, &["go 500"]), vec![Request::Go]);
        assert_eq!(state.deadline(), Some(500));
        assert_eq!(state.expire(), Some(500));
        assert_eq!(state.deadline(), None);
    }

    #[test]
    fn unknown_lines_change_nothing() {
        let mut state = named();
        let before = state.clone();
        let requests = feed(&mut state, &["hello", "Match colour blue", "Settings x y", "a b c d"]);
        assert!(requests.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn sidepots_do_not_move_amount_owed() {
        let mut state = named();
        feed(&mut state, &["Hero raise 40", "Match sidepots [10,20]"]);
        assert_eq!(state.betting().sidepots(), &[10, 20]);
        assert_eq!(state.betting().current(), 40);
    }
}
