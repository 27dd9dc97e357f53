use super::codec::parse_cards;
use crate::Chips;
use crate::cards::Board;
use crate::cards::Hand;
use std::str::FromStr;

/// Decision deadline as sent by the engine (milliseconds).
pub type Timeout = u64;

/// `Settings <key> <value>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting<'a> {
    GameType(&'a str),
    GameMode(&'a str),
    TimeBank(i64),
    TimePerMove(i64),
    HandsPerLevel(i32),
    YourBot(&'a str),
    Unknown(&'a str, &'a str),
}

impl<'a> From<(&'a str, &'a str)> for Setting<'a> {
    fn from((key, value): (&'a str, &'a str)) -> Self {
        match key {
            "gameType" => Self::GameType(value),
            "gameMode" => Self::GameMode(value),
            "timeBank" => Self::TimeBank(number(value)),
            "timePerMove" => Self::TimePerMove(number(value)),
            "handsPerLevel" => Self::HandsPerLevel(number(value)),
            "yourBot" => Self::YourBot(value),
            _ => Self::Unknown(key, value),
        }
    }
}

/// `Match <key> <value>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Info<'a> {
    Round(u32),
    SmallBlind(Chips),
    BigBlind(Chips),
    Pot(Chips),
    Table(Board),
    OnButton(&'a str),
    SidePots(Vec<Chips>),
    Unknown(&'a str, &'a str),
}

impl<'a> From<(&'a str, &'a str)> for Info<'a> {
    fn from((key, value): (&'a str, &'a str)) -> Self {
        match key {
            "round" => Self::Round(number(value)),
            "smallBlind" => Self::SmallBlind(number(value)),
            "bigBlind" => Self::BigBlind(number(value)),
            "pot" => Self::Pot(number(value)),
            "table" => Self::Table(Board::from(parse_cards(value))),
            "onButton" => Self::OnButton(value),
            "sidepots" => Self::SidePots(
                value
                    .trim_start_matches('[')
                    .trim_end_matches(']')
                    .split(',')
                    .filter(|pot| !pot.is_empty())
                    .map(number)
                    .collect(),
            ),
            _ => Self::Unknown(key, value),
        }
    }
}

/// `<playerName> <key> <value>`
///
/// Any key that is not a player attribute is an action name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report<'a> {
    Seat(usize),
    Hand(Hand),
    Stack(Chips),
    Action(&'a str, Chips),
}

impl<'a> From<(&'a str, &'a str)> for Report<'a> {
    fn from((key, value): (&'a str, &'a str)) -> Self {
        match key {
            "seat" => Self::Seat(number(value)),
            "hand" => Self::Hand(parse_cards(value)),
            "stack" => Self::Stack(number(value)),
            action => Self::Action(action, number(value)),
        }
    }
}

/// One engine line, decoded by its shape.
///
/// Player lines only exist once we know our own name; before that, a
/// three-field line that is neither `Settings` nor `Match` is Unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update<'a> {
    Settings(Setting<'a>),
    Match(Info<'a>),
    Player(&'a str, Report<'a>),
    Go(Timeout),
    Setup(Timeout),
    Unknown(&'a [&'a str]),
}

impl<'a> Update<'a> {
    pub fn decode(fields: &'a [&'a str], named: bool) -> Self {
        match fields {
            ["Settings", key, value] => Self::Settings(Setting::from((*key, *value))),
            ["Match", key, value] => Self::Match(Info::from((*key, *value))),
            [name, key, value] if named => Self::Player(*name, Report::from((*key, *value))),
            ["go", timeout] => Self::Go(number(timeout)),
            ["setup", timeout] => Self::Setup(number(timeout)),
            _ => Self::Unknown(fields),
        }
    }
}

/// Numeric field, or zero with a warning.
fn number<T>(field: &str) -> T
where
    T: FromStr + Default,
{
    field.parse::<T>().unwrap_or_else(|_| {
        log::warn!("cannot read number ``{}'', using 0", field);
        T::default()
    })
}
