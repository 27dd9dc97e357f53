/// The action vocabulary of player lines.
///
/// Only `post`, `check`, `call` and `raise` move the amount to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Act {
    Post,
    Check,
    Call,
    Raise,
    Fold,
    Wins,
    Other,
}

impl From<&str> for Act {
    fn from(name: &str) -> Self {
        match name {
            "post" => Self::Post,
            "check" => Self::Check,
            "call" => Self::Call,
            "raise" => Self::Raise,
            "fold" => Self::Fold,
            "wins" => Self::Wins,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for Act {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Post => write!(f, "post"),
            Self::Check => write!(f, "check"),
            Self::Call => write!(f, "call"),
            Self::Raise => write!(f, "raise"),
            Self::Fold => write!(f, "fold"),
            Self::Wins => write!(f, "wins"),
            Self::Other => write!(f, "?"),
        }
    }
}
