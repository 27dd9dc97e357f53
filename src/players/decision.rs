use crate::Chips;

/// Answer to `go`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Call(Chips),
    Raise(Chips),
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Call(chips) => write!(f, "call {}", chips),
            Self::Raise(chips) => write!(f, "raise {}", chips),
        }
    }
}

/// Answer to `setup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ready;

impl std::fmt::Display for Ready {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ready")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_lines() {
        assert_eq!(Move::Call(0).to_string(), "call 0");
        assert_eq!(Move::Raise(120).to_string(), "raise 120");
        assert_eq!(Ready.to_string(), "ready");
    }
}
