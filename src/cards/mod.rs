pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod category;
pub use category::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod kicks;
pub use kicks::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod street;
pub use street::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;
