//! The running model of the match, folded from engine lines.

pub mod act;
pub use act::*;

pub mod betting;
pub use betting::*;

pub mod bridge;
pub use bridge::*;

pub mod info;
pub use info::*;

pub mod player;
pub use player::*;

pub mod settings;
pub use settings::*;

#[allow(clippy::module_inception)]
pub mod state;
pub use state::*;
