//! The engine's line protocol: fields, card tokens, and line shapes.

pub mod codec;
pub use codec::*;

pub mod tokens;
pub use tokens::*;

pub mod update;
pub use update::*;
