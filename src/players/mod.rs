pub mod bot;
pub use bot::*;

pub mod decision;
pub use decision::*;

pub mod robot;
pub use robot::*;
