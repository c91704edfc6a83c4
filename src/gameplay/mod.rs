pub mod action;
pub use action::*;

pub mod game;
pub use game::*;

pub mod outcome;
pub use outcome::*;

pub mod record;
pub use record::*;

pub mod rejection;
pub use rejection::*;

pub mod seat;
pub use seat::*;

pub mod showdown;
pub use showdown::*;

/// a seat at the table, by index
pub type Position = usize;
