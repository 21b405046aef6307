mod common;
mod dataset;
mod game;
mod player;
mod team;

pub use common::*;
pub use dataset::*;
pub use game::*;
pub use player::*;
pub use team::*;
