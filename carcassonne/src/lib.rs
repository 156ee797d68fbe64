pub use board::*;
pub use deck::*;
pub use errors::*;
pub use game::*;
pub use geometry::*;
pub use player::*;
pub use strategy::*;
pub use tile::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod deck;
mod errors;
mod game;
mod geometry;
mod player;
mod strategy;
mod tile;
mod visualization;
