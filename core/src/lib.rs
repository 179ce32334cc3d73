#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use source::*;
pub use word::*;

mod engine;
mod error;
mod source;
mod word;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Incorrect guesses allowed before the game is lost.
    pub max_lives: u8,
}

impl GameConfig {
    /// One life per stage of the classic gallows drawing.
    pub const DEFAULT_LIVES: u8 = 7;

    pub const fn new_unchecked(max_lives: u8) -> Self {
        Self { max_lives }
    }

    pub fn new(max_lives: u8) -> Self {
        Self::new_unchecked(max_lives.max(1))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_LIVES)
    }
}
