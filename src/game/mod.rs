//! Game rules: word lists, rounds, and the engine tying them together.

pub mod engine;
pub mod error;
pub mod round;
pub mod word_list;

pub use engine::Game;
pub use error::WordSourceError;
pub use round::{GuessOutcome, MAX_WRONG};
