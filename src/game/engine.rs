//! The game state engine: owns the word source, the random source and the
//! current round. Everything the presentation layer needs to know about
//! the game goes through [`Game`].

use super::error::WordSourceError;
use super::round::{GuessOutcome, Round};
use super::word_list::WordSource;
use rand::rngs::StdRng;

pub struct Game {
    source: Box<dyn WordSource>,
    rng: StdRng,
    round: Round,
}

impl Game {
    /// Load the first word and start a round. Fails if the source has no words.
    pub fn new(source: Box<dyn WordSource>, mut rng: StdRng) -> Result<Self, WordSourceError> {
        let word = pick_word(source.as_ref(), &mut rng)?;
        let round = Round::new(word);
        tracing::info!(
            source = %source.describe(),
            letters = round.secret().chars().count(),
            "Round started"
        );
        Ok(Self { source, rng, round })
    }

    /// Read the word source and pick one candidate uniformly at random.
    pub fn load_word(&mut self) -> Result<String, WordSourceError> {
        pick_word(self.source.as_ref(), &mut self.rng)
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let outcome = self.round.guess(letter);
        tracing::debug!(%letter, ?outcome, wrong = self.round.wrong_guesses(), "Guess");
        outcome
    }

    pub fn display_word(&self) -> String {
        self.round.display_word()
    }

    pub fn is_won(&self) -> bool {
        self.round.is_won()
    }

    pub fn is_lost(&self) -> bool {
        self.round.is_lost()
    }

    pub fn wrong_guesses(&self) -> u8 {
        self.round.wrong_guesses()
    }

    /// Replace the round with a fresh one. On failure the current round is kept.
    pub fn reset(&mut self) -> Result<(), WordSourceError> {
        let word = self.load_word()?;
        self.round = Round::new(word);
        tracing::info!(
            letters = self.round.secret().chars().count(),
            "Round reset"
        );
        Ok(())
    }
}

fn pick_word(source: &dyn WordSource, rng: &mut StdRng) -> Result<String, WordSourceError> {
    let list = source.load()?;
    tracing::debug!(words = list.words().len(), "Word list loaded");
    Ok(list.pick(rng).to_string())
}
