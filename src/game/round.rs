use std::collections::HashSet;

/// Wrong guesses allowed before the round is lost. One per gallows body part.
pub const MAX_WRONG: u8 = 6;

/// Shown in place of a character that has not been guessed yet.
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    AlreadyGuessed,
    Hit,
    Miss,
    /// The round is already won or lost; the guess was ignored.
    RoundOver,
}

/// One secret word and everything guessed against it.
#[derive(Debug, Clone)]
pub struct Round {
    secret: String,
    guessed: HashSet<char>,
    wrong_guesses: u8,
}

impl Round {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            guessed: HashSet::new(),
            wrong_guesses: 0,
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    /// Guessed letters in alphabetical order.
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Letters guessed that are not in the secret word, alphabetical.
    pub fn missed_letters(&self) -> Vec<char> {
        self.guessed_letters()
            .into_iter()
            .filter(|c| !self.secret.contains(*c))
            .collect()
    }

    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.guessed.contains(&letter) {
            return GuessOutcome::AlreadyGuessed;
        }
        if self.is_won() || self.is_lost() {
            return GuessOutcome::RoundOver;
        }
        self.guessed.insert(letter);
        if self.secret.contains(letter) {
            GuessOutcome::Hit
        } else {
            self.wrong_guesses += 1;
            GuessOutcome::Miss
        }
    }

    /// The secret word with unguessed characters masked, space-separated.
    pub fn display_word(&self) -> String {
        let mut out = String::with_capacity(self.secret.len() * 2);
        for (i, c) in self.secret.chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if self.guessed.contains(&c) { c } else { PLACEHOLDER });
        }
        out
    }

    pub fn is_won(&self) -> bool {
        self.secret.chars().all(|c| self.guessed.contains(&c))
    }

    pub fn is_lost(&self) -> bool {
        self.wrong_guesses >= MAX_WRONG
    }
}
