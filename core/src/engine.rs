use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no guesses can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Everything a presenter needs to draw the game, detached from the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub masked_word: String,
    /// Guessed letters in the order they were tried.
    pub guessed_letters: Vec<char>,
    pub lives_remaining: u8,
    pub status: GameStatus,
    pub incorrect_guesses: u8,
    pub max_lives: u8,
    /// The secret word, only disclosed once the game is finished.
    pub solution: Option<String>,
}

/// Outcome of an accepted guess
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    pub letter: char,
    pub correct: bool,
    pub snapshot: GameSnapshot,
}

impl GuessResult {
    pub fn status(&self) -> GameStatus {
        self.snapshot.status
    }

    pub fn lives_remaining(&self) -> u8 {
        self.snapshot.lives_remaining
    }

    pub fn masked_word(&self) -> &str {
        &self.snapshot.masked_word
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.snapshot.guessed_letters
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameEngine {
    word: SecretWord,
    distinct_letters: BTreeSet<char>,
    guessed: Vec<char>,
    revealed: BTreeSet<char>,
    incorrect_guesses: u8,
    max_lives: u8,
    status: GameStatus,
}

impl GameEngine {
    pub fn new(word: SecretWord, config: GameConfig) -> Self {
        let config = GameConfig::new(config.max_lives);
        Self {
            distinct_letters: word.distinct_letters(),
            word,
            guessed: Vec::new(),
            revealed: BTreeSet::new(),
            incorrect_guesses: 0,
            max_lives: config.max_lives,
            status: Default::default(),
        }
    }

    /// Starts a game with the next word drawn from `source`.
    pub fn from_source<S>(source: &mut S, config: GameConfig) -> Result<Self>
    where
        S: WordSource + ?Sized,
    {
        let word = source.next_word()?;
        Ok(Self::new(word, config))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn max_lives(&self) -> u8 {
        self.max_lives
    }

    pub fn incorrect_guesses(&self) -> u8 {
        self.incorrect_guesses
    }

    pub fn lives_remaining(&self) -> u8 {
        self.max_lives.saturating_sub(self.incorrect_guesses)
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    pub fn masked_word(&self) -> String {
        self.word.mask(&self.revealed)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            masked_word: self.masked_word(),
            guessed_letters: self.guessed.clone(),
            lives_remaining: self.lives_remaining(),
            status: self.status,
            incorrect_guesses: self.incorrect_guesses,
            max_lives: self.max_lives,
            solution: self
                .status
                .is_finished()
                .then(|| String::from(self.word.as_str())),
        }
    }

    /// Guesses from raw player input, see [`parse_letter`].
    pub fn guess(&mut self, input: &str) -> Result<GuessResult> {
        let letter = parse_letter(input)?;
        self.guess_letter(letter)
    }

    /// Applies a single letter guess. Rejected guesses leave the engine untouched.
    pub fn guess_letter(&mut self, letter: char) -> Result<GuessResult> {
        let letter = normalize_letter(letter)?;
        self.check_not_finished()?;

        if self.guessed.contains(&letter) {
            return Err(GameError::DuplicateGuess);
        }

        self.guessed.push(letter);
        let correct = self.word.contains(letter);
        if correct {
            // all occurrences show up at once since the mask is per letter
            self.revealed.insert(letter);
        } else {
            self.incorrect_guesses += 1;
        }
        log::trace!("guessed {letter:?}, correct: {correct}");

        self.update_status();

        Ok(GuessResult {
            letter,
            correct,
            snapshot: self.snapshot(),
        })
    }

    fn update_status(&mut self) {
        let next = if self.revealed.len() == self.distinct_letters.len() {
            GameStatus::Won
        } else if self.incorrect_guesses >= self.max_lives {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        if next != self.status {
            log::debug!(
                "game {:?} after {} guesses ({} incorrect)",
                next,
                self.guessed.len(),
                self.incorrect_guesses
            );
            self.status = next;
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyFinished)
        } else {
            Ok(())
        }
    }
}
