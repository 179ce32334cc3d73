use alloc::collections::BTreeSet;
use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Shown in place of letters that were not revealed yet.
pub const PLACEHOLDER: char = '_';

/// Case-folds a single character, rejecting anything that does not fold into exactly one letter.
pub fn normalize_letter(c: char) -> Result<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(letter), None) if letter.is_alphabetic() => Ok(letter),
        _ => Err(GameError::InvalidInput),
    }
}

/// Parses player input into a guess letter. The input must be exactly one letter, padding included.
pub fn parse_letter(input: &str) -> Result<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => normalize_letter(c),
        _ => Err(GameError::InvalidInput),
    }
}

/// Word to be guessed, lowercase letters only and never empty.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretWord {
    letters: String,
}

impl SecretWord {
    pub fn new(word: &str) -> Result<Self> {
        let letters = word
            .trim()
            .chars()
            .map(|c| normalize_letter(c).map_err(|_| GameError::InvalidWord))
            .collect::<Result<String>>()?;

        if letters.is_empty() {
            return Err(GameError::InvalidWord);
        }

        Ok(Self { letters })
    }

    pub fn as_str(&self) -> &str {
        &self.letters
    }

    /// Number of letters, counting repeated ones.
    pub fn len(&self) -> usize {
        self.letters.chars().count()
    }

    /// Always false, empty words are rejected by [`SecretWord::new`].
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(letter)
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.chars()
    }

    pub fn distinct_letters(&self) -> BTreeSet<char> {
        self.letters().collect()
    }

    /// Renders the word with every letter outside `revealed` replaced by [`PLACEHOLDER`].
    pub fn mask(&self, revealed: &BTreeSet<char>) -> String {
        self.letters()
            .map(|c| if revealed.contains(&c) { c } else { PLACEHOLDER })
            .collect()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}

impl TryFrom<String> for SecretWord {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for SecretWord {
    type Error = GameError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SecretWord> for String {
    fn from(word: SecretWord) -> Self {
        word.letters
    }
}
