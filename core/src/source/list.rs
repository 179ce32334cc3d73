use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

const BUILTIN_WORDS: &[&str] = &[
    "anchor", "bicycle", "blanket", "candle", "castle", "compass", "dolphin", "engine", "falcon",
    "garden", "glacier", "harbor", "island", "jacket", "kettle", "ladder", "lantern", "meadow",
    "needle", "orchard", "pepper", "pirate", "puzzle", "quartz", "rabbit", "saddle", "shadow",
    "thunder", "tunnel", "umbrella", "velvet", "volcano", "walnut", "whistle", "window", "wizard",
    "yogurt", "zipper",
];

/// In-memory corpus that draws uniformly at random with a seeded generator, so the same seed always
/// yields the same sequence of words.
#[derive(Clone, Debug)]
pub struct WordList {
    words: Vec<SecretWord>,
    rng: SmallRng,
}

impl WordList {
    pub fn new(seed: u64, words: impl IntoIterator<Item = SecretWord>) -> Self {
        Self {
            words: words.into_iter().collect(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Parses a corpus with one word per line.
    ///
    /// Blank lines and lines starting with `#` are ignored, malformed entries are skipped with a warning.
    pub fn parse(seed: u64, text: &str) -> Self {
        let words = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|(line_number, line)| match SecretWord::new(line) {
                Ok(word) => Some(word),
                Err(err) => {
                    log::warn!("Skipping word list entry {line:?} on line {line_number}: {err}");
                    None
                }
            });
        let list = Self::new(seed, words);
        log::debug!("Loaded word list with {} words", list.len());
        list
    }

    pub fn builtin(seed: u64) -> Self {
        Self::new(
            seed,
            BUILTIN_WORDS
                .iter()
                .filter_map(|&word| SecretWord::new(word).ok()),
        )
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }
}

impl WordSource for WordList {
    fn next_word(&mut self) -> Result<SecretWord> {
        if self.words.is_empty() {
            return Err(GameError::EmptyCorpus);
        }

        let index = self.rng.random_range(0..self.words.len());
        Ok(self.words[index].clone())
    }
}
