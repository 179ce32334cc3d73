//! Text rendering of engine snapshots. Nothing here looks past [`GameSnapshot`].

use hangman_core::{GameError, GameSnapshot, GameStatus};

const GALLOWS: [&str; 7] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Picks the drawing for the current number of mistakes, scaled so the last one always shows the full
/// figure no matter how many lives the game started with.
pub fn gallows(snapshot: &GameSnapshot) -> &'static str {
    let last = GALLOWS.len() - 1;
    let max_lives = usize::from(snapshot.max_lives.max(1));
    let incorrect = usize::from(snapshot.incorrect_guesses).min(max_lives);
    GALLOWS[(incorrect * last).div_ceil(max_lives)]
}

/// `"ca_"` becomes `"c a _"`, so placeholders stay countable.
pub fn spaced(masked_word: &str) -> String {
    let mut out = String::with_capacity(masked_word.len() * 2);
    for (i, c) in masked_word.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

pub fn render(snapshot: &GameSnapshot) -> String {
    let guessed = snapshot
        .guessed_letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}\n\nWord: {}\nLives left: {}/{}\nGuessed letters: {}",
        gallows(snapshot),
        spaced(&snapshot.masked_word),
        snapshot.lives_remaining,
        snapshot.max_lives,
        guessed,
    )
}

/// Final message, only for finished games.
pub fn outcome(snapshot: &GameSnapshot) -> Option<String> {
    match snapshot.status {
        GameStatus::InProgress => None,
        GameStatus::Won => Some("YOU WON! Congrats!".to_string()),
        GameStatus::Lost => Some(format!(
            "YOU LOST! The word was: {}",
            snapshot.solution.as_deref().unwrap_or("?")
        )),
    }
}

pub fn rejection(err: GameError) -> &'static str {
    match err {
        GameError::InvalidInput => "Enter a single letter.",
        GameError::DuplicateGuess => "You already guessed that letter.",
        GameError::AlreadyFinished => "The game is over, no more guesses.",
        GameError::InvalidWord | GameError::EmptyCorpus => "No word to play with.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(incorrect_guesses: u8, max_lives: u8, status: GameStatus) -> GameSnapshot {
        GameSnapshot {
            masked_word: "ca_".to_string(),
            guessed_letters: vec!['c', 'x', 'a'],
            lives_remaining: max_lives - incorrect_guesses,
            status,
            incorrect_guesses,
            max_lives,
            solution: status.is_finished().then(|| "cat".to_string()),
        }
    }

    #[test]
    fn gallows_starts_empty_and_ends_full() {
        assert_eq!(gallows(&snapshot(0, 7, GameStatus::InProgress)), GALLOWS[0]);
        assert_eq!(gallows(&snapshot(1, 7, GameStatus::InProgress)), GALLOWS[1]);
        assert_eq!(gallows(&snapshot(7, 7, GameStatus::Lost)), GALLOWS[6]);
    }

    #[test]
    fn gallows_scales_with_lives() {
        assert_eq!(gallows(&snapshot(1, 1, GameStatus::Lost)), GALLOWS[6]);
        assert_eq!(gallows(&snapshot(1, 3, GameStatus::InProgress)), GALLOWS[2]);
        assert_eq!(gallows(&snapshot(1, 12, GameStatus::InProgress)), GALLOWS[1]);
        assert_eq!(gallows(&snapshot(11, 12, GameStatus::InProgress)), GALLOWS[6]);
    }

    #[test]
    fn spaced_separates_letters() {
        assert_eq!(spaced("ca_"), "c a _");
        assert_eq!(spaced("ż"), "ż");
        assert_eq!(spaced(""), "");
    }

    #[test]
    fn render_lists_word_lives_and_guesses() {
        let text = render(&snapshot(1, 7, GameStatus::InProgress));

        assert!(text.contains("Word: c a _"));
        assert!(text.contains("Lives left: 6/7"));
        assert!(text.contains("Guessed letters: c, x, a"));
    }

    #[test]
    fn outcome_reveals_word_after_loss() {
        assert_eq!(outcome(&snapshot(0, 7, GameStatus::InProgress)), None);
        assert_eq!(
            outcome(&snapshot(7, 7, GameStatus::Lost)).as_deref(),
            Some("YOU LOST! The word was: cat")
        );
        assert_eq!(
            outcome(&snapshot(2, 7, GameStatus::Won)).as_deref(),
            Some("YOU WON! Congrats!")
        );
    }
}
