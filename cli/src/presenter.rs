use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use hangman_core::{
    GameConfig, GameEngine, GameError, GameSnapshot, GameStatus, GuessResult, WordSource,
};
use serde::Serialize;

use crate::view;

/// Results of the games played in one session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
}

impl Tally {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won => self.won += 1,
            GameStatus::Lost => self.lost += 1,
            GameStatus::InProgress => return,
        }
        self.played += 1;
    }
}

#[derive(Serialize)]
struct Rejection {
    error: GameError,
    message: String,
}

#[derive(Serialize)]
struct Prompt {
    prompt: &'static str,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    /// One JSON document per line, for driving the game from other programs.
    ///
    /// A game starts with a snapshot, then every input line answers with either a guess result or an
    /// `{"error": ..}` rejection. After a finished game `{"prompt":"play_again"}` asks for a `y`/`n`
    /// line.
    Json,
}

/// Runs games on a line based terminal. Each game gets its own engine, the presenter only ever reads
/// the snapshots the engine hands out.
pub struct Presenter<S, R, W> {
    source: S,
    config: GameConfig,
    input: R,
    output: W,
    mode: OutputMode,
    tally: Tally,
}

impl<S, R, W> Presenter<S, R, W>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    pub fn new(source: S, config: GameConfig, input: R, output: W, mode: OutputMode) -> Self {
        Self {
            source,
            config,
            input,
            output,
            mode,
            tally: Tally::default(),
        }
    }

    /// Plays until the player declines another round or input runs out.
    pub fn run(mut self) -> Result<Tally> {
        loop {
            let engine = GameEngine::from_source(&mut self.source, self.config)
                .context("Could not pick a secret word")?;
            tracing::debug!(max_lives = engine.max_lives(), "new game");

            let Some(status) = self.play(engine)? else {
                break;
            };
            self.tally.record(status);
            tracing::info!(?status, tally = ?self.tally, "game finished");

            if !self.play_again()? {
                break;
            }
        }

        if self.mode == OutputMode::Text {
            writeln!(
                self.output,
                "\nGames played: {}, won: {}, lost: {}",
                self.tally.played, self.tally.won, self.tally.lost
            )?;
        }
        Ok(self.tally)
    }

    /// Returns `None` when input ended before the game did.
    fn play(&mut self, mut engine: GameEngine) -> Result<Option<GameStatus>> {
        self.show_snapshot(&engine.snapshot())?;

        while !engine.is_finished() {
            self.prompt("Guess a letter: ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match engine.guess(line.trim_end_matches(['\r', '\n'])) {
                Ok(result) => self.show_result(&result)?,
                Err(err) => {
                    tracing::debug!(%err, input = line.trim(), "guess rejected");
                    self.show_rejection(err)?;
                }
            }
        }

        Ok(Some(engine.status()))
    }

    fn play_again(&mut self) -> Result<bool> {
        match self.mode {
            OutputMode::Text => self.prompt("Play again? [y/N] ")?,
            OutputMode::Json => self.emit_json(&Prompt {
                prompt: "play_again",
            })?,
        }
        Ok(self
            .read_line()?
            .is_some_and(|answer| matches!(answer.trim(), "y" | "Y" | "yes" | "Yes")))
    }

    fn show_snapshot(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        match self.mode {
            OutputMode::Text => writeln!(self.output, "{}", view::render(snapshot))?,
            OutputMode::Json => self.emit_json(snapshot)?,
        }
        Ok(())
    }

    fn show_result(&mut self, result: &GuessResult) -> Result<()> {
        if self.mode == OutputMode::Json {
            return self.emit_json(result);
        }

        writeln!(self.output, "{}", view::render(&result.snapshot))?;
        if let Some(outcome) = view::outcome(&result.snapshot) {
            writeln!(self.output, "\n{outcome}")?;
        } else if result.correct {
            writeln!(self.output, "Good guess! '{}' is in the word.", result.letter)?;
        } else {
            writeln!(self.output, "Sorry, '{}' is not in the word.", result.letter)?;
        }
        Ok(())
    }

    fn show_rejection(&mut self, err: GameError) -> Result<()> {
        match self.mode {
            OutputMode::Text => writeln!(self.output, "{}", view::rejection(err))?,
            OutputMode::Json => self.emit_json(&Rejection {
                error: err,
                message: err.to_string(),
            })?,
        }
        Ok(())
    }

    fn emit_json(&mut self, value: &impl Serialize) -> Result<()> {
        serde_json::to_writer(&mut self.output, value)?;
        writeln!(self.output)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        if self.mode == OutputMode::Text {
            write!(self.output, "{text}")?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        Ok((read > 0).then_some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangman_core::WordList;
    use std::io::Cursor;

    fn run(words: &str, lives: u8, input: &str, mode: OutputMode) -> (Tally, String) {
        let mut output = Vec::new();
        let presenter = Presenter::new(
            WordList::parse(0, words),
            GameConfig::new(lives),
            Cursor::new(input.to_string()),
            &mut output,
            mode,
        );
        let tally = presenter.run().unwrap();
        (tally, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_game_is_reported() {
        let (tally, output) = run("cat", 7, "c\na\nt\nn\n", OutputMode::Text);

        assert_eq!(
            tally,
            Tally {
                played: 1,
                won: 1,
                lost: 0
            }
        );
        assert!(output.contains("Word: c _ _"));
        assert!(output.contains("Word: c a t"));
        assert!(output.contains("YOU WON! Congrats!"));
        assert!(output.contains("Games played: 1, won: 1, lost: 0"));
    }

    #[test]
    fn losing_game_shows_the_word() {
        let (tally, output) = run("dog", 2, "x\nz\n", OutputMode::Text);

        assert_eq!(tally.lost, 1);
        assert!(output.contains("Sorry, 'x' is not in the word."));
        assert!(output.contains("YOU LOST! The word was: dog"));
    }

    #[test]
    fn rejected_guesses_get_messages() {
        let (_, output) = run("cat", 7, "c\nc\nab\n\n7\n", OutputMode::Text);

        assert!(output.contains("You already guessed that letter."));
        assert_eq!(output.matches("Enter a single letter.").count(), 3);
    }

    #[test]
    fn play_again_starts_a_fresh_game() {
        let (tally, output) = run("a", 1, "a\ny\nb\nno\n", OutputMode::Text);

        assert_eq!(
            tally,
            Tally {
                played: 2,
                won: 1,
                lost: 1
            }
        );
        assert_eq!(output.matches("YOU WON!").count(), 1);
        assert_eq!(output.matches("YOU LOST! The word was: a").count(), 1);
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let (tally, output) = run("cat", 7, "c\n", OutputMode::Text);

        assert_eq!(tally, Tally::default());
        assert!(output.contains("Games played: 0"));
    }

    #[test]
    fn empty_corpus_is_an_error() {
        let presenter = Presenter::new(
            WordList::parse(0, ""),
            GameConfig::default(),
            Cursor::new(String::new()),
            Vec::new(),
            OutputMode::Text,
        );

        let err = presenter.run().unwrap_err();

        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::EmptyCorpus)
        );
    }

    #[test]
    fn json_mode_emits_one_document_per_line() {
        let (_, output) = run("bee", 7, "e\ne\nb\n", OutputMode::Json);

        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0]["masked_word"], "___");
        assert_eq!(lines[1]["snapshot"]["masked_word"], "_ee");
        assert_eq!(lines[1]["correct"], true);
        assert_eq!(lines[2]["error"], "DuplicateGuess");
        assert_eq!(lines[3]["snapshot"]["status"], "Won");
        assert_eq!(lines[3]["snapshot"]["solution"], "bee");
        assert_eq!(lines[4]["prompt"], "play_again");
    }

    #[test]
    fn json_mode_asks_before_each_new_game() {
        let (tally, output) = run("a", 3, "a\ny\na\nn\n", OutputMode::Json);

        assert_eq!(tally.won, 2);
        assert_eq!(output.matches(r#"{"prompt":"play_again"}"#).count(), 2);
    }

    #[test]
    fn line_endings_are_stripped_but_padding_is_not() {
        let (_, output) = run("cat", 7, "c\r\n a\nt \n", OutputMode::Text);

        assert!(output.contains("Word: c _ _"));
        assert!(!output.contains("Word: c a _"));
        assert_eq!(output.matches("Enter a single letter.").count(), 2);
    }
}
