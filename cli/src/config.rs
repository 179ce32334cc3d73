use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use hangman_core::GameConfig;
use serde::Deserialize;

/// Settings read from a TOML file, any of them may be overridden on the command line.
///
/// ```toml
/// lives = 7
/// words = "words.txt"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub lives: Option<u8>,
    /// Word list with one word per line, relative paths are taken from the config file location.
    pub words: Option<PathBuf>,
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        let mut settings = Self::from_toml(&text)
            .with_context(|| format!("Could not parse config file {}", path.display()))?;

        if let Some(dir) = path.parent() {
            settings.words = settings
                .words
                .map(|words| if words.is_relative() { dir.join(words) } else { words });
        }

        tracing::debug!(?settings, "loaded config from {}", path.display());
        Ok(settings)
    }

    /// Values set in `overrides` win over the ones in `self`.
    pub fn merge(self, overrides: Settings) -> Self {
        Self {
            lives: overrides.lives.or(self.lives),
            words: overrides.words.or(self.words),
        }
    }

    pub fn game_config(&self) -> Result<GameConfig> {
        let lives = self.lives.unwrap_or(GameConfig::DEFAULT_LIVES);
        ensure!(lives >= 1, "lives must be at least 1");
        Ok(GameConfig::new(lives))
    }
}
