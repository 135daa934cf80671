//! Settings file: game rules, an optional custom word list, and an
//! optional RNG seed.
//!
//! ```json
//! {
//!   "game": { "max_rounds": 5, "score_increase": 10 },
//!   "words": ["river", "stone", "cloud", "forest", "meadow"],
//!   "seed": 42
//! }
//! ```
//!
//! Every key is optional. Without `words` the built-in catalog is used;
//! without `seed` the RNG is seeded from the OS.

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use unscramble_session::{GameConfig, GameSession};
use unscramble_words::{CatalogError, WordCatalog};

use crate::{SettingsError, UnscrambleError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub game: GameConfig,

    /// Custom word list. `None` means the built-in catalog.
    pub words: Option<Vec<String>>,

    /// Fixed seed for reproducible games.
    pub seed: Option<u64>,
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self, UnscrambleError> {
        let settings = serde_json::from_str(json).map_err(SettingsError::Parse)?;
        Ok(settings)
    }

    /// Reads and parses a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, UnscrambleError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// The catalog these settings describe.
    pub fn catalog(&self) -> Result<WordCatalog, CatalogError> {
        match &self.words {
            Some(words) => WordCatalog::new(words.iter().cloned()),
            None => Ok(WordCatalog::builtin()),
        }
    }

    /// Builds a validated session and starts its first round.
    pub fn into_session(self) -> Result<GameSession, UnscrambleError> {
        let catalog = self.catalog()?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(GameSession::with_rng(self.game, catalog, rng)?)
    }
}
