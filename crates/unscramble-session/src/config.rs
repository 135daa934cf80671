//! Game configuration.

use serde::{Deserialize, Serialize};
use unscramble_words::{DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE, WordCatalog};

use crate::SessionError;

/// Tunable rules for a game.
///
/// Missing fields fall back to the defaults when deserializing, so a
/// settings file only needs to mention what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Total rounds per game. The game ends on the advance after the
    /// last round.
    pub max_rounds: usize,

    /// Points awarded for each correct guess. Skips award nothing.
    pub score_increase: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            score_increase: DEFAULT_SCORE_INCREASE,
        }
    }
}

impl GameConfig {
    /// Checks that `catalog` can supply every round of a game.
    ///
    /// # Errors
    /// - [`SessionError::ZeroRounds`] if `max_rounds` is 0.
    /// - [`SessionError::NotEnoughWords`] if `max_rounds` exceeds the
    ///   number of distinct catalog words.
    pub fn validate(&self, catalog: &WordCatalog) -> Result<(), SessionError> {
        if self.max_rounds == 0 {
            return Err(SessionError::ZeroRounds);
        }
        let available = catalog.distinct_len();
        if self.max_rounds > available {
            return Err(SessionError::NotEnoughWords {
                max_rounds: self.max_rounds,
                available,
            });
        }
        Ok(())
    }
}
