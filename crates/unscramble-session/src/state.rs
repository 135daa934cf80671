//! The observable snapshot of a game.

use serde::{Deserialize, Serialize};

/// Everything the presentation layer is allowed to see about a game.
///
/// Snapshots are never edited in place. Each transition builds a new
/// value from the previous one and publishes it whole, so an observer
/// can't catch a half-updated state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameUiState {
    /// The hidden word with its characters rearranged.
    pub current_scrambled_word: String,

    /// 1-based ordinal of the active round. After the final advance this
    /// reads `max_rounds + 1`.
    pub current_word_count: u32,

    pub score: u32,

    /// `true` when the most recent guess was wrong. Cleared by the next
    /// advance.
    pub is_guessed_word_wrong: bool,

    pub is_game_over: bool,
}

impl Default for GameUiState {
    fn default() -> Self {
        Self {
            current_scrambled_word: String::new(),
            current_word_count: 1,
            score: 0,
            is_guessed_word_wrong: false,
            is_game_over: false,
        }
    }
}

impl GameUiState {
    /// The snapshot for round one of a fresh game.
    pub fn first_round(scrambled: String) -> Self {
        Self {
            current_scrambled_word: scrambled,
            ..Self::default()
        }
    }

    /// Copy with the wrong-guess flag raised and nothing else changed.
    pub fn with_wrong_guess(&self) -> Self {
        Self {
            is_guessed_word_wrong: true,
            ..self.clone()
        }
    }

    /// Copy for the next round: new scramble, new score, count bumped.
    pub fn advanced(&self, score: u32, scrambled: String) -> Self {
        Self {
            current_scrambled_word: scrambled,
            current_word_count: self.current_word_count.saturating_add(1),
            score,
            is_guessed_word_wrong: false,
            is_game_over: self.is_game_over,
        }
    }

    /// Copy for the terminal advance. The scramble stays as it was but
    /// the count still moves on.
    pub fn finished(&self, score: u32) -> Self {
        Self {
            current_word_count: self.current_word_count.saturating_add(1),
            score,
            is_guessed_word_wrong: false,
            is_game_over: true,
            ..self.clone()
        }
    }
}
