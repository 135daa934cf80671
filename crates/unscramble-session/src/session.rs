//! The game session: one player's game, round by round.
//!
//! A session is a small state machine:
//!
//! ```text
//!   reset_game() ──→ [Round 1] ──(check_guess ✓ / skip_word)──→ [Round 2] ──→ …
//!                       │  ↺ check_guess ✗ (flag wrong guess)
//!                       ▼
//!                  [Round max_rounds] ──(check_guess ✓ / skip_word)──→ [GameOver]
//!                                                                        │
//!   reset_game() ←───────────────────────────────────────────────────────┘
//! ```
//!
//! Every transition publishes a brand-new [`GameUiState`] through the
//! session's [`StateHolder`].

use std::collections::HashSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use unscramble_words::{WordCatalog, pick_unused, scramble};

use crate::{GameConfig, GameUiState, SessionError, StateHolder};

/// One single-player game of Unscramble.
///
/// The hidden word is never exposed. Observers read [`state`](Self::state)
/// or [`subscribe`](Self::subscribe) to snapshots, and drive the game
/// through [`update_guess`](Self::update_guess),
/// [`check_guess`](Self::check_guess), [`skip_word`](Self::skip_word) and
/// [`reset_game`](Self::reset_game).
///
/// Mutators take `&mut self`, so a session has exactly one driver at a
/// time. Wrap it in a mutex if several tasks need to drive it.
pub struct GameSession<R = StdRng> {
    config: GameConfig,
    catalog: WordCatalog,

    /// The unscrambled word for the active round.
    current_word: String,

    /// Words presented so far in this game. Grows by one per round.
    used_words: HashSet<String>,

    /// The player's in-progress input.
    pending_guess: String,

    state: StateHolder<GameUiState>,
    rng: R,
}

impl GameSession<StdRng> {
    /// Creates a session with an OS-seeded RNG and starts round one.
    ///
    /// # Errors
    /// See [`GameSession::with_rng`].
    pub fn new(config: GameConfig, catalog: WordCatalog) -> Result<Self, SessionError> {
        Self::with_rng(config, catalog, StdRng::from_os_rng())
    }

    /// Validates `words` as a catalog, then behaves like [`GameSession::new`].
    ///
    /// # Errors
    /// Returns [`SessionError::Catalog`] if the words don't form a valid
    /// catalog, plus everything [`GameSession::with_rng`] can return.
    pub fn from_words<I, S>(config: GameConfig, words: I) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(config, WordCatalog::new(words)?)
    }
}

impl<R: Rng> GameSession<R> {
    /// Creates a session drawing randomness from `rng` and starts round one.
    ///
    /// Pass a seeded RNG to replay the same sequence of words and scrambles.
    ///
    /// # Errors
    /// - [`SessionError::ZeroRounds`] if `config.max_rounds` is 0.
    /// - [`SessionError::NotEnoughWords`] if the catalog has fewer distinct
    ///   words than `config.max_rounds`.
    pub fn with_rng(
        config: GameConfig,
        catalog: WordCatalog,
        rng: R,
    ) -> Result<Self, SessionError> {
        config.validate(&catalog)?;

        let mut session = Self {
            config,
            catalog,
            current_word: String::new(),
            used_words: HashSet::new(),
            pending_guess: String::new(),
            state: StateHolder::new(GameUiState::default()),
            rng,
        };
        session.reset_game();
        Ok(session)
    }

    // -- Operations -------------------------------------------------------

    /// Starts a new game: forgets the used words, zeroes the score, and
    /// publishes round one with a fresh scramble. Safe to call at any time.
    pub fn reset_game(&mut self) {
        self.used_words.clear();
        self.pending_guess.clear();

        let scrambled = self.start_round();
        self.state.set(GameUiState::first_round(scrambled));

        tracing::info!(max_rounds = self.config.max_rounds, "game reset");
    }

    /// Replaces the pending guess. Any text is accepted, including empty.
    pub fn update_guess(&mut self, text: impl Into<String>) {
        self.pending_guess = text.into();
    }

    /// Scores the pending guess against the hidden word.
    ///
    /// A case-insensitive match adds `score_increase` and advances to the
    /// next round (or ends the game after the last one). A miss only
    /// raises `is_guessed_word_wrong`. Either way the pending guess is
    /// cleared afterwards. Once the game is over the guess is discarded
    /// without being scored.
    pub fn check_guess(&mut self) {
        let snapshot = self.state.get();

        if snapshot.is_game_over {
            tracing::debug!("guess ignored, game is over");
        } else if guess_matches(&self.pending_guess, &self.current_word) {
            let updated = snapshot.score.saturating_add(self.config.score_increase);
            self.advance(updated);
        } else {
            self.state.update(GameUiState::with_wrong_guess);
            tracing::debug!(round = snapshot.current_word_count, "wrong guess");
        }

        self.update_guess("");
    }

    /// Moves to the next round without changing the score.
    pub fn skip_word(&mut self) {
        let snapshot = self.state.get();

        if snapshot.is_game_over {
            tracing::debug!("skip ignored, game is over");
        } else {
            tracing::debug!(round = snapshot.current_word_count, "word skipped");
            self.advance(snapshot.score);
        }

        self.update_guess("");
    }

    // -- Observation ------------------------------------------------------

    /// The latest snapshot.
    pub fn state(&self) -> GameUiState {
        self.state.get()
    }

    /// A receiver that is notified every time a new snapshot is published.
    pub fn subscribe(&self) -> watch::Receiver<GameUiState> {
        self.state.subscribe()
    }

    /// The pending guess text.
    pub fn guess(&self) -> &str {
        &self.pending_guess
    }

    /// Number of distinct words presented in the current game.
    pub fn rounds_played(&self) -> usize {
        self.used_words.len()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    // -- Internals --------------------------------------------------------

    /// Publishes the next round, or ends the game if every round is used.
    fn advance(&mut self, new_score: u32) {
        let current = self.state.get();

        if self.used_words.len() >= self.config.max_rounds {
            self.state.set(current.finished(new_score));
            tracing::info!(
                score = new_score,
                rounds = self.used_words.len(),
                "game over"
            );
        } else {
            let scrambled = self.start_round();
            let next = current.advanced(new_score, scrambled);
            tracing::debug!(
                round = next.current_word_count,
                score = next.score,
                "round started"
            );
            self.state.set(next);
        }
    }

    /// Draws an unused word, records it, and returns its scramble.
    fn start_round(&mut self) -> String {
        // Construction guarantees `max_rounds <= distinct_len`, and this is
        // only reached while fewer than `max_rounds` words are used.
        let word = pick_unused(&self.catalog, &self.used_words, &mut self.rng)
            .expect("catalog has an unused word for every round")
            .to_string();

        let scrambled = scramble(&word, &mut self.rng)
            .expect("catalog words have at least two distinct characters");

        self.used_words.insert(word.clone());
        self.current_word = word;
        scrambled
    }
}

impl<R> fmt::Debug for GameSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The hidden word stays out of debug output.
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("rounds_played", &self.used_words.len())
            .field("state", &self.state.get())
            .finish_non_exhaustive()
    }
}

/// Case-insensitive comparison, Unicode-aware, no trimming.
fn guess_matches(guess: &str, word: &str) -> bool {
    guess
        .chars()
        .flat_map(char::to_lowercase)
        .eq(word.chars().flat_map(char::to_lowercase))
}

// =========================================================================
// Tests
// =========================================================================
