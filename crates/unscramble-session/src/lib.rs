//! Game session management for Unscramble.
//!
//! A [`GameSession`] owns one game: the hidden word, the words already
//! presented, the player's in-progress guess, and the score. The
//! presentation layer never touches those fields. It reads immutable
//! [`GameUiState`] snapshots and calls four operations:
//!
//! - [`GameSession::reset_game`] — start over with a fresh first round
//! - [`GameSession::update_guess`] — replace the pending guess text
//! - [`GameSession::check_guess`] — score the pending guess
//! - [`GameSession::skip_word`] — move on without scoring
//!
//! # How it fits in the stack
//!
//! ```text
//! Presentation Layer (above)  ← renders snapshots, forwards input
//!     ↕
//! Session Layer (this crate)  ← round state machine, score, snapshots
//!     ↕
//! Words Layer (below)  ← catalog, random selection, scrambling
//! ```

mod config;
mod error;
mod holder;
mod session;
mod state;

pub use config::GameConfig;
pub use error::SessionError;
pub use holder::StateHolder;
pub use session::GameSession;
pub use state::GameUiState;
