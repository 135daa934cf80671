//! # Unscramble
//!
//! A single-player word unscramble game engine.
//!
//! The engine presents a scrambled word each round, scores the player's
//! guesses, and ends the game after a fixed number of rounds. The
//! presentation layer (a terminal, a GUI, a web page) only reads
//! [`GameUiState`](prelude::GameUiState) snapshots and calls four
//! operations on a [`GameSession`](prelude::GameSession).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use unscramble::prelude::*;
//!
//! let mut session = Settings::default().into_session()?;
//! println!("unscramble: {}", session.state().current_scrambled_word);
//!
//! session.update_guess("guess");
//! session.check_guess();
//! if session.state().is_guessed_word_wrong {
//!     session.skip_word();
//! }
//! # Ok::<(), UnscrambleError>(())
//! ```

mod error;
pub mod logging;
mod settings;

pub use error::{SettingsError, UnscrambleError};
pub use settings::Settings;

pub mod prelude {
    pub use crate::{Settings, SettingsError, UnscrambleError};
    pub use unscramble_session::{GameConfig, GameSession, GameUiState, SessionError, StateHolder};
    pub use unscramble_words::{CatalogError, WordCatalog};
}
