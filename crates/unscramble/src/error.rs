//! Unified error type for Unscramble.

use std::path::PathBuf;

use unscramble_session::SessionError;
use unscramble_words::CatalogError;

/// Top-level error that wraps every layer's errors.
///
/// The `#[from]` attributes generate `From` impls, so `?` converts layer
/// errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum UnscrambleError {
    /// The word list is unusable (empty, or a word that can't be scrambled).
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The game rules don't fit the word list.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The settings file couldn't be read or parsed.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Errors from loading a settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}
