//! Error types for the session layer.

use unscramble_words::CatalogError;

/// Errors that can occur when building a [`GameSession`](crate::GameSession).
///
/// Every variant is a configuration mistake caught at construction. Once
/// a session exists, none of its operations can fail.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The word list itself is unusable.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A game needs at least one round.
    #[error("max_rounds must be at least 1")]
    ZeroRounds,

    /// The catalog cannot supply a distinct word for every round.
    #[error("max_rounds is {max_rounds} but the catalog only has {available} distinct words")]
    NotEnoughWords { max_rounds: usize, available: usize },
}
