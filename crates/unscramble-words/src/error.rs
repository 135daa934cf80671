//! Error types for the words layer.

/// Errors raised while building or using a word catalog.
///
/// All of these are configuration mistakes: they are reported when the
/// catalog is constructed, never in the middle of a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no words, so there is nothing to draw from.
    #[error("word catalog is empty")]
    Empty,

    /// A word has fewer than two distinct characters. No rearrangement of
    /// it can differ from the original, so it can never be scrambled.
    #[error("word {word:?} cannot be scrambled: it needs at least two distinct characters")]
    DegenerateWord { word: String },
}
