//! Word catalog and randomness for Unscramble.
//!
//! This crate owns everything that touches the word list:
//!
//! - **Catalog** ([`WordCatalog`]) — the validated, read-only list of
//!   candidate words a game draws from.
//! - **Selection** ([`pick_unused`]) — draws a word that hasn't been
//!   presented yet in the current game.
//! - **Scrambling** ([`scramble`]) — produces a permutation of a word that
//!   is never identical to the word itself.
//!
//! # How it fits in the stack
//!
//! ```text
//! Session Layer (above)  ← tracks used words, rounds, and score
//!     ↕
//! Words Layer (this crate)  ← catalog validation, random draws, shuffles
//! ```
//!
//! Both random operations are bounded loops: a catalog that passed
//! validation can never make them spin forever.

mod builtin;
mod catalog;
mod error;
mod pick;
mod shuffle;

pub use builtin::{DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE};
pub use catalog::WordCatalog;
pub use error::CatalogError;
pub use pick::{pick_unused, MAX_PICK_ATTEMPTS};
pub use shuffle::{distinct_chars, is_permutation, scramble, MAX_SHUFFLE_ATTEMPTS};
