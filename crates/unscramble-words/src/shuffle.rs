//! Scrambling: rearranging a word's characters so it no longer reads as
//! the original.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::CatalogError;

/// Upper bound on reshuffles before falling back to a rotation.
///
/// Any word with two distinct characters has at most a one-in-two chance
/// of shuffling back into itself, so hitting this cap is effectively
/// impossible. It only exists so the loop has a hard end.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 64;

/// Returns a random permutation of `word`'s characters that differs from
/// `word`.
///
/// The permutation is a Fisher–Yates shuffle over `char`s, repeated while
/// it reproduces the input. No uniqueness is promised across calls: the
/// same word may scramble the same way twice.
///
/// # Errors
/// Returns [`CatalogError::DegenerateWord`] if `word` has fewer than two
/// distinct characters, since every rearrangement of it is identical.
pub fn scramble<R: Rng>(word: &str, rng: &mut R) -> Result<String, CatalogError> {
    if distinct_chars(word) < 2 {
        return Err(CatalogError::DegenerateWord {
            word: word.to_string(),
        });
    }

    let mut chars: Vec<char> = word.chars().collect();
    for attempt in 1..=MAX_SHUFFLE_ATTEMPTS {
        chars.shuffle(rng);
        if !chars.iter().copied().eq(word.chars()) {
            return Ok(chars.into_iter().collect());
        }
        tracing::trace!(attempt, "shuffle reproduced the word, retrying");
    }

    // Rotating by one position differs from the input for any word with
    // two distinct characters.
    tracing::warn!(
        attempts = MAX_SHUFFLE_ATTEMPTS,
        "shuffle retries exhausted, rotating instead"
    );
    let mut chars: Vec<char> = word.chars().collect();
    chars.rotate_left(1);
    Ok(chars.into_iter().collect())
}

/// Number of distinct characters in `word`.
pub fn distinct_chars(word: &str) -> usize {
    word.chars().collect::<HashSet<_>>().len()
}

/// Returns `true` if `a` and `b` contain exactly the same characters with
/// the same multiplicities.
pub fn is_permutation(a: &str, b: &str) -> bool {
    let mut left: Vec<char> = a.chars().collect();
    let mut right: Vec<char> = b.chars().collect();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}
