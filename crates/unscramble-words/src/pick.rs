//! Word selection without repetition.

use std::collections::HashSet;

use rand::Rng;

use crate::WordCatalog;

/// Upper bound on random draws before switching to a direct choice among
/// the remaining words.
pub const MAX_PICK_ATTEMPTS: usize = 1_000;

/// Draws a catalog word that is not in `used`.
///
/// Words are drawn uniformly from the catalog and redrawn while they hit
/// `used`. After [`MAX_PICK_ATTEMPTS`] misses the choice is made directly
/// among the unused entries, which gives the same distribution but always
/// terminates.
///
/// Returns `None` only when every catalog word is already in `used`.
pub fn pick_unused<'a, R: Rng>(
    catalog: &'a WordCatalog,
    used: &HashSet<String>,
    rng: &mut R,
) -> Option<&'a str> {
    let words = catalog.words();
    if words.is_empty() {
        return None;
    }

    for _ in 0..MAX_PICK_ATTEMPTS {
        let word = words[rng.random_range(0..words.len())].as_str();
        if !used.contains(word) {
            return Some(word);
        }
    }

    let remaining: Vec<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|w| !used.contains(*w))
        .collect();
    if remaining.is_empty() {
        return None;
    }

    tracing::warn!(
        attempts = MAX_PICK_ATTEMPTS,
        remaining = remaining.len(),
        "random draws kept hitting used words, choosing among the rest"
    );
    Some(remaining[rng.random_range(0..remaining.len())])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    use super::*;

    /// Always yields zero, so every uniform draw lands on index 0.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    fn catalog() -> WordCatalog {
        WordCatalog::new(["apple", "banana", "cherry", "damson"]).unwrap()
    }

    #[test]
    fn test_pick_unused_never_returns_used_word() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let used: HashSet<String> = ["apple", "cherry"].map(String::from).into();

        for _ in 0..500 {
            let word = pick_unused(&catalog, &used, &mut rng).unwrap();
            assert!(word == "banana" || word == "damson", "got {word}");
        }
    }

    #[test]
    fn test_pick_unused_finds_the_last_word() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(2);
        let used: HashSet<String> = ["apple", "banana", "cherry"].map(String::from).into();

        assert_eq!(pick_unused(&catalog, &used, &mut rng), Some("damson"));
    }

    #[test]
    fn test_pick_unused_exhausted_returns_none() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(3);
        let used: HashSet<String> = catalog.words().iter().cloned().collect();

        assert_eq!(pick_unused(&catalog, &used, &mut rng), None);
    }

    #[test]
    fn test_pick_unused_covers_every_word() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(4);
        let used = HashSet::new();
        let seen: HashSet<&str> = (0..500)
            .filter_map(|_| pick_unused(&catalog, &used, &mut rng))
            .collect();

        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_pick_unused_falls_back_after_max_attempts() {
        // Every draw hits the used first word, so only the fallback can
        // produce an answer.
        let catalog = WordCatalog::new(["apple", "berry", "cherry"]).unwrap();
        let used: HashSet<String> = ["apple"].map(String::from).into();

        let word = pick_unused(&catalog, &used, &mut ZeroRng).unwrap();

        assert_ne!(word, "apple");
        assert!(word == "berry" || word == "cherry", "got {word}");
    }

    #[test]
    fn test_pick_unused_fallback_exhausted_returns_none() {
        let catalog = WordCatalog::new(["apple", "berry"]).unwrap();
        let used: HashSet<String> = ["apple", "berry"].map(String::from).into();

        assert_eq!(pick_unused(&catalog, &used, &mut ZeroRng), None);
    }
}
