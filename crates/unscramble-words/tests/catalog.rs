//! Integration tests for catalog loading, selection, and scrambling.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use unscramble_words::{CatalogError, WordCatalog, is_permutation, pick_unused, scramble};

// =========================================================================
// JSON loading
// =========================================================================

#[test]
fn test_catalog_deserializes_from_json_array() {
    let catalog: WordCatalog = serde_json::from_str(r#"["river", "stone", "cloud"]"#).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get(0), Some("river"));
}

#[test]
fn test_catalog_json_rejects_empty_array() {
    let err = serde_json::from_str::<WordCatalog>("[]").unwrap_err();
    assert!(err.to_string().contains("empty"), "{err}");
}

#[test]
fn test_catalog_json_rejects_degenerate_word() {
    let err = serde_json::from_str::<WordCatalog>(r#"["river", "ii"]"#).unwrap_err();
    assert!(err.to_string().contains("ii"), "{err}");
}

#[test]
fn test_catalog_serializes_as_plain_array() {
    let catalog = WordCatalog::new(["river", "stone"]).unwrap();
    let json = serde_json::to_string(&catalog).unwrap();
    assert_eq!(json, r#"["river","stone"]"#);
}

// =========================================================================
// Selection + scrambling together
// =========================================================================

#[test]
fn test_drawing_whole_catalog_without_repeats() {
    let catalog = WordCatalog::builtin();
    let mut rng = StdRng::seed_from_u64(99);
    let mut used = HashSet::new();

    while let Some(word) = pick_unused(&catalog, &used, &mut rng) {
        let scrambled = scramble(word, &mut rng).unwrap();
        assert_ne!(scrambled, word);
        assert!(is_permutation(&scrambled, word));
        assert!(used.insert(word.to_string()), "{word} drawn twice");
    }

    assert_eq!(used.len(), catalog.distinct_len());
}

#[test]
fn test_every_catalog_word_scrambles() {
    let catalog = WordCatalog::builtin();
    let mut rng = StdRng::seed_from_u64(5);
    for word in catalog.words() {
        assert!(scramble(word, &mut rng).is_ok(), "{word}");
    }
}

#[test]
fn test_catalog_error_is_comparable() {
    assert_eq!(
        WordCatalog::new(["b"]).unwrap_err(),
        CatalogError::DegenerateWord { word: "b".into() }
    );
}
