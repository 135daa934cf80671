//! The built-in word list and default game constants.

use crate::WordCatalog;

/// Default number of rounds in one game.
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Default points awarded for each correctly unscrambled word.
pub const DEFAULT_SCORE_INCREASE: u32 = 20;

const WORDS: &[&str] = &[
    "animal", "auto", "anecdote", "alphabet", "all", "awesome", "arise",
    "balloon", "basket", "bench", "best", "birthday", "book", "briefcase",
    "camera", "camping", "candle", "cat", "cauliflower", "chat", "children",
    "class", "classic", "classroom", "coffee", "colorful", "cookie",
    "creative", "cruise", "dance", "daytime", "dinosaur", "doorknob", "dine",
    "dream", "dusk", "eating", "elephant", "emerald", "eerie", "electric",
    "finish", "flowers", "follow", "fox", "frame", "free", "frequent",
    "funnel", "green", "guitar", "grocery", "glass", "great", "giggle",
    "haircut", "half", "homemade", "happen", "honey", "hurry", "hundred",
    "ice", "igloo", "invest", "invite", "icon", "introduce", "joke", "jovial",
    "journal", "jump", "join", "kangaroo", "keyboard", "kitchen", "koala",
    "kind", "kaleidoscope", "landscape", "late", "laugh", "learning",
    "lemon", "letter", "lily", "magazine", "marine", "marshmallow", "maze",
    "meditate", "melody", "minute", "monument", "moon", "motorcycle",
    "mountain", "music", "north", "nose", "night", "name", "never",
    "negotiate", "number", "opposite", "octopus", "oak", "order", "open",
    "polar", "pack", "painting", "person", "picnic", "pillow", "pizza",
    "podcast", "presentation", "puppy", "puzzle", "recipe", "release",
    "restaurant", "revolution", "rainbow", "rainy", "ring", "raspberry",
    "sandwich", "sailboat", "shape", "shoes", "seasonal", "sleepy", "sunset",
    "sunflower", "smile", "south", "string", "sun", "target", "tea",
    "theatre", "tiny", "train", "tulip", "umbrella", "under", "unique",
    "unicorn", "until", "universe", "upcoming", "united", "vacation",
    "vault", "very", "video", "voice", "weekend", "wedding", "wild",
    "winter", "wonderful", "yellow", "yourself", "yogurt", "zebra", "zeal",
    "zipper", "zoo",
];

impl WordCatalog {
    /// The catalog shipped with the game: roughly 170 common English
    /// words, all lowercase.
    pub fn builtin() -> Self {
        Self::new(WORDS.iter().copied())
            .expect("built-in word list is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = WordCatalog::builtin();
        assert_eq!(catalog.len(), WORDS.len());
        assert_eq!(catalog.distinct_len(), WORDS.len(), "no duplicates");
    }

    #[test]
    fn test_builtin_catalog_covers_default_rounds() {
        assert!(WordCatalog::builtin().distinct_len() >= DEFAULT_MAX_ROUNDS);
    }
}
