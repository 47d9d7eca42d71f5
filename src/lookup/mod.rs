//! Word/definition lookup tables in two interchangeable representations.
//!
//! [`ParallelLists`] keeps words and definitions in two vectors tied by
//! index. [`DefinitionMap`] keys definitions by word. Both are treated as
//! values: every modification returns a new table and leaves the original
//! untouched.

pub mod map;
pub mod parallel;

pub use map::DefinitionMap;
pub use parallel::ParallelLists;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("word not found: {0}")]
    UnknownWord(String),

    #[error("{words} words but {definitions} definitions")]
    LengthMismatch { words: usize, definitions: usize },
}

/// Read access shared by both table representations.
pub trait Lexicon {
    fn definition(&self, word: &str) -> Option<&str>;

    /// Words ending in `suffix`, in table order.
    fn rhyming_words(&self, suffix: &str) -> Vec<&str>;
}

impl<T: Lexicon + ?Sized> Lexicon for &T {
    fn definition(&self, word: &str) -> Option<&str> {
        (**self).definition(word)
    }

    fn rhyming_words(&self, suffix: &str) -> Vec<&str> {
        (**self).rhyming_words(suffix)
    }
}

/// Sample entries used throughout the tests and demos.
pub fn sample_entries() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "barf",
            "(verb) eject the contents of the stomach through the mouth",
        ),
        ("morph", "(verb) change shape as via computer animation"),
        (
            "scarf",
            "(noun) a garment worn around the head or neck or shoulders for warmth or decoration",
        ),
        ("snarf", "(verb) make off with belongings of others"),
        (
            "sound",
            "(verb) emit or cause to emit sound. (noun) vibrations that travel through the air or another medium",
        ),
        (
            "surf",
            "(verb) switch channels, on television (noun) waves breaking on the shore",
        ),
    ]
}
