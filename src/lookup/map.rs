use std::collections::BTreeMap;

use crate::lookup::{Lexicon, ParallelLists};

/// Definitions keyed by word.
///
/// Ordered by word so that iteration and rhyme results are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionMap {
    entries: BTreeMap<String, String>,
}

impl DefinitionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, d)| (w.as_str(), d.as_str()))
    }

    /// Copy of the table with `word` mapped to `new_definition`.
    ///
    /// No index lookup is needed: an unknown word is simply added.
    pub fn with_definition(&self, word: &str, new_definition: &str) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(word.to_string(), new_definition.to_string());
        Self { entries }
    }

    /// Entries whose word ends with `suffix`.
    pub fn rhymes(&self, suffix: &str) -> Self {
        self.iter().filter(|(w, _)| w.ends_with(suffix)).collect()
    }
}

impl Lexicon for DefinitionMap {
    fn definition(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    fn rhyming_words(&self, suffix: &str) -> Vec<&str> {
        self.entries
            .keys()
            .filter(|w| w.ends_with(suffix))
            .map(String::as_str)
            .collect()
    }
}

impl<W: Into<String>, D: Into<String>> FromIterator<(W, D)> for DefinitionMap {
    fn from_iter<I: IntoIterator<Item = (W, D)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(w, d)| (w.into(), d.into())).collect(),
        }
    }
}

/// Later duplicates overwrite earlier ones.
impl From<&ParallelLists> for DefinitionMap {
    fn from(lists: &ParallelLists) -> Self {
        lists.iter().collect()
    }
}
