use crate::lookup::{DefinitionMap, Lexicon, LookupError};

/// Words and definitions stored side by side; `definitions[i]` belongs to
/// `words[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParallelLists {
    words: Vec<String>,
    definitions: Vec<String>,
}

impl ParallelLists {
    pub fn new(words: Vec<String>, definitions: Vec<String>) -> Result<Self, LookupError> {
        if words.len() != definitions.len() {
            return Err(LookupError::LengthMismatch {
                words: words.len(),
                definitions: definitions.len(),
            });
        }
        Ok(Self { words, definitions })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn definitions(&self) -> &[String] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words
            .iter()
            .zip(self.definitions.iter())
            .map(|(w, d)| (w.as_str(), d.as_str()))
    }

    /// Position of the first entry for `word`.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    /// Copy of the table with the definition of `word` replaced.
    ///
    /// The word has to be looked up by index first, so an unknown word is
    /// an error rather than an insertion.
    pub fn with_definition(&self, word: &str, new_definition: &str) -> Result<Self, LookupError> {
        let index = self
            .index_of(word)
            .ok_or_else(|| LookupError::UnknownWord(word.to_string()))?;
        let mut definitions = self.definitions.clone();
        definitions[index] = new_definition.to_string();
        Ok(Self {
            words: self.words.clone(),
            definitions,
        })
    }

    /// Entries whose word ends with `suffix`, in the original order.
    pub fn rhymes(&self, suffix: &str) -> Self {
        let (words, definitions): (Vec<String>, Vec<String>) = self
            .iter()
            .filter(|(w, _)| w.ends_with(suffix))
            .map(|(w, d)| (w.to_string(), d.to_string()))
            .unzip();
        Self { words, definitions }
    }
}

impl Lexicon for ParallelLists {
    fn definition(&self, word: &str) -> Option<&str> {
        self.index_of(word).map(|i| self.definitions[i].as_str())
    }

    fn rhyming_words(&self, suffix: &str) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| w.ends_with(suffix))
            .map(String::as_str)
            .collect()
    }
}

impl<W: Into<String>, D: Into<String>> FromIterator<(W, D)> for ParallelLists {
    fn from_iter<I: IntoIterator<Item = (W, D)>>(iter: I) -> Self {
        let (words, definitions): (Vec<String>, Vec<String>) = iter
            .into_iter()
            .map(|(w, d)| (w.into(), d.into()))
            .unzip();
        Self { words, definitions }
    }
}

impl From<&DefinitionMap> for ParallelLists {
    fn from(map: &DefinitionMap) -> Self {
        map.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::sample_entries;

    fn sample() -> ParallelLists {
        sample_entries().into_iter().collect()
    }

    #[test]
    fn test_new_checks_lengths() {
        let res = ParallelLists::new(vec!["a".into(), "b".into()], vec!["x".into()]);
        assert_eq!(
            res,
            Err(LookupError::LengthMismatch {
                words: 2,
                definitions: 1
            })
        );
        assert!(ParallelLists::new(vec![], vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_with_definition_returns_copy() {
        let lists = sample();
        let updated = lists.with_definition("morph", "aaa").unwrap();

        assert_eq!(updated.definitions()[1], "aaa");
        assert_eq!(updated.definition("morph"), Some("aaa"));
        // Input untouched
        assert_eq!(
            lists.definition("morph"),
            Some("(verb) change shape as via computer animation")
        );
        assert_eq!(updated.words(), lists.words());
    }

    #[test]
    fn test_with_definition_unknown_word() {
        let err = sample().with_definition("gnarf", "x").unwrap_err();
        assert_eq!(err, LookupError::UnknownWord("gnarf".into()));
    }

    #[test]
    fn test_rhymes_keeps_order_and_pairs() {
        let lists = sample();
        let rhymers = lists.rhymes("arf");

        assert_eq!(rhymers.words(), ["barf", "scarf", "snarf"]);
        assert_eq!(rhymers.definitions()[0], lists.definitions()[0]);
        assert_eq!(rhymers.definitions()[1], lists.definitions()[2]);
        assert_eq!(rhymers.definitions()[2], lists.definitions()[3]);
    }

    #[test]
    fn test_rhymes_none() {
        assert!(sample().rhymes("xyz").is_empty());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let lists: ParallelLists = vec![("a", "first"), ("a", "second")].into_iter().collect();
        assert_eq!(lists.definition("a"), Some("first"));
        let updated = lists.with_definition("a", "new").unwrap();
        assert_eq!(updated.definitions(), ["new", "second"]);
    }
}
