//! # Training Vocabulary

use compact_str::CompactString;

use crate::{
    corpus::Tagging,
    types::{TCHashSet, hash_set_new},
};

/// The set of words seen in training.
///
/// Test words outside the vocabulary are "unknown" words; they are
/// reported separately when computing error rates.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: TCHashSet<CompactString>,
}

impl Vocabulary {
    /// Collect the vocabulary of a tagging.
    pub fn from_tagging(tagging: &Tagging) -> Self {
        Self::from_words(tagging.words().iter().map(|w| w.as_str()))
    }

    /// Collect a vocabulary from words.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut vocab = Self {
            words: hash_set_new(),
        };
        for word in words {
            vocab.insert(word.as_ref());
        }
        vocab
    }

    /// Add a word.
    pub fn insert(
        &mut self,
        word: &str,
    ) -> bool {
        if self.words.contains(word) {
            return false;
        }
        self.words.insert(word.into())
    }

    /// Is `word` in the vocabulary?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.words.contains(word)
    }

    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The positions of `tagging` holding words outside the vocabulary.
    pub fn unknown_positions(
        &self,
        tagging: &Tagging,
    ) -> Vec<usize> {
        tagging
            .words()
            .iter()
            .enumerate()
            .filter(|(_, w)| !self.contains(w))
            .map(|(pos, _)| pos)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TagId;

    #[test]
    fn test_vocabulary() {
        let mut vocab = Vocabulary::from_words(["the", "dog", "the"]);
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("dog"));
        assert!(!vocab.contains("cat"));

        assert!(vocab.insert("cat"));
        assert!(!vocab.insert("cat"));
        assert!(!vocab.is_empty());
    }

    #[test]
    fn test_unknown_positions() {
        let t = TagId::from_index(0).unwrap();
        let train = Tagging::new(vec!["the".into(), "dog".into()], vec![t, t]).unwrap();
        let test = Tagging::new(
            vec!["the".into(), "cat".into(), "dog".into(), "ran".into()],
            vec![t, t, t, t],
        )
        .unwrap();

        let vocab = Vocabulary::from_tagging(&train);
        assert_eq!(vocab.unknown_positions(&test), vec![1, 3]);
    }
}
