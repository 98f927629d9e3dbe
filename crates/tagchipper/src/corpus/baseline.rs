//! # Baseline Taggers
//!
//! A baseline tagging is the starting point of training;
//! and the first stage of tagging new text, before the learned rules are replayed.

use compact_str::CompactString;

use crate::{
    corpus::Tagging,
    errors::TCResult,
    tags::TagId,
    types::{TCHashMap, hash_map_new, hash_map_with_capacity},
};

/// Assigns an initial tag to each word, without context.
pub trait BaselineTagger {
    /// The baseline tag for `word`.
    fn tag_word(
        &self,
        word: &str,
    ) -> TagId;

    /// Retag every word of `tagging`; words and boundaries are kept.
    fn tag(
        &self,
        tagging: &Tagging,
    ) -> TCResult<Tagging> {
        let tags = tagging.words().iter().map(|w| self.tag_word(w)).collect();
        tagging.with_tags(tags)
    }
}

/// Tags every word with the same tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformBaseline {
    /// The tag given to every word.
    pub tag: TagId,
}

impl UniformBaseline {
    /// Create a new uniform baseline.
    pub fn new(tag: TagId) -> Self {
        Self { tag }
    }
}

impl BaselineTagger for UniformBaseline {
    fn tag_word(
        &self,
        _word: &str,
    ) -> TagId {
        self.tag
    }
}

/// Per-word tag occurrence counts.
#[derive(Debug, Clone, Default)]
pub struct WordTagCounts {
    counts: TCHashMap<CompactString, TCHashMap<TagId, u32>>,
}

impl WordTagCounts {
    /// Count the tags of every word in `tagging`.
    pub fn from_tagging(tagging: &Tagging) -> Self {
        let mut wtc = Self {
            counts: hash_map_new(),
        };
        for (word, tag) in tagging.iter() {
            wtc.observe(word, tag);
        }
        wtc
    }

    /// Record one `(word, tag)` occurrence.
    pub fn observe(
        &mut self,
        word: &str,
        tag: TagId,
    ) {
        *self
            .counts
            .entry(word.into())
            .or_default()
            .entry(tag)
            .or_default() += 1;
    }

    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Are there no counts?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The count of `tag` for `word`.
    pub fn count(
        &self,
        word: &str,
        tag: TagId,
    ) -> u32 {
        self.counts
            .get(word)
            .and_then(|tags| tags.get(&tag))
            .copied()
            .unwrap_or(0)
    }

    /// The most frequent tag of `word`; ties go to the lower tag id.
    pub fn most_frequent(
        &self,
        word: &str,
    ) -> Option<TagId> {
        self.counts.get(word).and_then(|tags| {
            tags.iter()
                .max_by(|(ta, ca), (tb, cb)| ca.cmp(cb).then(tb.cmp(ta)))
                .map(|(t, _)| *t)
        })
    }
}

/// Tags each word with its most frequent training tag.
///
/// Words never seen in training get `default_tag`.
#[derive(Debug, Clone)]
pub struct MostFrequentTagBaseline {
    best: TCHashMap<CompactString, TagId>,

    /// The tag for unknown words.
    pub default_tag: TagId,
}

impl MostFrequentTagBaseline {
    /// Fit the baseline to a training tagging.
    ///
    /// ## Arguments
    /// * `training` - the ground-truth training tagging.
    /// * `default_tag` - the tag for words not in `training`.
    pub fn fit(
        training: &Tagging,
        default_tag: TagId,
    ) -> Self {
        Self::from_counts(&WordTagCounts::from_tagging(training), default_tag)
    }

    /// Build the baseline from word/tag counts.
    pub fn from_counts(
        counts: &WordTagCounts,
        default_tag: TagId,
    ) -> Self {
        let mut best = hash_map_with_capacity(counts.len());
        for word in counts.counts.keys() {
            if let Some(tag) = counts.most_frequent(word) {
                best.insert(word.clone(), tag);
            }
        }
        Self { best, default_tag }
    }

    /// The number of words with a learned tag.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Is the lexicon empty?
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

impl BaselineTagger for MostFrequentTagBaseline {
    fn tag_word(
        &self,
        word: &str,
    ) -> TagId {
        self.best.get(word).copied().unwrap_or(self.default_tag)
    }
}
