//! # Tagging

use compact_str::CompactString;

use crate::{
    errors::{TCResult, TagchipperError},
    tags::{TagId, Tagset},
};

/// How sentence boundaries inside a flattened corpus are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SentenceContext {
    /// The corpus is one flat sequence; only position 0 sees the sentinel.
    #[default]
    Flat,

    /// Every sentence start sees the sentinel as its preceding tag.
    Isolated,
}

/// An ordered sequence of `(word, tag)` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagging {
    words: Vec<CompactString>,
    tags: Vec<TagId>,

    /// `sentence_starts[i]` marks position `i` as a sentence start.
    ///
    /// Empty for [`SentenceContext::Flat`].
    sentence_starts: Vec<bool>,
}

impl Tagging {
    /// Build a flat tagging from parallel word and tag vectors.
    ///
    /// ## Returns
    /// A `Result` containing the `Tagging`, or
    /// [`TagchipperError::LengthMismatch`] if the lengths differ.
    pub fn new(
        words: Vec<CompactString>,
        tags: Vec<TagId>,
    ) -> TCResult<Self> {
        if words.len() != tags.len() {
            return Err(TagchipperError::LengthMismatch {
                baseline: tags.len(),
                truth: words.len(),
            });
        }
        Ok(Self {
            words,
            tags,
            sentence_starts: Vec::new(),
        })
    }

    /// An empty tagging.
    pub fn empty() -> Self {
        Self {
            words: Vec::new(),
            tags: Vec::new(),
            sentence_starts: Vec::new(),
        }
    }

    /// Flatten tagged sentences, interning new labels into `tagset`.
    ///
    /// ## Arguments
    /// * `sentences` - sentences of `(word, tag)` pairs.
    /// * `tagset` - the tagset to extend.
    /// * `context` - how sentence boundaries are treated.
    pub fn intern_sentences<S, W, T>(
        sentences: &[S],
        tagset: &mut Tagset,
        context: SentenceContext,
    ) -> TCResult<Self>
    where
        S: AsRef<[(W, T)]>,
        W: AsRef<str>,
        T: AsRef<str>,
    {
        Self::build_from_sentences(sentences, context, |label| tagset.intern(label))
    }

    /// Flatten tagged sentences against a closed tagset.
    ///
    /// ## Returns
    /// A `Result` containing the `Tagging`, or [`TagchipperError::UnknownTag`]
    /// for the first label missing from `tagset`.
    pub fn from_sentences<S, W, T>(
        sentences: &[S],
        tagset: &Tagset,
        context: SentenceContext,
    ) -> TCResult<Self>
    where
        S: AsRef<[(W, T)]>,
        W: AsRef<str>,
        T: AsRef<str>,
    {
        Self::build_from_sentences(sentences, context, |label| tagset.require(label))
    }

    fn build_from_sentences<S, W, T, F>(
        sentences: &[S],
        context: SentenceContext,
        mut resolve: F,
    ) -> TCResult<Self>
    where
        S: AsRef<[(W, T)]>,
        W: AsRef<str>,
        T: AsRef<str>,
        F: FnMut(&str) -> TCResult<TagId>,
    {
        let size: usize = sentences.iter().map(|s| s.as_ref().len()).sum();

        let mut words = Vec::with_capacity(size);
        let mut tags = Vec::with_capacity(size);
        let mut sentence_starts = match context {
            SentenceContext::Flat => Vec::new(),
            SentenceContext::Isolated => Vec::with_capacity(size),
        };

        for sentence in sentences {
            for (idx, (word, tag)) in sentence.as_ref().iter().enumerate() {
                words.push(CompactString::from(word.as_ref()));
                tags.push(resolve(tag.as_ref())?);
                if context == SentenceContext::Isolated {
                    sentence_starts.push(idx == 0);
                }
            }
        }

        Ok(Self {
            words,
            tags,
            sentence_starts,
        })
    }

    /// A copy of this tagging with the same words and boundaries, but new tags.
    ///
    /// ## Returns
    /// A `Result` containing the `Tagging`, or
    /// [`TagchipperError::LengthMismatch`] if the lengths differ.
    pub fn with_tags(
        &self,
        tags: Vec<TagId>,
    ) -> TCResult<Self> {
        if tags.len() != self.len() {
            return Err(TagchipperError::LengthMismatch {
                baseline: tags.len(),
                truth: self.len(),
            });
        }
        Ok(Self {
            words: self.words.clone(),
            tags,
            sentence_starts: self.sentence_starts.clone(),
        })
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Is the tagging empty?
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The sentence context mode of this tagging.
    pub fn sentence_context(&self) -> SentenceContext {
        if self.sentence_starts.is_empty() {
            SentenceContext::Flat
        } else {
            SentenceContext::Isolated
        }
    }

    /// The words, in order.
    pub fn words(&self) -> &[CompactString] {
        &self.words
    }

    /// The tags, in order.
    pub fn tags(&self) -> &[TagId] {
        &self.tags
    }

    /// Mutable tags; crate-internal so only the applicator rewrites them.
    pub(crate) fn tags_mut(&mut self) -> &mut [TagId] {
        &mut self.tags
    }

    /// The word at `pos`.
    pub fn word(
        &self,
        pos: usize,
    ) -> &str {
        &self.words[pos]
    }

    /// The tag at `pos`.
    pub fn tag(
        &self,
        pos: usize,
    ) -> TagId {
        self.tags[pos]
    }

    /// Does `pos` begin a sentence whose context is isolated?
    ///
    /// Position 0 always does.
    pub fn starts_sentence(
        &self,
        pos: usize,
    ) -> bool {
        pos == 0 || self.sentence_starts.get(pos).copied().unwrap_or(false)
    }

    /// The tag preceding `pos`, or [`TagId::SENTINEL`] at a boundary.
    pub fn preceding_tag(
        &self,
        pos: usize,
    ) -> TagId {
        if self.starts_sentence(pos) {
            TagId::SENTINEL
        } else {
            self.tags[pos - 1]
        }
    }

    /// Iterate over `(word, tag)` tokens.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TagId)> + '_ {
        self.words
            .iter()
            .map(|w| w.as_str())
            .zip(self.tags.iter().copied())
    }

    /// Check that every tag is a member of `tagset`.
    ///
    /// ## Returns
    /// [`TagchipperError::UnknownTagId`] for the first foreign tag.
    pub fn validate_tags(
        &self,
        tagset: &Tagset,
    ) -> TCResult<()> {
        match self.tags.iter().position(|t| !tagset.contains(*t)) {
            None => Ok(()),
            Some(position) => Err(TagchipperError::UnknownTagId {
                id: self.tags[position].raw(),
                position,
                len: tagset.len(),
            }),
        }
    }

    /// Check that `other` has the same words in the same order.
    ///
    /// ## Returns
    /// [`TagchipperError::LengthMismatch`] or [`TagchipperError::WordMismatch`].
    pub fn check_aligned(
        &self,
        other: &Tagging,
    ) -> TCResult<()> {
        if self.len() != other.len() {
            return Err(TagchipperError::LengthMismatch {
                baseline: self.len(),
                truth: other.len(),
            });
        }
        match self.words.iter().zip(&other.words).position(|(a, b)| a != b) {
            None => Ok(()),
            Some(position) => Err(TagchipperError::WordMismatch {
                position,
                baseline: self.words[position].clone(),
                truth: other.words[position].clone(),
            }),
        }
    }
}
