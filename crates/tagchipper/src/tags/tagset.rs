//! # Tagset Interner

use compact_str::CompactString;

use crate::{
    errors::{TCResult, TagchipperError},
    tags::{SENTINEL_LABEL, TagId},
    types::{TCHashMap, hash_map_new},
};

/// A closed set of tag labels, interned to [`TagId`]s in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Tagset {
    labels: Vec<CompactString>,
    ids: TCHashMap<CompactString, TagId>,
}

impl PartialEq for Tagset {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.labels == other.labels
    }
}

impl Eq for Tagset {}

impl Tagset {
    /// Build a tagset from labels; duplicates keep their first position.
    ///
    /// ## Arguments
    /// * `labels` - the tag labels, in enumeration order.
    ///
    /// ## Returns
    /// A `Result` containing the new `Tagset` or an error.
    pub fn from_labels<I>(labels: I) -> TCResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut tagset = Self {
            labels: Vec::new(),
            ids: hash_map_new(),
        };
        for label in labels {
            tagset.intern(label.as_ref())?;
        }
        Ok(tagset)
    }

    /// The number of tags (excluding the sentinel).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Is the tagset empty?
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Intern a label, adding it if it is new.
    ///
    /// ## Returns
    /// The id of the label, or an error if the tagset is full
    /// or the label is the reserved sentinel label.
    pub fn intern(
        &mut self,
        label: &str,
    ) -> TCResult<TagId> {
        if let Some(id) = self.ids.get(label) {
            return Ok(*id);
        }
        if label == SENTINEL_LABEL {
            return Err(TagchipperError::InvalidOption(format!(
                "{SENTINEL_LABEL:?} is reserved for the sentinel tag"
            )));
        }
        let id = TagId::from_index(self.labels.len()).ok_or(TagchipperError::TagsetOverflow {
            max: TagId::MAX_TAGS,
        })?;
        let label = CompactString::from(label);
        self.ids.insert(label.clone(), id);
        self.labels.push(label);
        Ok(id)
    }

    /// Look up a label.
    pub fn get(
        &self,
        label: &str,
    ) -> Option<TagId> {
        self.ids.get(label).copied()
    }

    /// Look up a label which must be present.
    ///
    /// ## Returns
    /// The id, or [`TagchipperError::UnknownTag`].
    pub fn require(
        &self,
        label: &str,
    ) -> TCResult<TagId> {
        self.get(label).ok_or_else(|| TagchipperError::UnknownTag {
            tag: label.into(),
        })
    }

    /// Look up a context label; accepts the sentinel label.
    pub fn require_context(
        &self,
        label: &str,
    ) -> TCResult<TagId> {
        if label == SENTINEL_LABEL {
            Ok(TagId::SENTINEL)
        } else {
            self.require(label)
        }
    }

    /// Is `id` a member of this tagset?
    pub fn contains(
        &self,
        id: TagId,
    ) -> bool {
        id.index() < self.labels.len()
    }

    /// The label of a tag id.
    ///
    /// The sentinel renders as [`SENTINEL_LABEL`]; foreign ids render as `"?"`.
    pub fn label(
        &self,
        id: TagId,
    ) -> &str {
        if id.is_sentinel() {
            return SENTINEL_LABEL;
        }
        self.labels.get(id.index()).map(|l| l.as_str()).unwrap_or("?")
    }

    /// Iterate over the tag ids, in enumeration order.
    pub fn ids(&self) -> impl Iterator<Item = TagId> + '_ {
        (0..self.labels.len()).filter_map(TagId::from_index)
    }

    /// Iterate over `(id, label)` pairs, in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (TagId, &str)> + '_ {
        self.ids().zip(self.labels.iter().map(|l| l.as_str()))
    }
}
