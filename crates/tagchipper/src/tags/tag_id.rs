//! # Tag Ids

use core::fmt::{Display, Formatter};

/// The rendered label of [`TagId::SENTINEL`].
pub const SENTINEL_LABEL: &str = "<START>";

/// An interned tag.
///
/// Ids are dense indices into a [`super::Tagset`], except for
/// [`TagId::SENTINEL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagId(u16);

impl TagId {
    /// The context value of positions which have no preceding token.
    pub const SENTINEL: TagId = TagId(u16::MAX);

    /// The largest number of tags a tagset may hold.
    pub const MAX_TAGS: usize = u16::MAX as usize;

    /// Build a tag id from a tagset index.
    ///
    /// ## Returns
    /// `None` if the index collides with the sentinel or overflows.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < Self::MAX_TAGS {
            Some(TagId(index as u16))
        } else {
            None
        }
    }

    /// The raw id value.
    pub fn raw(self) -> u16 {
        self.0
    }

    /// The tagset index of this id.
    ///
    /// The sentinel maps to `u16::MAX`; see [`TagId::context_slot`].
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Is this the sentinel?
    pub fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }

    /// The slot of this id in a context axis of `num_tags + 1` entries.
    ///
    /// Real tags keep their index; the sentinel takes the last slot.
    pub fn context_slot(
        self,
        num_tags: usize,
    ) -> usize {
        if self.is_sentinel() {
            num_tags
        } else {
            self.index()
        }
    }

    /// Invert [`TagId::context_slot`].
    pub fn from_context_slot(
        slot: usize,
        num_tags: usize,
    ) -> Self {
        if slot >= num_tags {
            Self::SENTINEL
        } else {
            TagId(slot as u16)
        }
    }
}

impl Display for TagId {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        if self.is_sentinel() {
            write!(f, "{SENTINEL_LABEL}")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}
