//! # Tags
//!
//! Tags are opaque labels from a closed [`Tagset`].
//!
//! Labels are interned into small [`TagId`]s in first-seen order;
//! that order is also the enumeration order used when breaking ties
//! between equally scored rules.
//!
//! [`TagId::SENTINEL`] stands in for "no preceding token"; it is a valid
//! context value but never a member of a [`Tagset`].

mod tag_id;
mod tagset;

#[doc(inline)]
pub use tag_id::{SENTINEL_LABEL, TagId};
#[doc(inline)]
pub use tagset::Tagset;
