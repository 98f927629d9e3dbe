//! # Corpus Model and Support
//!
//! * [`Tagging`] - an ordered ``(word, tag)`` sequence; the working and ground-truth taggings.
//! * [`io`] - reading and writing ``word/TAG`` corpora.
//! * [`TrainTestSplit`] - seeded, disjoint sentence partitions.
//! * [`BaselineTagger`] - initial taggings, uniform or most-frequent-tag.
//! * [`Vocabulary`] - training words, for unknown-word reporting.
//! * [`MistagReport`] - disagreements with ground truth, and error rates.

pub mod io;

mod baseline;
mod mistags;
mod splitter;
mod tagging;
mod vocabulary;

#[doc(inline)]
pub use baseline::{BaselineTagger, MostFrequentTagBaseline, UniformBaseline, WordTagCounts};
#[doc(inline)]
pub use mistags::{ErrorRates, Mistag, MistagReport, count_mistags, find_mistags};
#[doc(inline)]
pub use splitter::{DEFAULT_TEST_FRACTION, TrainTestSplit};
#[doc(inline)]
pub use tagging::{SentenceContext, Tagging};
#[doc(inline)]
pub use vocabulary::Vocabulary;
