//! # Error Types

use compact_str::CompactString;

/// Errors from tagchipper operations.
#[derive(Debug, thiserror::Error)]
pub enum TagchipperError {
    /// The baseline and ground-truth taggings differ in length.
    #[error("tagging length mismatch: baseline has {baseline} tokens, truth has {truth}")]
    LengthMismatch {
        /// The number of tokens in the baseline tagging.
        baseline: usize,

        /// The number of tokens in the ground-truth tagging.
        truth: usize,
    },

    /// The baseline and ground-truth taggings disagree on word order.
    #[error("word mismatch at position {position}: {baseline:?} != {truth:?}")]
    WordMismatch {
        /// The first mismatched position.
        position: usize,

        /// The baseline word.
        baseline: CompactString,

        /// The ground-truth word.
        truth: CompactString,
    },

    /// The tagset has no tags.
    #[error("empty tagset")]
    EmptyTagset,

    /// A tag label is not a member of the tagset.
    #[error("unknown tag {tag:?}")]
    UnknownTag {
        /// The unknown label.
        tag: CompactString,
    },

    /// A tag id is outside the tagset.
    #[error("tag id {id} at position {position} is not in a tagset of {len} tags")]
    UnknownTagId {
        /// The raw tag id.
        id: u16,

        /// The position of the offending token.
        position: usize,

        /// The tagset size.
        len: usize,
    },

    /// The tagset cannot hold any more tags.
    #[error("tagset overflow: more than {max} tags")]
    TagsetOverflow {
        /// The maximum number of tags.
        max: usize,
    },

    /// An option value is out of range.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error in a corpus or rule file.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// The 1-based line number.
        line: usize,

        /// What went wrong.
        message: String,
    },
}

/// Result type for tagchipper operations.
pub type TCResult<T> = core::result::Result<T, TagchipperError>;
