//! # Rule Learning
//!
//! * [`ScoreTable`] - per-template good/bad counts for every rule signature.
//! * [`TemplateScorer`] - the linear scoring pass; optionally sharded with ``rayon``.
//! * [`select_best`] - the deterministic best-rule search.
//! * [`BrillTrainer`] - the greedy learning loop.
//!
//! Each learning iteration scores every candidate rule against the current
//! working tagging, applies the best one, and appends it to the
//! [`crate::rules::RuleSequence`]; learning stops when no rule reaches
//! [`BrillTrainerOptions::min_score`].

mod brill_trainer;
mod score_table;
mod scorer;
mod selector;

#[doc(inline)]
pub use brill_trainer::{
    BrillTrainer, BrillTrainerOptions, DEFAULT_MIN_SCORE, LearnProgress, LearnResults, StopReason,
};
#[doc(inline)]
pub use score_table::{DENSE_CELL_LIMIT, ScoreTable, Triple};
#[doc(inline)]
pub use scorer::{DEFAULT_MIN_SHARD_LEN, TemplateScorer, score_span, shard_ranges};
#[doc(inline)]
pub use selector::select_best;
