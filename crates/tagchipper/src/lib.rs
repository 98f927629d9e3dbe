//! # `tagchipper` Transformation-Based Tagger Training
//!
//! This is a Brill-style transformation-based learning (TBL) trainer
//! for part-of-speech taggers.
//!
//! Starting from a baseline tagging of a corpus, the trainer greedily learns
//! an ordered sequence of rewrite rules of the form:
//!
//! > Change `NN` to `VB` if the preceding tag is `MD`.
//!
//! At each step the rule which most reduces disagreement with a
//! ground-truth tagging is applied and appended to the sequence.
//! The learned [`rules::RuleSequence`] can then be replayed on new text.
//!
//! See:
//! * [`tags`] for tag ids and the [`tags::Tagset`] interner.
//! * [`corpus`] for the [`corpus::Tagging`] model, corpus IO, baselines and error reporting.
//! * [`rules`] for rule templates, rule application and rule IO.
//! * [`training`] for the scorer, selector and the [`training::BrillTrainer`] loop.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Training Example
//!
//! ```rust
//! use tagchipper::{
//!     corpus::{SentenceContext, Tagging},
//!     tags::Tagset,
//!     training::BrillTrainerOptions,
//! };
//!
//! let sentences = vec![vec![("the", "DET"), ("dog", "NN"), ("barks", "VB")]];
//!
//! let mut tagset = Tagset::default();
//! let truth = Tagging::intern_sentences(&sentences, &mut tagset, SentenceContext::Flat)?;
//!
//! let nn = tagset.require("NN")?;
//! let det = tagset.require("DET")?;
//! let baseline = truth.with_tags(vec![det, nn, nn])?;
//!
//! let mut trainer = BrillTrainerOptions::default()
//!     .with_min_score(1)
//!     .init(baseline, truth, tagset, "toy corpus")?;
//!
//! let results = trainer.learn();
//! assert_eq!(results.rules.len(), 1);
//! assert_eq!(
//!     results.rules[0].rule.display(trainer.tagset()).to_string(),
//!     "Change NN to VB if preceding tag is NN."
//! );
//! # Ok::<(), tagchipper::errors::TagchipperError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod compat;
pub mod corpus;
pub mod errors;
pub mod rules;
pub mod tags;
pub mod training;
pub mod types;

#[doc(inline)]
pub use errors::{TCResult, TagchipperError};
