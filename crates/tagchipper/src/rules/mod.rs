//! # Transformation Rules
//!
//! * [`RuleTemplate`] - the closed set of rule shapes.
//! * [`Rule`] / [`ScoredRule`] - template instances, with training scores.
//! * [`apply_rule`] - the transform applicator.
//! * [`RuleSequence`] - the learned, ordered rule program.
//! * [`io`] - a plain text rule file format.
//!
//! ## Replay Example
//!
//! ```rust
//! use tagchipper::{
//!     corpus::{SentenceContext, Tagging},
//!     rules::{Rule, RuleSequence, ScoredRule},
//!     tags::Tagset,
//! };
//!
//! let tagset = Tagset::from_labels(["TO", "NN", "VB"])?;
//! let mut tagging = Tagging::from_sentences(
//!     &[vec![("to", "TO"), ("race", "NN")]],
//!     &tagset,
//!     SentenceContext::Flat,
//! )?;
//!
//! let (to, nn, vb) = (tagset.require("TO")?, tagset.require("NN")?, tagset.require("VB")?);
//! let rules: RuleSequence = [ScoredRule::new(Rule::preceding_tag(nn, vb, to), 1)]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(rules.apply(&mut tagging), 1);
//! assert_eq!(tagset.label(tagging.tag(1)), "VB");
//! # Ok::<(), tagchipper::TagchipperError>(())
//! ```

pub mod io;

mod applicator;
mod rule;
mod rule_sequence;
mod templates;

#[doc(inline)]
pub use applicator::{apply_rule, apply_rules, rule_hits};
#[doc(inline)]
pub use rule::{Rule, RuleDisplay, ScoredRule, ScoredRuleDisplay};
#[doc(inline)]
pub use rule_sequence::RuleSequence;
#[doc(inline)]
pub use templates::RuleTemplate;
