//! # Rule Templates
//!
//! A template is the shape of a rule: which context feature gates it.
//! Templates form a closed enum; a new context feature is a new variant with
//! its own [`RuleTemplate::context_at`] lookup, and the scorer, selector and
//! applicator pick it up without change.

use crate::{corpus::Tagging, tags::TagId};

/// The kinds of transformation rules.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum RuleTemplate {
    /// The template of the NIL rule; never changes a tag.
    Nil,

    /// Change `from` to `to` if the preceding tag is `context`.
    PrecedingTag,
}

impl RuleTemplate {
    /// The default template catalogue.
    pub const DEFAULT_CATALOGUE: &'static [RuleTemplate] = &[RuleTemplate::PrecedingTag];

    /// Is this the NIL template?
    pub fn is_nil(self) -> bool {
        self == RuleTemplate::Nil
    }

    /// The context value this template inspects at `pos`.
    ///
    /// The NIL template has no context; it reports the sentinel.
    pub fn context_at(
        self,
        tagging: &Tagging,
        pos: usize,
    ) -> TagId {
        match self {
            RuleTemplate::Nil => TagId::SENTINEL,
            RuleTemplate::PrecedingTag => tagging.preceding_tag(pos),
        }
    }

    /// Render a human-readable description of an instance of this template.
    pub fn describe(
        self,
        from: &str,
        to: &str,
        context: &str,
    ) -> String {
        match self {
            RuleTemplate::Nil => "Don't change the tag.".to_string(),
            RuleTemplate::PrecedingTag => {
                format!("Change {from} to {to} if preceding tag is {context}.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;
    use crate::corpus::SentenceContext;
    use crate::tags::Tagset;

    #[test]
    fn test_names() {
        assert_eq!(RuleTemplate::PrecedingTag.to_string(), "preceding-tag");
        assert_eq!(RuleTemplate::Nil.to_string(), "nil");
        assert_eq!(
            RuleTemplate::from_str("preceding-tag").unwrap(),
            RuleTemplate::PrecedingTag
        );
        assert!(RuleTemplate::from_str("two-back").is_err());
    }

    #[test]
    fn test_context_at() {
        let mut tagset = Tagset::default();
        let tagging = Tagging::intern_sentences(
            &[vec![("a", "X"), ("b", "Y")]],
            &mut tagset,
            SentenceContext::Flat,
        )
        .unwrap();

        let t = RuleTemplate::PrecedingTag;
        assert_eq!(t.context_at(&tagging, 0), TagId::SENTINEL);
        assert_eq!(t.context_at(&tagging, 1), tagset.require("X").unwrap());
        assert_eq!(RuleTemplate::Nil.context_at(&tagging, 1), TagId::SENTINEL);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            RuleTemplate::PrecedingTag.describe("NN", "VB", "MD"),
            "Change NN to VB if preceding tag is MD."
        );
        assert_eq!(
            RuleTemplate::Nil.describe("", "", ""),
            "Don't change the tag."
        );
        assert!(RuleTemplate::Nil.is_nil());
        assert_eq!(RuleTemplate::DEFAULT_CATALOGUE, &[RuleTemplate::PrecedingTag]);
    }
}
