//! # Rules

use core::fmt::{Display, Formatter};

use crate::{
    corpus::Tagging,
    rules::RuleTemplate,
    tags::{TagId, Tagset},
};

/// An instance of a [`RuleTemplate`]: change `from` to `to` under `context`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    /// The rule template.
    pub template: RuleTemplate,

    /// The tag to rewrite.
    pub from: TagId,

    /// The replacement tag.
    pub to: TagId,

    /// The context value which gates the rule.
    pub context: TagId,
}

impl Rule {
    /// The "no change" rule.
    pub const NIL: Rule = Rule {
        template: RuleTemplate::Nil,
        from: TagId::SENTINEL,
        to: TagId::SENTINEL,
        context: TagId::SENTINEL,
    };

    /// Create a new rule.
    pub fn new(
        template: RuleTemplate,
        from: TagId,
        to: TagId,
        context: TagId,
    ) -> Self {
        Self {
            template,
            from,
            to,
            context,
        }
    }

    /// Create a [`RuleTemplate::PrecedingTag`] rule.
    pub fn preceding_tag(
        from: TagId,
        to: TagId,
        context: TagId,
    ) -> Self {
        Self::new(RuleTemplate::PrecedingTag, from, to, context)
    }

    /// Is this a rule which can never change a tag?
    pub fn is_nil(&self) -> bool {
        self.template.is_nil() || self.from == self.to
    }

    /// Would this rule fire at `pos` of `tagging`?
    pub fn matches(
        &self,
        tagging: &Tagging,
        pos: usize,
    ) -> bool {
        !self.is_nil()
            && tagging.tag(pos) == self.from
            && self.template.context_at(tagging, pos) == self.context
    }

    /// A [`Display`] adapter rendering labels through `tagset`.
    pub fn display<'a>(
        &'a self,
        tagset: &'a Tagset,
    ) -> RuleDisplay<'a> {
        RuleDisplay { rule: self, tagset }
    }
}

/// Renders a [`Rule`] description, e.g. ``Change NN to VB if preceding tag is MD.``
pub struct RuleDisplay<'a> {
    rule: &'a Rule,
    tagset: &'a Tagset,
}

impl Display for RuleDisplay<'_> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        let rule = self.rule;
        write!(
            f,
            "{}",
            rule.template.describe(
                self.tagset.label(rule.from),
                self.tagset.label(rule.to),
                self.tagset.label(rule.context),
            )
        )
    }
}

/// A [`Rule`] with its training-time score.
///
/// The score is diagnostic; replay ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredRule {
    /// The rule.
    pub rule: Rule,

    /// The net improvement the rule made when it was learned.
    pub score: i64,
}

impl ScoredRule {
    /// The NIL rule with score 0.
    pub const NIL: ScoredRule = ScoredRule {
        rule: Rule::NIL,
        score: 0,
    };

    /// Create a new scored rule.
    pub fn new(
        rule: Rule,
        score: i64,
    ) -> Self {
        Self { rule, score }
    }

    /// Is the rule NIL?
    pub fn is_nil(&self) -> bool {
        self.rule.is_nil()
    }

    /// A [`Display`] adapter; ``preceding-tag: <description> score=<n>``.
    pub fn display<'a>(
        &'a self,
        tagset: &'a Tagset,
    ) -> ScoredRuleDisplay<'a> {
        ScoredRuleDisplay { rule: self, tagset }
    }
}

/// Renders a [`ScoredRule`] with its template and score.
pub struct ScoredRuleDisplay<'a> {
    rule: &'a ScoredRule,
    tagset: &'a Tagset,
}

impl Display for ScoredRuleDisplay<'_> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        write!(
            f,
            "{}: {} score={}",
            self.rule.rule.template,
            self.rule.rule.display(self.tagset),
            self.rule.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::SentenceContext;

    fn fixture() -> (Tagging, Tagset) {
        let mut tagset = Tagset::default();
        let tagging = Tagging::intern_sentences(
            &[vec![("the", "DET"), ("dog", "NN"), ("barks", "NN")]],
            &mut tagset,
            SentenceContext::Flat,
        )
        .unwrap();
        tagset.intern("VB").unwrap();
        (tagging, tagset)
    }

    #[test]
    fn test_nil() {
        assert!(Rule::NIL.is_nil());
        assert!(ScoredRule::NIL.is_nil());

        let nn = TagId::from_index(1).unwrap();
        assert!(Rule::preceding_tag(nn, nn, TagId::SENTINEL).is_nil());
    }

    #[test]
    fn test_matches() {
        let (tagging, tagset) = fixture();
        let nn = tagset.require("NN").unwrap();
        let vb = tagset.require("VB").unwrap();

        let rule = Rule::preceding_tag(nn, vb, nn);
        assert!(!rule.matches(&tagging, 0));
        assert!(!rule.matches(&tagging, 1));
        assert!(rule.matches(&tagging, 2));

        assert!(!Rule::NIL.matches(&tagging, 0));
    }

    #[test]
    fn test_display() {
        let (_, tagset) = fixture();
        let nn = tagset.require("NN").unwrap();
        let vb = tagset.require("VB").unwrap();

        let rule = ScoredRule::new(Rule::preceding_tag(nn, vb, TagId::SENTINEL), 3);
        assert_eq!(
            rule.rule.display(&tagset).to_string(),
            "Change NN to VB if preceding tag is <START>."
        );
        assert_eq!(
            rule.display(&tagset).to_string(),
            "preceding-tag: Change NN to VB if preceding tag is <START>. score=3"
        );
        assert_eq!(
            ScoredRule::NIL.display(&tagset).to_string(),
            "nil: Don't change the tag. score=0"
        );
    }
}
