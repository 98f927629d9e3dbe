//! # Rule Sequences

use crate::{
    corpus::Tagging,
    rules::{ScoredRule, apply_rules},
};

/// An ordered, append-only sequence of learned rules.
///
/// Order is significant: rules must be replayed in the order they were learned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSequence {
    rules: Vec<ScoredRule>,
}

impl RuleSequence {
    /// Create a new empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    ///
    /// ## Returns
    /// `false`, without appending, for a NIL rule.
    pub fn push(
        &mut self,
        rule: ScoredRule,
    ) -> bool {
        if rule.is_nil() {
            return false;
        }
        self.rules.push(rule);
        true
    }

    /// The number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Is the sequence empty?
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules, in order.
    pub fn as_slice(&self) -> &[ScoredRule] {
        &self.rules
    }

    /// Iterate over the rules, in order.
    pub fn iter(&self) -> core::slice::Iter<'_, ScoredRule> {
        self.rules.iter()
    }

    /// Replay the sequence on `tagging`.
    ///
    /// ## Returns
    /// The total number of tag rewrites.
    pub fn apply(
        &self,
        tagging: &mut Tagging,
    ) -> usize {
        apply_rules(self.rules.iter().map(|r| &r.rule), tagging)
    }

    /// Release the rules.
    pub fn into_vec(self) -> Vec<ScoredRule> {
        self.rules
    }
}

impl Extend<ScoredRule> for RuleSequence {
    fn extend<I: IntoIterator<Item = ScoredRule>>(
        &mut self,
        iter: I,
    ) {
        for rule in iter {
            self.push(rule);
        }
    }
}

impl FromIterator<ScoredRule> for RuleSequence {
    fn from_iter<I: IntoIterator<Item = ScoredRule>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<'a> IntoIterator for &'a RuleSequence {
    type Item = &'a ScoredRule;
    type IntoIter = core::slice::Iter<'a, ScoredRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        corpus::SentenceContext,
        rules::Rule,
        tags::{TagId, Tagset},
    };

    #[test]
    fn test_push_skips_nil() {
        let a = TagId::from_index(0).unwrap();
        let b = TagId::from_index(1).unwrap();

        let mut seq = RuleSequence::new();
        assert!(!seq.push(ScoredRule::NIL));
        assert!(seq.push(ScoredRule::new(Rule::preceding_tag(a, b, a), 4)));
        assert_eq!(seq.len(), 1);

        let collected: RuleSequence = [
            ScoredRule::NIL,
            ScoredRule::new(Rule::preceding_tag(b, a, a), 2),
        ]
        .into_iter()
        .collect();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected.as_slice()[0].score, 2);
    }

    #[test]
    fn test_apply() {
        let mut tagset = Tagset::default();
        let mut tagging = Tagging::intern_sentences(
            &[vec![("the", "DET"), ("can", "NN"), ("rusts", "NN")]],
            &mut tagset,
            SentenceContext::Flat,
        )
        .unwrap();
        let det = tagset.require("DET").unwrap();
        let nn = tagset.require("NN").unwrap();
        let vb = tagset.intern("VB").unwrap();

        let seq: RuleSequence = [
            ScoredRule::new(Rule::preceding_tag(nn, vb, nn), 1),
            ScoredRule::new(Rule::preceding_tag(det, nn, TagId::SENTINEL), 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(seq.apply(&mut tagging), 2);
        assert_eq!(tagging.tags(), &[nn, nn, vb]);
        assert_eq!((&seq).into_iter().count(), 2);
        assert_eq!(seq.clone().into_vec().len(), 2);
    }
}
