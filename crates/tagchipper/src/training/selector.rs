//! # Rule Selection

use crate::{
    rules::{Rule, RuleTemplate, ScoredRule},
    training::ScoreTable,
    types::CountType,
};

/// Pick the highest scoring rule across all scored templates.
///
/// Candidates are visited in template order, then ``(from, to, context)``
/// enumeration order; a candidate replaces the current best only on a
/// strictly greater score, so the first of equal scores wins.
///
/// ## Returns
/// The best rule, or [`ScoredRule::NIL`] if nothing scores above 0.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn select_best<C: CountType>(scored: &[(RuleTemplate, ScoreTable<C>)]) -> ScoredRule {
    let mut best = ScoredRule::NIL;

    for (template, table) in scored {
        for ((from, to, context), _) in table.good_triples() {
            let score = table.score(from, to, context);
            if score > best.score {
                best = ScoredRule::new(Rule::new(*template, from, to, context), score);
            }
        }
    }

    best
}
