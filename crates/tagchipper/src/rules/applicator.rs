//! # Rule Application
//!
//! A pass reads every context from the tagging as it was before the pass,
//! then commits the rewrites; an earlier rewrite in the same pass can not
//! change the context seen at a later position.

use crate::{corpus::Tagging, rules::Rule};

/// The positions at which `rule` fires on `tagging`.
pub fn rule_hits(
    rule: &Rule,
    tagging: &Tagging,
) -> Vec<usize> {
    if rule.is_nil() {
        return Vec::new();
    }
    (0..tagging.len())
        .filter(|&pos| rule.matches(tagging, pos))
        .collect()
}

/// Apply `rule` to `tagging` in place.
///
/// ## Returns
/// The number of tokens changed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn apply_rule(
    rule: &Rule,
    tagging: &mut Tagging,
) -> usize {
    let hits = rule_hits(rule, tagging);

    let tags = tagging.tags_mut();
    for &pos in &hits {
        tags[pos] = rule.to;
    }

    hits.len()
}

/// Apply `rules` to `tagging`, in order.
///
/// ## Returns
/// The total number of tag rewrites.
pub fn apply_rules<'a, I>(
    rules: I,
    tagging: &mut Tagging,
) -> usize
where
    I: IntoIterator<Item = &'a Rule>,
{
    rules
        .into_iter()
        .map(|rule| apply_rule(rule, tagging))
        .sum()
}
