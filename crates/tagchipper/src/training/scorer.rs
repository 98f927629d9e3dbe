//! # Template Scoring
//!
//! One linear pass over the corpus fills a [`ScoreTable`] for a template.
//! With the ``rayon`` feature the pass may be split into contiguous shards,
//! each counted into its own table; the shard tables are summed in shard order.

use core::ops::Range;

use crate::{corpus::Tagging, rules::RuleTemplate, training::ScoreTable, types::CountType};

/// The default minimum shard length for parallel scoring.
pub const DEFAULT_MIN_SHARD_LEN: usize = 16 * 1024;

/// Count the good/bad evidence of `template` over `range` into `table`.
///
/// `working` and `truth` must be aligned taggings.
/// The NIL template records nothing.
///
/// ## Arguments
/// * `template` - the template being scored.
/// * `working` - the current tagging; contexts are read from it.
/// * `truth` - the ground-truth tagging.
/// * `range` - the positions to count.
/// * `table` - the table to count into.
pub fn score_span<C: CountType>(
    template: RuleTemplate,
    working: &Tagging,
    truth: &Tagging,
    range: Range<usize>,
    table: &mut ScoreTable<C>,
) {
    if template.is_nil() {
        return;
    }

    let current_tags = &working.tags()[range.clone()];
    let correct_tags = &truth.tags()[range.clone()];

    for ((pos, &current), &correct) in range.zip(current_tags).zip(correct_tags) {
        let context = template.context_at(working, pos);
        if current != correct {
            table.add_good(current, correct, context);
        } else {
            table.add_bad(current, context);
        }
    }
}

/// Split ``0..len`` into at most `max_shards` contiguous shards,
/// each at least `min_shard_len` long (except when ``len`` is shorter).
pub fn shard_ranges(
    len: usize,
    min_shard_len: usize,
    max_shards: usize,
) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }

    let by_len = len / min_shard_len.max(1);
    let shards = by_len.clamp(1, max_shards.max(1));
    let shard_len = len.div_ceil(shards);

    (0..len)
        .step_by(shard_len)
        .map(|start| start..(start + shard_len).min(len))
        .collect()
}

/// Scores templates against a working/truth tagging pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateScorer {
    /// Split the pass into parallel shards (requires ``rayon``).
    pub parallel: bool,

    /// The minimum shard length.
    pub min_shard_len: usize,
}

impl Default for TemplateScorer {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "rayon"),
            min_shard_len: DEFAULT_MIN_SHARD_LEN,
        }
    }
}

impl TemplateScorer {
    /// Score `template` over the full corpus.
    ///
    /// ## Arguments
    /// * `template` - the template being scored.
    /// * `working` - the current tagging.
    /// * `truth` - the ground-truth tagging.
    /// * `num_tags` - the tagset size.
    ///
    /// ## Returns
    /// A table holding the summed counts of every position.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, working, truth)))]
    pub fn score<C: CountType>(
        &self,
        template: RuleTemplate,
        working: &Tagging,
        truth: &Tagging,
        num_tags: usize,
    ) -> ScoreTable<C> {
        #[cfg(feature = "rayon")]
        if self.parallel && working.len() >= 2 * self.min_shard_len {
            return self.score_sharded(template, working, truth, num_tags);
        }

        let mut table = ScoreTable::new(num_tags);
        score_span(template, working, truth, 0..working.len(), &mut table);
        table
    }

    #[cfg(feature = "rayon")]
    fn score_sharded<C: CountType>(
        &self,
        template: RuleTemplate,
        working: &Tagging,
        truth: &Tagging,
        num_tags: usize,
    ) -> ScoreTable<C> {
        use rayon::prelude::*;

        let shards = shard_ranges(
            working.len(),
            self.min_shard_len,
            rayon::current_num_threads(),
        );
        log::debug!("scoring {template} over {} shards", shards.len());

        let tables: Vec<ScoreTable<C>> = shards
            .into_par_iter()
            .map(|range| {
                let mut table = ScoreTable::new(num_tags);
                score_span(template, working, truth, range, &mut table);
                table
            })
            .collect();

        let mut tables = tables.into_iter();
        let mut acc = tables
            .next()
            .unwrap_or_else(|| ScoreTable::new(num_tags));
        for table in tables {
            acc.merge(&table);
        }
        acc
    }

    /// Score each of `templates`, in order.
    pub fn score_all<C: CountType>(
        &self,
        templates: &[RuleTemplate],
        working: &Tagging,
        truth: &Tagging,
        num_tags: usize,
    ) -> Vec<(RuleTemplate, ScoreTable<C>)> {
        templates
            .iter()
            .filter(|t| !t.is_nil())
            .map(|&t| (t, self.score(t, working, truth, num_tags)))
            .collect()
    }
}
