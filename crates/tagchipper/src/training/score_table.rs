//! # Rule Score Tables
//!
//! For one template, the scoring pass records:
//! * ``good[from][to][ctx]`` - tokens tagged `from`, truly `to`, with context `ctx`;
//!   a rule ``from -> to | ctx`` would fix each of them.
//! * ``bad[from][ctx]`` - tokens correctly tagged `from`, with context `ctx`;
//!   any rule ``from -> _ | ctx`` would break each of them.
//!
//! ``score(from, to, ctx) = good[from][to][ctx] - bad[from][ctx]``.
//!
//! The context axis has ``num_tags + 1`` slots; the sentinel takes the last.

use crate::{
    tags::TagId,
    types::{CountType, TCHashMap, hash_map_new},
};

/// The largest dense ``good`` table, in cells, before falling back to sparse storage.
pub const DENSE_CELL_LIMIT: usize = 1 << 22;

/// A ``(from, to, context)`` rule signature.
pub type Triple = (TagId, TagId, TagId);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Counts<C: CountType> {
    Dense {
        good: Vec<C>,
        bad: Vec<C>,
    },
    Sparse {
        good: TCHashMap<(u16, u16, u32), C>,
        bad: TCHashMap<(u16, u32), C>,
    },
}

/// Good/bad counts for one template over one scoring pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable<C: CountType = u32> {
    num_tags: usize,
    counts: Counts<C>,
}

impl<C: CountType> ScoreTable<C> {
    /// Create an empty table for a tagset of `num_tags` tags.
    ///
    /// Picks dense storage when it fits in [`DENSE_CELL_LIMIT`].
    pub fn new(num_tags: usize) -> Self {
        let dense_cells = num_tags
            .saturating_mul(num_tags)
            .saturating_mul(num_tags + 1);
        if dense_cells <= DENSE_CELL_LIMIT {
            Self::new_dense(num_tags)
        } else {
            Self::new_sparse(num_tags)
        }
    }

    /// Create an empty table with dense storage.
    pub fn new_dense(num_tags: usize) -> Self {
        Self {
            num_tags,
            counts: Counts::Dense {
                good: vec![C::zero(); num_tags * num_tags * (num_tags + 1)],
                bad: vec![C::zero(); num_tags * (num_tags + 1)],
            },
        }
    }

    /// Create an empty table with sparse storage.
    ///
    /// Memory grows with the number of distinct observed keys, not the tagset.
    pub fn new_sparse(num_tags: usize) -> Self {
        Self {
            num_tags,
            counts: Counts::Sparse {
                good: hash_map_new(),
                bad: hash_map_new(),
            },
        }
    }

    /// The tagset size this table was built for.
    pub fn num_tags(&self) -> usize {
        self.num_tags
    }

    /// Is the storage dense?
    pub fn is_dense(&self) -> bool {
        matches!(self.counts, Counts::Dense { .. })
    }

    /// The number of allocated or occupied count cells.
    pub fn cell_count(&self) -> usize {
        match &self.counts {
            Counts::Dense { good, bad } => good.len() + bad.len(),
            Counts::Sparse { good, bad } => good.len() + bad.len(),
        }
    }

    fn good_index(
        num_tags: usize,
        from: usize,
        to: usize,
        slot: usize,
    ) -> usize {
        (from * num_tags + to) * (num_tags + 1) + slot
    }

    fn bad_index(
        num_tags: usize,
        from: usize,
        slot: usize,
    ) -> usize {
        from * (num_tags + 1) + slot
    }

    /// Record a token a ``from -> to | context`` rule would fix.
    pub fn add_good(
        &mut self,
        from: TagId,
        to: TagId,
        context: TagId,
    ) {
        self.add_good_count(from, to, context, C::one());
    }

    /// Record a correct token which any ``from -> _ | context`` rule would break.
    pub fn add_bad(
        &mut self,
        from: TagId,
        context: TagId,
    ) {
        self.add_bad_count(from, context, C::one());
    }

    /// The ``good`` count of a triple.
    pub fn good_count(
        &self,
        from: TagId,
        to: TagId,
        context: TagId,
    ) -> C {
        let slot = context.context_slot(self.num_tags);
        match &self.counts {
            Counts::Dense { good, .. } => {
                good[Self::good_index(self.num_tags, from.index(), to.index(), slot)]
            }
            Counts::Sparse { good, .. } => good
                .get(&(from.raw(), to.raw(), slot as u32))
                .copied()
                .unwrap_or_default(),
        }
    }

    /// The ``bad`` count of a ``(from, context)`` pair.
    pub fn bad_count(
        &self,
        from: TagId,
        context: TagId,
    ) -> C {
        let slot = context.context_slot(self.num_tags);
        match &self.counts {
            Counts::Dense { bad, .. } => bad[Self::bad_index(self.num_tags, from.index(), slot)],
            Counts::Sparse { bad, .. } => bad
                .get(&(from.raw(), slot as u32))
                .copied()
                .unwrap_or_default(),
        }
    }

    /// The net score of the rule ``from -> to | context``.
    ///
    /// No-op rules (``from == to``) score 0.
    pub fn score(
        &self,
        from: TagId,
        to: TagId,
        context: TagId,
    ) -> i64 {
        if from == to {
            return 0;
        }
        self.good_count(from, to, context).as_() - self.bad_count(from, context).as_()
    }

    /// Add every count of `other` into this table.
    ///
    /// ## Panics
    /// If the tables were built for different tagset sizes.
    pub fn merge(
        &mut self,
        other: &Self,
    ) {
        assert_eq!(
            self.num_tags, other.num_tags,
            "score tables built for different tagsets"
        );

        let mixed = match (&mut self.counts, &other.counts) {
            (Counts::Dense { good: ag, bad: ab }, Counts::Dense { good: bg, bad: bb }) => {
                for (x, y) in ag.iter_mut().zip(bg).chain(ab.iter_mut().zip(bb)) {
                    *x += *y;
                }
                false
            }
            (Counts::Sparse { good: ag, bad: ab }, Counts::Sparse { good: bg, bad: bb }) => {
                for (k, v) in bg {
                    *ag.entry(*k).or_default() += *v;
                }
                for (k, v) in bb {
                    *ab.entry(*k).or_default() += *v;
                }
                false
            }
            _ => true,
        };

        if mixed {
            for ((from, to, context), count) in other.good_triples() {
                self.add_good_count(from, to, context, count);
            }
            for ((from, context), count) in other.bad_pairs() {
                self.add_bad_count(from, context, count);
            }
        }
    }

    fn add_good_count(
        &mut self,
        from: TagId,
        to: TagId,
        context: TagId,
        count: C,
    ) {
        let num_tags = self.num_tags;
        let slot = context.context_slot(num_tags);
        match &mut self.counts {
            Counts::Dense { good, .. } => {
                good[Self::good_index(num_tags, from.index(), to.index(), slot)] += count;
            }
            Counts::Sparse { good, .. } => {
                *good.entry((from.raw(), to.raw(), slot as u32)).or_default() += count;
            }
        }
    }

    fn add_bad_count(
        &mut self,
        from: TagId,
        context: TagId,
        count: C,
    ) {
        let num_tags = self.num_tags;
        let slot = context.context_slot(num_tags);
        match &mut self.counts {
            Counts::Dense { bad, .. } => {
                bad[Self::bad_index(num_tags, from.index(), slot)] += count;
            }
            Counts::Sparse { bad, .. } => {
                *bad.entry((from.raw(), slot as u32)).or_default() += count;
            }
        }
    }

    /// The ``(from, context)`` pairs with a non-zero ``bad`` count, unordered.
    fn bad_pairs(&self) -> Vec<((TagId, TagId), C)> {
        let num_tags = self.num_tags;
        let slots = num_tags + 1;
        match &self.counts {
            Counts::Dense { bad, .. } => bad
                .iter()
                .enumerate()
                .filter(|(_, c)| !c.is_zero())
                .map(|(idx, c)| {
                    let pair = (
                        TagId::from_context_slot(idx / slots, num_tags),
                        TagId::from_context_slot(idx % slots, num_tags),
                    );
                    (pair, *c)
                })
                .collect(),
            Counts::Sparse { bad, .. } => bad
                .iter()
                .filter(|(_, c)| !c.is_zero())
                .map(|((from, slot), c)| {
                    let pair = (
                        TagId::from_context_slot(*from as usize, num_tags),
                        TagId::from_context_slot(*slot as usize, num_tags),
                    );
                    (pair, *c)
                })
                .collect(),
        }
    }

    /// The triples with a non-zero ``good`` count, in enumeration order.
    ///
    /// Enumeration order is ``(from, to, context)`` by tag id,
    /// with the sentinel context last. Only these triples can score above 0.
    pub fn good_triples(&self) -> Vec<(Triple, C)> {
        let num_tags = self.num_tags;
        let slots = num_tags + 1;
        let mut entries: Vec<(Triple, C)> = match &self.counts {
            Counts::Dense { good, .. } => good
                .iter()
                .enumerate()
                .filter(|(_, c)| !c.is_zero())
                .map(|(idx, c)| {
                    let slot = idx % slots;
                    let pair = idx / slots;
                    let triple = (
                        TagId::from_context_slot(pair / num_tags, num_tags),
                        TagId::from_context_slot(pair % num_tags, num_tags),
                        TagId::from_context_slot(slot, num_tags),
                    );
                    (triple, *c)
                })
                .collect(),
            Counts::Sparse { good, .. } => good
                .iter()
                .filter(|(_, c)| !c.is_zero())
                .map(|((from, to, slot), c)| {
                    let triple = (
                        TagId::from_context_slot(*from as usize, num_tags),
                        TagId::from_context_slot(*to as usize, num_tags),
                        TagId::from_context_slot(*slot as usize, num_tags),
                    );
                    (triple, *c)
                })
                .collect(),
        };
        entries.sort_by_key(|((from, to, context), _)| {
            (*from, *to, context.context_slot(num_tags))
        });
        entries
    }
}
