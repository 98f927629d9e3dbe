//! # Brill Trainer

use core::{marker::PhantomData, ops::ControlFlow};

use crate::{
    corpus::{MistagReport, Tagging, count_mistags, find_mistags},
    errors::{TCResult, TagchipperError},
    rules::{RuleSequence, RuleTemplate, ScoredRule, apply_rule},
    tags::Tagset,
    training::{DEFAULT_MIN_SHARD_LEN, TemplateScorer, select_best},
    types::CountType,
};

/// The default minimum score a rule needs to be accepted.
pub const DEFAULT_MIN_SCORE: i64 = 2;

/// Options for [`BrillTrainer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrillTrainerOptions {
    /// The minimum net score a rule needs to be accepted; must be > 0.
    pub min_score: i64,

    /// Stop after this many rules, if set.
    pub max_rules: Option<usize>,

    /// The rule templates to search, in tie-breaking order.
    pub templates: Vec<RuleTemplate>,

    /// Score in parallel shards (requires the ``rayon`` feature).
    pub parallel: bool,

    /// The minimum shard length for parallel scoring.
    pub min_shard_len: usize,
}

impl Default for BrillTrainerOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            max_rules: None,
            templates: RuleTemplate::DEFAULT_CATALOGUE.to_vec(),
            parallel: cfg!(feature = "rayon"),
            min_shard_len: DEFAULT_MIN_SHARD_LEN,
        }
    }
}

impl BrillTrainerOptions {
    /// Sets the minimum accepted rule score.
    ///
    /// ## Arguments
    /// * `min_score` - the threshold; rules scoring below it end training.
    ///
    /// ## Returns
    /// The updated `BrillTrainerOptions` instance.
    pub fn with_min_score(
        self,
        min_score: i64,
    ) -> Self {
        Self { min_score, ..self }
    }

    /// Sets the rule cap.
    ///
    /// ## Arguments
    /// * `max_rules` - the maximum number of rules, or `None` for no cap.
    ///
    /// ## Returns
    /// The updated `BrillTrainerOptions` instance.
    pub fn with_max_rules(
        self,
        max_rules: Option<usize>,
    ) -> Self {
        Self { max_rules, ..self }
    }

    /// Sets the template catalogue.
    ///
    /// ## Returns
    /// The updated `BrillTrainerOptions` instance.
    pub fn with_templates<I>(
        self,
        templates: I,
    ) -> Self
    where
        I: IntoIterator<Item = RuleTemplate>,
    {
        Self {
            templates: templates.into_iter().collect(),
            ..self
        }
    }

    /// Enables or disables parallel scoring.
    ///
    /// Has no effect without the ``rayon`` feature.
    pub fn with_parallel(
        self,
        parallel: bool,
    ) -> Self {
        Self { parallel, ..self }
    }

    /// Sets the minimum shard length for parallel scoring.
    pub fn with_min_shard_len(
        self,
        min_shard_len: usize,
    ) -> Self {
        Self {
            min_shard_len,
            ..self
        }
    }

    /// Check the option values.
    ///
    /// ## Returns
    /// [`TagchipperError::InvalidOption`] for the first bad value.
    pub fn validate(&self) -> TCResult<()> {
        if self.min_score <= 0 {
            return Err(TagchipperError::InvalidOption(format!(
                "min_score must be > 0, got {}",
                self.min_score
            )));
        }
        if self.templates.iter().all(|t| t.is_nil()) {
            return Err(TagchipperError::InvalidOption(
                "at least one non-nil rule template is required".to_string(),
            ));
        }
        if self.min_shard_len == 0 {
            return Err(TagchipperError::InvalidOption(
                "min_shard_len must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Initializes a [`BrillTrainer`] from these options.
    ///
    /// See [`BrillTrainer::new`].
    pub fn init<S: Into<String>>(
        self,
        baseline: Tagging,
        truth: Tagging,
        tagset: Tagset,
        name: S,
    ) -> TCResult<BrillTrainer> {
        BrillTrainer::new(self, baseline, truth, tagset, name)
    }
}

/// Why a learning run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum StopReason {
    /// No remaining rule reaches the minimum score.
    Converged,

    /// The configured rule cap was reached.
    RuleLimit,

    /// The observer asked to stop.
    Interrupted,
}

/// Progress of one accepted rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearnProgress {
    /// The 1-based index of the rule in the trainer's sequence.
    pub iteration: usize,

    /// The accepted rule.
    pub rule: ScoredRule,

    /// The number of tokens the rule rewrote.
    pub changed: usize,

    /// The number of mistags remaining after the rule.
    pub mistags: usize,
}

/// The results of [`BrillTrainer::learn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnResults {
    /// The rules learned by this call, in order.
    pub rules: Vec<ScoredRule>,

    /// Why learning stopped.
    pub stop: StopReason,
}

/// A transformation-based learning trainer.
///
/// Owns a working tagging, initialized from a baseline, and greedily learns
/// rules which move it towards a ground-truth tagging.
///
/// # Parameters
/// * `C` - the type used for score table counts.
#[derive(Debug, Clone)]
pub struct BrillTrainer<C: CountType = u32> {
    options: BrillTrainerOptions,
    name: String,
    tagset: Tagset,
    working: Tagging,
    truth: Tagging,
    rules: RuleSequence,
    mistag_count: usize,
    converged: bool,
    _marker: PhantomData<C>,
}

impl<C: CountType> BrillTrainer<C> {
    /// Build a trainer.
    ///
    /// ## Arguments
    /// * `options` - the trainer options.
    /// * `baseline` - the initial working tagging.
    /// * `truth` - the ground-truth tagging; same words, in the same order.
    /// * `tagset` - the closed tagset of both taggings.
    /// * `name` - a name for log messages.
    ///
    /// ## Returns
    /// A `Result` containing the trainer, or a configuration error:
    /// [`TagchipperError::InvalidOption`], [`TagchipperError::EmptyTagset`],
    /// [`TagchipperError::LengthMismatch`], [`TagchipperError::WordMismatch`] or
    /// [`TagchipperError::UnknownTagId`].
    pub fn new<S: Into<String>>(
        options: BrillTrainerOptions,
        baseline: Tagging,
        truth: Tagging,
        tagset: Tagset,
        name: S,
    ) -> TCResult<Self> {
        options.validate()?;
        if tagset.is_empty() {
            return Err(TagchipperError::EmptyTagset);
        }
        baseline.check_aligned(&truth)?;
        baseline.validate_tags(&tagset)?;
        truth.validate_tags(&tagset)?;

        let mistag_count = count_mistags(&baseline, &truth);

        Ok(Self {
            options,
            name: name.into(),
            tagset,
            working: baseline,
            truth,
            rules: RuleSequence::new(),
            mistag_count,
            converged: false,
            _marker: PhantomData,
        })
    }

    /// The trainer options.
    pub fn options(&self) -> &BrillTrainerOptions {
        &self.options
    }

    /// The trainer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tagset.
    pub fn tagset(&self) -> &Tagset {
        &self.tagset
    }

    /// The current working tagging.
    pub fn working(&self) -> &Tagging {
        &self.working
    }

    /// The ground-truth tagging.
    pub fn truth(&self) -> &Tagging {
        &self.truth
    }

    /// Every rule learned so far, in order.
    pub fn rules(&self) -> &RuleSequence {
        &self.rules
    }

    /// Release the learned rules.
    pub fn into_rules(self) -> RuleSequence {
        self.rules
    }

    /// The number of positions where the working tagging is wrong.
    pub fn mistag_count(&self) -> usize {
        self.mistag_count
    }

    /// Report the current disagreements with ground truth.
    pub fn mistags(&self) -> MistagReport {
        MistagReport {
            total: self.working.len(),
            mistags: find_mistags(&self.working, &self.truth),
        }
    }

    fn scorer(&self) -> TemplateScorer {
        TemplateScorer {
            parallel: self.options.parallel,
            min_shard_len: self.options.min_shard_len,
        }
    }

    /// Score every candidate against the current working tagging.
    ///
    /// ## Returns
    /// The highest scoring rule, or [`ScoredRule::NIL`].
    /// The minimum score threshold is not applied.
    pub fn best_rule(&self) -> ScoredRule {
        let tables = self.scorer().score_all::<C>(
            &self.options.templates,
            &self.working,
            &self.truth,
            self.tagset.len(),
        );
        select_best(&tables)
    }

    /// Run one learning iteration.
    ///
    /// ## Returns
    /// * `Continue(progress)` - a rule was accepted, applied and appended.
    /// * `Break(reason)` - nothing changed; learning is over.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(name = %self.name)))]
    pub fn step(&mut self) -> ControlFlow<StopReason, LearnProgress> {
        if let Some(max_rules) = self.options.max_rules
            && self.rules.len() >= max_rules
        {
            return ControlFlow::Break(StopReason::RuleLimit);
        }
        if self.converged {
            return ControlFlow::Break(StopReason::Converged);
        }

        let best = self.best_rule();
        log::debug!(
            "{}: best candidate {}",
            self.name,
            best.display(&self.tagset)
        );

        if best.is_nil() || best.score < self.options.min_score {
            self.converged = true;
            return ControlFlow::Break(StopReason::Converged);
        }

        let changed = apply_rule(&best.rule, &mut self.working);
        self.rules.push(best);
        self.mistag_count = count_mistags(&self.working, &self.truth);

        let progress = LearnProgress {
            iteration: self.rules.len(),
            rule: best,
            changed,
            mistags: self.mistag_count,
        };
        log::info!(
            "Rule {}: {} (score: {}, changed: {}, mistags: {})",
            progress.iteration,
            best.rule.display(&self.tagset),
            best.score,
            changed,
            progress.mistags
        );

        ControlFlow::Continue(progress)
    }

    /// Learn rules until convergence or the rule cap.
    ///
    /// ## Returns
    /// The rules learned by this call; a converged trainer learns none.
    pub fn learn(&mut self) -> LearnResults {
        self.learn_with(|_| ControlFlow::Continue(()))
    }

    /// Learn rules, reporting each accepted rule to `observer`.
    ///
    /// ## Arguments
    /// * `observer` - called after each accepted rule;
    ///   returning `Break` stops learning with [`StopReason::Interrupted`].
    ///
    /// ## Returns
    /// The rules learned by this call, and why learning stopped.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(name = %self.name)))]
    pub fn learn_with<F>(
        &mut self,
        mut observer: F,
    ) -> LearnResults
    where
        F: FnMut(&LearnProgress) -> ControlFlow<()>,
    {
        let start = self.rules.len();
        log::info!(
            "Starting Brill training on {}: {} tokens, {} tags, {} mistags",
            self.name,
            self.working.len(),
            self.tagset.len(),
            self.mistag_count
        );

        let stop = loop {
            match self.step() {
                ControlFlow::Break(reason) => break reason,
                ControlFlow::Continue(progress) => {
                    if observer(&progress).is_break() {
                        break StopReason::Interrupted;
                    }
                }
            }
        };

        let rules = self.rules.as_slice()[start..].to_vec();
        log::info!(
            "Finished training on {}: {} rules learned ({}), {} mistags remain",
            self.name,
            rules.len(),
            stop,
            self.mistag_count
        );

        LearnResults { rules, stop }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        corpus::SentenceContext,
        rules::Rule,
        tags::TagId,
    };

    fn scenario() -> (Tagging, Tagging, Tagset) {
        let mut tagset = Tagset::default();
        let truth = Tagging::intern_sentences(
            &[vec![("the", "DET"), ("dog", "NN"), ("barks", "VB")]],
            &mut tagset,
            SentenceContext::Flat,
        )
        .unwrap();
        let det = tagset.require("DET").unwrap();
        let nn = tagset.require("NN").unwrap();
        let baseline = truth.with_tags(vec![det, nn, nn]).unwrap();
        (baseline, truth, tagset)
    }

    #[test]
    fn test_trainer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BrillTrainer<u32>>();
        assert_send_sync::<BrillTrainer<u64>>();
        assert_send_sync::<BrillTrainerOptions>();
    }

    #[test]
    fn test_options() {
        let options = BrillTrainerOptions::default();
        assert_eq!(options.min_score, 2);
        assert_eq!(options.max_rules, None);
        assert_eq!(options.templates, vec![RuleTemplate::PrecedingTag]);
        assert_eq!(options.parallel, cfg!(feature = "rayon"));
        assert_eq!(options.min_shard_len, DEFAULT_MIN_SHARD_LEN);
        assert!(options.validate().is_ok());

        let options = options
            .with_min_score(5)
            .with_max_rules(Some(10))
            .with_parallel(false)
            .with_min_shard_len(7)
            .with_templates([RuleTemplate::Nil, RuleTemplate::PrecedingTag]);
        assert_eq!(options.min_score, 5);
        assert_eq!(options.max_rules, Some(10));
        assert!(!options.parallel);
        assert_eq!(options.min_shard_len, 7);
        assert_eq!(options.templates.len(), 2);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_invalid_options() {
        for options in [
            BrillTrainerOptions::default().with_min_score(0),
            BrillTrainerOptions::default().with_min_score(-3),
            BrillTrainerOptions::default().with_templates([]),
            BrillTrainerOptions::default().with_templates([RuleTemplate::Nil]),
            BrillTrainerOptions::default().with_min_shard_len(0),
        ] {
            let (baseline, truth, tagset) = scenario();
            assert!(matches!(
                options.init(baseline, truth, tagset, "bad"),
                Err(TagchipperError::InvalidOption(_))
            ));
        }
    }

    #[test]
    fn test_construction_errors() {
        let (baseline, truth, tagset) = scenario();
        assert!(matches!(
            BrillTrainerOptions::default().init(baseline.clone(), truth.clone(), Tagset::default(), "x"),
            Err(TagchipperError::EmptyTagset)
        ));

        let short = Tagging::new(vec!["the".into()], vec![truth.tag(0)]).unwrap();
        assert!(matches!(
            BrillTrainerOptions::default().init(short, truth.clone(), tagset.clone(), "x"),
            Err(TagchipperError::LengthMismatch { .. })
        ));

        let reordered = Tagging::new(
            vec!["dog".into(), "the".into(), "barks".into()],
            baseline.tags().to_vec(),
        )
        .unwrap();
        assert!(matches!(
            BrillTrainerOptions::default().init(reordered, truth.clone(), tagset.clone(), "x"),
            Err(TagchipperError::WordMismatch { position: 0, .. })
        ));

        let small = Tagset::from_labels(["DET", "NN"]).unwrap();
        assert!(matches!(
            BrillTrainerOptions::default().init(baseline, truth, small, "x"),
            Err(TagchipperError::UnknownTagId { position: 2, .. })
        ));
    }

    #[test]
    fn test_scenario() {
        let (baseline, truth, tagset) = scenario();
        let mut trainer = BrillTrainerOptions::default()
            .with_min_score(1)
            .init(baseline, truth, tagset, "scenario")
            .unwrap();
        assert_eq!(trainer.name(), "scenario");
        assert_eq!(trainer.mistag_count(), 1);

        let nn = trainer.tagset().require("NN").unwrap();
        let vb = trainer.tagset().require("VB").unwrap();

        let results = trainer.learn();
        assert_eq!(results.stop, StopReason::Converged);
        assert_eq!(
            results.rules,
            vec![ScoredRule::new(Rule::preceding_tag(nn, vb, nn), 1)]
        );
        assert_eq!(trainer.working().tags(), trainer.truth().tags());
        assert_eq!(trainer.mistag_count(), 0);
        assert_eq!(trainer.mistags().count(), 0);
        assert_eq!(trainer.rules().len(), 1);

        // Converged trainers learn nothing more.
        let again = trainer.learn();
        assert!(again.rules.is_empty());
        assert_eq!(again.stop, StopReason::Converged);
        assert_eq!(trainer.into_rules().len(), 1);
    }

    #[test]
    fn test_default_threshold_rejects_single_fix() {
        let (baseline, truth, tagset) = scenario();
        let mut trainer = BrillTrainerOptions::default()
            .init(baseline, truth, tagset, "scenario")
            .unwrap();

        assert_eq!(trainer.best_rule().score, 1);
        let results = trainer.learn();
        assert!(results.rules.is_empty());
        assert_eq!(results.stop, StopReason::Converged);
        assert_eq!(trainer.mistag_count(), 1);
        assert_eq!(trainer.mistags().mistags[0].position, 2);
    }

    #[test]
    fn test_empty_corpus() {
        let tagset = Tagset::from_labels(["NN"]).unwrap();
        let mut trainer = BrillTrainerOptions::default()
            .with_min_score(1)
            .init(Tagging::empty(), Tagging::empty(), tagset, "empty")
            .unwrap();

        assert!(trainer.best_rule().is_nil());
        let results = trainer.learn();
        assert!(results.rules.is_empty());
        assert_eq!(results.stop, StopReason::Converged);
        assert_eq!(trainer.mistags().error_rate(), 0.0);
    }

    #[test]
    fn test_rule_limit_and_observer() {
        // Baseline: every "x" is C, every "y" is A.
        // Truth: repeated "C D D" and "A B B" runs.
        let mut tagset = Tagset::default();
        let mut sentence = Vec::new();
        for _ in 0..3 {
            sentence.extend([("x", "C"), ("x", "D"), ("x", "D")]);
        }
        for _ in 0..4 {
            sentence.extend([("y", "A"), ("y", "B"), ("y", "B")]);
        }
        let truth =
            Tagging::intern_sentences(&[sentence], &mut tagset, SentenceContext::Flat).unwrap();
        let a = tagset.require("A").unwrap();
        let b = tagset.require("B").unwrap();
        let c = tagset.require("C").unwrap();
        let d = tagset.require("D").unwrap();
        let baseline = truth
            .with_tags(
                truth
                    .words()
                    .iter()
                    .map(|w| if w.as_str() == "x" { c } else { a })
                    .collect(),
            )
            .unwrap();

        let options = BrillTrainerOptions::default().with_min_score(1);

        let mut capped = options
            .clone()
            .with_max_rules(Some(1))
            .init(baseline.clone(), truth.clone(), tagset.clone(), "capped")
            .unwrap();
        let results = capped.learn();
        assert_eq!(results.rules.len(), 1);
        assert_eq!(results.stop, StopReason::RuleLimit);
        assert_eq!(capped.learn().rules.len(), 0);

        let mut observed = Vec::new();
        let mut watched = options
            .init(baseline, truth, tagset, "watched")
            .unwrap();
        let results = watched.learn_with(|progress| {
            observed.push(*progress);
            ControlFlow::Break(())
        });
        assert_eq!(results.stop, StopReason::Interrupted);
        assert_eq!(results.rules.len(), 1);
        assert_eq!(observed.len(), 1);
        assert_eq!(observed[0].iteration, 1);
        assert_eq!(observed[0].rule, results.rules[0]);
        assert_eq!(
            results.rules[0],
            ScoredRule::new(Rule::preceding_tag(a, b, a), 5)
        );
        assert_eq!(observed[0].mistags, 14 - 5);

        // Resume after the interruption.
        let rest = watched.learn();
        assert_eq!(rest.stop, StopReason::Converged);
        assert_eq!(
            rest.rules,
            vec![ScoredRule::new(Rule::preceding_tag(c, d, c), 4)]
        );
        assert_eq!(watched.rules().len(), 2);
        assert_eq!(watched.mistag_count(), 14 - 5 - 4);
    }

    #[test]
    fn test_step() {
        let (baseline, truth, tagset) = scenario();
        let mut trainer = BrillTrainerOptions::default()
            .with_min_score(1)
            .init(baseline, truth, tagset, "scenario")
            .unwrap();

        match trainer.step() {
            ControlFlow::Continue(progress) => {
                assert_eq!(progress.iteration, 1);
                assert_eq!(progress.changed, 1);
                assert_eq!(progress.mistags, 0);
                assert_eq!(progress.rule.rule.context, trainer.tagset().require("NN").unwrap());
            }
            ControlFlow::Break(reason) => panic!("unexpected stop: {reason}"),
        }
        assert_eq!(trainer.step(), ControlFlow::Break(StopReason::Converged));
        assert_eq!(trainer.step(), ControlFlow::Break(StopReason::Converged));
    }

    #[test]
    fn test_sentinel_context_rule() {
        // Sentence initial "can" is a modal; elsewhere a noun.
        let mut tagset = Tagset::default();
        let truth = Tagging::intern_sentences(
            &[
                vec![("can", "MD"), ("a", "DET"), ("can", "NN")],
                vec![("can", "MD"), ("it", "PRP")],
                vec![("can", "MD"), ("we", "PRP")],
            ],
            &mut tagset,
            SentenceContext::Isolated,
        )
        .unwrap();
        let nn = tagset.require("NN").unwrap();
        let md = tagset.require("MD").unwrap();
        let tags = truth
            .iter()
            .map(|(w, t)| if w == "can" { nn } else { t })
            .collect();
        let baseline = truth.with_tags(tags).unwrap();

        let mut trainer = BrillTrainerOptions::default()
            .init(baseline, truth, tagset, "modals")
            .unwrap();
        let results = trainer.learn();
        assert_eq!(
            results.rules,
            vec![ScoredRule::new(
                Rule::preceding_tag(nn, md, TagId::SENTINEL),
                3
            )]
        );
        assert_eq!(trainer.mistag_count(), 0);
    }
}
