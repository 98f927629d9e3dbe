use tagchipper::{
    compat::timers::timeit,
    corpus::{
        BaselineTagger,
        DEFAULT_TEST_FRACTION,
        ErrorRates,
        MistagReport,
        MostFrequentTagBaseline,
        SentenceContext,
        Tagging,
        TrainTestSplit,
        UniformBaseline,
        Vocabulary,
        io::read_tagged_sentences,
    },
    rules::io::write_rules,
    tags::Tagset,
    training::{BrillTrainerOptions, DEFAULT_MIN_SCORE},
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Baseline taggers for the train command.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum BaselineKind {
    /// Each word's most frequent training tag; unknown words get the default tag.
    MostFrequent,

    /// Every word gets the default tag.
    Uniform,
}

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// Tagged corpus; one sentence per line of ``word/TAG`` tokens.
    #[command(flatten)]
    input: InputArgs,

    /// Rule file to write.
    #[command(flatten)]
    output: OutputArgs,

    /// Fraction of sentences held out for testing.
    #[arg(long, default_value_t = DEFAULT_TEST_FRACTION)]
    test_fraction: f64,

    /// Train/test split seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// The baseline tagger.
    #[arg(long, value_enum, default_value = "most-frequent")]
    baseline: BaselineKind,

    /// Tag for words the baseline has no entry for.
    #[arg(long, default_value = "NN")]
    default_tag: String,

    /// Minimum net score for a rule to be accepted.
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
    min_score: i64,

    /// Stop after this many rules.
    #[arg(long)]
    max_rules: Option<usize>,

    /// Treat each sentence start as following the sentinel tag.
    #[arg(long)]
    sentence_context: bool,

    /// Disable parallel scoring.
    #[arg(long)]
    serial: bool,

    /// Size of the rayon thread pool.
    #[arg(long)]
    threads: Option<usize>,
}

impl TrainArgs {
    fn context(&self) -> SentenceContext {
        if self.sentence_context {
            SentenceContext::Isolated
        } else {
            SentenceContext::Flat
        }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;

        if let Some(threads) = self.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()?;
        }

        let name = self.input.name();
        log::info!("Reading corpus: {name}");
        let sentences = read_tagged_sentences(self.input.open_reader()?)?;

        let split = TrainTestSplit::random(sentences.len(), self.test_fraction, self.seed)?;
        let train_sentences = split.train_items(&sentences);
        let test_sentences = split.test_items(&sentences);
        log::info!(
            "Sentences: {} train, {} test",
            train_sentences.len(),
            test_sentences.len()
        );

        let mut tagset = Tagset::default();
        let train_truth = Tagging::intern_sentences(&train_sentences, &mut tagset, self.context())?;
        let test_truth = Tagging::intern_sentences(&test_sentences, &mut tagset, self.context())?;
        let default_tag = tagset.intern(&self.default_tag)?;
        log::info!(
            "Tokens: {} train, {} test; {} tags",
            train_truth.len(),
            test_truth.len(),
            tagset.len()
        );

        let baseline: Box<dyn BaselineTagger> = match self.baseline {
            BaselineKind::MostFrequent => {
                Box::new(MostFrequentTagBaseline::fit(&train_truth, default_tag))
            }
            BaselineKind::Uniform => Box::new(UniformBaseline::new(default_tag)),
        };
        let train_baseline = baseline.tag(&train_truth)?;
        let mut test_working = baseline.tag(&test_truth)?;

        let vocab = Vocabulary::from_tagging(&train_truth);
        log::info!("Vocabulary: {} words", vocab.len());
        log_error_rates("baseline/train", &train_baseline, &train_truth, &vocab)?;
        log_error_rates("baseline/test", &test_working, &test_truth, &vocab)?;

        let mut trainer = BrillTrainerOptions::default()
            .with_min_score(self.min_score)
            .with_max_rules(self.max_rules)
            .with_parallel(!self.serial)
            .init(train_baseline, train_truth, tagset, name)?;

        let (elapsed, results) = timeit(|| trainer.learn());
        log::info!(
            "Learned {} rules in {:.2?} ({})",
            results.rules.len(),
            elapsed,
            results.stop
        );

        log_error_rates("learned/train", trainer.working(), trainer.truth(), &vocab)?;
        trainer.rules().apply(&mut test_working);
        log_error_rates("learned/test", &test_working, &test_truth, &vocab)?;

        log::info!("Writing rules: {}", self.output.name());
        let mut writer = self.output.open_writer()?;
        write_rules(trainer.rules(), trainer.tagset(), &mut writer)?;

        Ok(())
    }
}

fn log_error_rates(
    label: &str,
    working: &Tagging,
    truth: &Tagging,
    vocab: &Vocabulary,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = MistagReport::compare(working, truth)?;
    let rates = ErrorRates::split_by_vocabulary(&report, truth, vocab);
    log::info!(
        "{label}: error rate {:.2}% ({} / {}); known {:.2}% ({} / {}); unknown {:.2}% ({} / {})",
        100.0 * rates.error_rate(),
        rates.errors,
        rates.total,
        100.0 * rates.known_error_rate(),
        rates.known_errors,
        rates.known_total,
        100.0 * rates.unknown_error_rate(),
        rates.unknown_errors,
        rates.unknown_total,
    );
    Ok(())
}
