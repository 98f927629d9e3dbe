use std::io::BufRead;

use tagchipper::{
    corpus::{
        BaselineTagger,
        MostFrequentTagBaseline,
        SentenceContext,
        Tagging,
        io::{TaggedSentence, load_tagged_sentences_path, write_tagged_sentences},
    },
    rules::io::load_rules_path,
    tags::Tagset,
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the tag command.
#[derive(clap::Args, Debug)]
pub struct TagArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// Tagged corpus for the most-frequent-tag lexicon.
    #[arg(long)]
    lexicon: String,

    /// Rule file from the train command.
    #[arg(long)]
    rules: String,

    /// Tag for words missing from the lexicon.
    #[arg(long, default_value = "NN")]
    default_tag: String,

    /// Treat each sentence start as following the sentinel tag.
    #[arg(long)]
    sentence_context: bool,

    /// Plain text; one sentence per line of whitespace separated words.
    #[command(flatten)]
    input: InputArgs,

    /// Tagged output, in ``word/TAG`` format.
    #[command(flatten)]
    output: OutputArgs,
}

impl TagArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;

        let context = if self.sentence_context {
            SentenceContext::Isolated
        } else {
            SentenceContext::Flat
        };

        log::info!("Reading lexicon: {}", self.lexicon);
        let lexicon = load_tagged_sentences_path(&self.lexicon)?;
        let mut tagset = Tagset::default();
        let lexicon = Tagging::intern_sentences(&lexicon, &mut tagset, context)?;
        let default_tag = tagset.intern(&self.default_tag)?;
        let baseline = MostFrequentTagBaseline::fit(&lexicon, default_tag);

        log::info!("Reading rules: {}", self.rules);
        let rules = load_rules_path(&self.rules, &tagset)?;
        log::info!("{} rules", rules.len());

        let mut sentences: Vec<Vec<(String, &str)>> = Vec::new();
        for line in self.input.open_reader()?.lines() {
            let line = line?;
            let words = line.split_whitespace();
            sentences.push(words.map(|w| (w.to_string(), self.default_tag.as_str())).collect());
        }

        let words = Tagging::from_sentences(&sentences, &tagset, context)?;
        let mut tagging = baseline.tag(&words)?;
        let changed = rules.apply(&mut tagging);
        log::info!(
            "Tagged {} tokens; rules changed {} tags",
            tagging.len(),
            changed
        );

        let mut tokens = tagging.iter();
        let tagged: Vec<TaggedSentence> = sentences
            .iter()
            .map(|sentence| {
                tokens
                    .by_ref()
                    .take(sentence.len())
                    .map(|(word, tag)| (word.into(), tagset.label(tag).into()))
                    .collect()
            })
            .collect();

        let mut writer = self.output.open_writer()?;
        write_tagged_sentences(&tagged, &mut writer)?;

        Ok(())
    }
}
