use crate::commands::{tag::TagArgs, train::TrainArgs};

pub mod tag;
pub mod train;

/// Subcommands for tagchipper
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Learn a rule sequence from a tagged corpus.
    Train(TrainArgs),

    /// Tag plain text with a baseline lexicon and a learned rule sequence.
    Tag(TagArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Tag(cmd) => cmd.run(),
        }
    }
}
