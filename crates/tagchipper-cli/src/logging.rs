//! Stderr logging for the tagchipper commands.
//!
//! Training progress is logged at `info`; per-template scoring detail
//! is logged at `debug`.

use log::LevelFilter;
use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug, Default)]
pub struct LogArgs {
    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more detail (-v scoring passes, -vv everything).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Prefix log lines with a timestamp.
    #[arg(short = 't', long = "ts")]
    pub ts: bool,
}

impl LogArgs {
    /// The level filter selected by the flags.
    ///
    /// `--quiet` wins over `--verbose`.
    pub fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Install the stderr logger.
    pub fn setup_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .verbosity(self.level())
            .timestamp(if self.ts {
                Timestamp::Millisecond
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
